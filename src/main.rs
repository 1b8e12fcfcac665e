// ghorg command-line entry point.
// Prints the public repository names of a GitHub organization, one per line.

use anyhow::{Context, Result};
use clap::Parser;

use ghorg::config::{API_BASE_ENV, ClientConfig};
use ghorg::{OrgClient, logging};

#[derive(Debug, Parser)]
#[command(name = "ghorg", version, about = "List a GitHub organization's public repositories")]
struct Cli {
    /// Organization login, e.g. `google`.
    org: String,

    /// Only list repositories with this license key (e.g. `mit`, `apache-2.0`).
    #[arg(short, long)]
    license: Option<String>,

    /// API root to query instead of the public GitHub API.
    #[arg(long, env = API_BASE_ENV)]
    api_base: Option<String>,

    /// Default log level when RUST_LOG is unset.
    #[arg(long, default_value = "warn")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(logging::parse_level(&cli.log_level)?)?;

    let mut config = ClientConfig::from_env().context("reading configuration")?;
    if let Some(base) = cli.api_base {
        config = config.with_api_base(base)?;
    }

    let client = OrgClient::with_config(cli.org.as_str(), config)?;
    let names = client
        .public_repos(cli.license.as_deref())
        .await
        .with_context(|| format!("listing repositories of {}", client.org_name()))?;

    for name in names {
        println!("{}", name);
    }

    Ok(())
}
