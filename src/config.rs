// Client configuration.
// Defaults target the public GitHub API; environment variables override them.

use std::time::Duration;

use crate::error::{GhorgError, Result};

/// Base URL of the public GitHub REST API.
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Per-request timeout applied by the HTTP fetcher.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

pub const API_BASE_ENV: &str = "GHORG_API_BASE";
pub const USER_AGENT_ENV: &str = "GHORG_USER_AGENT";
pub const TIMEOUT_ENV: &str = "GHORG_TIMEOUT_SECS";

/// Settings shared by the fetcher and the organization client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// API root without a trailing slash, e.g. `https://api.github.com`.
    pub api_base: String,
    /// Value sent in the `User-Agent` header (GitHub rejects requests without one).
    pub user_agent: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            user_agent: concat!("ghorg/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ClientConfig {
    /// Defaults overridden by `GHORG_API_BASE`, `GHORG_USER_AGENT` and
    /// `GHORG_TIMEOUT_SECS` when they are set.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(base) = lookup(API_BASE_ENV) {
            config = config.with_api_base(base)?;
        }
        if let Some(agent) = lookup(USER_AGENT_ENV) {
            if agent.trim().is_empty() {
                return Err(GhorgError::Config(format!("{} is empty", USER_AGENT_ENV)));
            }
            config.user_agent = agent;
        }
        if let Some(secs) = lookup(TIMEOUT_ENV) {
            let secs: u64 = secs.trim().parse().map_err(|_| {
                GhorgError::Config(format!("{} must be a whole number, got {:?}", TIMEOUT_ENV, secs))
            })?;
            config.timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }

    /// Replace the API root. Trailing slashes are dropped.
    pub fn with_api_base(mut self, base: impl Into<String>) -> Result<Self> {
        let base = base.into();
        let trimmed = base.trim().trim_end_matches('/');
        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(GhorgError::Config(format!(
                "API base must be an http(s) URL, got {:?}",
                base
            )));
        }
        self.api_base = trimmed.to_string();
        Ok(self)
    }

    /// URL of an organization's info endpoint.
    pub fn org_url(&self, org_name: &str) -> String {
        format!("{}/orgs/{}", self.api_base, org_name)
    }
}
