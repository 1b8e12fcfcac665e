// GitHub organization client.
// Lazily fetches organization info and the repository listing, caching each per client.

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::{GhorgError, Result};
use crate::fetch::{FetchJson, HttpFetcher};
use crate::memo::Memo;
use crate::nested::{access_nested_map, access_nested_str};

use super::types::{Organization, Repository};

/// Client for one GitHub organization.
///
/// The organization info and the repository payload are each fetched at most
/// once per client and then served from memory for the client's lifetime.
/// A failed fetch is not remembered, so the next call tries again.
#[derive(Debug)]
pub struct OrgClient<F = HttpFetcher> {
    org_name: String,
    config: ClientConfig,
    fetcher: F,
    org_info: Memo<Value>,
    repos_payload: Memo<Value>,
}

impl OrgClient<HttpFetcher> {
    /// Client for `org_name` against the public GitHub API.
    pub fn new(org_name: impl Into<String>) -> Result<Self> {
        Self::with_config(org_name, ClientConfig::default())
    }

    pub fn with_config(org_name: impl Into<String>, config: ClientConfig) -> Result<Self> {
        let fetcher = HttpFetcher::new(&config)?;
        Ok(Self::with_fetcher(org_name, fetcher, config))
    }
}

impl<F: FetchJson> OrgClient<F> {
    /// Client that retrieves documents through `fetcher`.
    pub fn with_fetcher(org_name: impl Into<String>, fetcher: F, config: ClientConfig) -> Self {
        Self {
            org_name: org_name.into(),
            config,
            fetcher,
            org_info: Memo::new("org_info"),
            repos_payload: Memo::new("repos_payload"),
        }
    }

    pub fn org_name(&self) -> &str {
        &self.org_name
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// `{api_base}/orgs/{org_name}`.
    pub fn org_url(&self) -> String {
        self.config.org_url(&self.org_name)
    }

    /// Raw organization document. Fetched on first call only.
    pub async fn org_info(&self) -> Result<&Value> {
        self.org_info
            .get_or_try_init_async(|| async move {
                let url = self.org_url();
                debug!(org = %self.org_name, %url, "fetching organization info");
                self.fetcher.fetch_json(&url).await
            })
            .await
    }

    /// The organization's advertised `repos_url`.
    ///
    /// Read from [`OrgClient::org_info`] on every call, so it costs at most
    /// the one organization fetch.
    pub async fn public_repos_url(&self) -> Result<String> {
        let info = self.org_info().await?;
        Ok(access_nested_str(info, &["repos_url"])?.to_string())
    }

    /// Raw repository listing from [`OrgClient::public_repos_url`]. Fetched on
    /// first call only.
    pub async fn repos_payload(&self) -> Result<&Value> {
        self.repos_payload
            .get_or_try_init_async(|| async move {
                let url = self.public_repos_url().await?;
                debug!(org = %self.org_name, %url, "fetching repository listing");
                self.fetcher.fetch_json(&url).await
            })
            .await
    }

    /// Names of the organization's repositories, in listing order.
    ///
    /// With `license`, only repositories whose `license.key` equals it are
    /// kept; repositories without a license are skipped.
    pub async fn public_repos(&self, license: Option<&str>) -> Result<Vec<String>> {
        if let Some(key) = license {
            check_license_key(key)?;
        }

        let mut names = Vec::new();
        for repo in self.repo_records().await? {
            if let Some(key) = license {
                if !Self::has_license(repo, key)? {
                    continue;
                }
            }
            names.push(access_nested_str(repo, &["name"])?.to_string());
        }

        Ok(names)
    }

    /// Whether `repo` carries a license with key `license_key`.
    ///
    /// A repository without a `license.key` entry is not a match. An empty
    /// `license_key` is rejected.
    pub fn has_license(repo: &Value, license_key: &str) -> Result<bool> {
        check_license_key(license_key)?;

        match access_nested_map(repo, &["license", "key"]) {
            Ok(key) => Ok(key.as_str() == Some(license_key)),
            Err(GhorgError::MissingKey { .. }) => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Organization info decoded into [`Organization`].
    pub async fn org(&self) -> Result<Organization> {
        let info = self.org_info().await?;
        Ok(Organization::deserialize(info)?)
    }

    /// Repository listing decoded into [`Repository`] records.
    pub async fn repos(&self) -> Result<Vec<Repository>> {
        let payload = self.repos_payload().await?;
        Ok(Vec::<Repository>::deserialize(payload)?)
    }

    async fn repo_records(&self) -> Result<&[Value]> {
        self.repos_payload()
            .await?
            .as_array()
            .map(Vec::as_slice)
            .ok_or_else(|| GhorgError::UnexpectedType {
                path: "repos_payload".to_string(),
                expected: "array",
            })
    }
}

fn check_license_key(license_key: &str) -> Result<()> {
    if license_key.is_empty() {
        return Err(GhorgError::InvalidArgument(
            "license_key cannot be empty".to_string(),
        ));
    }
    Ok(())
}
