// GitHub API response types.
// Typed views over the organization and repository payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Owner type discriminator (user or organization).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum OwnerType {
    User,
    #[default]
    Organization,
    Bot,
    #[serde(other)]
    Unknown,
}

/// Account that owns a repository.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Owner {
    pub login: String,
    pub id: Option<u64>,
    #[serde(rename = "type", default)]
    pub owner_type: OwnerType,
}

/// GitHub organization, as returned by `GET /orgs/{org}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Organization {
    pub login: String,
    pub id: Option<u64>,
    pub repos_url: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub html_url: Option<String>,
    pub public_repos: Option<u64>,
    pub created_at: Option<DateTime<Utc>>,
}

/// License descriptor attached to a repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct License {
    pub key: String,
    pub name: Option<String>,
    pub spdx_id: Option<String>,
}

/// Entry of an organization's repository listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Repository {
    pub name: String,
    pub id: Option<u64>,
    pub full_name: Option<String>,
    pub owner: Option<Owner>,
    #[serde(default)]
    pub private: bool,
    #[serde(default)]
    pub fork: bool,
    pub description: Option<String>,
    pub html_url: Option<String>,
    pub license: Option<License>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Repository {
    /// Key of the attached license, if any.
    pub fn license_key(&self) -> Option<&str> {
        self.license.as_ref().map(|license| license.key.as_str())
    }
}
