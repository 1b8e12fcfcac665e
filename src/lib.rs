//! Client for GitHub organization metadata.
//!
//! [`OrgClient`] reads an organization's info document and its public
//! repository listing, fetching each at most once per client through the
//! [`Memo`] compute-once slots. [`nested::access_nested_map`] walks key paths
//! through the returned JSON.

pub mod config;
pub mod error;
pub mod fetch;
pub mod github;
pub mod logging;
pub mod memo;
pub mod nested;

pub use config::ClientConfig;
pub use error::{GhorgError, Result};
pub use fetch::{FetchJson, HttpFetcher, get_json};
pub use github::{License, OrgClient, Organization, Repository};
pub use memo::Memo;
pub use nested::access_nested_map;
