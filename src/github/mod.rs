// GitHub organizations API module.
// Provides the memoizing organization client and typed response views.

pub mod client;
pub mod types;

pub use client::OrgClient;
pub use types::*;
