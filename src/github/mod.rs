//! GitHub API access for the wallet repository.

mod client;
mod types;

#[cfg(test)]
pub use client::MockProjectSource;
pub use client::{GitHub, ProjectSource};
pub use types::{Issue, IssueLabel, IssueUser, Release, ReleaseAsset};
