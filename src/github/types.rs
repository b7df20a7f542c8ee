use serde::{Deserialize, Serialize};

/// A downloadable file attached to a GitHub release.
#[derive(Deserialize, Serialize, Debug, PartialEq, Clone)]
pub struct ReleaseAsset {
    pub name: String,
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub browser_download_url: String,
}

/// A GitHub release.
#[derive(Deserialize, Serialize, Debug, PartialEq, Clone, Default)]
pub struct Release {
    pub tag_name: String,
    #[serde(default)]
    pub published_at: String,
    #[serde(default)]
    pub assets: Vec<ReleaseAsset>,
}

/// An issue-tracker issue, as returned by the issues endpoint.
#[derive(Deserialize, Serialize, Debug, PartialEq, Clone)]
pub struct Issue {
    pub number: u64,
    pub title: String,
    pub html_url: String,
    pub state: String,
    pub created_at: String,
    #[serde(default)]
    pub body: Option<String>,
    pub user: IssueUser,
    #[serde(default)]
    pub labels: Vec<IssueLabel>,
}

#[derive(Deserialize, Serialize, Debug, PartialEq, Clone)]
pub struct IssueUser {
    pub login: String,
}

#[derive(Deserialize, Serialize, Debug, PartialEq, Clone)]
pub struct IssueLabel {
    pub name: String,
}
