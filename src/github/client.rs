use anyhow::{Context, Result};
use async_trait::async_trait;
use log::debug;
use reqwest::Client;

use super::types::{Issue, Release};

/// The wallet repository's view of GitHub: the latest release and the
/// issue list. Behind a trait so page builders can be tested against a
/// mock source.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProjectSource: Send + Sync {
    async fn latest_release(&self) -> Result<Release>;
    async fn issues(&self) -> Result<Vec<Issue>>;
}

pub struct GitHub {
    pub client: Client,
    pub api_url: String,
    pub repo: String,
}

impl GitHub {
    #[tracing::instrument(skip(client, api_url, repo))]
    pub fn new(client: Client, api_url: Option<String>, repo: impl Into<String>) -> Self {
        let api_url = api_url.unwrap_or_else(|| "https://api.github.com".to_string());
        Self {
            client,
            api_url,
            repo: repo.into(),
        }
    }
}

#[async_trait]
impl ProjectSource for GitHub {
    #[tracing::instrument(skip(self))]
    async fn latest_release(&self) -> Result<Release> {
        let url = format!("{}/repos/{}/releases/latest", self.api_url, self.repo);

        debug!("Fetching latest release from {}...", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to send request to GitHub API")?;

        let release = response
            .error_for_status()
            .context("GitHub API responded with an error status; check your connection or API rate limits")?
            .json::<Release>()
            .await
            .context("Failed to parse JSON response from GitHub API")?;

        Ok(release)
    }

    #[tracing::instrument(skip(self))]
    async fn issues(&self) -> Result<Vec<Issue>> {
        let url = format!("{}/repos/{}/issues", self.api_url, self.repo);

        debug!("Fetching issues from {}...", url);

        let response = self
            .client
            .get(&url)
            .query(&[("state", "all"), ("per_page", "100")])
            .send()
            .await
            .context("Failed to send request to GitHub API")?;

        let issues = response
            .error_for_status()
            .context("GitHub API responded with an error status while listing issues")?
            .json::<Vec<Issue>>()
            .await
            .context("Failed to parse JSON response from GitHub API")?;

        Ok(issues)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn github_at(url: &str) -> GitHub {
        GitHub::new(Client::new(), Some(url.to_string()), "eigenwallet/core")
    }

    #[tokio::test]
    async fn test_latest_release() {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("GET", "/repos/eigenwallet/core/releases/latest")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{
                    "tag_name": "v1.2.3",
                    "published_at": "2026-07-01T12:00:00Z",
                    "assets": [
                        {
                            "name": "eigenwallet_1.2.3_linux_x86_64.AppImage",
                            "size": 1048576,
                            "browser_download_url": "https://example.com/eigenwallet_1.2.3_linux_x86_64.AppImage"
                        }
                    ]
                }"#,
            )
            .create_async()
            .await;

        let release = github_at(&server.url()).latest_release().await.unwrap();

        mock.assert_async().await;
        assert_eq!(release.tag_name, "v1.2.3");
        assert_eq!(release.assets.len(), 1);
        assert_eq!(release.assets[0].size, 1_048_576);
    }

    #[tokio::test]
    async fn test_latest_release_error_status() {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("GET", "/repos/eigenwallet/core/releases/latest")
            .with_status(403)
            .create_async()
            .await;

        let result = github_at(&server.url()).latest_release().await;

        mock.assert_async().await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_latest_release_malformed_json() {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("GET", "/repos/eigenwallet/core/releases/latest")
            .with_status(200)
            .with_body("not json")
            .create_async()
            .await;

        let result = github_at(&server.url()).latest_release().await;

        mock.assert_async().await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_issues() {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock(
                "GET",
                "/repos/eigenwallet/core/issues?state=all&per_page=100",
            )
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"[
                    {
                        "number": 7,
                        "title": "[1.0 XMR] Fix a bug",
                        "html_url": "https://example.com/issues/7",
                        "state": "open",
                        "created_at": "2026-06-01T00:00:00Z",
                        "body": "Details",
                        "user": { "login": "alice" },
                        "labels": [{ "name": "Bounty" }]
                    }
                ]"#,
            )
            .create_async()
            .await;

        let issues = github_at(&server.url()).issues().await.unwrap();

        mock.assert_async().await;
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].user.login, "alice");
        assert_eq!(issues[0].labels[0].name, "Bounty");
    }

    #[tokio::test]
    async fn test_issues_null_body() {
        let mut server = mockito::Server::new_async().await;

        let _mock = server
            .mock(
                "GET",
                "/repos/eigenwallet/core/issues?state=all&per_page=100",
            )
            .with_status(200)
            .with_body(
                r#"[{
                    "number": 8,
                    "title": "No body",
                    "html_url": "https://example.com/issues/8",
                    "state": "closed",
                    "created_at": "2026-06-01T00:00:00Z",
                    "body": null,
                    "user": { "login": "bob" },
                    "labels": []
                }]"#,
            )
            .create_async()
            .await;

        let issues = github_at(&server.url()).issues().await.unwrap();
        assert_eq!(issues[0].body, None);
    }
}
