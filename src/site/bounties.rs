//! The bounties page flow: labelled issues → cards → standalone page.

use std::sync::LazyLock;

use anyhow::{Context, Result};
use log::info;
use regex::Regex;

use crate::config::BuildConfig;
use crate::github::{Issue, ProjectSource};
use crate::render::{BountyIssue, render_bounty_cards, render_bounty_styles};
use crate::template;

/// Issues must carry this label to appear on the page.
pub const BOUNTY_LABEL: &str = "Bounty \u{1F4B8}";

static AMOUNT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\[(?:Bounty: )?([0-9.]+) XMR\]").expect("Invalid regex"));
static PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\[(?:Bounty: )?[0-9.?]+ XMR\] ").expect("Invalid regex"));

/// Keep the labelled issues and pull the XMR amount out of each title.
fn to_bounty_issues(issues: Vec<Issue>) -> Vec<BountyIssue> {
    issues
        .into_iter()
        .filter(|issue| issue.labels.iter().any(|label| label.name == BOUNTY_LABEL))
        .map(|issue| {
            let bounty = AMOUNT_RE
                .captures(&issue.title)
                .map(|caps| caps[1].to_string())
                .unwrap_or_else(|| "?".to_string());
            let clean_title = PREFIX_RE.replace(&issue.title, "").into_owned();

            BountyIssue {
                number: issue.number,
                title: issue.title,
                clean_title,
                bounty,
                html_url: issue.html_url,
                state: issue.state,
                created_at: issue.created_at,
                user: issue.user.login,
                body: issue.body.unwrap_or_default(),
                labels: issue.labels.into_iter().map(|label| label.name).collect(),
            }
        })
        .collect()
}

async fn fetch_bounties(
    source: &dyn ProjectSource,
    config: &BuildConfig,
) -> Result<Vec<BountyIssue>> {
    if !config.dev_mode {
        return Ok(to_bounty_issues(source.issues().await?));
    }

    let cache = config.bounties_cache();
    if let Some(bounties) = cache.load::<Vec<BountyIssue>>() {
        return Ok(bounties);
    }

    let bounties = to_bounty_issues(source.issues().await?);
    cache.store(&bounties);
    Ok(bounties)
}

fn render_page(issues: &[BountyIssue]) -> String {
    let cards = render_bounty_cards(issues);
    let styles = render_bounty_styles();
    let navigation = template::navigation("bounties.html");

    format!(
        r#"<!DOCTYPE html>
<html lang="en">

<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>eigenwallet &mdash; Bug Bounties</title>
  <link rel="stylesheet" href="latex.css" />
  <link rel="stylesheet" href="prism/prism.css" />
  <link rel="icon" type="image/png" href="imgs/icon.png" />
</head>

<body id="top" class="text-justify">
  <header style="text-align: center; display: flex; justify-content: center; align-items: center; gap: 0.5rem; position: relative; padding: 1rem 0;">
    <a href="index.html" style="position: absolute; left: 1rem; top: 50%; transform: translateY(-50%); text-decoration: none; font-size: 1.5em; color: inherit; padding: 0.5rem;">&lt;</a>
    <a href="index.html" style="text-decoration: none; color: inherit; display: flex; align-items: center; gap: 0.5rem;">
      <img src="imgs/icon.svg" alt="eigenwallet logo" style="height: 5em;" />
    </a>
  </header>

  <main>
    <article>
      <hr style="margin: 0.5rem 0;" />{navigation}
      {styles}

<h2>Bug Bounties</h2>

{cards}

    </article>
  </main>

  <script>
    MathJax = {{
      tex: {{
        inlineMath: [['$', '$'],],
      }},
    }}
  </script>
  <script type="text/javascript" id="MathJax-script" async
  src="https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-mml-chtml.js">
  </script>
</body>

</html>"#
    )
}

/// Build the bounties page and write it into the output directory.
pub async fn build_bounties_page(
    source: &dyn ProjectSource,
    config: &BuildConfig,
) -> Result<()> {
    let bounties = fetch_bounties(source, config).await?;
    info!("Found {} bounty issues", bounties.len());

    let html = render_page(&bounties);
    let output = config.out_dir.join("bounties.html");
    std::fs::write(&output, html)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    info!("Generated {}", output.display());
    Ok(())
}
