//! Bounty issue cards for the bounties page.

use std::sync::LazyLock;

use chrono::DateTime;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// An issue-tracker issue carrying the bounty label, reduced to what the
/// card needs. Serializable because the bounties flow caches the mapped
/// form rather than the raw API response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BountyIssue {
    pub number: u64,
    pub title: String,
    /// Title with the bounty-amount prefix stripped.
    pub clean_title: String,
    /// XMR amount parsed from the title, "?" when absent.
    pub bounty: String,
    pub html_url: String,
    pub state: String,
    pub created_at: String,
    pub user: String,
    pub body: String,
    pub labels: Vec<String>,
}

static IMAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[.*?\]\(.*?\)").expect("Invalid regex"));
static COMMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").expect("Invalid regex"));
static DETAILS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<details>.*?</details>").expect("Invalid regex"));
static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("Invalid regex"));
static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\([^)]+\)").expect("Invalid regex"));

/// Format an ISO timestamp as "July 4, 2026". Falls back to the raw
/// string when the timestamp does not parse.
fn format_date(iso: &str) -> String {
    DateTime::parse_from_rfc3339(iso)
        .map(|date| date.format("%B %-d, %Y").to_string())
        .unwrap_or_else(|_| iso.to_string())
}

/// First three non-empty lines of the issue body, with markdown and
/// HTML noise stripped.
fn extract_body_preview(body: &str) -> String {
    if body.is_empty() {
        return String::new();
    }

    let body = IMAGE_RE.replace_all(body, "");
    let body = COMMENT_RE.replace_all(&body, "");
    let body = DETAILS_RE.replace_all(&body, "");
    let body = TAG_RE.replace_all(&body, "");
    let body = LINK_RE.replace_all(&body, "$1");
    let body = body.replace("**", "").replace('*', "").replace('_', "");

    body.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .take(3)
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_card(issue: &BountyIssue) -> String {
    let formatted_date = format_date(&issue.created_at);
    let body_preview = extract_body_preview(&issue.body);
    let state_class = issue.state.to_lowercase();
    let state_display = capitalize(&issue.state);

    let body_section = if body_preview.is_empty() {
        String::new()
    } else {
        format!(
            r#"
    <div class="bounty-description">
        <p>{body_preview}</p>
    </div>"#
        )
    };

    let labels_html = issue
        .labels
        .iter()
        .map(|label| format!(r#"<span class="label">{label}</span>"#))
        .collect::<Vec<_>>()
        .join("\n        ");

    format!(
        r#"<div class="bounty-card">
    <div class="bounty-header">
        <div>
            <div class="bounty-title">
                <a href="{url}" style="color: inherit; text-decoration: none;">
                    {title}
                </a>
            </div>
            <div class="bounty-meta">
                Issue #{number} &bull; Opened by {user} on {formatted_date}
            </div>
        </div>
        <div style="display: flex; gap: 0.5rem; align-items: center;">
            <span class="bounty-amount">{bounty} XMR</span>
            <span class="bounty-status {state_class}">{state_display}</span>
        </div>
    </div>{body_section}
    <div class="bounty-labels">
        {labels_html}
    </div>
    <div style="margin-top: 1rem;">
        <a href="{url}" style="font-weight: 500;">View on GitHub &rarr;</a>
    </div>
</div>"#,
        url = issue.html_url,
        title = issue.clean_title,
        number = issue.number,
        user = issue.user,
        bounty = issue.bounty,
    )
}

/// Render all bounty cards, most recent ordering preserved from the API.
pub fn render_bounty_cards(issues: &[BountyIssue]) -> String {
    issues
        .iter()
        .map(render_card)
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Stylesheet for the bounties page, inlined into the document.
pub fn render_bounty_styles() -> &'static str {
    r#"<style>
.bounty-card {
    border: 1px solid #ddd;
    padding: 1.5rem;
    margin-bottom: 2rem;
    border-radius: 4px;
    background-color: var(--pre-bg-color, #f5f5f5);
}

.bounty-header {
    display: flex;
    justify-content: space-between;
    align-items: flex-start;
    margin-bottom: 1rem;
    flex-wrap: wrap;
    gap: 0.5rem;
}

.bounty-amount {
    background-color: #4CAF50;
    color: white;
    padding: 0.5rem 1rem;
    border-radius: 4px;
    font-weight: bold;
    font-size: 1.1em;
}

.bounty-status {
    padding: 0.25rem 0.75rem;
    border-radius: 4px;
    font-size: 0.9em;
    font-weight: 500;
}

.bounty-status.open {
    background-color: #28a745;
    color: white;
}

.bounty-status.closed {
    background-color: #6c757d;
    color: white;
}

.bounty-title {
    font-size: 1.3em;
    font-weight: bold;
    margin-bottom: 0.5rem;
}

.bounty-meta {
    font-size: 0.9em;
    color: #666;
    margin-bottom: 1rem;
}

.bounty-description {
    margin: 1rem 0;
    padding: 1rem;
    background-color: white;
    border-left: 3px solid #4CAF50;
    white-space: pre-line;
}

.bounty-labels {
    display: flex;
    gap: 0.5rem;
    flex-wrap: wrap;
    margin-top: 1rem;
}

.label {
    padding: 0.25rem 0.5rem;
    border-radius: 3px;
    font-size: 0.85em;
    background-color: #e0e0e0;
    color: #333;
}

@media (max-width: 600px) {
    .bounty-header {
        flex-direction: column;
    }
}
</style>"#
}
