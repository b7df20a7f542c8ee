//! Template placeholder substitution and the common page shell.

/// Placeholder tokens understood by the download page template.
pub const VERSION: &str = "{{LATEST_VERSION}}";
pub const RELEASE_DATE: &str = "{{RELEASE_DATE}}";
pub const GUI_TABLE: &str = "{{GUI_TABLE}}";
pub const CLI_TABLE: &str = "{{CLI_TABLE}}";
pub const HASHES_LINK: &str = "{{HASHES_LINK}}";
pub const SIGNING_KEY_LINK: &str = "{{SIGNING_KEY_LINK}}";

/// Placeholder tokens understood by the statistics page template.
pub const TOTAL_LIQUIDITY: &str = "{{TOTAL_LIQUIDITY}}";
pub const MAX_SWAP: &str = "{{MAX_SWAP}}";
pub const MIN_SWAP: &str = "{{MIN_SWAP}}";
pub const LIQUIDITY_CHART: &str = "{{LIQUIDITY_CHART}}";
pub const LAST_UPDATED: &str = "{{LAST_UPDATED}}";

/// Replace every occurrence of each placeholder with its fragment.
/// Templates are internally controlled, so placeholders with no value
/// are deliberately left verbatim rather than failing the build.
pub fn substitute(template: &str, values: &[(&str, &str)]) -> String {
    values
        .iter()
        .fold(template.to_string(), |document, (placeholder, fragment)| {
            document.replace(placeholder, fragment)
        })
}

/// Wrap converted page content in the site's document shell.
pub fn html_document(abstract_content: &str, main_content: &str, file_name: &str) -> String {
    let abstract_section = if abstract_content.is_empty() {
        String::new()
    } else {
        format!(
            r#"
  <div class="abstract">
    <h2>Abstract</h2>
    {abstract_content}
  </div>"#
        )
    };

    let back_button = if file_name == "index.html" {
        String::new()
    } else {
        r#"<a href="index.html" style="position: absolute; left: 1rem; top: 50%; transform: translateY(-50%); text-decoration: none; font-size: 1.5em; color: inherit; padding: 0.5rem;">&lt;</a>"#.to_string()
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">

<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>eigenwallet &mdash; The Monero wallet for the future</title>
  <link rel="stylesheet" href="latex.css" />
  <link rel="stylesheet" href="prism/prism.css" />
  <link rel="icon" type="image/png" href="imgs/icon.png" />
</head>

<body id="top" class="text-justify">
  <header style="text-align: center; display: flex; justify-content: center; align-items: center; gap: 0.5rem; position: relative; padding: 1rem 0;">
    {back_button}
    <a href="index.html" style="text-decoration: none; color: inherit; display: flex; align-items: center; gap: 0.5rem;">
      <h1 style="font-size: 2em; margin-bottom: 0.5rem;"><strong>eigenwallet</strong></h1>
      <img src="imgs/icon.png" alt="eigenwallet logo" style="width: 2em; height: 2em;" />
    </a>
  </header>
{abstract_section}

  <main>
    <article>
      <hr style="margin: 2rem 0;" />
      {main_content}
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

/// Navigation bar for generated (non-markdown) pages, with the active
/// page underlined.
pub fn navigation(active: &str) -> String {
    let pages = [
        ("index.html", "Vision"),
        ("download.html", "Download"),
        ("statistics.html", "Statistics"),
        ("changelog.html", "Changelog"),
        ("bounties.html", "Bounties"),
    ];

    let links = pages
        .iter()
        .map(|(href, label)| {
            let decoration = if *href == active { "underline" } else { "none" };
            format!(
                r#"    <a href="{href}" style="text-decoration: {decoration}; color: inherit; margin: 0 1rem; font-weight: 500;">{label}</a>"#
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"
  <nav style="text-align: center; margin: 0.25rem 0 0.25rem 0; padding: 0.25rem 0;">
{links}
  </nav>
  <hr style="margin: 0.5rem 0 2rem 0;" />"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substitute_replaces_every_occurrence() {
        let out = substitute(
            "v={{LATEST_VERSION}} again {{LATEST_VERSION}}",
            &[(VERSION, "1.2.3")],
        );
        assert_eq!(out, "v=1.2.3 again 1.2.3");
    }

    #[test]
    fn test_substitute_leaves_unknown_placeholders_verbatim() {
        let out = substitute("keep {{UNKNOWN}} as-is", &[(VERSION, "1.2.3")]);
        assert_eq!(out, "keep {{UNKNOWN}} as-is");
    }

    #[test]
    fn test_document_shell_wraps_content() {
        let html = html_document("", "<p>Hello</p>", "download.html");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<p>Hello</p>"));
        assert!(html.contains("MathJax"));
        assert!(html.contains("latex.css"));
        // Non-index pages get a back button
        assert!(html.contains("&lt;"));
        assert!(!html.contains(r#"<div class="abstract">"#));
    }

    #[test]
    fn test_index_page_has_no_back_button() {
        let html = html_document("", "<p>Hi</p>", "index.html");
        assert!(!html.contains("font-size: 1.5em"));
    }

    #[test]
    fn test_abstract_section_rendered_when_present() {
        let html = html_document("<p>short</p>", "<p>body</p>", "index.html");
        assert!(html.contains(r#"<div class="abstract">"#));
        assert!(html.contains("<p>short</p>"));
    }

    #[test]
    fn test_navigation_underlines_active_page() {
        let nav = navigation("bounties.html");
        assert!(nav.contains(r#"href="bounties.html" style="text-decoration: underline"#));
        assert!(nav.contains(r#"href="download.html" style="text-decoration: none"#));
    }
}
