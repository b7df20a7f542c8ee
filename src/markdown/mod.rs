//! Markdown conversion and the post-processing passes the site's pages
//! rely on: superscript footnotes, a rendered references section,
//! wiki-style internal links, and abstract extraction.

use std::sync::LazyLock;

use pulldown_cmark::{Options, Parser, html};
use regex::Regex;

static FOOTNOTE_REF_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\^\[(\d+)\]").expect("Invalid regex"));
static MD_HREF_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"href="([^"]+)\.md""#).expect("Invalid regex"));
static WIKI_LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[\[([^\]]+)\]\]").expect("Invalid regex"));
static REFERENCES_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<h2>References</h2>\s*(.*)$").expect("Invalid regex"));
static FOOTNOTE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<p>\[(\d+)\]: (.*?)</p>").expect("Invalid regex"));
static ABSTRACT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?s)<h2>Abstract</h2>\s*<p><strong><em>eigenwallet</em></strong> (.*?)</p>\s*<p>(.*?)</p>\s*<p><a href="(.*?)">(.*?)</a></p>"#,
    )
    .expect("Invalid regex")
});
static ABSTRACT_BLOCK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?s)<h1><strong>eigenwallet</strong></h1>\s*<h2>Abstract</h2>\s*<p>.*?</p>\s*<p>.*?</p>\s*<p><a href=".*?">.*?</a></p>\s*<hr />"#,
    )
    .expect("Invalid regex")
});
static LEADING_TITLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^<h1><strong>eigenwallet</strong></h1>\s*").expect("Invalid regex")
});

/// Page content split into the abstract block and the remaining body.
#[derive(Debug, Clone, PartialEq)]
pub struct PageContent {
    pub abstract_html: String,
    pub main_html: String,
}

/// Convert markdown to HTML and apply the inline post-processing passes.
pub fn convert(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(markdown, options);
    let mut out = String::with_capacity(markdown.len() * 2);
    html::push_html(&mut out, parser);

    let out = FOOTNOTE_REF_RE.replace_all(
        &out,
        r##"<sup><a href="#fn$1" id="ref$1">$1</a></sup>"##,
    );

    process_internal_links(&out)
}

/// Rewrite links between pages: `.md` targets become `.html`, and
/// `[[Page Name]]` becomes a link to `page-name.html`.
fn process_internal_links(content: &str) -> String {
    let content = MD_HREF_RE.replace_all(content, r#"href="$1.html""#);

    WIKI_LINK_RE
        .replace_all(&content, |caps: &regex::Captures| {
            let page_name = &caps[1];
            let file_name = page_name.to_lowercase().split_whitespace().collect::<Vec<_>>().join("-");
            format!(r#"<a href="{file_name}.html">{page_name}</a>"#)
        })
        .into_owned()
}

/// Turn a trailing references section of `[n]: text` paragraphs into a
/// footnotes div with back-links. Pages without one pass through
/// untouched.
pub fn process_footnotes(content: &str) -> String {
    let Some(references) = REFERENCES_RE.captures(content) else {
        return content.to_string();
    };

    let references_text = &references[1];
    let mut footnotes = String::from("<div class=\"footnotes\">\n");

    for capture in FOOTNOTE_RE.captures_iter(references_text) {
        let num = &capture[1];
        let text = capture[2].trim();
        footnotes.push_str(&format!(
            "  <p id=\"fn{num}\">\n    {num}. {text}\n    <a href=\"#ref{num}\" title=\"Jump back to footnote {num} in the text.\">\u{21A9}</a>\n  </p>\n"
        ));
    }
    footnotes.push_str("</div>");

    REFERENCES_RE.replace(content, footnotes.as_str()).into_owned()
}

/// Pull the abstract block out of the converted body when present;
/// otherwise just drop the standalone page title heading.
pub fn extract_abstract(content: &str) -> PageContent {
    if let Some(caps) = ABSTRACT_RE.captures(content) {
        let abstract_html = format!(
            r#"<p><strong><em>eigenwallet</em></strong> {}<br>{}<br><a href="{}">{}</a>.</p>"#,
            &caps[1], &caps[2], &caps[3], &caps[4]
        );
        let main_html = ABSTRACT_BLOCK_RE.replace(content, "").into_owned();
        return PageContent {
            abstract_html,
            main_html,
        };
    }

    PageContent {
        abstract_html: String::new(),
        main_html: LEADING_TITLE_RE.replace(content, "").into_owned(),
    }
}
