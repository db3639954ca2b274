//! Presentation helpers for rendering assistant answers as HTML.

use regex::Regex;
use std::sync::LazyLock;

static URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://\S+").expect("url pattern is valid"));

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Escapes `response` and turns every bare `http(s)://` run into a link
/// that opens in a new tab.
pub fn format_response(response: &str) -> String {
    let mut html = String::with_capacity(response.len());
    let mut last = 0;

    for found in URL_RE.find_iter(response) {
        html.push_str(&escape_html(&response[last..found.start()]));
        let url = escape_html(found.as_str());
        html.push_str(&format!(
            r#"<a href="{url}" target="_blank" rel="noopener noreferrer">{url}</a>"#
        ));
        last = found.end();
    }
    html.push_str(&escape_html(&response[last..]));

    html
}
