//! HTML report
//!
//! The markdown document converted to HTML. [`render`] yields a fragment per
//! query; [`page`] wraps one or more fragments in a standalone document with
//! inline CSS.

use pulldown_cmark::{html, Options, Parser};

const STYLE: &str = "\
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif; max-width: 960px; margin: 0 auto; padding: 24px; color: #1f2328; }
h1 { border-bottom: 1px solid #d0d7de; padding-bottom: 8px; }
h2 { margin-top: 24px; }
pre { background: #f6f8fa; padding: 12px; border-radius: 6px; overflow-x: auto; }
code { font-family: ui-monospace, SFMono-Regular, Menlo, monospace; }
hr { border: 0; border-top: 1px solid #d0d7de; margin: 32px 0; }
";

/// Convert a markdown report to an HTML fragment
pub fn render(markdown: &str) -> String {
    let parser = Parser::new_ext(markdown, Options::ENABLE_TABLES);
    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

/// Standalone page holding `fragments`, separated by rules
pub fn page(title: &str, fragments: &[String]) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    out.push_str("<meta charset=\"UTF-8\">\n");
    out.push_str(&format!("<title>{}</title>\n", escape_html(title)));
    out.push_str(&format!("<style>\n{}</style>\n", STYLE));
    out.push_str("</head>\n<body>\n");
    out.push_str(&fragments.join("<hr>\n"));
    out.push_str("</body>\n</html>\n");
    out
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_escaped() {
        let out = page("a <b> & c", &[]);
        assert!(out.contains("<title>a &lt;b&gt; &amp; c</title>"));
    }

    #[test]
    fn test_fragments_separated() {
        let out = page("t", &["<p>one</p>\n".to_string(), "<p>two</p>\n".to_string()]);
        assert!(out.contains("<p>one</p>\n<hr>\n<p>two</p>"));
    }
}
