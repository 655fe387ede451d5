//! crates/site_analyzer_core/src/render.rs
//!
//! Assembles submitted HTML, CSS and JS into one standalone preview document.
//!
//! Body extraction is a substring heuristic, not a parser: it looks for the
//! first `<body` and the last `</body>` (ASCII case-insensitive) and falls back
//! to the input as given when either is missing or they are out of order.

use crate::domain::PreviewSource;

const DOCTYPES: [&str; 2] = ["<!DOCTYPE html>", "<!doctype html>"];

/// Returns the markup that belongs inside the preview's `<body>`.
pub fn extract_body(html: &str) -> String {
    let mut content = html.to_string();
    for doctype in DOCTYPES {
        if content.contains(doctype) {
            content = content.replace(doctype, "");
        }
    }

    // ASCII lowercasing keeps byte offsets aligned with `content`.
    let lower = content.to_ascii_lowercase();
    let Some(open) = lower.find("<body") else {
        return content;
    };
    let Some(close_angle) = content[open..].find('>') else {
        return content;
    };
    let start = open + close_angle + 1;
    match lower.rfind("</body>") {
        Some(end) if end > start => content[start..end].to_string(),
        _ => content,
    }
}

/// Renders the full preview document for `source`.
pub fn render_document(source: &PreviewSource) -> String {
    let body = extract_body(&source.html);
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Code Preview</title>
    <style>{css}</style>
</head>
<body>
{body}
<script>{js}</script>
</body>
</html>"#,
        css = source.css,
        body = body,
        js = source.js,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(html: &str, css: &str, js: &str) -> PreviewSource {
        PreviewSource {
            html: html.to_string(),
            css: css.to_string(),
            js: js.to_string(),
        }
    }

    #[test]
    fn extracts_content_between_body_tags() {
        assert_eq!(extract_body("<html><body>X</body></html>"), "X");
        assert_eq!(
            extract_body("<!DOCTYPE html><html><head></head><body class=\"a\"><p>hi</p></body></html>"),
            "<p>hi</p>"
        );
    }

    #[test]
    fn body_tag_search_ignores_case() {
        assert_eq!(extract_body("<HTML><BODY id=x>Hi</BODY></HTML>"), "Hi");
    }

    #[test]
    fn uses_last_closing_tag() {
        assert_eq!(
            extract_body("<body>a</body>b</body>"),
            "a</body>b"
        );
    }

    #[test]
    fn fragments_without_body_pass_through() {
        let fragment = "<div class=\"card\">Hello</div>";
        assert_eq!(extract_body(fragment), fragment);
        assert_eq!(extract_body(""), "");
    }

    #[test]
    fn malformed_tags_fall_back_to_input() {
        assert_eq!(extract_body("<body"), "<body");
        assert_eq!(extract_body("<body>no close"), "<body>no close");
        assert_eq!(extract_body("</body><body>"), "</body><body>");
    }

    #[test]
    fn doctype_lines_are_dropped_from_fragments() {
        assert_eq!(extract_body("<!doctype html><p>x</p>"), "<p>x</p>");
    }

    #[test]
    fn document_wraps_style_body_and_script() {
        let doc = render_document(&source(
            "<html><body>X</body></html>",
            "p{color:red}",
            "alert(1)",
        ));
        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert!(doc.contains("<title>Code Preview</title>"));
        assert!(doc.contains(r#"<meta name="viewport" content="width=device-width, initial-scale=1.0">"#));
        assert!(doc.contains("<style>p{color:red}</style>"));
        assert!(doc.contains("<body>\nX\n<script>alert(1)</script>\n</body>"));
    }

    #[test]
    fn empty_inputs_still_render_a_document() {
        let doc = render_document(&PreviewSource::default());
        assert!(doc.contains("<style></style>"));
        assert!(doc.contains("<script></script>"));
        assert!(doc.ends_with("</html>"));
    }
}
