//! Markdown rendering for assistant messages.
//!
//! Assistant answers arrive as markdown-formatted prose and are converted to
//! HTML once, then injected via `inner_html`. User messages never go through
//! this path; they are rendered as literal text.

use pulldown_cmark::{html, Options, Parser};

/// Renders markdown to an HTML fragment.
pub fn render_markdown(content: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    let parser = Parser::new_ext(content, options);

    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_paragraph() {
        assert_eq!(render_markdown("hello"), "<p>hello</p>\n");
    }

    #[test]
    fn renders_heading_and_emphasis() {
        let html = render_markdown("# Tables\n\nThe *orders* table.");
        assert!(html.contains("<h1>Tables</h1>"));
        assert!(html.contains("<em>orders</em>"));
    }

    #[test]
    fn renders_lists_and_code() {
        let html = render_markdown("- `SELECT 1`\n- two");
        assert!(html.contains("<ul>"));
        assert!(html.contains("<code>SELECT 1</code>"));
    }

    #[test]
    fn rendering_is_idempotent_per_input() {
        let input = "**bold** and `code`";
        assert_eq!(render_markdown(input), render_markdown(input));
    }

    #[test]
    fn escapes_raw_text_inside_code_blocks() {
        let html = render_markdown("```\na < b\n```");
        assert!(html.contains("a &lt; b"));
    }
}
