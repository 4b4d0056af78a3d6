//! Script tag rendering for resolved load orders

use html_escape::encode_double_quoted_attribute;

/// `<script src="..."></script>` for a single script path
pub fn render_script_tag(script_path: &str) -> String {
    format!(
        "<script src=\"{}\"></script>",
        encode_double_quoted_attribute(script_path)
    )
}

/// One script tag per name, newline separated, in the given order
pub fn render_as_script_tags<S: AsRef<str>>(ordered: &[S]) -> String {
    ordered
        .iter()
        .map(|path| render_script_tag(path.as_ref()))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_tags_in_order() {
        let rendered = render_as_script_tags(&["jquery.js", "app.js"]);
        assert_eq!(
            rendered,
            "<script src=\"jquery.js\"></script>\n<script src=\"app.js\"></script>"
        );
    }

    #[test]
    fn test_empty_list_renders_nothing() {
        let empty: [&str; 0] = [];
        assert_eq!(render_as_script_tags(&empty), "");
    }

    #[test]
    fn test_escapes_attribute_quotes() {
        assert_eq!(
            render_script_tag("a\".js"),
            "<script src=\"a&quot;.js\"></script>"
        );
    }
}
