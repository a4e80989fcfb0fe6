//! Escaping utilities for safe output generation.
//!
//! SBOM data comes from external sources: component names and ids may carry
//! markup, quotes or control characters. Everything user-controllable is
//! escaped before it is embedded in HTML, DOT or an inline `<script>` block.

/// Escape a string for safe inclusion in HTML content.
///
/// Escapes the following characters:
/// - `&` -> `&amp;`
/// - `<` -> `&lt;`
/// - `>` -> `&gt;`
/// - `"` -> `&quot;`
/// - `'` -> `&#x27;`
///
/// # Examples
///
/// ```
/// use sbom_tree::reports::escape::escape_html;
///
/// assert_eq!(escape_html("<script>alert('xss')</script>"),
///     "&lt;script&gt;alert(&#x27;xss&#x27;)&lt;/script&gt;");
///
/// assert_eq!(escape_html("safe text"), "safe text");
/// ```
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}

/// Escape a string for use inside a double-quoted DOT identifier or label.
///
/// # Examples
///
/// ```
/// use sbom_tree::reports::escape::escape_dot;
///
/// assert_eq!(escape_dot(r#"say "hi""#), r#"say \"hi\""#);
/// assert_eq!(escape_dot(r"C:\pkg"), r"C:\\pkg");
/// ```
#[must_use]
pub fn escape_dot(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => result.push_str("\\\\"),
            '"' => result.push_str("\\\""),
            '\n' => result.push_str("\\n"),
            '\r' => {}
            _ => result.push(c),
        }
    }
    result
}

/// Make serialized JSON safe to place inside an HTML `<script>` element.
///
/// Only `</` needs breaking up: it is the one sequence that can close the
/// element early. `<\/` is an equivalent JSON string escape.
#[must_use]
pub fn escape_script_json(json: &str) -> String {
    json.replace("</", "<\\/")
}
