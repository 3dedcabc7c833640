//! Escape functions for emitted markup and payloads.
//!
//! Each escape is named and independently testable; injection safety depends
//! on composing them in the right order when building the
//! `data-component-args` payload:
//!
//! 1. [`json_quote`] - construct-level backslash/quote escaping of a literal
//!    value, producing a JSON string token.
//! 2. [`escape_html_attr`] - HTML-attribute escaping of the JSON text so it
//!    cannot terminate the surrounding double-quoted attribute.
//!
//! Expression fragments are exempt from both: they are host-engine code and
//! are spliced verbatim.
//!
//! Escaped characters for HTML attributes:
//! - `<` → `&lt;`
//! - `>` → `&gt;`
//! - `&` → `&amp;`
//! - `"` → `&quot;`
//! - `'` → `&#x27;`

/// Escape HTML special characters for embedding in a double-quoted attribute.
///
/// # Examples
///
/// ```
/// use sprig_compiler::escape::escape_html_attr;
///
/// assert_eq!(escape_html_attr(r#"value with "quotes""#),
///            "value with &quot;quotes&quot;");
/// assert_eq!(escape_html_attr("<script>"), "&lt;script&gt;");
/// ```
#[must_use]
pub fn escape_html_attr(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '<' => "&lt;".to_string(),
            '>' => "&gt;".to_string(),
            '&' => "&amp;".to_string(),
            '"' => "&quot;".to_string(),
            '\'' => "&#x27;".to_string(),
            _ => c.to_string(),
        })
        .collect()
}

/// Unescape HTML-attribute entities.
///
/// This is the inverse of [`escape_html_attr`]; consumers (and the tests)
/// use it to recover the JSON payload from an emitted attribute.
///
/// # Examples
///
/// ```
/// use sprig_compiler::escape::unescape_html_attr;
///
/// assert_eq!(unescape_html_attr("&lt;div&gt;"), "<div>");
/// assert_eq!(unescape_html_attr("&quot;quoted&quot;"), r#""quoted""#);
/// ```
#[must_use]
pub fn unescape_html_attr(s: &str) -> String {
    s.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#x27;", "'")
        .replace("&amp;", "&")
}

/// Quote a string as a JSON string token.
///
/// This is the construct-level escape for literal attribute values: quote
/// characters inside the literal cannot terminate the surrounding JSON
/// construct.
///
/// # Examples
///
/// ```
/// use sprig_compiler::escape::json_quote;
///
/// assert_eq!(json_quote("plain"), r#""plain""#);
/// assert_eq!(json_quote(r#"say "hi""#), r#""say \"hi\"""#);
/// ```
#[must_use]
pub fn json_quote(s: &str) -> String {
    serde_json::Value::String(s.to_owned()).to_string()
}

/// Wrap host-engine expression text in an evaluation placeholder.
///
/// The expression is emitted verbatim; it is resolved by the host template
/// engine at render time, never by this compiler.
///
/// # Examples
///
/// ```
/// use sprig_compiler::escape::evaluation_placeholder;
///
/// assert_eq!(evaluation_placeholder("user.name"), "{{ user.name }}");
/// ```
#[must_use]
pub fn evaluation_placeholder(expression: &str) -> String {
    format!("{{{{ {expression} }}}}")
}
