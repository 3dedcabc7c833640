//! Segment types produced by the component-tag scanner.

use core::fmt;

use sprig_tree::TagAttribute;

/// The scanner splits template source into a flat stream of segments; the
/// tree builder pairs the tag segments afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Literal template text, passed through byte-for-byte. Includes
    /// tag-shaped text that failed the component naming rule.
    Text {
        /// The text content.
        data: String,
    },

    /// A component open tag (`<User_Card ...>` or `<User_Card ... />`).
    OpenTag {
        /// The tag name, verbatim.
        name: String,
        /// Scanned attributes in source order, prefixes intact.
        attributes: Vec<TagAttribute>,
        /// Whether the tag closed itself with `/>`.
        self_closing: bool,
        /// The exact source slice of the tag, kept so an unpaired open can
        /// be restored byte-identically.
        raw: String,
    },

    /// A component close tag (`</User_Card>`).
    CloseTag {
        /// The tag name, verbatim.
        name: String,
        /// The exact source slice of the tag.
        raw: String,
    },
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text { data } => write!(f, "Text({data:?})"),
            Self::OpenTag {
                name,
                attributes,
                self_closing,
                ..
            } => {
                write!(f, "<{name}")?;
                for attr in attributes {
                    match &attr.value {
                        Some(value) => write!(f, " {}={value:?}", attr.name)?,
                        None => write!(f, " {}", attr.name)?,
                    }
                }
                if *self_closing {
                    write!(f, " /")?;
                }
                write!(f, ">")
            }
            Self::CloseTag { name, .. } => write!(f, "</{name}>"),
        }
    }
}

/// Whether a tag name follows the component naming convention: an ASCII
/// uppercase first letter, only ASCII alphanumerics and underscores, and at
/// least one underscore separating words.
///
/// This is what distinguishes `<User_Card>` from ordinary HTML tags like
/// `<div>`; names failing the rule are left completely unmodified in the
/// output.
///
/// # Examples
///
/// ```
/// use sprig_compiler::scanner::is_component_tag_name;
///
/// assert!(is_component_tag_name("User_Card"));
/// assert!(is_component_tag_name("Alert_Box_V2"));
/// assert!(!is_component_tag_name("button"));
/// assert!(!is_component_tag_name("Foo"));
/// assert!(!is_component_tag_name("foo_bar"));
/// ```
#[must_use]
pub fn is_component_tag_name(name: &str) -> bool {
    let Some(first) = name.chars().next() else {
        return false;
    };
    first.is_ascii_uppercase()
        && name.contains('_')
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
}
