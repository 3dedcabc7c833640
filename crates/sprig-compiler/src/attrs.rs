//! Attribute classification and partitioning.
//!
//! A scanned [`TagAttribute`] is classified into exactly one of three kinds,
//! and the classified set is partitioned into component arguments (delivered
//! to the hydration runtime as JSON) and plain HTML attributes (rendered
//! onto the placeholder element). Both steps are total: every scanned token
//! lands in exactly one kind and exactly one group.

use sprig_tree::TagAttribute;

/// How an attribute's value is interpreted and escaped on emission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeKind {
    /// Host-engine expression text, passed through opaquely and never
    /// escaped. Produced by a `:` key prefix or `{{ ... }}` / `{!! ... !!}`
    /// value delimiters.
    Expression,
    /// A plain string value, escaped per emission context.
    Literal,
    /// A bare attribute with no `=value`; semantically `true`.
    BooleanFlag,
}

/// One classified attribute.
///
/// Invariant: `value` is `Some` for `Expression` and `Literal`, `None` for
/// `BooleanFlag`; the kind fully determines how the value is escaped when
/// re-emitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedAttribute {
    /// Attribute key with any `:` binding prefix stripped (the `$` / `data-`
    /// prefixes are stripped later, during partitioning).
    pub key: String,
    /// The classification.
    pub kind: AttributeKind,
    /// String payload for `Expression` / `Literal`, absent for `BooleanFlag`.
    pub value: Option<String>,
}

impl ParsedAttribute {
    /// Classify one scanned attribute token.
    ///
    /// Rules, in order:
    /// 1. `:`-prefixed key → `Expression`, value used verbatim.
    /// 2. Value delimited by `{{ ... }}` or `{!! ... !!}` → `Expression`
    ///    with the trimmed inner text.
    /// 3. No value captured → `BooleanFlag`.
    /// 4. Otherwise → `Literal` with the raw captured string.
    #[must_use]
    pub fn classify(attr: &TagAttribute) -> Self {
        if let Some(stripped) = attr.name.strip_prefix(':') {
            // An explicit binding prefix wins even when no value was written.
            return Self {
                key: stripped.to_string(),
                kind: AttributeKind::Expression,
                value: Some(attr.value.clone().unwrap_or_default()),
            };
        }
        match &attr.value {
            Some(value) => match delimited_expression(value) {
                Some(inner) => Self {
                    key: attr.name.clone(),
                    kind: AttributeKind::Expression,
                    value: Some(inner.to_string()),
                },
                None => Self {
                    key: attr.name.clone(),
                    kind: AttributeKind::Literal,
                    value: Some(value.clone()),
                },
            },
            None => Self {
                key: attr.name.clone(),
                kind: AttributeKind::BooleanFlag,
                value: None,
            },
        }
    }
}

/// If the whole value matches `{{ <inner> }}` or `{!! <inner> !!}`, return
/// the whitespace-trimmed inner text.
fn delimited_expression(value: &str) -> Option<&str> {
    if let Some(inner) = value
        .strip_prefix("{!!")
        .and_then(|rest| rest.strip_suffix("!!}"))
    {
        return Some(inner.trim());
    }
    value
        .strip_prefix("{{")
        .and_then(|rest| rest.strip_suffix("}}"))
        .map(str::trim)
}

/// The partition of a tag's attributes into component arguments and HTML
/// attributes.
///
/// Both groups preserve scanning order; a later occurrence of the same final
/// key overwrites the earlier one in place.
#[derive(Debug, Clone, Default)]
pub struct ClassifiedAttributes {
    /// Arguments passed to the hydrated component as data, keyed by the
    /// name with its `$` / `data-` prefix stripped.
    pub component_args: Vec<ParsedAttribute>,
    /// Attributes rendered onto the placeholder element, keyed verbatim.
    pub html_attributes: Vec<ParsedAttribute>,
}

impl ClassifiedAttributes {
    /// Classify and partition a scanned attribute list.
    ///
    /// `$`-prefixed and `data-`-prefixed keys land in `component_args`
    /// (prefix stripped); everything else lands in `html_attributes`.
    #[must_use]
    pub fn from_raw(attributes: &[TagAttribute]) -> Self {
        let mut classified = Self::default();
        for raw in attributes {
            let mut parsed = ParsedAttribute::classify(raw);
            if let Some(stripped) = parsed.key.strip_prefix('$') {
                parsed.key = stripped.to_string();
                insert_last_wins(&mut classified.component_args, parsed);
            } else if let Some(stripped) = parsed.key.strip_prefix("data-") {
                parsed.key = stripped.to_string();
                insert_last_wins(&mut classified.component_args, parsed);
            } else {
                insert_last_wins(&mut classified.html_attributes, parsed);
            }
        }
        classified
    }

    /// Remove and return the HTML attribute with the given key, if present.
    ///
    /// The emitter uses this to fold the author's `class` attribute into the
    /// placeholder's own class list.
    pub fn take_html_attribute(&mut self, key: &str) -> Option<ParsedAttribute> {
        self.html_attributes
            .iter()
            .position(|attr| attr.key == key)
            .map(|index| self.html_attributes.remove(index))
    }
}

/// Insert preserving scanning order: a repeated key replaces the earlier
/// entry in place (last-wins attribute merge).
fn insert_last_wins(entries: &mut Vec<ParsedAttribute>, attr: ParsedAttribute) {
    match entries.iter_mut().find(|entry| entry.key == attr.key) {
        Some(existing) => *existing = attr,
        None => entries.push(attr),
    }
}
