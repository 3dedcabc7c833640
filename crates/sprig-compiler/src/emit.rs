//! Placeholder emission: serialize a [`TemplateTree`] back to template
//! source, rewriting each component node into its hydration placeholder.
//!
//! The emitted contract is consumed by an external hydration runtime that
//! scans the DOM for the marker class and attributes below; their names must
//! not change without coordinated versioning on the runtime side.

use sprig_tree::{NodeId, NodeType, TemplateTree};

use crate::attrs::{AttributeKind, ClassifiedAttributes, ParsedAttribute};
use crate::escape::{escape_html_attr, evaluation_placeholder, json_quote};

/// Marker class token the hydration runtime scans for.
pub const INIT_CLASS: &str = "_Component_Init";

/// Attribute carrying the component name to instantiate.
pub const INIT_NAME_ATTR: &str = "data-component-init-name";

/// Attribute carrying the component's argument payload.
pub const INIT_ARGS_ATTR: &str = "data-component-args";

/// The fixed payload emitted when a component has no arguments.
pub const EMPTY_ARGS: &str = "[]";

/// Serialize the whole tree to output text.
///
/// Text nodes pass through byte-for-byte; component nodes are rewritten to
/// placeholder markup.
#[must_use]
pub fn serialize_tree(tree: &TemplateTree) -> String {
    let mut out = String::new();
    for child in tree.children(tree.root()) {
        serialize_node(tree, *child, &mut out);
    }
    out
}

fn serialize_node(tree: &TemplateTree, id: NodeId, out: &mut String) {
    let Some(node) = tree.get(id) else {
        return;
    };
    match &node.node_type {
        NodeType::Root => {
            for child in tree.children(id) {
                serialize_node(tree, *child, out);
            }
        }
        NodeType::Text(data) => out.push_str(data),
        NodeType::Component(data) => {
            let mut classified = ClassifiedAttributes::from_raw(&data.attributes);

            out.push_str("<div class=\"");
            out.push_str(&folded_class(&mut classified));
            out.push('"');

            out.push_str(&format!(" {INIT_NAME_ATTR}=\""));
            out.push_str(&escape_html_attr(&data.tag_name));
            out.push('"');

            out.push_str(&format!(" {INIT_ARGS_ATTR}=\""));
            out.push_str(&encode_component_args(&classified.component_args));
            out.push('"');

            for attr in &classified.html_attributes {
                out.push(' ');
                out.push_str(&render_html_attribute(attr));
            }
            out.push('>');

            let mut inner = String::new();
            for child in tree.children(id) {
                serialize_node(tree, *child, &mut inner);
            }
            if !inner.trim().is_empty() {
                out.push_str(&inner);
            }
            out.push_str("</div>");
        }
    }
}

/// Fold the author's `class` attribute into the marker class list.
///
/// No `class` → just the marker token. A `Literal` class appends its escaped
/// value; an `Expression` class appends an evaluation placeholder so the
/// final class list resolves at render time. A bare `class` flag carries no
/// value and adds nothing.
fn folded_class(classified: &mut ClassifiedAttributes) -> String {
    let mut class_list = String::from(INIT_CLASS);
    if let Some(class_attr) = classified.take_html_attribute("class") {
        match (class_attr.kind, class_attr.value) {
            (AttributeKind::Expression, Some(expr)) => {
                class_list.push(' ');
                class_list.push_str(&evaluation_placeholder(&expr));
            }
            (AttributeKind::Literal, Some(value)) => {
                class_list.push(' ');
                class_list.push_str(&escape_html_attr(&value));
            }
            _ => {}
        }
    }
    class_list
}

/// Build the `data-component-args` payload.
///
/// An empty argument set emits the fixed literal `[]`. Otherwise the payload
/// is a JSON object built piecewise: keys and `Literal` values are JSON
/// string tokens escaped again for the surrounding double-quoted HTML
/// attribute, `BooleanFlag` emits `true`, and `Expression` values are
/// spliced as raw code fragments for the host template engine. The two
/// escape layers around literals are what keep injected values from
/// terminating either the JSON construct or the attribute.
#[must_use]
pub fn encode_component_args(args: &[ParsedAttribute]) -> String {
    if args.is_empty() {
        return EMPTY_ARGS.to_string();
    }
    let mut payload = String::from("{");
    for (index, arg) in args.iter().enumerate() {
        if index > 0 {
            payload.push(',');
        }
        payload.push_str(&escape_html_attr(&json_quote(&arg.key)));
        payload.push(':');
        match (arg.kind, &arg.value) {
            (AttributeKind::Expression, Some(expr)) => payload.push_str(expr),
            (AttributeKind::Literal, Some(value)) => {
                payload.push_str(&escape_html_attr(&json_quote(value)));
            }
            _ => payload.push_str("true"),
        }
    }
    payload.push('}');
    payload
}

/// Render one pass-through HTML attribute onto the wrapper.
fn render_html_attribute(attr: &ParsedAttribute) -> String {
    match (attr.kind, &attr.value) {
        (AttributeKind::Expression, Some(expr)) => {
            format!("{}=\"{}\"", attr.key, evaluation_placeholder(expr))
        }
        (AttributeKind::Literal, Some(value)) => {
            format!("{}=\"{}\"", attr.key, escape_html_attr(value))
        }
        _ => attr.key.clone(),
    }
}
