//! End-to-end tests for the full compile pipeline: placeholder shape,
//! argument payloads, escaping, pairing, and error behavior.

use serde_json::json;
use sprig_compiler::escape::unescape_html_attr;
use sprig_compiler::{CompileError, Compiler, compile};

/// Helper to extract the value of an attribute from emitted markup.
///
/// Emitted values are HTML-attribute-escaped, so the first `"` after the
/// opening quote always terminates the value.
fn attr_value(output: &str, name: &str) -> String {
    let marker = format!("{name}=\"");
    let start = output
        .find(&marker)
        .unwrap_or_else(|| panic!("no {name} attribute in {output}"))
        + marker.len();
    let end = output[start..]
        .find('"')
        .unwrap_or_else(|| panic!("unterminated {name} attribute in {output}"));
    output[start..start + end].to_string()
}

/// Helper to decode the args payload of emitted markup as JSON.
fn decoded_args(output: &str) -> serde_json::Value {
    let raw = unescape_html_attr(&attr_value(output, "data-component-args"));
    serde_json::from_str(&raw)
        .unwrap_or_else(|e| panic!("args payload {raw} is not valid JSON: {e}"))
}

// ========== placeholder shape ==========

#[test]
fn test_bare_component_exact_output() {
    let out = compile("<Alert_Box />").unwrap();
    assert_eq!(
        out,
        "<div class=\"_Component_Init\" \
         data-component-init-name=\"Alert_Box\" \
         data-component-args=\"[]\"></div>"
    );
}

#[test]
fn test_wrapper_carries_name_args_and_html_attributes() {
    let out = compile(r#"<Foo_Bar k="v" $arg="x" />"#).unwrap();
    assert_eq!(attr_value(&out, "data-component-init-name"), "Foo_Bar");
    assert_eq!(decoded_args(&out), json!({"arg": "x"}));
    assert_eq!(attr_value(&out, "k"), "v");
    assert!(out.starts_with("<div class=\"_Component_Init\""));
    assert!(out.ends_with("</div>"));
}

#[test]
fn test_empty_args_payload_is_fixed_literal() {
    let out = compile(r#"<Alert_Box id="a" />"#).unwrap();
    assert_eq!(attr_value(&out, "data-component-args"), "[]");
}

#[test]
fn test_blank_inner_content_is_dropped() {
    let out = compile("<Alert_Box>   \n  </Alert_Box>").unwrap();
    assert!(out.ends_with("\"[]\"></div>"), "got {out}");
}

#[test]
fn test_inner_content_preserved() {
    let out = compile("<Alert_Box>hello</Alert_Box>").unwrap();
    assert!(out.contains(">hello</div>"), "got {out}");
}

#[test]
fn test_nested_components() {
    let out = compile("<User_Card><Alert_Box /></User_Card>").unwrap();
    let inner_name = out.match_indices("data-component-init-name").count();
    assert_eq!(inner_name, 2, "got {out}");
    let outer = out.find("User_Card").unwrap();
    let inner = out.find("Alert_Box").unwrap();
    assert!(outer < inner);
    assert!(out.ends_with("</div></div>"), "got {out}");
}

// ========== attribute partition ==========

#[test]
fn test_dollar_and_data_prefixes_feed_args() {
    let out = compile(r#"<A_B $x="1" data-y="2" z="3" />"#).unwrap();
    assert_eq!(decoded_args(&out), json!({"x": "1", "y": "2"}));
    assert_eq!(attr_value(&out, "z"), "3");
    assert!(!out.contains("data-y"), "got {out}");
}

#[test]
fn test_boolean_flag_arg_is_json_true() {
    let out = compile("<A_B $visible />").unwrap();
    assert_eq!(decoded_args(&out), json!({"visible": true}));
}

#[test]
fn test_boolean_flag_html_attribute_is_bare() {
    let out = compile("<A_B disabled />").unwrap();
    assert!(out.contains(" disabled>"), "got {out}");
}

#[test]
fn test_last_wins_on_repeated_key() {
    let out = compile(r#"<A_B $x="1" $x="2" />"#).unwrap();
    assert_eq!(decoded_args(&out), json!({"x": "2"}));
}

#[test]
fn test_dollar_and_data_collide_on_stripped_key() {
    // Both prefixes strip to the same args key, so the later one wins.
    let out = compile(r#"<A_B $x="1" data-x="2" />"#).unwrap();
    assert_eq!(decoded_args(&out), json!({"x": "2"}));
}

#[test]
fn test_unquoted_value_with_slash() {
    let out = compile("<A_B href=a/b />").unwrap();
    assert_eq!(attr_value(&out, "href"), "a/b");
}

// ========== expressions ==========

#[test]
fn test_expression_arg_spliced_raw() {
    let out = compile(r#"<A_B $count="{{ total + 1 }}" />"#).unwrap();
    let args = attr_value(&out, "data-component-args");
    assert_eq!(args, "{&quot;count&quot;:total + 1}");
}

#[test]
fn test_colon_prefix_is_expression() {
    let out = compile(r#"<A_B :title="user.name" />"#).unwrap();
    assert_eq!(attr_value(&out, "title"), "{{ user.name }}");
}

#[test]
fn test_raw_delimiters_are_expression() {
    let out = compile(r#"<A_B $body="{!! html !!}" />"#).unwrap();
    let args = attr_value(&out, "data-component-args");
    assert_eq!(args, "{&quot;body&quot;:html}");
}

#[test]
fn test_expression_text_never_html_escaped() {
    let out = compile(r#"<A_B $check="{{ a < b && c > d }}" />"#).unwrap();
    let args = attr_value(&out, "data-component-args");
    assert!(args.contains("a < b && c > d"), "got {args}");
}

// ========== class folding ==========

#[test]
fn test_no_class_yields_marker_alone() {
    let out = compile("<A_B />").unwrap();
    assert_eq!(attr_value(&out, "class"), "_Component_Init");
}

#[test]
fn test_literal_class_appended() {
    let out = compile(r#"<A_B class="mt-4" />"#).unwrap();
    assert_eq!(attr_value(&out, "class"), "_Component_Init mt-4");
}

#[test]
fn test_expression_class_appends_placeholder() {
    let out = compile(r#"<A_B :class="theme" />"#).unwrap();
    assert_eq!(attr_value(&out, "class"), "_Component_Init {{ theme }}");
}

// ========== injection safety ==========

#[test]
fn test_literal_arg_cannot_break_out_of_attribute() {
    let out = compile(r#"<A_B $msg='"><script>alert(1)</script>' />"#).unwrap();
    assert!(!out.contains("<script>"), "got {out}");
    assert_eq!(
        decoded_args(&out),
        json!({"msg": "\"><script>alert(1)</script>"})
    );
}

#[test]
fn test_literal_html_attribute_escaped() {
    let out = compile(r#"<A_B title='a "b" <c>' />"#).unwrap();
    assert_eq!(attr_value(&out, "title"), "a &quot;b&quot; &lt;c&gt;");
}

// ========== passthrough and pairing ==========

#[test]
fn test_non_component_input_is_byte_identical() {
    let sources = [
        "plain text, no tags at all",
        r#"<div class="card"><p>hi</p></div>"#,
        "<Foo>no underscore</Foo>",
        "<user_card lowercase />",
        "<!-- comment --> and 2 < 3",
    ];
    for source in sources {
        assert_eq!(compile(source).unwrap(), source);
    }
}

#[test]
fn test_unpaired_open_tag_is_byte_identical() {
    let source = "<User_Card>never closed";
    assert_eq!(compile(source).unwrap(), source);
}

#[test]
fn test_unmatched_close_tag_is_byte_identical() {
    let source = "stray </User_Card> here";
    assert_eq!(compile(source).unwrap(), source);
}

#[test]
fn test_mismatched_inner_tag_degrades_to_text() {
    let out = compile("<A_B><C_D>text</A_B>").unwrap();
    assert!(out.contains("<C_D>text"), "got {out}");
    assert_eq!(attr_value(&out, "data-component-init-name"), "A_B");
    assert!(!out.contains("C_D\""), "got {out}");
}

#[test]
fn test_idempotent_on_literal_only_output() {
    let source = r#"a <User_Card $name="John" class="mt-4">body</User_Card> z"#;
    let once = compile(source).unwrap();
    let twice = compile(&once).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn test_expression_containing_tag_text_reenters_on_second_pass() {
    // Known edge of the raw-splice contract: an expression whose text is
    // itself component-tag-shaped lands unescaped in the args attribute, so
    // a second pass rewrites it instead of leaving the output alone.
    let source = r#"<A_B $x="{{ <C_D/> }}" />"#;
    let once = compile(source).unwrap();
    assert!(once.contains("<C_D/>"), "got {once}");

    let twice = compile(&once).unwrap();
    assert_ne!(once, twice);
    assert!(
        twice.contains("data-component-init-name=\"C_D\""),
        "got {twice}"
    );
}

// ========== nesting limit ==========

#[test]
fn test_depth_at_limit_is_allowed() {
    let compiler = Compiler::new().with_max_depth(2);
    let out = compiler.compile("<A_B><C_D>x</C_D></A_B>");
    assert!(out.is_ok());
}

#[test]
fn test_depth_beyond_limit_errors() {
    let compiler = Compiler::new().with_max_depth(2);
    let err = compiler
        .compile("<A_B><C_D><E_F>x</E_F></C_D></A_B>")
        .unwrap_err();
    assert_eq!(err, CompileError::NestingTooDeep { limit: 2 });
}

#[test]
fn test_self_closing_tags_do_not_count_toward_depth() {
    let compiler = Compiler::new().with_max_depth(1);
    let out = compiler.compile("<A_B><C_D /><E_F /></A_B>");
    assert!(out.is_ok());
}
