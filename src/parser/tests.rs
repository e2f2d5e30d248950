#[cfg(test)]
use super::*;
#[cfg(test)]
use crate::ast::{AttributeType, AttributeValue, Scalar};

fn scalar<'a>(doc_attr: Option<&'a Attribute>) -> &'a Scalar {
    doc_attr
        .and_then(|a| a.scalar_value())
        .expect("expected a scalar attribute")
}

#[test]
fn test_parser_basic_document() {
    let input = r#"
// top-level settings
name = "example"
pi = 3.1415
no = false
count = 42

block {
    foo = "bar"
    block_array = ["test", "block", "array", 1234, false]
}
"#;

    let doc = parse_str(input).expect("Failed to parse document");

    println!("--- Parsed Document ---");
    println!("{:#?}", doc);

    assert_eq!(doc.attributes.len(), 4);
    assert_eq!(scalar(doc.attribute("name")), &Scalar::String("example".into()));
    assert_eq!(scalar(doc.attribute("pi")), &Scalar::Float(3.1415));
    assert_eq!(doc.attribute("pi").map(|a| a.kind), Some(AttributeType::Number));
    assert_eq!(scalar(doc.attribute("no")), &Scalar::Bool(false));
    assert_eq!(scalar(doc.attribute("count")), &Scalar::Integer(42));

    let block = doc.block("block").expect("block should exist");
    assert_eq!(scalar(block.attribute("foo")), &Scalar::String("bar".into()));
    assert_eq!(
        block.attribute("block_array").and_then(|a| a.array_value()),
        Some(
            &[
                Scalar::String("test".into()),
                Scalar::String("block".into()),
                Scalar::String("array".into()),
                Scalar::Integer(1234),
                Scalar::Bool(false),
            ][..]
        )
    );
}

#[test]
fn test_array_keeps_source_order() {
    let doc = parse_str(r#"mixed = [ "a", 1, true ]"#).unwrap();
    let attr = doc.attribute("mixed").unwrap();
    assert_eq!(attr.kind, AttributeType::Array);
    assert_eq!(
        attr.value,
        AttributeValue::Array(vec![
            Scalar::String("a".into()),
            Scalar::Integer(1),
            Scalar::Bool(true),
        ])
    );
}

#[test]
fn test_empty_array_and_trailing_comma() {
    let doc = parse_str("empty = []\ntrailing = [1, 2,]").unwrap();
    assert_eq!(doc.attribute("empty").unwrap().array_value(), Some(&[][..]));
    assert_eq!(
        doc.attribute("trailing").unwrap().array_value(),
        Some(&[Scalar::Integer(1), Scalar::Integer(2)][..])
    );
}

#[test]
fn test_nested_arrays_are_rejected() {
    let err = parse_str("x = [[1,2]]").unwrap_err();
    assert!(matches!(err, NeclError::NestedArrayNotAllowed { line: 1, .. }), "{:?}", err);
}

#[test]
fn test_multiline_string() {
    let input = "s = \"line1\" \\\n    \"line2\"\nafter = 1";
    let doc = parse_str(input).unwrap();
    assert_eq!(scalar(doc.attribute("s")), &Scalar::String("line1 line2".into()));
    assert_eq!(scalar(doc.attribute("after")), &Scalar::Integer(1));
}

#[test]
fn test_multiline_string_three_lines() {
    let input = r#"
multiline = "this is" \
            "a multiline" \
            "string"
"#;
    let doc = parse_str(input).unwrap();
    assert_eq!(
        scalar(doc.attribute("multiline")),
        &Scalar::String("this is a multiline string".into())
    );
}

#[test]
fn test_multiline_array() {
    let input = r#"
letters = [
    "a", "b",
    "c"
]
tail = true
"#;
    let doc = parse_str(input).unwrap();
    assert_eq!(
        doc.attribute("letters").unwrap().array_value(),
        Some(&[Scalar::String("a".into()), Scalar::String("b".into()), Scalar::String("c".into())][..])
    );
    assert_eq!(scalar(doc.attribute("tail")), &Scalar::Bool(true));
}

#[test]
fn test_unterminated_multiline_array() {
    let err = parse_str("x = [\n1,\n2").unwrap_err();
    assert!(matches!(err, NeclError::UnclassifiableValue { line: 1, .. }), "{:?}", err);
}

#[test]
fn test_nested_block_scoping() {
    let input = r#"
top = 1
outer {
    before = "outer-before"
    inner {
        deep = "inner"
        innermost {
            level = 3
        }
    }
    after = "outer-after"
}
tail = 2
"#;
    let doc = parse_str(input).unwrap();

    assert_eq!(doc.attributes.len(), 2);
    assert!(doc.attribute("top").is_some());
    assert!(doc.attribute("tail").is_some());

    let outer = doc.block("outer").unwrap();
    assert_eq!(outer.name, "outer");
    assert_eq!(outer.attributes.len(), 2);
    assert!(outer.attribute("before").is_some());
    assert!(outer.attribute("after").is_some());
    assert!(outer.attribute("deep").is_none());

    let inner = outer.block("inner").unwrap();
    assert_eq!(inner.attributes.len(), 1);
    assert!(inner.attribute("after").is_none());
    assert_eq!(
        scalar(inner.block("innermost").unwrap().attribute("level")),
        &Scalar::Integer(3)
    );
}

#[test]
fn test_sibling_blocks_and_empty_block() {
    let input = r#"
a {
    x = 1
}
b {
    y = 2
}
c { }
"#;
    let doc = parse_str(input).unwrap();
    assert_eq!(doc.blocks.keys().collect::<Vec<_>>(), vec!["a", "b", "c"]);
    assert!(doc.block("c").unwrap().attributes.is_empty());
}

#[test]
fn test_unbalanced_braces() {
    let err = parse_str("a {\n x = 1\n").unwrap_err();
    assert!(matches!(err, NeclError::UnbalancedBraces { line: 1, .. }));

    let err = parse_str("x = 1\n}").unwrap_err();
    assert!(matches!(err, NeclError::UnbalancedBraces { line: 2, .. }));
}

#[test]
fn test_empty_names() {
    assert!(matches!(parse_str("= 3").unwrap_err(), NeclError::EmptyAttributeName { line: 1, .. }));
    assert!(matches!(parse_str("{\n}").unwrap_err(), NeclError::EmptyBlockName { line: 1, .. }));
}

#[test]
fn test_comments_are_ignored() {
    let input = r#"
// a = 1
b = 2 // trailing
url = "http://example.com"
"#;
    let doc = parse_str(input).unwrap();
    assert!(doc.attribute("a").is_none());
    assert_eq!(scalar(doc.attribute("b")), &Scalar::Integer(2));
    assert_eq!(scalar(doc.attribute("url")), &Scalar::String("http://example.com".into()));
}

#[test]
fn test_expressions_see_earlier_attributes() {
    let input = r#"
width = 4
height = 5
area = width * height
wide = width > height
shout = upper("hi")
size = length('four')
has = contains("haystack", "st")
sq = power(width, 2)
same = and(true, true)
"#;
    let doc = parse_str(input).unwrap();
    assert_eq!(scalar(doc.attribute("area")), &Scalar::Integer(20));
    assert_eq!(doc.attribute("area").unwrap().kind, AttributeType::Number);
    assert_eq!(scalar(doc.attribute("wide")), &Scalar::Bool(false));
    assert_eq!(doc.attribute("wide").unwrap().kind, AttributeType::Boolean);
    assert_eq!(scalar(doc.attribute("shout")), &Scalar::String("HI".into()));
    assert_eq!(scalar(doc.attribute("size")), &Scalar::Integer(4));
    assert_eq!(doc.attribute("size").unwrap().kind, AttributeType::Number);
    assert_eq!(scalar(doc.attribute("has")), &Scalar::Bool(true));
    assert_eq!(scalar(doc.attribute("sq")), &Scalar::Integer(16));
    assert_eq!(scalar(doc.attribute("same")), &Scalar::Bool(true));
}

#[test]
fn test_block_scope_does_not_see_top_level() {
    let input = "n = 1\nb {\n m = n + 1\n}";
    let err = parse_str(input).unwrap_err();
    assert!(matches!(err, NeclError::UnknownAttributeReference { line: 3, .. }), "{:?}", err);
}

#[test]
fn test_comparison_tie_break_in_document() {
    let doc = parse_str("a = 3\nb = 3\nge = a >= b").unwrap();
    assert_eq!(scalar(doc.attribute("ge")), &Scalar::Bool(true));
}

#[test]
fn test_conditional_selects_outcome() {
    let input = r#"
limit = 10
mode = if limit > 5 ? "high" : "low"
flag = if false ? 1 : 2
picked = if contains("abc", "b") ? limit : 0
"#;
    let doc = parse_str(input).unwrap();
    assert_eq!(scalar(doc.attribute("mode")), &Scalar::String("high".into()));
    assert_eq!(scalar(doc.attribute("flag")), &Scalar::Integer(2));
    assert_eq!(scalar(doc.attribute("picked")), &Scalar::Integer(10));
}

#[test]
fn test_conditional_outcome_passthrough() {
    let doc = parse_str("x = if true ? 1==1 : 2==2").unwrap();
    let attr = doc.attribute("x").unwrap();
    assert_eq!(attr.kind, AttributeType::Boolean);
    assert_eq!(attr.value, AttributeValue::Scalar(Scalar::Expression("1==1".into())));
}

#[test]
fn test_conditional_errors() {
    let err = parse_str("x = if true ? 1").unwrap_err();
    assert!(matches!(err, NeclError::MissingOutcome { .. }));

    let err = parse_str("x = if upper(\"a\") ? 1 : 2").unwrap_err();
    assert!(matches!(err, NeclError::InvalidFunctionInCondition { ref function, .. } if function == "upper"));

    let err = parse_str("x = if 3 ? 1 : 2").unwrap_err();
    assert!(matches!(err, NeclError::InvalidConditionType { .. }));
}

#[test]
fn test_projection_over_attribute() {
    let input = "items = [1,2,3]\nout = for items : value";
    let doc = parse_str(input).unwrap();

    let out = doc.attribute("out").unwrap();
    assert_eq!(out.kind, AttributeType::Array);
    assert_eq!(
        out.array_value(),
        Some(&[Scalar::Integer(1), Scalar::Integer(2), Scalar::Integer(3)][..])
    );

    // loop bindings outlive the loop
    assert_eq!(scalar(doc.attribute(INDEX_BINDING)), &Scalar::Integer(2));
    assert_eq!(scalar(doc.attribute(VALUE_BINDING)), &Scalar::Integer(3));
}

#[test]
fn test_projection_with_expressions() {
    let input = r#"
doubled = for [1, 2, 3] : value * 2
names = ["ann", "bob"]
loud = for names : upper(value)
positions = for names : index
"#;
    let doc = parse_str(input).unwrap();
    assert_eq!(
        doc.attribute("doubled").unwrap().array_value(),
        Some(&[Scalar::Integer(2), Scalar::Integer(4), Scalar::Integer(6)][..])
    );
    assert_eq!(
        doc.attribute("loud").unwrap().array_value(),
        Some(&[Scalar::String("ANN".into()), Scalar::String("BOB".into())][..])
    );
    assert_eq!(
        doc.attribute("positions").unwrap().array_value(),
        Some(&[Scalar::Integer(0), Scalar::Integer(1)][..])
    );
}

#[test]
fn test_projection_errors() {
    let err = parse_str("n = 1\nout = for n : value").unwrap_err();
    assert!(matches!(err, NeclError::InvalidProjectionSource { line: 2, .. }));

    let err = parse_str("out = for [1]").unwrap_err();
    assert!(matches!(err, NeclError::MissingOutcome { .. }));
}

#[test]
fn test_error_carries_line_number() {
    let err = parse_str("a = 1\n\nb = nonsense").unwrap_err();
    assert_eq!(err.line(), 3);
    assert!(err.to_string().contains("line 3"));
}

#[test]
fn test_parse_lines_matches_parse_str() {
    let lines = vec!["a = 1", "blk {", "  b = 'x'", "}"];
    assert_eq!(parse_lines(&lines).unwrap(), parse_str(&lines.join("\n")).unwrap());
}

#[test]
fn test_evaluate_value_in_scope() {
    let mut scope = Scope::new();
    scope.insert(Attribute::scalar("n", AttributeType::Number, Scalar::Integer(7)));
    let attr = Parser::evaluate_value("n - 2", &mut scope).unwrap();
    assert_eq!(attr.scalar_value(), Some(&Scalar::Integer(5)));
}

#[test]
fn test_array_reparses_from_rendered_text() {
    let doc = parse_str(r#"mixed = [ "a", 1, true ]"#).unwrap();
    let original = &doc.attribute("mixed").unwrap().value;

    let rendered = original.to_necl();
    assert_eq!(rendered, r#"["a", 1, true]"#);

    let again = parse_str(&format!("mixed = {}", rendered)).unwrap();
    assert_eq!(&again.attribute("mixed").unwrap().value, original);
}

#[test]
fn test_scalars_reparse_from_rendered_text() {
    let doc = parse_str("f = 2.0\ns = 'say \"hi\"'\nb = false").unwrap();
    for name in ["f", "s", "b"] {
        let attr = doc.attribute(name).unwrap();
        let again = parse_str(&format!("{} = {}", name, attr.value.to_necl())).unwrap();
        assert_eq!(again.attribute(name), Some(attr), "{} did not survive", name);
    }
    assert_eq!(scalar(doc.attribute("f")), &Scalar::Float(2.0));
}

#[test]
fn test_block_content_on_opening_line_is_rejected() {
    let err = parse_str("x = 1\na { y = 1 }").unwrap_err();
    match err {
        NeclError::InlineBlockContent { ref name, ref content, line, .. } => {
            assert_eq!(name, "a");
            assert_eq!(content, "y = 1");
            assert_eq!(line, 2);
        }
        other => panic!("unexpected error: {:?}", other),
    }

    // an empty one-line block is still fine
    assert!(parse_str("a { }").unwrap().block("a").unwrap().attributes.is_empty());
}

#[test]
fn test_fractional_literal_operands_fail() {
    let err = parse_str("x = 2.9 * 2").unwrap_err();
    assert!(matches!(err, NeclError::UnknownAttributeReference { line: 1, .. }), "{:?}", err);

    let err = parse_str("x = 1.5 < 2").unwrap_err();
    assert!(matches!(err, NeclError::UnknownAttributeReference { line: 1, .. }), "{:?}", err);

    // float attributes still truncate in arithmetic
    let doc = parse_str("r = 2.9\nx = r * 2").unwrap();
    assert_eq!(scalar(doc.attribute("x")), &Scalar::Integer(4));
}

#[test]
fn test_integer_overflow_is_rejected() {
    let err = parse_str("big = 99999999999999999999").unwrap_err();
    assert!(matches!(err, NeclError::UnclassifiableValue { line: 1, .. }), "{:?}", err);

    let doc = parse_str("max = 9223372036854775807\nsci = 1e3").unwrap();
    assert_eq!(scalar(doc.attribute("max")), &Scalar::Integer(i64::MAX));
    assert_eq!(scalar(doc.attribute("sci")), &Scalar::Float(1000.0));
}
