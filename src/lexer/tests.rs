#[cfg(test)]
use super::*;

#[test]
fn test_full_line_comment_is_dropped() {
    assert_eq!(strip_comment("// a comment"), "");
    assert_eq!(strip_comment("    // indented = 3"), "");
}

#[test]
fn test_inline_comment_is_truncated() {
    assert_eq!(strip_comment("port = 80 // default"), "port = 80");
    assert_eq!(strip_comment("name = \"x\"//tight"), "name = \"x\"");
}

#[test]
fn test_comment_marker_inside_quotes_is_kept() {
    assert_eq!(
        strip_comment("url = \"http://example.com\" // home"),
        "url = \"http://example.com\""
    );
}

#[test]
fn test_strip_comments_preserves_line_count() {
    let lines = ["// header", "a = 1", "", "b = 2 // two"];
    let cleaned = strip_comments(&lines);
    assert_eq!(cleaned, vec!["", "a = 1", "", "b = 2"]);
}

#[test]
fn test_line_shapes() {
    assert_eq!(line_shape("   "), LineShape::Blank);
    assert_eq!(
        line_shape("server {"),
        LineShape::Open { name: "server", closed: false, body: "" }
    );
    assert_eq!(
        line_shape("  empty { }"),
        LineShape::Open { name: "empty", closed: true, body: "" }
    );
    assert_eq!(
        line_shape("a { y = 1 }"),
        LineShape::Open { name: "a", closed: true, body: "y = 1" }
    );
    assert_eq!(line_shape("}"), LineShape::Close);
    assert_eq!(line_shape("a = 1"), LineShape::Content);
    assert_eq!(line_shape("a = \"{not a block}\""), LineShape::Content);
}

#[test]
fn test_split_unquoted_respects_nesting_and_quotes() {
    assert_eq!(split_unquoted("1, 2 ,3", ','), vec!["1", " 2 ", "3"]);
    assert_eq!(split_unquoted("\"a,b\", c", ','), vec!["\"a,b\"", " c"]);
    assert_eq!(split_unquoted("[1,2], x", ','), vec!["[1,2]", " x"]);
    assert_eq!(split_unquoted("upper(\"a\"), 2", ','), vec!["upper(\"a\")", " 2"]);
}

#[test]
fn test_find_unquoted() {
    assert_eq!(find_unquoted("a '{' {", "{"), Some(6));
    assert_eq!(find_unquoted("\"}\"", "}"), None);
}
