// Author: Dustin Pilgrim
// License: MIT

use std::path::Path;

use serde_json::json;

use crate::ast::{Attribute, AttributeValue, Block, Document, Scalar};
use crate::config::NeclConfig;
use crate::NeclError;

/// Export a NECL document to JSON.
///
/// Attributes map to their plain JSON values:
/// - Strings, integers, floats, booleans → direct mapping
/// - Arrays → JSON arrays of the same
/// - Unevaluated conditional outcomes → their raw text
///
/// Blocks become nested `{"attributes": {...}, "blocks": {...}}` objects, and
/// the document itself has the same shape. Source order is preserved.
///
/// # Examples
/// ```no_run
/// use necl::{parse_str, export::export_document_to_json};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let doc = parse_str("replicas = 3")?;
/// println!("{}", export_document_to_json(&doc)?);
/// # Ok(())
/// # }
/// ```
pub fn export_document_to_json(doc: &Document) -> Result<String, NeclError> {
    serde_json::to_string_pretty(&document_to_value(doc)).map_err(|e| NeclError::ExportError {
        message: e.to_string(),
        hint: None,
    })
}

/// The JSON tree [`export_document_to_json`] renders.
pub fn document_to_value(doc: &Document) -> serde_json::Value {
    json!({
        "attributes": attributes_to_json(doc.attributes.values()),
        "blocks": blocks_to_json(doc.blocks.values()),
    })
}

/// Plain JSON for a single attribute value.
pub fn attribute_value_to_json(value: &AttributeValue) -> serde_json::Value {
    match value {
        AttributeValue::Scalar(s) => scalar_to_json(s),
        AttributeValue::Array(items) => json!(items.iter().map(scalar_to_json).collect::<Vec<_>>()),
    }
}

fn scalar_to_json(s: &Scalar) -> serde_json::Value {
    match s {
        Scalar::String(s) | Scalar::Expression(s) => json!(s),
        Scalar::Integer(n) => json!(n),
        // via the shortest decimal form so 0.1 stays 0.1 instead of 0.10000000149
        Scalar::Float(f) => f.to_string().parse::<f64>().map(|f| json!(f)).unwrap_or(serde_json::Value::Null),
        Scalar::Bool(b) => json!(b),
    }
}

fn attributes_to_json<'a>(attributes: impl Iterator<Item = &'a Attribute>) -> serde_json::Value {
    attributes
        .map(|a| (a.name.clone(), attribute_value_to_json(&a.value)))
        .collect::<serde_json::Map<_, _>>()
        .into()
}

/// A block in the same `{"attributes", "blocks"}` shape as the document.
pub fn block_to_value(block: &Block) -> serde_json::Value {
    json!({
        "attributes": attributes_to_json(block.attributes.values()),
        "blocks": blocks_to_json(block.blocks.values()),
    })
}

fn blocks_to_json<'a>(blocks: impl Iterator<Item = &'a Block>) -> serde_json::Value {
    blocks
        .map(|b| (b.name.clone(), block_to_value(b)))
        .collect::<serde_json::Map<_, _>>()
        .into()
}

/// Export a `.necl` file directly to JSON.
///
/// Convenience function that reads, parses, and exports in one call.
///
/// # Errors
/// Returns error if the path isn't a readable `.necl` file or the file
/// doesn't evaluate.
pub fn export_necl_file<P: AsRef<Path>>(path: P) -> Result<String, NeclError> {
    let config = NeclConfig::from_file(path)?;
    export_document_to_json(config.document())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_str;
    use std::fs;

    #[test]
    fn test_export_document_to_json() {
        let doc = parse_str(
            r#"
name = "demo"
ratio = 0.1
tags = ["a", 2, false]
outer {
    inner {
        deep = true
    }
    n = 1
}
"#,
        )
        .expect("Failed to parse");

        let json_output = export_document_to_json(&doc).expect("Failed to export document to JSON");
        println!("--- Exported JSON ---\n{}", json_output);

        let v: serde_json::Value = serde_json::from_str(&json_output).unwrap();
        assert_eq!(v["attributes"]["name"], "demo");
        assert_eq!(v["attributes"]["ratio"], 0.1);
        assert_eq!(v["attributes"]["tags"], json!(["a", 2, false]));
        assert_eq!(v["blocks"]["outer"]["attributes"]["n"], 1);
        assert_eq!(v["blocks"]["outer"]["blocks"]["inner"]["attributes"]["deep"], true);
    }

    #[test]
    fn test_export_keeps_order() {
        let doc = parse_str("z = 1\na = 2\nm = 3").unwrap();
        let v = document_to_value(&doc);
        let keys: Vec<&String> = v["attributes"].as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_export_expression_outcome_as_text() {
        let doc = parse_str("x = if true ? 1==1 : 2==2").unwrap();
        assert_eq!(document_to_value(&doc)["attributes"]["x"], "1==1");
    }

    #[test]
    fn test_export_necl_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("svc.necl");
        fs::write(&path, "service {\n  port = 80\n}\n").unwrap();

        let json_output = export_necl_file(&path).unwrap();
        let v: serde_json::Value = serde_json::from_str(&json_output).unwrap();
        assert_eq!(v["blocks"]["service"]["attributes"]["port"], 80);

        let err = export_necl_file(dir.path().join("svc.json")).unwrap_err();
        assert_eq!(err.code(), 100);
    }
}
