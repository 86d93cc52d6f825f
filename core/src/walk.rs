#![deny(missing_docs)]

//! # Description Walker
//!
//! Structural recursion over an untyped JSON document that rewrites every
//! string stored under a `description` key and threads an accumulator through
//! the walk. Arrays are visited element-wise and objects key by key in
//! document order. Everything else is copied unchanged.

use serde_json::{Map, Value};

/// Object key whose string values are rewritten.
pub const DESCRIPTION_KEY: &str = "description";

/// Rewrites every `description` string in `value`.
///
/// `f` receives the original text and the accumulator and returns the new text.
/// A `description` key holding a non-string value is walked like any other key.
pub fn rewrite_descriptions<A, F>(value: &Value, acc: &mut A, f: &mut F) -> Value
where
    F: FnMut(&str, &mut A) -> String,
{
    match value {
        Value::Object(map) => {
            let mut out = Map::with_capacity(map.len());
            for (key, child) in map {
                let rewritten = match child {
                    Value::String(text) if key == DESCRIPTION_KEY => Value::String(f(text, acc)),
                    _ => rewrite_descriptions(child, acc, f),
                };
                out.insert(key.clone(), rewritten);
            }
            Value::Object(out)
        }
        Value::Array(items) => Value::Array(
            items
                .iter()
                .map(|item| rewrite_descriptions(item, acc, f))
                .collect(),
        ),
        other => other.clone(),
    }
}

/// Like [`rewrite_descriptions`], starting from `A::default()` and returning the final accumulator.
pub fn fold_descriptions<A, F>(value: &Value, mut f: F) -> (Value, A)
where
    A: Default,
    F: FnMut(&str, &mut A) -> String,
{
    let mut acc = A::default();
    let rewritten = rewrite_descriptions(value, &mut acc, &mut f);
    (rewritten, acc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_only_description_strings_are_rewritten() {
        let doc = json!({
            "description": "top",
            "summary": "untouched",
            "paths": {
                "/files": {
                    "get": { "description": "nested", "operationId": "get_files" }
                }
            },
            "tags": [
                { "name": "Files", "description": "in array" },
                "description"
            ],
            "count": 3,
            "flag": null
        });

        let (out, visited): (Value, usize) = fold_descriptions(&doc, |text, n: &mut usize| {
            *n += 1;
            text.to_uppercase()
        });

        assert_eq!(visited, 3);
        assert_eq!(
            out,
            json!({
                "description": "TOP",
                "summary": "untouched",
                "paths": {
                    "/files": {
                        "get": { "description": "NESTED", "operationId": "get_files" }
                    }
                },
                "tags": [
                    { "name": "Files", "description": "IN ARRAY" },
                    "description"
                ],
                "count": 3,
                "flag": null
            })
        );
    }

    #[test]
    fn test_description_property_schema_is_walked() {
        // A schema property literally named "description" holds an object.
        let doc = json!({
            "properties": {
                "description": { "type": "string", "description": "The item description" }
            }
        });

        let (out, visited): (Value, usize) = fold_descriptions(&doc, |text, n: &mut usize| {
            *n += 1;
            format!("{}!", text)
        });

        assert_eq!(visited, 1);
        assert_eq!(
            out["properties"]["description"]["description"],
            json!("The item description!")
        );
    }

    #[test]
    fn test_key_order_is_preserved() {
        let doc: Value = serde_json::from_str(r#"{"z":1,"description":"d","a":2}"#).unwrap();
        let (out, _): (Value, ()) = fold_descriptions(&doc, |text, _| text.to_string());
        assert_eq!(
            serde_json::to_string(&out).unwrap(),
            r#"{"z":1,"description":"d","a":2}"#
        );
    }
}
