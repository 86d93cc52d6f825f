#![deny(missing_docs)]

//! # Configuration Overlay
//!
//! Deep-merges a site-specific JSON object into an OpenAPI document before it is
//! published.

use serde_json::Value;

/// Merges `overlay` into `target`.
///
/// Objects present on both sides merge key by key. Any other overlay value
/// replaces the target value. Keys missing from `target` are appended in
/// overlay order.
pub fn deep_merge(target: &mut Value, overlay: &Value) {
    match (target, overlay) {
        (Value::Object(base), Value::Object(extra)) => {
            for (key, value) in extra {
                match base.get_mut(key) {
                    Some(existing) => deep_merge(existing, value),
                    None => {
                        base.insert(key.clone(), value.clone());
                    }
                }
            }
        }
        (slot, value) => *slot = value.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_nested_objects_merge() {
        let mut doc = json!({
            "openapi": "3.0.2",
            "info": { "title": "Box Platform API", "version": "2025.0" },
            "servers": [{ "url": "https://api.box.com/2.0" }]
        });
        let overlay = json!({
            "info": { "x-mint": { "href": "/reference" } },
            "servers": [{ "url": "https://api.box.com/2.1" }],
            "x-mint": { "mcp": { "enabled": true } }
        });

        deep_merge(&mut doc, &overlay);

        assert_eq!(
            doc,
            json!({
                "openapi": "3.0.2",
                "info": {
                    "title": "Box Platform API",
                    "version": "2025.0",
                    "x-mint": { "href": "/reference" }
                },
                "servers": [{ "url": "https://api.box.com/2.1" }],
                "x-mint": { "mcp": { "enabled": true } }
            })
        );
    }

    #[test]
    fn test_scalar_replaces_object() {
        let mut doc = json!({ "a": { "b": 1 } });
        deep_merge(&mut doc, &json!({ "a": null }));
        assert_eq!(doc, json!({ "a": null }));
    }

    #[test]
    fn test_appended_keys_keep_overlay_order() {
        let mut doc: Value = serde_json::from_str(r#"{"openapi":"3.0.2"}"#).unwrap();
        deep_merge(&mut doc, &serde_json::from_str(r#"{"z":1,"a":2}"#).unwrap());
        assert_eq!(
            serde_json::to_string(&doc).unwrap(),
            r#"{"openapi":"3.0.2","z":1,"a":2}"#
        );
    }
}
