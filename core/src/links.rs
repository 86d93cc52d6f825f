#![deny(missing_docs)]

//! # Link Rewriter
//!
//! Replaces one URL with another inside every `description` string of a JSON
//! document and counts the replacements.

use crate::error::AppResult;
use crate::walk::fold_descriptions;
use regex::{NoExpand, Regex};
use serde_json::Value;

/// Rewrites occurrences of a literal URL.
#[derive(Debug, Clone)]
pub struct LinkRewriter {
    pattern: Regex,
    replacement: String,
}

impl LinkRewriter {
    /// `old_url` is matched literally; `new_url` is inserted verbatim.
    pub fn new(old_url: &str, new_url: &str) -> AppResult<Self> {
        Ok(Self {
            pattern: Regex::new(&regex::escape(old_url))?,
            replacement: new_url.to_string(),
        })
    }

    /// Rewrites one string and returns it with the number of replacements.
    pub fn rewrite(&self, text: &str) -> (String, usize) {
        let count = self.pattern.find_iter(text).count();
        if count == 0 {
            return (text.to_string(), 0);
        }
        let replaced = self
            .pattern
            .replace_all(text, NoExpand(&self.replacement))
            .into_owned();
        (replaced, count)
    }

    /// Rewrites every `description` string in `value` and returns the total count.
    pub fn replace_links(&self, value: &Value) -> (Value, usize) {
        fold_descriptions(value, |text, total: &mut usize| {
            let (replaced, count) = self.rewrite(text);
            *total += count;
            replaced
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_replace_then_replace_again() {
        let rewriter = LinkRewriter::new("https://old.example/", "https://new.example/").unwrap();
        let doc = json!({ "description": "see https://old.example/x and https://old.example/y" });

        let (once, count) = rewriter.replace_links(&doc);
        assert_eq!(count, 2);
        assert_eq!(
            once,
            json!({ "description": "see https://new.example/x and https://new.example/y" })
        );

        let (twice, count) = rewriter.replace_links(&once);
        assert_eq!(count, 0);
        assert_eq!(twice, once);
    }

    #[test]
    fn test_only_description_fields_are_touched() {
        let rewriter = LinkRewriter::new("https://a.test", "https://b.test").unwrap();
        let doc = json!({
            "externalDocs": { "url": "https://a.test/docs" },
            "tags": [{ "description": "[docs](https://a.test/docs)" }]
        });

        let (out, count) = rewriter.replace_links(&doc);

        assert_eq!(count, 1);
        assert_eq!(out["externalDocs"]["url"], json!("https://a.test/docs"));
        assert_eq!(out["tags"][0]["description"], json!("[docs](https://b.test/docs)"));
    }

    #[test]
    fn test_url_is_matched_literally() {
        let rewriter = LinkRewriter::new("https://a.test/x?y=1", "https://b.test/$1").unwrap();

        assert_eq!(rewriter.rewrite("https://aXtest/x?y=1").1, 0);
        assert_eq!(
            rewriter.rewrite("go to https://a.test/x?y=1"),
            ("go to https://b.test/$1".to_string(), 1)
        );
    }
}
