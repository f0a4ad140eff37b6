//! # Storage Layer
//!
//! The catalog is persisted as one JSON document:
//!
//! ```text
//! { "buttons": [ { "label": "...", "text": "...", "type": "offer" | "price" }, ... ] }
//! ```
//!
//! The [`CatalogStore`] trait always moves the *whole* catalog. There are no
//! incremental writes, so a failed save can never leave the file describing a
//! state the program never had.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production store, one JSON file, atomic replace on save
//! - [`memory::InMemoryStore`]: no persistence, used by tests
//!
//! ## Lenient loading
//!
//! Decoding happens record by record in [`decode_document`]. A record that is
//! missing `label`, `text` or a valid `type`, or that has an empty label or
//! text, is dropped. So is a record whose label was already seen. Unknown
//! fields are ignored. Only a document that is not JSON at all, or lacks the
//! `buttons` array, is reported as [`SnipError::StoreRead`].

use crate::error::{Result, SnipError};
use crate::model::{Category, Snippet};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

pub mod fs;
pub mod memory;

/// Durable read/write of the full catalog.
pub trait CatalogStore {
    /// Load every valid snippet, in stored order.
    /// A missing backing file is an empty catalog, not an error.
    fn load(&self) -> Result<Vec<Snippet>>;

    /// Overwrite the stored catalog with `snippets`.
    fn save(&mut self, snippets: &[Snippet]) -> Result<()>;
}

#[derive(Serialize)]
struct DocumentOut<'a> {
    buttons: &'a [Snippet],
}

#[derive(Deserialize)]
struct DocumentIn {
    buttons: Vec<serde_json::Value>,
}

#[derive(Deserialize)]
struct RawRecord {
    label: Option<String>,
    text: Option<String>,
    #[serde(rename = "type")]
    kind: Option<String>,
}

impl RawRecord {
    fn into_snippet(self) -> Option<Snippet> {
        let category: Category = self.kind?.parse().ok()?;
        let snippet = Snippet::new(self.label?, self.text?, category);
        snippet.is_well_formed().then_some(snippet)
    }
}

pub fn encode_document(snippets: &[Snippet]) -> Result<String> {
    serde_json::to_string_pretty(&DocumentOut { buttons: snippets }).map_err(SnipError::from)
}

pub fn decode_document(content: &str, origin: &Path) -> Result<Vec<Snippet>> {
    let doc: DocumentIn = serde_json::from_str(content).map_err(|e| SnipError::StoreRead {
        path: origin.to_path_buf(),
        reason: e.to_string(),
    })?;

    let total = doc.buttons.len();
    let mut seen = HashSet::new();
    let snippets: Vec<Snippet> = doc
        .buttons
        .into_iter()
        .filter_map(|value| serde_json::from_value::<RawRecord>(value).ok())
        .filter_map(RawRecord::into_snippet)
        .filter(|s| seen.insert(s.label.clone()))
        .collect();

    if snippets.len() < total {
        log::warn!(
            "Dropped {} invalid or duplicate record(s) from {}",
            total - snippets.len(),
            origin.display()
        );
    }
    Ok(snippets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn decode(content: &str) -> Result<Vec<Snippet>> {
        decode_document(content, &PathBuf::from("buttons.json"))
    }

    #[test]
    fn drops_record_missing_text() {
        let content = r#"{"buttons": [
            {"label": "50% off", "text": "CODE50", "type": "offer"},
            {"label": "broken", "type": "offer"}
        ]}"#;
        let snippets = decode(content).unwrap();
        assert_eq!(
            snippets,
            vec![Snippet::new("50% off", "CODE50", Category::Offer)]
        );
    }

    #[test]
    fn drops_unknown_type_and_wrongly_typed_fields() {
        let content = r#"{"buttons": [
            {"label": "a", "text": "1", "type": "discount"},
            {"label": 7, "text": "2", "type": "price"},
            {"label": "", "text": "3", "type": "price"},
            {"label": "ok", "text": "4", "type": "price"}
        ]}"#;
        let snippets = decode(content).unwrap();
        assert_eq!(snippets, vec![Snippet::new("ok", "4", Category::Price)]);
    }

    #[test]
    fn ignores_unknown_fields() {
        let content = r#"{"version": 2, "buttons": [
            {"label": "a", "text": "1", "type": "offer", "color": "red"}
        ]}"#;
        assert_eq!(decode(content).unwrap().len(), 1);
    }

    #[test]
    fn keeps_first_of_duplicate_labels() {
        let content = r#"{"buttons": [
            {"label": "a", "text": "first", "type": "offer"},
            {"label": "a", "text": "second", "type": "price"}
        ]}"#;
        let snippets = decode(content).unwrap();
        assert_eq!(snippets, vec![Snippet::new("a", "first", Category::Offer)]);
    }

    #[test]
    fn malformed_document_is_store_read_error() {
        assert!(matches!(
            decode("not json"),
            Err(SnipError::StoreRead { .. })
        ));
        assert!(matches!(
            decode(r#"{"items": []}"#),
            Err(SnipError::StoreRead { .. })
        ));
    }

    #[test]
    fn encoded_document_uses_buttons_and_type_keys() {
        let snippets = vec![Snippet::new("x", "y", Category::Price)];
        let value: serde_json::Value =
            serde_json::from_str(&encode_document(&snippets).unwrap()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"buttons": [{"label": "x", "text": "y", "type": "price"}]})
        );
    }
}
