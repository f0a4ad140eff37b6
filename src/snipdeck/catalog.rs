//! # Catalog Model
//!
//! The in-memory, ordered collection of snippets and the single source of truth
//! while the program runs. Every mutation goes through [`Catalog::add`] or
//! [`Catalog::remove`], which enforce the catalog invariants:
//!
//! - insertion order is preserved and is the display order within a category
//! - labels are unique across the *whole* catalog, not per category
//! - label and text are never empty
//!
//! Both the button layout and the selection lists are derived from
//! [`Catalog::list_by_category`], so the two can never disagree on ordering.

use crate::error::{Result, SnipError};
use crate::model::{Category, Snippet};
use std::collections::HashSet;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    snippets: Vec<Snippet>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog, dropping snippets that would break the invariants.
    pub fn from_snippets(snippets: Vec<Snippet>) -> Self {
        Self {
            snippets: admissible(snippets),
        }
    }

    /// Replaces the full contents, e.g. with the result of a store load.
    /// Ill-formed snippets and repeats of an earlier label are dropped.
    pub fn replace_all(&mut self, snippets: Vec<Snippet>) {
        self.snippets = admissible(snippets);
    }

    pub fn add(&mut self, label: &str, text: &str, category: Category) -> Result<()> {
        if label.is_empty() || text.is_empty() {
            return Err(SnipError::Validation("All fields are required.".to_string()));
        }
        if self.contains(label) {
            return Err(SnipError::Validation(format!(
                "A button labeled '{}' already exists.",
                label
            )));
        }

        self.snippets.push(Snippet::new(label, text, category));
        Ok(())
    }

    pub fn remove(&mut self, label: &str) -> Result<Snippet> {
        let pos = self
            .snippets
            .iter()
            .position(|s| s.label == label)
            .ok_or_else(|| SnipError::NotFound(label.to_string()))?;
        Ok(self.snippets.remove(pos))
    }

    pub fn get(&self, label: &str) -> Option<&Snippet> {
        self.snippets.iter().find(|s| s.label == label)
    }

    pub fn text_for(&self, label: &str) -> Option<&str> {
        self.get(label).map(|s| s.text.as_str())
    }

    pub fn contains(&self, label: &str) -> bool {
        self.get(label).is_some()
    }

    pub fn list_by_category(&self, category: Category) -> Vec<&Snippet> {
        self.snippets
            .iter()
            .filter(|s| s.category == category)
            .collect()
    }

    pub fn labels_by_category(&self, category: Category) -> Vec<String> {
        self.list_by_category(category)
            .into_iter()
            .map(|s| s.label.clone())
            .collect()
    }

    pub fn snippets(&self) -> &[Snippet] {
        &self.snippets
    }

    pub fn len(&self) -> usize {
        self.snippets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snippets.is_empty()
    }
}

fn admissible(snippets: Vec<Snippet>) -> Vec<Snippet> {
    let total = snippets.len();
    let mut seen = HashSet::new();
    let kept: Vec<Snippet> = snippets
        .into_iter()
        .filter(|s| s.is_well_formed() && seen.insert(s.label.clone()))
        .collect();

    if kept.len() < total {
        log::warn!(
            "Dropped {} empty or duplicate snippet(s) from catalog",
            total - kept.len()
        );
    }
    kept
}
