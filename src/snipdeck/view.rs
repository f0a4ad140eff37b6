//! # View Synchronizer
//!
//! Pure functions from catalog state to an immutable description of what the
//! screen should show. Nothing here mutates the catalog or touches I/O; the
//! renderer receives a [`View`] and is free to diff or redraw however it likes.
//!
//! A [`View`] always carries both halves, the button [`Layout`] and the
//! [`SelectionLists`], computed from the same catalog snapshot. Renderers get
//! the pair or nothing.
//!
//! ## Rows
//!
//! Each category's buttons are chunked into rows of at most [`ROW_CAPACITY`]
//! entries, filled in catalog order. A new row starts exactly when the current
//! one is full, and an empty category has zero rows.
//!
//! ## Selection
//!
//! Every recomputation resets the selection of both lists to "nothing
//! selected". A previous selection is never carried over, since the label it
//! pointed at may be gone.

use crate::catalog::Catalog;
use crate::model::{Category, Snippet};

pub const ROW_CAPACITY: usize = 6;

/// One button: its caption and the text it copies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonEntry {
    pub label: String,
    pub text: String,
}

impl From<&Snippet> for ButtonEntry {
    fn from(snippet: &Snippet) -> Self {
        Self {
            label: snippet.label.clone(),
            text: snippet.text.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionLayout {
    pub category: Category,
    pub rows: Vec<Vec<ButtonEntry>>,
}

impl SectionLayout {
    pub fn entries(&self) -> impl Iterator<Item = &ButtonEntry> {
        self.rows.iter().flatten()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub offer: SectionLayout,
    pub price: SectionLayout,
}

impl Layout {
    pub fn section(&self, category: Category) -> &SectionLayout {
        match category {
            Category::Offer => &self.offer,
            Category::Price => &self.price,
        }
    }

    /// Sections in display order.
    pub fn sections(&self) -> [&SectionLayout; 2] {
        [&self.offer, &self.price]
    }
}

/// A read-only selector's contents plus its current selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionList {
    pub labels: Vec<String>,
    pub selected: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionLists {
    pub offer: SelectionList,
    pub price: SelectionList,
}

impl SelectionLists {
    pub fn list(&self, category: Category) -> &SelectionList {
        match category {
            Category::Offer => &self.offer,
            Category::Price => &self.price,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    pub layout: Layout,
    pub selections: SelectionLists,
}

pub fn build_view(catalog: &Catalog) -> View {
    View {
        layout: build_layout(catalog),
        selections: build_selection_lists(catalog),
    }
}

pub fn build_layout(catalog: &Catalog) -> Layout {
    Layout {
        offer: build_section(catalog, Category::Offer),
        price: build_section(catalog, Category::Price),
    }
}

fn build_section(catalog: &Catalog, category: Category) -> SectionLayout {
    let rows = catalog
        .list_by_category(category)
        .chunks(ROW_CAPACITY)
        .map(|chunk| chunk.iter().map(|s| ButtonEntry::from(*s)).collect())
        .collect();
    SectionLayout { category, rows }
}

pub fn build_selection_lists(catalog: &Catalog) -> SelectionLists {
    let list = |category| SelectionList {
        labels: catalog.labels_by_category(category),
        selected: None,
    };
    SelectionLists {
        offer: list(Category::Offer),
        price: list(Category::Price),
    }
}
