//! # Controller
//!
//! Orchestrates user intents against the catalog, the store and the shell. It
//! is the only component that talks to both the model and persistence.
//!
//! Every handler is one transaction:
//!
//! ```text
//! validate → mutate or reject → persist → resynchronize the view
//! ```
//!
//! If the save fails the catalog is restored to its pre-mutation snapshot, so
//! memory and disk never disagree, and the user is told. Nothing here returns
//! an error: catalog problems become notifications and an [`Outcome`].

use crate::catalog::Catalog;
use crate::error::SnipError;
use crate::model::Category;
use crate::shell::Shell;
use crate::store::CatalogStore;
use crate::view::{build_view, View};

pub const ADD_LABEL_TITLE: &str = "Button label";
pub const ADD_TEXT_TITLE: &str = "Text to copy";
pub const MISSING_FIELDS: &str = "All fields are required.";
pub const SELECT_FIRST: &str = "Select a button to remove.";

/// What a handler ended up doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Added(String),
    Removed(String),
    Copied(String),
    /// The user declined a confirmation.
    Cancelled,
    /// Remove was requested with no label selected.
    NothingSelected,
    /// Input failed validation or named a missing snippet. Nothing changed.
    Rejected(String),
    /// The mutation was rolled back because it could not be persisted.
    SaveFailed(String),
    CopyFailed(String),
}

pub struct Controller<S: CatalogStore, H: Shell> {
    catalog: Catalog,
    store: S,
    shell: H,
}

impl<S: CatalogStore, H: Shell> Controller<S, H> {
    pub fn new(store: S, shell: H) -> Self {
        Self {
            catalog: Catalog::new(),
            store,
            shell,
        }
    }

    /// Loads the catalog, replacing any prior state, and draws it once.
    /// An unreadable store yields an empty catalog.
    pub fn startup(&mut self) {
        let snippets = match self.store.load() {
            Ok(snippets) => snippets,
            Err(e) => {
                log::warn!("{}; starting with an empty catalog", e);
                Vec::new()
            }
        };
        self.catalog.replace_all(snippets);
        self.sync();
    }

    pub fn handle_add(&mut self, category: Category) -> Outcome {
        let label = self
            .shell
            .ask_string(ADD_LABEL_TITLE, "Enter the button's caption:");
        let text = self
            .shell
            .ask_string(ADD_TEXT_TITLE, "Enter the text that will be copied:");

        let (label, text) = match (label, text) {
            (Some(l), Some(t)) if !l.is_empty() && !t.is_empty() => (l, t),
            _ => return self.reject(MISSING_FIELDS.to_string()),
        };

        let snapshot = self.catalog.clone();
        if let Err(e) = self.catalog.add(&label, &text, category) {
            return self.reject(e.to_string());
        }
        if let Err(outcome) = self.persist(snapshot) {
            return outcome;
        }

        log::info!("Added {} button '{}'", category, label);
        self.sync();
        Outcome::Added(label)
    }

    /// `selected` is the label currently chosen in `category`'s selector.
    pub fn handle_remove(&mut self, category: Category, selected: Option<&str>) -> Outcome {
        let label = match selected {
            Some(l) if !l.is_empty() => l.to_string(),
            _ => {
                self.shell.info("Select a button", SELECT_FIRST);
                return Outcome::NothingSelected;
            }
        };

        let in_category = self
            .catalog
            .get(&label)
            .is_some_and(|s| s.category == category);
        if !in_category {
            return self.reject(SnipError::NotFound(label).to_string());
        }

        let question = format!("Are you sure you want to remove the button '{}'?", label);
        if !self.shell.confirm("Confirm removal", &question) {
            return Outcome::Cancelled;
        }

        let snapshot = self.catalog.clone();
        if let Err(e) = self.catalog.remove(&label) {
            return self.reject(e.to_string());
        }
        if let Err(outcome) = self.persist(snapshot) {
            return outcome;
        }

        log::info!("Removed {} button '{}'", category, label);
        self.sync();
        self.shell
            .info("Removed", &format!("Button '{}' has been removed.", label));
        Outcome::Removed(label)
    }

    /// Copies the snippet's text. Never mutates or persists.
    pub fn handle_copy(&mut self, label: &str) -> Outcome {
        let Some(text) = self.catalog.text_for(label).map(str::to_string) else {
            return self.reject(SnipError::NotFound(label.to_string()).to_string());
        };

        match self.shell.copy(&text) {
            Ok(()) => Outcome::Copied(label.to_string()),
            Err(e) => {
                let message = e.to_string();
                self.shell.error("Error", &message);
                Outcome::CopyFailed(message)
            }
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn view(&self) -> View {
        build_view(&self.catalog)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn shell(&self) -> &H {
        &self.shell
    }

    pub fn shell_mut(&mut self) -> &mut H {
        &mut self.shell
    }

    fn sync(&mut self) {
        let view = build_view(&self.catalog);
        self.shell.render(&view);
    }

    fn reject(&mut self, message: String) -> Outcome {
        self.shell.error("Error", &message);
        Outcome::Rejected(message)
    }

    fn persist(&mut self, snapshot: Catalog) -> Result<(), Outcome> {
        match self.store.save(self.catalog.snippets()) {
            Ok(()) => Ok(()),
            Err(e) => {
                log::warn!("Rolling back catalog change: {}", e);
                self.catalog = snapshot;
                let message = e.to_string();
                self.shell.error("Save failed", &message);
                Err(Outcome::SaveFailed(message))
            }
        }
    }
}
