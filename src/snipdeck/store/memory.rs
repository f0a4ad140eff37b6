use super::CatalogStore;
use crate::error::{Result, SnipError};
use crate::model::Snippet;
use std::io;
use std::path::PathBuf;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    snippets: Vec<Snippet>,
    saves: usize,
    fail_next_save: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_snippets(snippets: Vec<Snippet>) -> Self {
        Self {
            snippets,
            ..Self::default()
        }
    }

    /// What a subsequent `load` would return.
    pub fn stored(&self) -> &[Snippet] {
        &self.snippets
    }

    /// Number of successful saves so far.
    pub fn save_count(&self) -> usize {
        self.saves
    }

    /// Makes the next `save` fail with a write error, leaving stored data untouched.
    pub fn fail_next_save(&mut self) {
        self.fail_next_save = true;
    }
}

impl CatalogStore for InMemoryStore {
    fn load(&self) -> Result<Vec<Snippet>> {
        Ok(self.snippets.clone())
    }

    fn save(&mut self, snippets: &[Snippet]) -> Result<()> {
        if self.fail_next_save {
            self.fail_next_save = false;
            return Err(SnipError::StoreWrite {
                path: PathBuf::from("memory"),
                source: io::Error::other("simulated write failure"),
            });
        }
        self.snippets = snippets.to_vec();
        self.saves += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::Category;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_snippets(mut self, count: usize, category: Category) -> Self {
            for i in 0..count {
                let label = format!("{} {}", category, i + 1);
                let text = format!("Text for {} {}", category, i + 1);
                self.store.snippets.push(Snippet::new(label, text, category));
            }
            self
        }

        pub fn with_snippet(mut self, label: &str, text: &str, category: Category) -> Self {
            self.store.snippets.push(Snippet::new(label, text, category));
            self
        }
    }
}
