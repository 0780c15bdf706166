//! Generic in-memory list editor backing the admin content screens.
//!
//! DESIGN
//! ======
//! One editor abstraction serves every content family instead of one
//! hand-rolled manager per screen. The source of truth is a plain `Vec`
//! seeded from fixtures; operations are synchronous and infallible, and
//! nothing is persisted, so a page reload always restores the seed data.

#[cfg(test)]
#[path = "editor_test.rs"]
mod editor_test;

/// A record that can live in a [`ListEditor`].
pub trait Record: Clone {
    /// Identifier within the list (fixture-assigned or timestamp-generated).
    fn id(&self) -> &str;

    /// Text fields matched by the admin search filter.
    fn search_text(&self) -> Vec<&str>;
}

/// In-memory list state with the add/edit/delete/search operations shared by
/// every admin content screen.
#[derive(Clone, Debug, PartialEq)]
pub struct ListEditor<T: Record> {
    items: Vec<T>,
}

impl<T: Record> Default for ListEditor<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Record> ListEditor<T> {
    /// Build an editor seeded from fixture data.
    #[must_use]
    pub fn seeded(items: Vec<T>) -> Self {
        Self { items }
    }

    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&T> {
        self.items.iter().find(|record| record.id() == id)
    }

    /// Insert a new record at the front of the list (newest first).
    pub fn add(&mut self, record: T) {
        self.items.insert(0, record);
    }

    /// Apply `patch` to the record matching `id`.
    ///
    /// Returns `false` when no record matches; the list is left untouched.
    pub fn update(&mut self, id: &str, patch: impl FnOnce(&mut T)) -> bool {
        match self.items.iter_mut().find(|record| record.id() == id) {
            Some(record) => {
                patch(record);
                true
            }
            None => false,
        }
    }

    /// Remove the record matching `id`, leaving all others untouched.
    ///
    /// Returns `false` when no record matches. Callers are expected to gate
    /// this behind a confirm dialog; the removal itself never blocks.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|record| record.id() != id);
        self.items.len() != before
    }

    /// Case-insensitive substring filter over each record's `search_text`.
    ///
    /// An empty or whitespace-only query returns the whole list. Recomputed
    /// on every keystroke; there is no debouncing to coordinate with.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&T> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.items.iter().collect();
        }
        self.items
            .iter()
            .filter(|record| {
                record
                    .search_text()
                    .iter()
                    .any(|field| field.to_lowercase().contains(&needle))
            })
            .collect()
    }
}
