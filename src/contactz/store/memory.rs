use super::{book_filename, BookStore};
use crate::book::BookDocument;
use crate::error::{ContactzError, Result};
use std::collections::HashMap;
use std::path::PathBuf;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    books: HashMap<String, String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.books.contains_key(name)
    }

    /// Raw JSON saved under `name`.
    pub fn raw(&self, name: &str) -> Option<&str> {
        self.books.get(name).map(String::as_str)
    }

    pub fn insert_raw(&mut self, name: &str, json: impl Into<String>) {
        self.books.insert(name.to_string(), json.into());
    }
}

impl BookStore for InMemoryStore {
    fn save(&mut self, name: &str, document: &BookDocument) -> Result<PathBuf> {
        self.books.insert(name.to_string(), document.to_json()?);
        Ok(self.location(name))
    }

    fn load(&self, name: &str) -> Result<BookDocument> {
        let json = self
            .books
            .get(name)
            .ok_or_else(|| ContactzError::FileNotFound(self.location(name)))?;
        BookDocument::from_json(json)
    }

    fn location(&self, name: &str) -> PathBuf {
        PathBuf::from(book_filename(name))
    }
}
