//! # Storage Layer
//!
//! Persistence for the address book sits behind the [`BookStore`] trait so the
//! command layer never touches the filesystem directly.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, one JSON file per saved book
//!   - `save("work")` writes `<root>/work.json`
//!   - loading a name with no file yields [`ContactzError::FileNotFound`]
//!
//! - [`memory::InMemoryStore`]: keeps serialized books in a map, for tests
//!
//! Both stores deal in [`BookDocument`]s, the serialized shape of a book, and
//! both go through the JSON encoding so the on-disk format is exercised in
//! every test.
//!
//! [`ContactzError::FileNotFound`]: crate::error::ContactzError::FileNotFound

use crate::book::BookDocument;
use crate::error::Result;
use std::path::PathBuf;

pub mod fs;
pub mod memory;

/// Extension appended to every saved book name.
pub const BOOK_EXT: &str = "json";

/// Abstract interface for address book persistence.
pub trait BookStore {
    /// Persist `document` under `name`, returning where it went.
    fn save(&mut self, name: &str, document: &BookDocument) -> Result<PathBuf>;

    /// Read the document saved under `name`.
    fn load(&self, name: &str) -> Result<BookDocument>;

    /// Where a book called `name` lives (whether or not it exists yet).
    fn location(&self, name: &str) -> PathBuf;
}

pub(crate) fn book_filename(name: &str) -> String {
    format!("{}.{}", name, BOOK_EXT)
}
