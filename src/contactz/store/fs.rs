use super::{book_filename, BookStore};
use crate::book::BookDocument;
use crate::error::{ContactzError, Result};
use std::fs;
use std::io;
use std::path::PathBuf;

/// Stores each book as `<root>/<name>.json`.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(ContactzError::Io)?;
        }
        Ok(())
    }
}

impl BookStore for FileStore {
    fn save(&mut self, name: &str, document: &BookDocument) -> Result<PathBuf> {
        self.ensure_dir()?;
        let path = self.location(name);
        let content = document.to_json()?;
        fs::write(&path, content).map_err(ContactzError::Io)?;
        tracing::info!(path = %path.display(), contacts = document.len(), "saved address book");
        Ok(path)
    }

    fn load(&self, name: &str) -> Result<BookDocument> {
        let path = self.location(name);
        let content = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::warn!(path = %path.display(), "address book file not found");
                return Err(ContactzError::FileNotFound(path));
            }
            Err(e) => return Err(ContactzError::Io(e)),
        };
        let document = BookDocument::from_slice(&content)?;
        tracing::info!(path = %path.display(), contacts = document.len(), "loaded address book");
        Ok(document)
    }

    fn location(&self, name: &str) -> PathBuf {
        self.root.join(book_filename(name))
    }
}
