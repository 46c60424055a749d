//! Saving and loading the whole book through a [`BookStore`].

use super::{validate_name, CmdMessage, CmdResult, Contacts};
use crate::error::{ContactzError, Result};
use crate::store::BookStore;

/// Writes the book under `filename` (stored as `<filename>.json`).
pub fn save(store: &mut dyn BookStore, contacts: &Contacts, filename: &str) -> Result<CmdResult> {
    let filename = validate_filename(filename)?;
    let path = store.save(filename, &contacts.book.to_document())?;
    Ok(CmdResult::message(CmdMessage::success(format!(
        "Address book saved to {}",
        path.display()
    ))))
}

/// Reads `<filename>.json` and merges its contacts into the book.
pub fn load(store: &dyn BookStore, contacts: &mut Contacts, filename: &str) -> Result<CmdResult> {
    let filename = validate_filename(filename)?;
    let document = store.load(filename)?;
    let count = contacts
        .book
        .restore(&mut contacts.registry, document);
    Ok(CmdResult::message(CmdMessage::success(format!(
        "Address book loaded from {} ({} contacts)",
        store.location(filename).display(),
        count
    ))))
}

fn validate_filename(raw: &str) -> Result<&str> {
    let trimmed = raw.trim();
    validate_name(trimmed)?;
    if trimmed.contains(['/', '\\']) || trimmed.starts_with('.') {
        return Err(ContactzError::MissingName);
    }
    Ok(trimmed)
}
