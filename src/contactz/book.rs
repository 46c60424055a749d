//! # Address Book
//!
//! The [`AddressBook`] maps contact names to their [`RecordRef`]s. It does not
//! create records itself: anything it stores came from a
//! [`RecordRegistry`](crate::record::RecordRegistry), so the one-record-per-name
//! rule holds for whatever the book holds.
//!
//! ## Persisted Format
//!
//! [`BookDocument`] is the serialized shape of a book: a JSON object keyed by
//! contact name, each value holding the phone list and the birthday string.
//!
//! ```json
//! {
//!   "Alice": { "phones": ["1234567890"], "birthday": "1990-01-01" },
//!   "Bob": { "phones": [], "birthday": "" }
//! }
//! ```
//!
//! A missing `birthday` reads back as `""`, a missing `phones` as `[]`.

use crate::error::{ContactzError, Result};
use crate::model::{Birthday, Field, Phone};
use crate::record::{RecordRef, RecordRegistry};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;
use unicode_width::UnicodeWidthStr;

/// Width of the name column in the rendered table.
pub const NAME_COLUMN_WIDTH: usize = 20;
pub const EMPTY_BOOK: &str = "Book is empty";

#[derive(Debug, Default)]
pub struct AddressBook {
    entries: BTreeMap<String, RecordRef>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `record` under its name, replacing any previous entry.
    pub fn add_record(&mut self, record: RecordRef) {
        let name = record.borrow().name().value().to_string();
        self.entries.insert(name, record);
    }

    pub fn remove_record(&mut self, name: &str) -> Result<RecordRef> {
        self.entries
            .remove(name)
            .ok_or_else(|| ContactzError::ContactNotFound(name.to_string()))
    }

    pub fn search_by_name(&self, name: &str) -> Option<RecordRef> {
        self.entries.get(name).map(Rc::clone)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RecordRef)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn to_document(&self) -> BookDocument {
        let contacts = self
            .entries
            .iter()
            .map(|(name, record)| {
                let record = record.borrow();
                let entry = ContactEntry {
                    phones: record.phones().iter().map(|p| p.value().to_string()).collect(),
                    birthday: record
                        .birthday()
                        .map(|b| b.value().to_string())
                        .unwrap_or_default(),
                };
                (name.clone(), entry)
            })
            .collect();
        BookDocument { contacts }
    }

    pub fn serialize(&self) -> Result<String> {
        self.to_document().to_json()
    }

    /// Builds a new book from serialized bytes, resolving every contact through
    /// `registry`.
    pub fn deserialize(bytes: &[u8], registry: &mut RecordRegistry) -> Result<Self> {
        let document = BookDocument::from_slice(bytes)?;
        let mut book = Self::new();
        book.restore(registry, document);
        Ok(book)
    }

    /// Merges `document` into this book. Each listed contact gets the phones and
    /// birthday from the document; contacts not listed are left alone.
    pub fn restore(&mut self, registry: &mut RecordRegistry, document: BookDocument) -> usize {
        let count = document.contacts.len();
        for (name, entry) in document.contacts {
            let record = registry.get_or_create(&name.as_str().into());
            {
                let mut record = record.borrow_mut();
                record.replace_phones(entry.phones.into_iter().map(Phone::new).collect());
                record.set_birthday(Some(Birthday::new(entry.birthday)));
            }
            self.add_record(record);
        }
        count
    }
}

impl fmt::Display for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.entries.is_empty() {
            return f.write_str(EMPTY_BOOK);
        }

        writeln!(f, "{} | Phones", pad_to_width("Name", NAME_COLUMN_WIDTH))?;
        write!(f, "{}-+-{}", "-".repeat(NAME_COLUMN_WIDTH), "-".repeat(NAME_COLUMN_WIDTH))?;
        for (name, record) in &self.entries {
            write!(
                f,
                "\n{} | {}",
                pad_to_width(name, NAME_COLUMN_WIDTH),
                record.borrow().phones_display()
            )?;
        }
        Ok(())
    }
}

fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}

/// Serialized form of an [`AddressBook`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookDocument {
    pub contacts: BTreeMap<String, ContactEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactEntry {
    #[serde(default)]
    pub phones: Vec<String>,
    #[serde(default)]
    pub birthday: String,
}

impl BookDocument {
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(ContactzError::Serialization)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(ContactzError::Serialization)
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        serde_json::from_slice(bytes).map_err(ContactzError::Serialization)
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }
}
