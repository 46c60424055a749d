//! # Command Layer
//!
//! One module per command. Each `run` function takes plain Rust values, works
//! on [`Contacts`] (and the [`BookStore`] where persistence is involved) and
//! returns a [`CmdResult`]: the messages to show and whether the session should
//! end. Nothing here prints or reads from the terminal.
//!
//! Failures that the operator can fix (a missing name or phone, an unknown
//! file) come back as [`ContactzError`] variants; turning them into the words
//! shown at the prompt is the dispatcher's job.

use crate::book::AddressBook;
use crate::config::ContactzConfig;
use crate::error::{ContactzError, Result};
use crate::model::{Field, Name, Phone};
use crate::record::{RecordRef, RecordRegistry};
use crate::store::BookStore;

pub mod add;
pub mod change;
pub mod clear;
pub mod greet;
pub mod list;
pub mod persist;
pub mod phones;
pub mod remove;

pub const GOOD_BYE: &str = "Good bye!";

/// The address book together with the registry its records come from.
#[derive(Debug, Default)]
pub struct Contacts {
    pub book: AddressBook,
    pub registry: RecordRegistry,
}

impl Contacts {
    pub fn new() -> Self {
        Self::default()
    }

    /// The record stored in the book under `name`.
    pub fn find(&self, name: &Name) -> Option<RecordRef> {
        self.book.search_by_name(name.value())
    }
}

/// Everything a handler may touch while running one command.
pub struct Session<'a> {
    pub contacts: &'a mut Contacts,
    pub store: &'a mut dyn BookStore,
    pub config: &'a ContactzConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CmdResult {
    pub messages: Vec<CmdMessage>,
    /// The session should stop after this result is shown.
    pub exit: bool,
}

impl CmdResult {
    pub fn message(message: CmdMessage) -> Self {
        Self {
            messages: vec![message],
            exit: false,
        }
    }

    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_exit(mut self) -> Self {
        self.exit = true;
        self
    }

    /// All message contents joined by newlines.
    pub fn text(&self) -> String {
        self.messages
            .iter()
            .map(|m| m.content.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

pub(crate) fn contact_not_found(name: &Name) -> CmdResult {
    tracing::warn!(name = %name, "contact not found");
    CmdResult::message(CmdMessage::warning(format!("Contact {} not found", name)))
}

pub(crate) fn phone_not_found(name: &Name, phone: &Phone) -> CmdResult {
    CmdResult::message(CmdMessage::warning(format!(
        "Phone {} not found for {}",
        phone, name
    )))
}

/// A usable contact name: non-empty after trimming.
pub fn validate_name(raw: &str) -> Result<Name> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ContactzError::MissingName);
    }
    Ok(Name::new(trimmed))
}

/// A usable phone: exactly ten digits.
pub fn validate_phone(raw: &str) -> Result<Phone> {
    let phone = Phone::new(raw.trim());
    if !phone.is_valid() {
        return Err(ContactzError::MissingPhone);
    }
    Ok(phone)
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct ContactsFixture {
        pub contacts: Contacts,
    }

    impl Default for ContactsFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl ContactsFixture {
        pub fn new() -> Self {
            Self {
                contacts: Contacts::new(),
            }
        }

        pub fn with_contact(mut self, name: &str, phones: &[&str]) -> Self {
            let record = self.contacts.registry.get_or_create(&Name::new(name));
            for phone in phones {
                record.borrow_mut().add_phone(Phone::new(*phone));
            }
            self.contacts.book.add_record(record);
            self
        }

        pub fn with_birthday(self, name: &str, birthday: &str) -> Self {
            if let Some(record) = self.contacts.book.search_by_name(name) {
                record
                    .borrow_mut()
                    .set_birthday(Some(crate::model::Birthday::new(birthday)));
            }
            self
        }

        pub fn phones_of(&self, name: &str) -> Option<String> {
            self.contacts
                .book
                .search_by_name(name)
                .map(|r| r.borrow().phones_display())
        }
    }
}
