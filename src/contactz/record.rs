//! # Records and the Record Registry
//!
//! A [`Record`] is one contact: a [`Name`], an ordered list of [`Phone`]s and an
//! optional [`Birthday`].
//!
//! ## One Record Per Name
//!
//! There is never more than one record for a given name. The
//! [`RecordRegistry`] owns that rule: [`RecordRegistry::get_or_create`] is the
//! only way to obtain a [`RecordRef`], and it hands back the already-registered
//! record when the name is known. Two handles for the same name are the same
//! record, so a phone added through one is visible through the other.
//!
//! The registry is a plain value owned by whoever drives the session (see
//! [`crate::commands::Contacts`]); it is not global, so independent sessions and
//! tests never see each other's records.

use crate::model::{Birthday, Field, Name, Phone};
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

/// Shared handle to a registered record.
pub type RecordRef = Rc<RefCell<Record>>;

#[derive(Debug)]
pub struct Record {
    name: Name,
    phones: Vec<Phone>,
    birthday: Option<Birthday>,
}

impl Record {
    fn new(name: Name) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Empty birthdays are stored as `None`.
    pub fn set_birthday(&mut self, birthday: Option<Birthday>) {
        self.birthday = birthday.filter(|b| !b.is_empty());
    }

    pub fn add_phone(&mut self, phone: Phone) {
        self.phones.push(phone);
    }

    /// Appends only when no equal phone is present. Returns whether it appended.
    pub fn add_phone_if_absent(&mut self, phone: Phone) -> bool {
        if self.has_phone(&phone) {
            return false;
        }
        self.phones.push(phone);
        true
    }

    pub fn has_phone(&self, phone: &Phone) -> bool {
        self.phones.contains(phone)
    }

    /// Removes the first phone equal to `phone`. Returns `false` if none matched.
    pub fn remove_phone(&mut self, phone: &Phone) -> bool {
        match self.phones.iter().position(|p| p == phone) {
            Some(pos) => {
                self.phones.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Replaces the first phone equal to `old` with `new`.
    pub fn change_phone(&mut self, old: &Phone, new: Phone) -> bool {
        match self.phones.iter_mut().find(|p| *p == old) {
            Some(slot) => {
                *slot = new;
                true
            }
            None => false,
        }
    }

    pub(crate) fn replace_phones(&mut self, phones: Vec<Phone>) {
        self.phones = phones;
    }

    pub fn phones_display(&self) -> String {
        self.phones
            .iter()
            .map(Field::value)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.phones_display())
    }
}

/// Name-keyed cache guaranteeing a single [`Record`] per name.
///
/// Records cannot be copied out of a handle, so there is no way to end up with
/// a second, detached record for a registered name:
///
/// ```compile_fail
/// use contactz::model::{Field, Name};
/// use contactz::record::{Record, RecordRegistry};
///
/// let mut registry = RecordRegistry::new();
/// let alice = registry.get_or_create(&Name::new("Alice"));
/// let detached: Record = Record::clone(&alice.borrow());
/// ```
#[derive(Debug, Default)]
pub struct RecordRegistry {
    records: HashMap<String, RecordRef>,
}

impl RecordRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the record registered under `name`, creating and registering an
    /// empty one on first use.
    pub fn get_or_create(&mut self, name: &Name) -> RecordRef {
        if let Some(existing) = self.records.get(name.value()) {
            return Rc::clone(existing);
        }
        tracing::debug!(name = %name, "registering new record");
        let record = Rc::new(RefCell::new(Record::new(name.clone())));
        self.records
            .insert(name.value().to_string(), Rc::clone(&record));
        record
    }

    pub fn get(&self, name: &str) -> Option<RecordRef> {
        self.records.get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    /// Drops the registry's handle for `name`. Outstanding handles stay valid,
    /// but the next `get_or_create` for that name builds a fresh record.
    pub fn evict(&mut self, name: &str) -> Option<RecordRef> {
        self.records.remove(name)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
