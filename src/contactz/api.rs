//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for any UI: the prompt loop in `cli/` uses it, and so could a
//! test harness or another front end.
//!
//! [`ContactzApi`] owns the session state (the address book, the record
//! registry, the configuration) and the persistence backend. It offers:
//!
//! - [`ContactzApi::execute`]: parse one line of free text and dispatch it, the
//!   way the interactive prompt does
//! - typed methods (`add_contact`, `change_phone`, ...) that skip parsing and
//!   return `Result<CmdResult>` with the raw error, for callers that want to
//!   handle failures themselves
//!
//! ## Generic Over BookStore
//!
//! - Production: `ContactzApi<FileStore>`
//! - Testing: `ContactzApi<InMemoryStore>`

use crate::commands::{self, CmdResult, Contacts, Session};
use crate::config::ContactzConfig;
use crate::dispatch::Dispatcher;
use crate::error::Result;
use crate::parser::{CommandParser, ParseOutcome};
use crate::store::BookStore;

pub struct ContactzApi<S: BookStore> {
    store: S,
    contacts: Contacts,
    config: ContactzConfig,
    dispatcher: Dispatcher,
    parser: CommandParser,
}

impl<S: BookStore> ContactzApi<S> {
    pub fn new(store: S, config: ContactzConfig) -> Self {
        Self {
            store,
            contacts: Contacts::new(),
            config,
            dispatcher: Dispatcher::new(),
            parser: CommandParser::default(),
        }
    }

    /// Parses and runs one line of input. Never fails: handler errors come back
    /// as error messages in the result.
    pub fn execute(&mut self, line: &str) -> CmdResult {
        let outcome = self.parser.parse(line);
        self.dispatch(&outcome)
    }

    pub fn dispatch(&mut self, outcome: &ParseOutcome) -> CmdResult {
        let mut session = Session {
            contacts: &mut self.contacts,
            store: &mut self.store,
            config: &self.config,
        };
        self.dispatcher.dispatch(&mut session, outcome)
    }

    pub fn add_contact(&mut self, name: &str, phone: &str) -> Result<CmdResult> {
        commands::add::run(
            &mut self.contacts,
            name,
            phone,
            self.config.allow_duplicate_phones,
        )
    }

    pub fn change_phone(&mut self, name: &str, old: &str, new: &str) -> Result<CmdResult> {
        commands::change::run(&mut self.contacts, name, old, new)
    }

    pub fn phones(&self, name: &str) -> Result<CmdResult> {
        commands::phones::run(&self.contacts, name)
    }

    pub fn show_all(&self) -> Result<CmdResult> {
        commands::list::run(&self.contacts)
    }

    pub fn remove_contact(&mut self, name: &str) -> Result<CmdResult> {
        commands::remove::run(&mut self.contacts, name)
    }

    pub fn clear_number(&mut self, name: &str, phone: &str) -> Result<CmdResult> {
        commands::clear::run(&mut self.contacts, name, phone)
    }

    pub fn save(&mut self, filename: &str) -> Result<CmdResult> {
        commands::persist::save(&mut self.store, &self.contacts, filename)
    }

    pub fn load(&mut self, filename: &str) -> Result<CmdResult> {
        commands::persist::load(&self.store, &mut self.contacts, filename)
    }

    pub fn contacts(&self) -> &Contacts {
        &self.contacts
    }

    pub fn config(&self) -> &ContactzConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

pub use crate::commands::{CmdMessage, MessageLevel, GOOD_BYE};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ContactzError;
    use crate::store::memory::InMemoryStore;

    fn api() -> ContactzApi<InMemoryStore> {
        ContactzApi::new(InMemoryStore::new(), ContactzConfig::default())
    }

    #[test]
    fn execute_parses_and_dispatches() {
        let mut api = api();
        let result = api.execute("add Alice 1234567890");
        assert_eq!(result.messages[0].level, MessageLevel::Success);
        assert!(api.contacts().book.contains("Alice"));
    }

    #[test]
    fn execute_reports_undefined_commands() {
        let mut api = api();
        assert_eq!(api.execute("sing").text(), "What do you mean?");
    }

    #[test]
    fn typed_methods_return_raw_errors() {
        let mut api = api();
        assert!(matches!(
            api.add_contact("Alice", "123"),
            Err(ContactzError::MissingPhone)
        ));
        assert!(matches!(api.load("nothing"), Err(ContactzError::FileNotFound(_))));
    }

    #[test]
    fn typed_methods_share_state_with_execute() {
        let mut api = api();
        api.add_contact("Alice", "1234567890").unwrap();
        api.change_phone("Alice", "1234567890", "1111111111").unwrap();
        assert_eq!(api.execute("phones Alice").text(), "Alice: 1111111111");

        api.clear_number("Alice", "1111111111").unwrap();
        assert_eq!(api.phones("Alice").unwrap().text(), "Alice has no phones");

        api.save("backup").unwrap();
        assert!(api.store().contains("backup"));

        api.remove_contact("Alice").unwrap();
        assert_eq!(api.show_all().unwrap().text(), "Book is empty");

        api.load("backup").unwrap();
        assert!(api.contacts().book.contains("Alice"));
    }

    #[test]
    fn same_name_is_one_record_across_commands() {
        let mut api = api();
        api.execute("add Alice 1234567890");
        let first = api.contacts().book.search_by_name("Alice").unwrap();
        api.execute("add Alice 0987654321");
        let second = api.contacts().book.search_by_name("Alice").unwrap();
        assert!(std::rc::Rc::ptr_eq(&first, &second));
        assert_eq!(first.borrow().phones().len(), 2);
    }
}
