//! # Command Dispatcher
//!
//! Maps a parsed keyword to its handler and turns handler failures into the
//! messages shown at the prompt.
//!
//! Only three failures are expected from an operator and get a fixed reply:
//!
//! | Error | Reply |
//! |-------|-------|
//! | [`ContactzError::MissingName`] | `Give me a name, please` |
//! | [`ContactzError::MissingPhone`] | `Give me a phone, please` |
//! | [`ContactzError::FileNotFound`] | `File not found` |
//!
//! Anything else (unreadable file, bad JSON, a failed write) is logged and
//! reported as an error message. It ends the command, never the session.

use crate::commands::{self, CmdMessage, CmdResult, Session};
use crate::error::{ContactzError, Result};
use crate::parser::{CommandArgs, ParseOutcome, QUIT};
use std::collections::HashMap;

pub const MISSING_NAME: &str = "Give me a name, please";
pub const MISSING_PHONE: &str = "Give me a phone, please";
pub const FILE_NOT_FOUND: &str = "File not found";

/// Every keyword the dispatcher knows, `.` included.
pub const KEYWORDS: &[&str] = &[
    "hello",
    "add",
    "change",
    "phones",
    "phone",
    "show all",
    "remove",
    "clear number",
    "good bye",
    "close",
    "exit",
    "save",
    "load",
    QUIT,
];

pub type Handler = fn(&mut Session<'_>, &CommandArgs) -> Result<CmdResult>;

pub struct Dispatcher {
    handlers: HashMap<&'static str, Handler>,
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Dispatcher {
    pub fn new() -> Self {
        let mut handlers: HashMap<&'static str, Handler> = HashMap::new();
        handlers.insert("hello", hello);
        handlers.insert("add", add);
        handlers.insert("change", change);
        handlers.insert("phones", phones);
        handlers.insert("phone", phones);
        handlers.insert("show all", show_all);
        handlers.insert("remove", remove);
        handlers.insert("clear number", clear_number);
        handlers.insert("good bye", good_bye);
        handlers.insert("close", good_bye);
        handlers.insert("exit", good_bye);
        handlers.insert("save", save);
        handlers.insert("load", load);
        handlers.insert(QUIT, quit);
        Self { handlers }
    }

    pub fn keywords(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.handlers.keys().copied()
    }

    /// The handler for `command`, or the fallback for unknown/absent commands.
    pub fn resolve(&self, command: Option<&str>) -> Handler {
        command
            .and_then(|c| self.handlers.get(c).copied())
            .unwrap_or(undefined)
    }

    pub fn dispatch(&self, session: &mut Session<'_>, outcome: &ParseOutcome) -> CmdResult {
        let handler = self.resolve(outcome.command());
        let args = match outcome {
            ParseOutcome::Parsed(parsed) => parsed.args.clone(),
            ParseOutcome::NoMatch => CommandArgs::default(),
        };
        tracing::debug!(command = ?outcome.command(), "dispatching");
        handler(session, &args).unwrap_or_else(|e| translate_error(&e))
    }
}

/// Converts a handler failure into what the operator sees.
pub fn translate_error(error: &ContactzError) -> CmdResult {
    let message = match error {
        ContactzError::MissingName => CmdMessage::error(MISSING_NAME),
        ContactzError::MissingPhone => CmdMessage::error(MISSING_PHONE),
        ContactzError::FileNotFound(_) => CmdMessage::error(FILE_NOT_FOUND),
        other => {
            tracing::error!(error = %other, "command failed");
            CmdMessage::error(format!("Error: {}", other))
        }
    };
    CmdResult::message(message)
}

fn require(arg: &Option<String>, missing: ContactzError) -> Result<&str> {
    arg.as_deref().ok_or(missing)
}

fn name_arg(args: &CommandArgs) -> Result<&str> {
    require(&args.name, ContactzError::MissingName)
}

fn phone_arg(args: &CommandArgs) -> Result<&str> {
    require(&args.phone, ContactzError::MissingPhone)
}

fn hello(_: &mut Session<'_>, _: &CommandArgs) -> Result<CmdResult> {
    Ok(commands::greet::hello())
}

fn good_bye(_: &mut Session<'_>, _: &CommandArgs) -> Result<CmdResult> {
    Ok(commands::greet::good_bye())
}

fn quit(_: &mut Session<'_>, _: &CommandArgs) -> Result<CmdResult> {
    Ok(commands::greet::quit())
}

fn undefined(_: &mut Session<'_>, _: &CommandArgs) -> Result<CmdResult> {
    Ok(commands::greet::undefined())
}

fn add(session: &mut Session<'_>, args: &CommandArgs) -> Result<CmdResult> {
    let name = name_arg(args)?;
    let phone = phone_arg(args)?;
    commands::add::run(
        session.contacts,
        name,
        phone,
        session.config.allow_duplicate_phones,
    )
}

fn change(session: &mut Session<'_>, args: &CommandArgs) -> Result<CmdResult> {
    let name = name_arg(args)?;
    let old = phone_arg(args)?;
    let new = require(&args.new_phone, ContactzError::MissingPhone)?;
    commands::change::run(session.contacts, name, old, new)
}

fn phones(session: &mut Session<'_>, args: &CommandArgs) -> Result<CmdResult> {
    commands::phones::run(session.contacts, name_arg(args)?)
}

fn show_all(session: &mut Session<'_>, _: &CommandArgs) -> Result<CmdResult> {
    commands::list::run(session.contacts)
}

fn remove(session: &mut Session<'_>, args: &CommandArgs) -> Result<CmdResult> {
    commands::remove::run(session.contacts, name_arg(args)?)
}

fn clear_number(session: &mut Session<'_>, args: &CommandArgs) -> Result<CmdResult> {
    let name = name_arg(args)?;
    let phone = phone_arg(args)?;
    commands::clear::run(session.contacts, name, phone)
}

fn save(session: &mut Session<'_>, args: &CommandArgs) -> Result<CmdResult> {
    commands::persist::save(session.store, session.contacts, name_arg(args)?)
}

fn load(session: &mut Session<'_>, args: &CommandArgs) -> Result<CmdResult> {
    commands::persist::load(session.store, session.contacts, name_arg(args)?)
}
