use super::{CmdMessage, CmdResult, Contacts};
use crate::error::Result;

/// Renders the whole book as a table.
pub fn run(contacts: &Contacts) -> Result<CmdResult> {
    Ok(CmdResult::message(CmdMessage::info(
        contacts.book.to_string(),
    )))
}
