use super::{contact_not_found, validate_name, CmdMessage, CmdResult, Contacts};
use crate::error::Result;

pub fn run(contacts: &Contacts, name: &str) -> Result<CmdResult> {
    let name = validate_name(name)?;
    let Some(record) = contacts.find(&name) else {
        return Ok(contact_not_found(&name));
    };

    let record = record.borrow();
    let content = if record.phones().is_empty() {
        format!("{} has no phones", name)
    } else {
        record.to_string()
    };
    Ok(CmdResult::message(CmdMessage::info(content)))
}
