use super::{contact_not_found, validate_name, CmdMessage, CmdResult, Contacts};
use crate::error::{ContactzError, Result};
use crate::model::Field;

/// Removes the contact from the book and forgets it in the registry, so a
/// later `add` under the same name starts from an empty record.
pub fn run(contacts: &mut Contacts, name: &str) -> Result<CmdResult> {
    let name = validate_name(name)?;
    match contacts.book.remove_record(name.value()) {
        Ok(_) => {
            contacts.registry.evict(name.value());
            Ok(CmdResult::message(CmdMessage::success(format!(
                "Contact {} was removed",
                name
            ))))
        }
        Err(ContactzError::ContactNotFound(_)) => Ok(contact_not_found(&name)),
        Err(e) => Err(e),
    }
}
