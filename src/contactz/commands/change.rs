use super::{
    contact_not_found, phone_not_found, validate_name, validate_phone, CmdMessage, CmdResult,
    Contacts,
};
use crate::error::Result;

pub fn run(contacts: &mut Contacts, name: &str, old: &str, new: &str) -> Result<CmdResult> {
    let name = validate_name(name)?;
    let old = validate_phone(old)?;
    let new = validate_phone(new)?;

    let Some(record) = contacts.find(&name) else {
        return Ok(contact_not_found(&name));
    };

    if !record.borrow_mut().change_phone(&old, new.clone()) {
        return Ok(phone_not_found(&name, &old));
    }

    Ok(CmdResult::message(CmdMessage::success(format!(
        "Phone for {} changed to {}",
        name, new
    ))))
}
