use super::{
    contact_not_found, phone_not_found, validate_name, validate_phone, CmdMessage, CmdResult,
    Contacts,
};
use crate::error::Result;

/// Removes one number from a contact, keeping the contact itself.
pub fn run(contacts: &mut Contacts, name: &str, phone: &str) -> Result<CmdResult> {
    let name = validate_name(name)?;
    let phone = validate_phone(phone)?;

    let Some(record) = contacts.find(&name) else {
        return Ok(contact_not_found(&name));
    };

    if !record.borrow_mut().remove_phone(&phone) {
        return Ok(phone_not_found(&name, &phone));
    }

    Ok(CmdResult::message(CmdMessage::success(format!(
        "Phone {} was removed from {}",
        phone, name
    ))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::fixtures::ContactsFixture;

    #[test]
    fn removes_only_that_number() {
        let mut fx = ContactsFixture::new().with_contact("Bob", &["1234567890", "0987654321"]);
        let result = run(&mut fx.contacts, "Bob", "1234567890").unwrap();

        assert_eq!(result.text(), "Phone 1234567890 was removed from Bob");
        assert_eq!(fx.phones_of("Bob").as_deref(), Some("0987654321"));
    }

    #[test]
    fn absent_number_is_reported() {
        let mut fx = ContactsFixture::new().with_contact("Bob", &["1234567890"]);
        let result = run(&mut fx.contacts, "Bob", "5555555555").unwrap();
        assert_eq!(result.text(), "Phone 5555555555 not found for Bob");
        assert_eq!(fx.phones_of("Bob").as_deref(), Some("1234567890"));
    }

    #[test]
    fn unknown_contact() {
        let mut fx = ContactsFixture::new();
        assert_eq!(
            run(&mut fx.contacts, "Bob", "1234567890").unwrap().text(),
            "Contact Bob not found"
        );
    }
}
