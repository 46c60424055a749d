use super::{validate_name, validate_phone, CmdMessage, CmdResult, Contacts};
use crate::error::Result;

/// Adds `phone` to the contact called `name`, creating the contact if needed.
///
/// With `allow_duplicates` the number is always appended; without it a number
/// the contact already has is reported instead.
pub fn run(
    contacts: &mut Contacts,
    name: &str,
    phone: &str,
    allow_duplicates: bool,
) -> Result<CmdResult> {
    let name = validate_name(name)?;
    let phone = validate_phone(phone)?;

    let record = contacts.registry.get_or_create(&name);
    {
        let mut record = record.borrow_mut();
        if allow_duplicates {
            record.add_phone(phone);
        } else if !record.add_phone_if_absent(phone.clone()) {
            return Ok(CmdResult::message(CmdMessage::warning(format!(
                "Number {} already in contact list",
                phone
            ))));
        }
    }
    contacts.book.add_record(record);

    Ok(CmdResult::message(CmdMessage::success(format!(
        "Contact '{}' added to the address book.",
        name
    ))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::fixtures::ContactsFixture;
    use crate::error::ContactzError;

    #[test]
    fn adds_new_contact() {
        let mut fx = ContactsFixture::new();
        let result = run(&mut fx.contacts, "Alice", "1234567890", true).unwrap();

        assert_eq!(result.text(), "Contact 'Alice' added to the address book.");
        assert_eq!(fx.phones_of("Alice").as_deref(), Some("1234567890"));
    }

    #[test]
    fn second_add_appends_phone() {
        let mut fx = ContactsFixture::new();
        run(&mut fx.contacts, "Alice", "1234567890", true).unwrap();
        run(&mut fx.contacts, "Alice", "0987654321", true).unwrap();

        assert_eq!(fx.contacts.book.len(), 1);
        assert_eq!(
            fx.phones_of("Alice").as_deref(),
            Some("1234567890, 0987654321")
        );
    }

    #[test]
    fn duplicates_allowed_by_default() {
        let mut fx = ContactsFixture::new();
        run(&mut fx.contacts, "Alice", "1234567890", true).unwrap();
        run(&mut fx.contacts, "Alice", "1234567890", true).unwrap();
        assert_eq!(
            fx.phones_of("Alice").as_deref(),
            Some("1234567890, 1234567890")
        );
    }

    #[test]
    fn duplicates_rejected_when_disabled() {
        let mut fx = ContactsFixture::new();
        run(&mut fx.contacts, "Alice", "1234567890", false).unwrap();
        let result = run(&mut fx.contacts, "Alice", "1234567890", false).unwrap();

        assert_eq!(result.text(), "Number 1234567890 already in contact list");
        assert_eq!(fx.phones_of("Alice").as_deref(), Some("1234567890"));
    }

    #[test]
    fn missing_name() {
        let mut fx = ContactsFixture::new();
        let err = run(&mut fx.contacts, "", "1234567890", true).unwrap_err();
        assert!(matches!(err, ContactzError::MissingName));
        assert!(fx.contacts.book.is_empty());
    }

    #[test]
    fn invalid_phone() {
        let mut fx = ContactsFixture::new();
        let err = run(&mut fx.contacts, "Alice", "12345", true).unwrap_err();
        assert!(matches!(err, ContactzError::MissingPhone));
        assert!(fx.contacts.registry.is_empty());
    }
}
