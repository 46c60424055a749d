//! Typed field values.
//!
//! Every piece of contact data is text, but each kind gets its own type so a
//! phone can never be passed where a name is expected. Equality is plain value
//! equality within one kind.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of digits a phone number must have.
pub const PHONE_DIGITS: usize = 10;

/// Common behaviour of all field wrappers.
pub trait Field: fmt::Display {
    fn new(value: impl Into<String>) -> Self
    where
        Self: Sized;

    fn value(&self) -> &str;
}

macro_rules! field {
    ($(#[$meta:meta])* $ty:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $ty(String);

        impl Field for $ty {
            fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            fn value(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $ty {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $ty {
            fn from(value: String) -> Self {
                Self(value)
            }
        }
    };
}

field!(
    /// The mandatory field identifying a contact.
    Name
);

field!(
    /// A phone number. Construction does not validate; see [`Phone::is_valid`].
    Phone
);

field!(
    /// A free-form birthday string. Never parsed.
    Birthday
);

impl Phone {
    /// True when the value is exactly ten ASCII digits.
    pub fn is_valid(&self) -> bool {
        self.0.len() == PHONE_DIGITS && self.0.bytes().all(|b| b.is_ascii_digit())
    }
}

impl Birthday {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
