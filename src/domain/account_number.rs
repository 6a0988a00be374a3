use serde::{Deserialize, Serialize};

use crate::domain::Error;

const DIGITS: usize = 4;
const LETTERS: usize = 5;

/// Account identifier, documented as 4 digits, a dash and 5 letters (A-Z,
/// case-insensitive).
///
/// The format is not enforced: any string is accepted by [`AccountNumber::new`]
/// and by the `From` conversions. Use [`AccountNumber::parse_strict`] to opt
/// into validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountNumber(String);

impl AccountNumber {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn parse_strict(value: &str) -> Result<Self, Error> {
        let number = Self::new(value);
        if number.is_well_formed() {
            Ok(number)
        } else {
            Err(Error::MalformedAccountNumber(value.to_owned()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_well_formed(&self) -> bool {
        let bytes = self.0.as_bytes();
        if bytes.len() != DIGITS + 1 + LETTERS || bytes[DIGITS] != b'-' {
            return false;
        }

        bytes[..DIGITS].iter().all(u8::is_ascii_digit)
            && bytes[DIGITS + 1..].iter().all(u8::is_ascii_alphabetic)
    }
}

impl From<&str> for AccountNumber {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for AccountNumber {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl core::fmt::Display for AccountNumber {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}
