use crate::domain::validation::ValidationError;

use phonenumber::country;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Yima account user name.
///
/// Invariant: non-empty after trimming.
pub struct Username(String);

impl Username {
    /// Query parameter name used by Yima (`username`).
    pub const FIELD: &'static str = "username";

    /// Create a validated [`Username`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated user name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Yima account password.
///
/// Invariant: must not be empty (whitespace is preserved and allowed).
pub struct Password(String);

impl Password {
    /// Query parameter name used by Yima (`password`).
    pub const FIELD: &'static str = "password";

    /// Create a validated [`Password`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the password as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Session token issued by Yima on login.
///
/// Invariant: non-empty after trimming.
pub struct Token(String);

impl Token {
    /// Query parameter name used by Yima (`token`).
    pub const FIELD: &'static str = "token";

    /// Create a validated [`Token`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the token.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Template (project) id, as returned by template search (`itemid`).
pub struct ItemId(u32);

impl ItemId {
    /// Query parameter name used by Yima (`itemid`).
    pub const FIELD: &'static str = "itemid";

    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

impl From<u32> for ItemId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Rented phone number (`mobile`), in the national form Yima uses.
///
/// Invariant: non-empty after trimming. No normalization is applied; use
/// [`MobileNumber::to_e164`] when an international form is needed.
pub struct MobileNumber(String);

impl MobileNumber {
    /// Query parameter name used by Yima (`mobile`).
    pub const FIELD: &'static str = "mobile";

    /// Create a validated (non-empty) mobile number.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Raw (trimmed) value as sent to and received from Yima.
    pub fn raw(&self) -> &str {
        &self.0
    }

    /// Parse the number as a mainland China number and format it as E.164.
    pub fn to_e164(&self) -> Result<String, ValidationError> {
        let parsed = phonenumber::parse(Some(country::Id::CN), &self.0).map_err(|_| {
            ValidationError::InvalidPhoneNumber {
                input: self.0.clone(),
            }
        })?;

        Ok(phonenumber::format(&parsed)
            .mode(phonenumber::Mode::E164)
            .to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Text of an SMS sent from a rented number (`sms`).
///
/// Invariant: non-empty after trimming. The original value (including whitespace) is preserved.
pub struct SmsText(String);

impl SmsText {
    /// Query parameter name used by Yima (`sms`).
    pub const FIELD: &'static str = "sms";

    /// Create validated SMS text.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the text as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
