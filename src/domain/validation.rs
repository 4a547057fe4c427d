use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty { field: &'static str },
    NotDigits { field: &'static str, input: String },
    ReservedParameter { key: String },
    InvalidPhoneNumber { input: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::NotDigits { field, input } => {
                write!(f, "{field} must contain only digits: {input}")
            }
            Self::ReservedParameter { key } => {
                write!(f, "parameter {key} is reserved and cannot be overridden")
            }
            Self::InvalidPhoneNumber { input } => write!(f, "invalid phone number: {input}"),
        }
    }
}

impl std::error::Error for ValidationError {}
