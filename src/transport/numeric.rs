use serde::Deserialize;

/// Numeric field returned by Yima as either a JSON number or a numeric string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TransportNumber {
    Int(i64),
    Float(f64),
    String(String),
}

impl TransportNumber {
    pub fn into_f64(self) -> Option<f64> {
        match self {
            Self::Int(value) => Some(value as f64),
            Self::Float(value) => Some(value),
            Self::String(value) => value.trim().parse::<f64>().ok(),
        }
    }

    /// Integer value; fractional numbers are rejected rather than truncated.
    pub fn into_i64(self) -> Option<i64> {
        match self {
            Self::Int(value) => Some(value),
            Self::Float(_) => None,
            Self::String(value) => value.trim().parse::<i64>().ok(),
        }
    }
}
