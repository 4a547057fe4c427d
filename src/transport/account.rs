use serde::Deserialize;

use super::numeric::TransportNumber;
use crate::domain::AccountDetail;

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("account field {field} is not a valid number")]
    InvalidNumber { field: &'static str },
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct AccountDetailJsonResponse {
    user_name: String,
    #[serde(default)]
    user_level: Option<TransportNumber>,
    #[serde(default)]
    balance: Option<TransportNumber>,
    #[serde(default)]
    frozen: Option<TransportNumber>,
    #[serde(default)]
    discount: Option<TransportNumber>,
    #[serde(default)]
    max_hold: Option<TransportNumber>,
    #[serde(default)]
    status: Option<TransportNumber>,
}

pub fn encode_account_detail_params() -> Vec<(String, String)> {
    vec![("format".to_owned(), "1".to_owned())]
}

pub fn decode_account_detail_json(json: &str) -> Result<AccountDetail, TransportError> {
    let parsed: AccountDetailJsonResponse = serde_json::from_str(json)?;
    Ok(AccountDetail {
        name: parsed.user_name,
        level: integer("UserLevel", parsed.user_level)?,
        balance: decimal("Balance", parsed.balance)?,
        frozen: decimal("Frozen", parsed.frozen)?,
        discount: decimal("Discount", parsed.discount)?,
        max_hold: integer("MaxHold", parsed.max_hold)?,
        status: integer("Status", parsed.status)?,
    })
}

// Absent fields decode to zero; present but unparsable ones are errors.
fn integer(field: &'static str, value: Option<TransportNumber>) -> Result<i64, TransportError> {
    match value {
        None => Ok(0),
        Some(value) => value
            .into_i64()
            .ok_or(TransportError::InvalidNumber { field }),
    }
}

fn decimal(field: &'static str, value: Option<TransportNumber>) -> Result<f64, TransportError> {
    match value {
        None => Ok(0.0),
        Some(value) => value
            .into_f64()
            .ok_or(TransportError::InvalidNumber { field }),
    }
}
