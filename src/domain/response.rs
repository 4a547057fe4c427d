use crate::domain::value::ItemId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Success,
    Error,
}

/// A decoded pipe-delimited (`success|payload`) response.
///
/// On [`Status::Success`] `text` is everything after the first `|`; on
/// [`Status::Error`] it is the full response body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipeResponse {
    pub status: Status,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AccountDetail {
    pub name: String,
    pub level: i64,
    pub balance: f64,
    pub frozen: f64,
    pub discount: f64,
    /// Maximum number of numbers the account may hold at once.
    pub max_hold: i64,
    pub status: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TemplateCandidate {
    /// Pass to [`crate::YimaClient::get_number`] to rent a number for this template.
    pub id: ItemId,
    pub item_name: String,
    pub price: f64,
    /// Pattern describing the expected SMS content, as provided by the vendor.
    pub regex: String,
}
