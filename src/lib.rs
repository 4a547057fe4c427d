//! Typed Rust client for the Yima SMS-verification HTTP API.
//!
//! The crate follows three layers: a domain layer of strong types, a transport
//! layer for the vendor's wire-format quirks (`success|payload` strings and JSON),
//! and a small client layer that owns the session token and orchestrates requests.
//!
//! ```rust,no_run
//! use yima::{Credentials, ItemId, MobileOption, Operator, YimaClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), yima::YimaError> {
//!     let mut client = YimaClient::new();
//!     client.login(&Credentials::new("user", "password")?).await?;
//!
//!     let item = ItemId::new(1);
//!     let option = MobileOption::default().isp(Operator::Mobile);
//!     let mobile = client.get_number(item, &option).await?;
//!     let sms = client.get_sms_message(&mobile, item, true).await?;
//!     println!("{}: {}", mobile.raw(), yima::between(&sms, "验证码", "，"));
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{Credentials, YimaClient, YimaClientBuilder, YimaError};
pub use domain::{
    AccountDetail, Action, ItemId, MobileNumber, MobileOption, Operator, OptionValue, Password,
    PipeResponse, SmsText, Status, TemplateCandidate, Token, Username, ValidationError,
};
pub use transport::between;

/// Result type alias for Yima operations.
pub type Result<T> = std::result::Result<T, YimaError>;
