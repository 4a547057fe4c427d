//! Transport layer: wire-format details (query encoding and response decoding).

mod account;
mod number;
mod numeric;
mod pipe;
mod template;
mod text;

pub use account::{decode_account_detail_json, encode_account_detail_params};
pub use number::{
    encode_get_mobile_params, encode_get_sms_params, encode_number_params, encode_send_sms_params,
};
pub use pipe::{decode_login_token, decode_pipe_response, encode_login_params};
pub use template::{
    TransportError as TemplateDecodeError, decode_template_search_json,
    encode_search_template_params,
};
pub use text::between;
