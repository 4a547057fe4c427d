use crate::domain::{Password, PipeResponse, Status, Token, Username};

/// Marker Yima puts in every successful pipe-delimited response.
const SUCCESS_MARKER: &str = "success";
const SEPARATOR: char = '|';

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("login response has no token field")]
    MissingToken,

    #[error("login response carries an empty token")]
    EmptyToken,
}

pub fn encode_login_params(username: &Username, password: &Password) -> Vec<(String, String)> {
    vec![
        (Username::FIELD.to_owned(), username.as_str().to_owned()),
        (Password::FIELD.to_owned(), password.as_str().to_owned()),
    ]
}

/// Decode a `success|payload` response.
///
/// Any body without the success marker is an error whose text is the whole body.
pub fn decode_pipe_response(body: &str) -> PipeResponse {
    if !body.contains(SUCCESS_MARKER) {
        return PipeResponse {
            status: Status::Error,
            text: body.to_owned(),
        };
    }

    let payload = body
        .split_once(SEPARATOR)
        .map(|(_, rest)| rest)
        .unwrap_or_default();

    PipeResponse {
        status: Status::Success,
        text: payload.to_owned(),
    }
}

/// Extract the session token from a successful login body (`success|<token>`).
///
/// The token is the second `|`-separated field.
pub fn decode_login_token(body: &str) -> Result<Token, TransportError> {
    let field = body
        .split(SEPARATOR)
        .nth(1)
        .ok_or(TransportError::MissingToken)?;
    Token::new(field).map_err(|_| TransportError::EmptyToken)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_login_params_carries_credentials() {
        let params = encode_login_params(
            &Username::new("alice").unwrap(),
            &Password::new("p@ss word").unwrap(),
        );
        assert_eq!(
            params,
            vec![
                ("username".to_owned(), "alice".to_owned()),
                ("password".to_owned(), "p@ss word".to_owned()),
            ]
        );
    }

    #[test]
    fn success_body_yields_payload_after_first_separator() {
        let decoded = decode_pipe_response("success|13800138000");
        assert_eq!(decoded.status, Status::Success);
        assert_eq!(decoded.text, "13800138000");

        let decoded = decode_pipe_response("success|a|b");
        assert_eq!(decoded.text, "a|b");
    }

    #[test]
    fn body_without_marker_is_error_with_full_text() {
        for body in ["1001", "2005|token invalid", "", "SUCCESS|x"] {
            let decoded = decode_pipe_response(body);
            assert_eq!(decoded.status, Status::Error);
            assert_eq!(decoded.text, body);
        }
    }

    #[test]
    fn success_without_separator_has_empty_payload() {
        let decoded = decode_pipe_response("success");
        assert_eq!(decoded.status, Status::Success);
        assert_eq!(decoded.text, "");
    }

    #[test]
    fn decoding_is_idempotent() {
        let body = "success|[验证码]123456";
        assert_eq!(decode_pipe_response(body), decode_pipe_response(body));
    }

    #[test]
    fn login_token_is_second_field() {
        let token = decode_login_token("success|0061e2f0a4").unwrap();
        assert_eq!(token.as_str(), "0061e2f0a4");

        let token = decode_login_token("success|abc|extra").unwrap();
        assert_eq!(token.as_str(), "abc");
    }

    #[test]
    fn login_token_requires_non_empty_field() {
        assert!(matches!(
            decode_login_token("success"),
            Err(TransportError::MissingToken)
        ));
        assert!(matches!(
            decode_login_token("success| "),
            Err(TransportError::EmptyToken)
        ));
    }
}
