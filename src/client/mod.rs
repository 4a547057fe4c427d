//! Client layer: owns the session token, orchestrates transport calls and maps transport ↔ domain.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use url::Url;

use crate::domain::{
    ACTION_FIELD, AccountDetail, Action, CANDIDATE_SEARCH_ACTION, ItemId, MobileNumber,
    MobileOption, Password, SmsText, Status, TemplateCandidate, Token, Username, ValidationError,
};
use crate::transport::{
    TemplateDecodeError, decode_account_detail_json, decode_login_token, decode_pipe_response,
    decode_template_search_json, encode_account_detail_params, encode_get_mobile_params,
    encode_get_sms_params, encode_login_params, encode_number_params, encode_search_template_params,
    encode_send_sms_params,
};

const DEFAULT_ENDPOINT: &str = "http://api.fxhyd.cn/UserInterface.aspx";
const DEFAULT_CANDIDATE_ENDPOINT: &str = "http://api.fxhyd.cn/appapi.aspx";

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn get<'a>(
        &'a self,
        url: Url,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn get<'a>(
        &'a self,
        url: Url,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            // Query strings carry the password or token; keep them out of error text.
            let response = self
                .client
                .get(url)
                .send()
                .await
                .map_err(reqwest::Error::without_url)?;
            let status = response.status().as_u16();
            let body = response.text().await.map_err(reqwest::Error::without_url)?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, Clone)]
/// Yima account credentials used by [`YimaClient::login`].
pub struct Credentials {
    username: Username,
    password: Password,
}

impl Credentials {
    /// Create credentials and validate that both parts are non-empty.
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            username: Username::new(username)?,
            password: Password::new(password)?,
        })
    }

    /// Borrow the validated user name.
    pub fn username(&self) -> &Username {
        &self.username
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`YimaClient`].
///
/// Vendor failures keep the raw response text; nothing is retried.
pub enum YimaError {
    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// Transport failure while logging in. No session can be established, see
    /// [`YimaError::is_fatal`].
    #[error("transport error during login: {0}")]
    LoginTransport(#[source] Box<dyn StdError + Send + Sync>),

    /// Non-successful HTTP status code returned by the server.
    #[error("unexpected HTTP status: {status}")]
    HttpStatus { status: u16, body: Option<String> },

    /// An authenticated action was attempted before a token was obtained.
    #[error("not authenticated: {action} requires a session token")]
    NotAuthenticated { action: &'static str },

    /// Yima answered without the success marker; `body` is the response verbatim.
    #[error("{action} failed: {body}")]
    Vendor { action: &'static str, body: String },

    /// The response did not have the expected shape.
    #[error("cannot decode {action} response: {source}")]
    Decode {
        action: &'static str,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    /// A [`MobileOption`] could not be turned into request parameters.
    #[error("invalid mobile option: {0}")]
    InvalidOption(#[source] ValidationError),

    /// A configured endpoint is not a valid absolute URL.
    #[error("invalid endpoint URL: {0}")]
    InvalidEndpoint(#[from] url::ParseError),

    /// One of the domain constructors rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl YimaError {
    /// Whether the error leaves the client unable to do anything useful.
    ///
    /// Only a transport failure during login qualifies; callers that treat it as
    /// process-fatal should abort on it.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::LoginTransport(_))
    }
}

fn decode_error(
    action: &'static str,
    err: impl StdError + Send + Sync + 'static,
) -> YimaError {
    YimaError::Decode {
        action,
        source: Box::new(err),
    }
}

#[derive(Debug, Clone)]
/// Builder for [`YimaClient`].
///
/// Use this when you need to customize the endpoints, timeout, or user-agent, or to
/// resume a session with a known token.
pub struct YimaClientBuilder {
    endpoint: String,
    candidate_endpoint: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    token: Option<Token>,
}

impl Default for YimaClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl YimaClientBuilder {
    /// Create a builder with the default endpoints and no timeout/user-agent override.
    pub fn new() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            candidate_endpoint: DEFAULT_CANDIDATE_ENDPOINT.to_owned(),
            timeout: None,
            user_agent: None,
            token: None,
        }
    }

    /// Override the primary API endpoint (`UserInterface.aspx`).
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Override the template search endpoint (`appapi.aspx`).
    pub fn candidate_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.candidate_endpoint = endpoint.into();
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Start authenticated with a token from an earlier login.
    pub fn token(mut self, token: Token) -> Self {
        self.token = Some(token);
        self
    }

    /// Build a [`YimaClient`].
    ///
    /// Fails with [`YimaError::InvalidEndpoint`] if either endpoint is not an absolute URL.
    pub fn build(self) -> Result<YimaClient, YimaError> {
        Url::parse(&self.endpoint)?;
        Url::parse(&self.candidate_endpoint)?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| YimaError::Transport(Box::new(err)))?;

        Ok(YimaClient {
            endpoint: self.endpoint,
            candidate_endpoint: self.candidate_endpoint,
            token: self.token,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

#[derive(Clone)]
/// Yima session.
///
/// Starts unauthenticated; [`YimaClient::login`] stores the token that every other
/// call needs. Calls made without a token fail with [`YimaError::NotAuthenticated`]
/// before touching the network. By default it uses:
/// - `http://api.fxhyd.cn/UserInterface.aspx` for all `action=` calls
/// - `http://api.fxhyd.cn/appapi.aspx` for template search
pub struct YimaClient {
    endpoint: String,
    candidate_endpoint: String,
    token: Option<Token>,
    http: Arc<dyn HttpTransport>,
}

impl Default for YimaClient {
    fn default() -> Self {
        Self::new()
    }
}

impl YimaClient {
    /// Create an unauthenticated client using the default endpoints.
    ///
    /// For more customization, use [`YimaClient::builder`].
    pub fn new() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            candidate_endpoint: DEFAULT_CANDIDATE_ENDPOINT.to_owned(),
            token: None,
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
            }),
        }
    }

    /// Start building a client with custom settings.
    pub fn builder() -> YimaClientBuilder {
        YimaClientBuilder::new()
    }

    /// The session token, once logged in.
    pub fn token(&self) -> Option<&Token> {
        self.token.as_ref()
    }

    /// Whether a token is held, from [`YimaClient::login`] or [`YimaClientBuilder::token`].
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Log in and store the session token.
    ///
    /// Errors:
    /// - [`YimaError::LoginTransport`] if the endpoint could not be reached,
    /// - [`YimaError::Vendor`] with the raw body when Yima rejects the login,
    /// - [`YimaError::Decode`] when a success response carries no token.
    pub async fn login(&mut self, credentials: &Credentials) -> Result<(), YimaError> {
        let params = encode_login_params(&credentials.username, &credentials.password);
        let body = self
            .call(Action::Login, params)
            .await
            .map_err(|err| match err {
                YimaError::Transport(source) => YimaError::LoginTransport(source),
                other => other,
            })?;

        let response = decode_pipe_response(&body);
        if response.status != Status::Success {
            log::warn!("yima login rejected: {}", response.text);
            return Err(YimaError::Vendor {
                action: Action::Login.as_str(),
                body: response.text,
            });
        }

        let token =
            decode_login_token(&body).map_err(|err| decode_error(Action::Login.as_str(), err))?;
        log::info!("yima login succeeded for {}", credentials.username.as_str());
        self.token = Some(token);
        Ok(())
    }

    /// Fetch the account details (`getaccountinfo`).
    pub async fn account_detail(&self) -> Result<AccountDetail, YimaError> {
        let payload = self
            .auth_get(Action::GetAccountInfo, encode_account_detail_params())
            .await?;
        decode_account_detail_json(&payload)
            .map_err(|err| decode_error(Action::GetAccountInfo.as_str(), err))
    }

    /// Search SMS templates by name on the candidate endpoint.
    ///
    /// The token travels as an ordinary query parameter here, but the call still
    /// requires a logged-in session.
    pub async fn search_template(&self, keyword: &str) -> Result<Vec<TemplateCandidate>, YimaError> {
        let token = self.require_token(CANDIDATE_SEARCH_ACTION)?;
        let params = encode_search_template_params(token, keyword);

        log::debug!("yima request: actionid={CANDIDATE_SEARCH_ACTION}");
        let body = self.fetch(&self.candidate_endpoint, params).await?;

        match decode_template_search_json(&body) {
            Ok(candidates) => Ok(candidates),
            Err(TemplateDecodeError::MissingData) => {
                log::warn!("yima {CANDIDATE_SEARCH_ACTION} failed: {body}");
                Err(YimaError::Vendor {
                    action: CANDIDATE_SEARCH_ACTION,
                    body,
                })
            }
            Err(err) => Err(decode_error(CANDIDATE_SEARCH_ACTION, err)),
        }
    }

    /// Acquire a number for `item` (`getmobile`).
    ///
    /// Errors:
    /// - [`YimaError::InvalidOption`] if `option` cannot be encoded (checked before any request),
    /// - [`YimaError::Vendor`] when no number is handed out.
    pub async fn get_number(
        &self,
        item: ItemId,
        option: &MobileOption,
    ) -> Result<MobileNumber, YimaError> {
        let params = encode_get_mobile_params(item, option).map_err(YimaError::InvalidOption)?;
        let payload = self.auth_get(Action::GetMobile, params).await?;
        MobileNumber::new(payload).map_err(|err| decode_error(Action::GetMobile.as_str(), err))
    }

    /// Fetch the SMS received by `mobile` (`getsms`).
    ///
    /// With `release` set, Yima releases the number once the message is read. Until
    /// the message arrives this returns [`YimaError::Vendor`] carrying the vendor's
    /// waiting code; polling is up to the caller.
    pub async fn get_sms_message(
        &self,
        mobile: &MobileNumber,
        item: ItemId,
        release: bool,
    ) -> Result<String, YimaError> {
        self.auth_get(Action::GetSms, encode_get_sms_params(mobile, item, release))
            .await
    }

    /// Send `text` from the rented `mobile` (`sendsms`).
    pub async fn send_sms(
        &self,
        mobile: &MobileNumber,
        item: ItemId,
        text: &SmsText,
    ) -> Result<(), YimaError> {
        self.auth_get(Action::SendSms, encode_send_sms_params(mobile, item, text))
            .await?;
        Ok(())
    }

    /// Check whether an SMS sent with [`YimaClient::send_sms`] went out (`getsendsmsstate`).
    pub async fn sent_sms_status(&self, mobile: &MobileNumber, item: ItemId) -> Result<(), YimaError> {
        self.auth_get(Action::GetSendSmsState, encode_number_params(mobile, item))
            .await?;
        Ok(())
    }

    /// Return `mobile` to the pool (`release`).
    pub async fn release_number(&self, mobile: &MobileNumber, item: ItemId) -> Result<(), YimaError> {
        self.auth_get(Action::Release, encode_number_params(mobile, item))
            .await?;
        Ok(())
    }

    /// Never hand out `mobile` for `item` again (`addignore`).
    pub async fn block_number(&self, mobile: &MobileNumber, item: ItemId) -> Result<(), YimaError> {
        self.auth_get(Action::AddIgnore, encode_number_params(mobile, item))
            .await?;
        Ok(())
    }

    fn require_token(&self, action: &'static str) -> Result<&Token, YimaError> {
        self.token
            .as_ref()
            .ok_or(YimaError::NotAuthenticated { action })
    }

    /// Authenticated call on the primary endpoint, decoded as `success|payload`.
    async fn auth_get(
        &self,
        action: Action,
        params: Vec<(String, String)>,
    ) -> Result<String, YimaError> {
        let body = self.call(action, params).await?;
        let response = decode_pipe_response(&body);
        match response.status {
            Status::Success => Ok(response.text),
            Status::Error => {
                log::warn!("yima {action} failed: {}", response.text);
                Err(YimaError::Vendor {
                    action: action.as_str(),
                    body: response.text,
                })
            }
        }
    }

    async fn call(
        &self,
        action: Action,
        mut params: Vec<(String, String)>,
    ) -> Result<String, YimaError> {
        if action.requires_token() {
            let token = self.require_token(action.as_str())?;
            params.push((Token::FIELD.to_owned(), token.as_str().to_owned()));
        }
        params.push((ACTION_FIELD.to_owned(), action.as_str().to_owned()));

        log::debug!("yima request: action={action}");
        self.fetch(&self.endpoint, params).await
    }

    async fn fetch(
        &self,
        endpoint: &str,
        params: Vec<(String, String)>,
    ) -> Result<String, YimaError> {
        let url = Url::parse_with_params(endpoint, &params)?;

        let response = self.http.get(url).await.map_err(|err| {
            log::warn!("yima transport error: {err}");
            YimaError::Transport(err)
        })?;

        if !(200..=299).contains(&response.status) {
            let body = if response.body.trim().is_empty() {
                None
            } else {
                Some(response.body)
            };
            return Err(YimaError::HttpStatus {
                status: response.status,
                body,
            });
        }

        Ok(response.body)
    }
}
