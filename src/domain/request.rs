use std::collections::BTreeMap;
use std::fmt;

/// Query parameter carrying the action name on the primary endpoint.
pub const ACTION_FIELD: &str = "action";

/// Query parameter carrying the action name on the candidate endpoint.
pub const CANDIDATE_ACTION_FIELD: &str = "actionid";

/// The only action served by the candidate endpoint (spelled as the vendor spells it).
pub const CANDIDATE_SEARCH_ACTION: &str = "itemseach";

/// Yima API actions served by the primary endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Login,
    GetAccountInfo,
    GetMobile,
    GetSms,
    SendSms,
    GetSendSmsState,
    Release,
    AddIgnore,
}

impl Action {
    /// Wire name sent as `action=<name>`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::GetAccountInfo => "getaccountinfo",
            Self::GetMobile => "getmobile",
            Self::GetSms => "getsms",
            Self::SendSms => "sendsms",
            Self::GetSendSmsState => "getsendsmsstate",
            Self::Release => "release",
            Self::AddIgnore => "addignore",
        }
    }

    /// Whether the action must carry a session token.
    pub fn requires_token(self) -> bool {
        !matches!(self, Self::Login)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Chinese mobile network operators, as numbered by Yima.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Mobile,
    Telecom,
    Unicom,
}

impl Operator {
    /// Numeric tag used on the wire.
    pub fn tag(self) -> u8 {
        match self {
            Self::Mobile => 1,
            Self::Telecom => 2,
            Self::Unicom => 3,
        }
    }

    /// Map a wire tag back to an operator.
    pub fn from_tag(tag: u8) -> Option<Self> {
        Some(match tag {
            1 => Self::Mobile,
            2 => Self::Telecom,
            3 => Self::Unicom,
            _ => return None,
        })
    }
}

/// A value for a vendor parameter that [`MobileOption`] does not model directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue {
    Text(String),
    Int(i64),
    Operator(Operator),
}

impl OptionValue {
    /// String form sent as the query parameter value.
    pub fn to_param(&self) -> String {
        match self {
            Self::Text(value) => value.clone(),
            Self::Int(value) => value.to_string(),
            Self::Operator(operator) => operator.tag().to_string(),
        }
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for OptionValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<Operator> for OptionValue {
    fn from(value: Operator) -> Self {
        Self::Operator(value)
    }
}

/// Constraints on the number acquired by `getmobile`.
///
/// Unset fields are not sent. Values are checked when the request is encoded,
/// before anything goes over the network.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MobileOption {
    pub isp: Option<Operator>,
    pub province: Option<String>,
    pub city: Option<String>,
    /// Request this specific number (or number prefix).
    pub mobile: Option<String>,
    /// Number prefixes the vendor must not hand out.
    pub exclude_no: Option<String>,
    /// Additional vendor parameters, sent as-is.
    pub extra: BTreeMap<String, OptionValue>,
}

impl MobileOption {
    pub const ISP_FIELD: &'static str = "isp";
    pub const PROVINCE_FIELD: &'static str = "province";
    pub const CITY_FIELD: &'static str = "city";
    pub const MOBILE_FIELD: &'static str = "mobile";
    pub const EXCLUDE_NO_FIELD: &'static str = "excludeno";

    pub fn isp(mut self, isp: Operator) -> Self {
        self.isp = Some(isp);
        self
    }

    pub fn province(mut self, province: impl Into<String>) -> Self {
        self.province = Some(province.into());
        self
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn mobile(mut self, mobile: impl Into<String>) -> Self {
        self.mobile = Some(mobile.into());
        self
    }

    pub fn exclude_no(mut self, exclude_no: impl Into<String>) -> Self {
        self.exclude_no = Some(exclude_no.into());
        self
    }

    pub fn extra(mut self, key: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}
