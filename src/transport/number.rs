use crate::domain::{
    ACTION_FIELD, ItemId, MobileNumber, MobileOption, SmsText, Token, ValidationError,
};

const RELEASE_FIELD: &str = "release";

/// Keys the client sets itself; option parameters may not override them.
const RESERVED_KEYS: [&str; 8] = [
    ACTION_FIELD,
    Token::FIELD,
    ItemId::FIELD,
    MobileOption::ISP_FIELD,
    MobileOption::PROVINCE_FIELD,
    MobileOption::CITY_FIELD,
    MobileOption::MOBILE_FIELD,
    MobileOption::EXCLUDE_NO_FIELD,
];

fn item_param(item: ItemId) -> (String, String) {
    (ItemId::FIELD.to_owned(), item.value().to_string())
}

fn mobile_param(mobile: &MobileNumber) -> (String, String) {
    (MobileNumber::FIELD.to_owned(), mobile.raw().to_owned())
}

/// Encode a `getmobile` request. Option values are checked before anything is sent.
pub fn encode_get_mobile_params(
    item: ItemId,
    option: &MobileOption,
) -> Result<Vec<(String, String)>, ValidationError> {
    let mut params = vec![item_param(item)];

    if let Some(isp) = option.isp {
        params.push((MobileOption::ISP_FIELD.to_owned(), isp.tag().to_string()));
    }
    if let Some(province) = option.province.as_deref() {
        params.push((
            MobileOption::PROVINCE_FIELD.to_owned(),
            non_empty(MobileOption::PROVINCE_FIELD, province)?,
        ));
    }
    if let Some(city) = option.city.as_deref() {
        params.push((
            MobileOption::CITY_FIELD.to_owned(),
            non_empty(MobileOption::CITY_FIELD, city)?,
        ));
    }
    if let Some(mobile) = option.mobile.as_deref() {
        params.push((
            MobileOption::MOBILE_FIELD.to_owned(),
            digits(MobileOption::MOBILE_FIELD, mobile)?,
        ));
    }
    if let Some(exclude_no) = option.exclude_no.as_deref() {
        params.push((
            MobileOption::EXCLUDE_NO_FIELD.to_owned(),
            non_empty(MobileOption::EXCLUDE_NO_FIELD, exclude_no)?,
        ));
    }

    for (key, value) in &option.extra {
        let key = key.trim();
        if key.is_empty() {
            return Err(ValidationError::Empty {
                field: "option key",
            });
        }
        if RESERVED_KEYS.contains(&key) {
            return Err(ValidationError::ReservedParameter {
                key: key.to_owned(),
            });
        }
        let value = value.to_param();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty {
                field: "option value",
            });
        }
        params.push((key.to_owned(), value));
    }

    Ok(params)
}

pub fn encode_get_sms_params(
    mobile: &MobileNumber,
    item: ItemId,
    release: bool,
) -> Vec<(String, String)> {
    let mut params = vec![item_param(item), mobile_param(mobile)];
    if release {
        params.push((RELEASE_FIELD.to_owned(), "1".to_owned()));
    }
    params
}

pub fn encode_send_sms_params(
    mobile: &MobileNumber,
    item: ItemId,
    text: &SmsText,
) -> Vec<(String, String)> {
    vec![
        item_param(item),
        mobile_param(mobile),
        (SmsText::FIELD.to_owned(), text.as_str().to_owned()),
    ]
}

/// Parameters shared by `getsendsmsstate`, `release` and `addignore`.
pub fn encode_number_params(mobile: &MobileNumber, item: ItemId) -> Vec<(String, String)> {
    vec![item_param(item), mobile_param(mobile)]
}

// Blank values are rejected; anything else is sent exactly as given.
fn non_empty(field: &'static str, value: &str) -> Result<String, ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Empty { field });
    }
    Ok(value.to_owned())
}

fn digits(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let value = non_empty(field, value)?;
    if !value.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::NotDigits {
            field,
            input: value,
        });
    }
    Ok(value)
}
