use serde::Deserialize;

use crate::domain::{
    CANDIDATE_ACTION_FIELD, CANDIDATE_SEARCH_ACTION, ItemId, TemplateCandidate, Token,
};

/// Query parameter carrying the search keyword.
const KEYWORD_FIELD: &str = "itemname";

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("response has no data object")]
    MissingData,

    #[error("invalid template candidate at index {index}: {source}")]
    InvalidCandidate {
        index: usize,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, Deserialize)]
struct TemplateSearchJsonResponse {
    #[serde(default)]
    data: Option<TemplateSearchData>,
}

#[derive(Debug, Clone, Deserialize)]
struct TemplateSearchData {
    #[serde(default)]
    list: Option<Vec<serde_json::Value>>,
}

#[derive(Debug, Clone, Deserialize)]
struct TemplateJson {
    #[serde(rename = "ID")]
    id: u32,
    #[serde(rename = "ItemName")]
    item_name: String,
    #[serde(rename = "Price")]
    price: f64,
    #[serde(rename = "Regex")]
    regex: String,
}

pub fn encode_search_template_params(token: &Token, keyword: &str) -> Vec<(String, String)> {
    vec![
        (
            CANDIDATE_ACTION_FIELD.to_owned(),
            CANDIDATE_SEARCH_ACTION.to_owned(),
        ),
        (Token::FIELD.to_owned(), token.as_str().to_owned()),
        (KEYWORD_FIELD.to_owned(), keyword.to_owned()),
    ]
}

/// Decode the candidate endpoint's `data.list` array.
///
/// A missing or `null` list is an empty result; the first malformed element fails the call.
pub fn decode_template_search_json(json: &str) -> Result<Vec<TemplateCandidate>, TransportError> {
    let parsed: TemplateSearchJsonResponse = serde_json::from_str(json)?;
    let data = parsed.data.ok_or(TransportError::MissingData)?;

    data.list
        .unwrap_or_default()
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            let item: TemplateJson = serde_json::from_value(value)
                .map_err(|source| TransportError::InvalidCandidate { index, source })?;
            Ok(TemplateCandidate {
                id: ItemId::new(item.id),
                item_name: item.item_name,
                price: item.price,
                regex: item.regex,
            })
        })
        .collect()
}
