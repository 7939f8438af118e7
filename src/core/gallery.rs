//! Parts gallery payloads and card navigation.

use super::error::Result;
use serde::Deserialize;
use url::form_urlencoded;

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Part {
    pub name: String,
    #[serde(default)]
    pub desc: String,
    #[serde(default)]
    pub image: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct DetailResponse {
    pub name: String,
}

pub fn parse_parts(body: &str) -> Result<Vec<Part>> {
    Ok(serde_json::from_str(body)?)
}

pub fn parse_detail(body: &str) -> Result<DetailResponse> {
    Ok(serde_json::from_str(body)?)
}

pub fn detail_request_url(name: &str) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("name", name)
        .finish();
    format!("/detail?{}", query)
}

pub fn detail_page_url(name: &str) -> String {
    format!("/detail_page?name={}", urlencoding::encode(name))
}

/// Keys that open a focused card.
#[inline]
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " ")
}
