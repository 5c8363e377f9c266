//! Pocket client: the source of unread articles.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{handle_response, ClientError};
use crate::config::Config;
use crate::models::{Article, PocketItem};

/// Body of a `/get` request.
#[derive(Debug, Serialize)]
struct GetRequest<'a> {
    consumer_key: &'a str,
    access_token: &'a str,
    state: &'static str,
    #[serde(rename = "detailType")]
    detail_type: &'static str,
}

#[derive(Debug, Deserialize)]
struct GetResponse {
    #[serde(default)]
    list: Value,
}

#[derive(Debug, Clone)]
pub struct PocketClient {
    base_url: String,
    consumer_key: String,
    access_token: String,
    client: Client,
}

impl PocketClient {
    pub fn new(
        base_url: impl Into<String>,
        consumer_key: impl Into<String>,
        access_token: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            consumer_key: consumer_key.into(),
            access_token: access_token.into(),
            client: Client::new(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            &config.pocket_url,
            &config.pocket_consumer_key,
            &config.pocket_access_token,
        )
    }

    /// Fetch every unread item in one request.
    ///
    /// Order of the result follows the response map's iteration order and
    /// carries no meaning.
    pub async fn fetch_unread_articles(&self) -> Result<Vec<Article>, ClientError> {
        let body = GetRequest {
            consumer_key: &self.consumer_key,
            access_token: &self.access_token,
            state: "unread",
            detail_type: "complete",
        };

        let response = self
            .client
            .post(format!("{}/get", self.base_url))
            .header(reqwest::header::CONTENT_TYPE, "application/json; charset=UTF-8")
            .header("X-Accept", "application/json")
            .json(&body)
            .send()
            .await?;

        let parsed: GetResponse = handle_response(response).await?;
        let items = items_from_list(parsed.list)?;
        tracing::debug!("Fetched {} unread articles", items.len());

        Ok(items.into_iter().map(Article::from).collect())
    }
}

/// Flatten Pocket's `list` field into item records.
///
/// The field is an id-keyed object when there are items, and an empty array
/// (or nothing at all) when there are none. An entry that is not an item
/// record becomes an empty item with a zero word count.
fn items_from_list(list: Value) -> Result<Vec<PocketItem>, ClientError> {
    let values: Vec<Value> = match list {
        Value::Null => return Ok(Vec::new()),
        Value::Object(map) => map.into_iter().map(|(_, item)| item).collect(),
        Value::Array(items) => items,
        other => {
            return Err(ClientError::Malformed(format!(
                "expected `list` to be an object, got {}",
                other
            )))
        }
    };

    Ok(values
        .into_iter()
        .map(|item| {
            serde_json::from_value(item).unwrap_or_else(|e| {
                tracing::debug!("Unreadable Pocket item, counting it as empty: {}", e);
                PocketItem::default()
            })
        })
        .collect())
}
