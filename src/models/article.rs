use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// An unread article, as far as selection and task formatting care.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    /// Pocket's resolved item id, used to build the reader deep link.
    pub id: String,
    pub title: String,
    /// Estimated effort. Missing or non-numeric counts are `0`.
    pub word_count: u64,
}

impl Article {
    pub fn new(id: impl Into<String>, title: impl Into<String>, word_count: u64) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            word_count,
        }
    }
}

/// An item record from Pocket's `/v3/get` response.
///
/// Pocket serialises most numbers as strings and omits fields freely, so every
/// field is lenient.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PocketItem {
    #[serde(default, deserialize_with = "lenient_string")]
    pub resolved_id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub resolved_title: String,
    #[serde(default, deserialize_with = "lenient_count")]
    pub word_count: u64,
}

impl From<PocketItem> for Article {
    fn from(item: PocketItem) -> Self {
        Self {
            id: item.resolved_id,
            title: item.resolved_title,
            word_count: item.word_count,
        }
    }
}

pub(crate) fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => s,
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    })
}

fn lenient_count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    Ok(Option::<Value>::deserialize(deserializer)?
        .as_ref()
        .map(coerce_word_count)
        .unwrap_or(0))
}

/// Coerce a raw `word_count` value into a non-negative count.
///
/// Strings are read up to the first non-digit (`"12abc"` is 12), fractional
/// numbers are truncated, and anything negative or unreadable is `0`.
pub fn coerce_word_count(value: &Value) -> u64 {
    match value {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64))
            .unwrap_or(0),
        Value::String(s) => leading_digits(s),
        _ => 0,
    }
}

fn leading_digits(s: &str) -> u64 {
    let s = s.trim_start();
    let s = s.strip_prefix('+').unwrap_or(s);
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    s[..end].parse().unwrap_or(0)
}
