use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::actions::ActionParams;

/// A parameter type that has a canonical object form reachable from bare text.
pub trait Canonical: Sized {
    fn from_text(text: String) -> Self;

    /// Promotes a list of messages, for types that have a list form.
    fn from_texts(texts: Vec<String>) -> Option<Self> {
        let _ = texts;
        None
    }
}

/// A field that callers may fill with bare text or with an already built
/// parameter object. Bare text is promoted before it is stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StringOrPrebuilt<T> {
    Text(String),
    Prebuilt(T),
}

impl<T: Canonical> StringOrPrebuilt<T> {
    pub fn into_canonical(self) -> T {
        match self {
            StringOrPrebuilt::Text(text) => T::from_text(text),
            StringOrPrebuilt::Prebuilt(value) => value,
        }
    }
}

impl<T> From<&str> for StringOrPrebuilt<T> {
    fn from(text: &str) -> Self {
        StringOrPrebuilt::Text(text.to_string())
    }
}

impl<T> From<String> for StringOrPrebuilt<T> {
    fn from(text: String) -> Self {
        StringOrPrebuilt::Text(text)
    }
}

/// Brings a loose option value into the canonical form of `T`.
///
/// Accepts bare text, a list of texts where `T` has a list form, the
/// parameter object itself, or the object still wrapped under its own
/// name (`{"choices": {...}}`).
pub(crate) fn to_canonical<T>(value: Value) -> Result<T, serde_json::Error>
where
    T: Canonical + ActionParams,
{
    match value {
        Value::String(text) => Ok(T::from_text(text)),
        Value::Array(items) if items.iter().all(Value::is_string) => {
            let texts = items
                .into_iter()
                .filter_map(|item| match item {
                    Value::String(text) => Some(text),
                    _ => None,
                })
                .collect::<Vec<_>>();
            T::from_texts(texts)
                .ok_or_else(|| serde_json::Error::custom("a list of texts is not accepted here"))
        }
        Value::Object(mut map) if map.len() == 1 && map.contains_key(T::NAME) => {
            let inner = map.remove(T::NAME).unwrap_or(Value::Null);
            serde_json::from_value(inner)
        }
        other => serde_json::from_value(other),
    }
}

pub(crate) fn canonical<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Canonical + ActionParams,
{
    let value = Value::deserialize(deserializer)?;
    to_canonical(value).map_err(D::Error::custom)
}

pub(crate) fn canonical_opt<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Canonical + ActionParams,
{
    match Option::<Value>::deserialize(deserializer)? {
        Some(value) => to_canonical(value).map(Some).map_err(D::Error::custom),
        None => Ok(None),
    }
}
