use chrono::NaiveDate;
use serde::{de::DeserializeOwned, Deserialize, Deserializer};
use serde_json::Value;

/// Numeric identifier assigned to people by the receipt store.
pub type PersonId = i64;

/// Identifies entities that expose a stable numeric identifier.
pub trait Identifiable {
    fn id(&self) -> i64;
}

/// Provides access to a human-friendly entity name.
pub trait NamedEntity {
    fn name(&self) -> &str;
}

/// Deserializes an optional list, treating both a missing field and `null` as empty.
pub(crate) fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Deserializes an optional value, treating `null` and `""` as absent.
pub(crate) fn empty_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(raw)) if raw.trim().is_empty() => Ok(None),
        Some(value) => T::deserialize(value)
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

/// Reads a `YYYY-MM-DD` date. Anything else, timestamps included, is `None`.
pub(crate) fn lenient_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(raw)) => NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok(),
        _ => None,
    })
}

// Re-export common dependencies so consumers can rely on this module as a façade.
pub use chrono;
pub use serde;
