pub mod alert;
pub mod category;
pub mod comparison;
pub mod insight;
pub mod product;

pub use alert::*;
pub use category::*;
pub use comparison::*;
pub use insight::*;
pub use product::*;

use serde::{Deserialize, Deserializer};

/// Deserialize an optional object that the backend sends as `{}` when absent.
pub(crate) fn empty_object_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: serde::de::DeserializeOwned,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    match value {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::Object(map)) if map.is_empty() => Ok(None),
        Some(other) => serde_json::from_value(other)
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}
