//! Serde helpers for the wire shapes the hosted store produces.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::errors::RestError;

/// Deserializes a to-one embedded resource.
///
/// Depending on how the store models the join, an embedded to-one resource
/// arrives either as a bare object or as a list with at most one element.
/// Both shapes decode to `Option<T>`; an empty list and `null` decode to
/// `None`.
pub fn one_or_many<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Embedded<T> {
        Many(Vec<T>),
        One(T),
    }

    Ok(match Option::<Embedded<T>>::deserialize(deserializer)? {
        None => None,
        Some(Embedded::One(row)) => Some(row),
        Some(Embedded::Many(rows)) => rows.into_iter().next(),
    })
}

/// Renders an enum (or any serializable scalar) as a filter parameter value,
/// using the same serde representation the stored column carries.
pub fn enum_param<T: Serialize>(value: &T) -> Result<String, RestError> {
    match serde_json::to_value(value) {
        Ok(Value::String(s)) => Ok(s),
        Ok(other) => Ok(other.to_string()),
        Err(e) => Err(RestError::Decode {
            relation: "filter".to_string(),
            message: e.to_string(),
        }),
    }
}
