//! Serde support for patch payloads.

use serde::{Deserialize, Deserializer};

/// Distinguish an absent nullable field from an explicit `null`.
///
/// Used with `#[serde(default, deserialize_with = "crate::patch::double_option")]`:
/// a missing key stays `None`, `null` becomes `Some(None)`.
pub fn double_option<'de, T, D>(de: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(de).map(Some)
}
