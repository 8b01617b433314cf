//! Serde helpers for loosely typed host values.

use serde::{Deserialize, Deserializer};

/// Deserialize a flag where an explicit `null` means `false`.
pub fn deserialize_null_as_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}
