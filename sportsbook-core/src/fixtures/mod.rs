//! Wire shapes of the fixture documents
//!
//! These types mirror the bookmaker's pre-match and result feeds as stored on
//! disk. Only the fields the simulator reads are modelled; everything else in
//! the documents is ignored. Missing fields fall back to empty values, and
//! collections that are `null` in the feed are read as empty.

pub mod cricket;
pub mod volleyball;

use serde::{Deserialize, Deserializer};

/// Read `null` as the type's default value
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
