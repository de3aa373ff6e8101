use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;

/// Identifier types of persisted records.
///
/// Identifiers travel through URLs (`/form/{id}`, `/submission/{id}`) as text,
/// so every id type must round-trip through a string.
pub trait AggregateId:
    Clone + Copy + PartialEq + Eq + Hash + Serialize + DeserializeOwned + std::fmt::Debug
{
    /// Render the id for a URL segment
    fn as_string(&self) -> String;

    /// Parse an id taken from a URL segment
    fn from_string(s: &str) -> Result<Self, String>;
}
