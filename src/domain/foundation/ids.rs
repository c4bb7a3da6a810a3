//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::ValidationError;

/// Unique identifier for a mood record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MoodId(Uuid);

impl MoodId {
    /// Creates a new random MoodId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a MoodId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for MoodId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for MoodId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for MoodId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim())
            .map(Self)
            .map_err(|e| ValidationError::invalid_format("id", e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_ids_are_unique() {
        assert_ne!(MoodId::new(), MoodId::new());
    }

    #[test]
    fn parses_from_string() {
        let id = MoodId::new();
        let parsed: MoodId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn rejects_malformed_string() {
        let result = "not-a-uuid".parse::<MoodId>();
        assert!(matches!(result, Err(ValidationError::InvalidFormat { .. })));
    }
}
