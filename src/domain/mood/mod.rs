//! Mood records.
//!
//! A mood is a single self-reported entry from an upstream mood tracker:
//! a handful of mood labels, a valence score, and surrounding context.

mod errors;

pub use errors::MoodError;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{MoodId, Timestamp, ValidationError};

/// Lowest accepted valence score.
pub const MIN_VALENCE: i32 = -3;

/// Highest accepted valence score.
pub const MAX_VALENCE: i32 = 3;

/// The record of a mood.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mood {
    pub id: MoodId,
    /// Identifier in the upstream tracker.
    pub ext_id: i64,
    pub moods: Vec<String>,
    pub valence: i32,
    pub context: Vec<String>,
    /// Free-form note; private, never sent to API clients.
    #[serde(skip_serializing, default)]
    pub reason: String,
    pub timestamp: Timestamp,
}

/// Fields required to record a new mood.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMood {
    pub ext_id: i64,
    pub moods: Vec<String>,
    pub valence: i32,
    #[serde(default)]
    pub context: Vec<String>,
    #[serde(default)]
    pub reason: String,
    pub timestamp: Option<Timestamp>,
}

impl NewMood {
    /// Validates the input and assigns an identifier.
    pub fn into_mood(self) -> Result<Mood, ValidationError> {
        if self.moods.iter().all(|m| m.trim().is_empty()) {
            return Err(ValidationError::empty_field("moods"));
        }
        if !(MIN_VALENCE..=MAX_VALENCE).contains(&self.valence) {
            return Err(ValidationError::out_of_range(
                "valence",
                i64::from(MIN_VALENCE),
                i64::from(MAX_VALENCE),
                i64::from(self.valence),
            ));
        }

        Ok(Mood {
            id: MoodId::new(),
            ext_id: self.ext_id,
            moods: normalize(self.moods),
            valence: self.valence,
            context: normalize(self.context),
            reason: self.reason,
            timestamp: self.timestamp.unwrap_or_else(Timestamp::now),
        })
    }
}

fn normalize(labels: Vec<String>) -> Vec<String> {
    labels
        .into_iter()
        .map(|l| l.trim().to_lowercase())
        .filter(|l| !l.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_mood(valence: i32) -> NewMood {
        NewMood {
            ext_id: 42,
            moods: vec![" Happy".to_string(), "calm ".to_string()],
            valence,
            context: vec!["Work".to_string(), "".to_string()],
            reason: "shipped it".to_string(),
            timestamp: None,
        }
    }

    #[test]
    fn into_mood_normalizes_labels() {
        let mood = new_mood(2).into_mood().unwrap();
        assert_eq!(mood.moods, vec!["happy", "calm"]);
        assert_eq!(mood.context, vec!["work"]);
        assert_eq!(mood.ext_id, 42);
    }

    #[test]
    fn into_mood_rejects_out_of_range_valence() {
        let result = new_mood(7).into_mood();
        assert!(matches!(result, Err(ValidationError::OutOfRange { .. })));
    }

    #[test]
    fn into_mood_rejects_blank_moods() {
        let mut input = new_mood(0);
        input.moods = vec!["  ".to_string()];
        assert!(matches!(
            input.into_mood(),
            Err(ValidationError::EmptyField { .. })
        ));
    }

    #[test]
    fn reason_is_not_serialized() {
        let mood = new_mood(1).into_mood().unwrap();
        let json = serde_json::to_value(&mood).unwrap();
        assert!(json.get("reason").is_none());
        assert_eq!(json["extId"], 42);
    }

    #[test]
    fn new_mood_deserializes_with_defaults() {
        let input: NewMood =
            serde_json::from_str(r#"{"extId": 7, "moods": ["tired"], "valence": -1}"#).unwrap();
        assert!(input.context.is_empty());
        assert!(input.timestamp.is_none());
    }
}
