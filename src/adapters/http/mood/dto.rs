//! Request and response DTOs for mood endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Timestamp;
use crate::domain::mood::{Mood, NewMood};

/// Query string for `GET /moods`.
///
/// Kept as raw strings so malformed numbers become our own 400 response.
#[derive(Debug, Default, Deserialize)]
pub struct ListMoodsParams {
    pub limit: Option<String>,
    pub offset: Option<String>,
}

/// Body of `POST /moods`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMoodRequest {
    pub ext_id: i64,
    pub moods: Vec<String>,
    pub valence: i32,
    #[serde(default)]
    pub context: Vec<String>,
    #[serde(default)]
    pub reason: String,
    pub timestamp: Option<Timestamp>,
}

impl From<CreateMoodRequest> for NewMood {
    fn from(req: CreateMoodRequest) -> Self {
        NewMood {
            ext_id: req.ext_id,
            moods: req.moods,
            valence: req.valence,
            context: req.context,
            reason: req.reason,
            timestamp: req.timestamp,
        }
    }
}

/// A mood as returned to API clients. The private `reason` is omitted.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodResponse {
    pub id: String,
    pub ext_id: i64,
    pub moods: Vec<String>,
    pub valence: i32,
    pub context: Vec<String>,
    pub timestamp: Timestamp,
}

impl From<Mood> for MoodResponse {
    fn from(mood: Mood) -> Self {
        Self {
            id: mood.id.to_string(),
            ext_id: mood.ext_id,
            moods: mood.moods,
            valence: mood.valence,
            context: mood.context,
            timestamp: mood.timestamp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::MoodId;

    #[test]
    fn create_request_accepts_camel_case() {
        let req: CreateMoodRequest = serde_json::from_str(
            r#"{"extId": 3, "moods": ["calm"], "valence": 1, "context": ["home"]}"#,
        )
        .unwrap();

        let new_mood = NewMood::from(req);
        assert_eq!(new_mood.ext_id, 3);
        assert_eq!(new_mood.context, vec!["home"]);
        assert!(new_mood.reason.is_empty());
    }

    #[test]
    fn response_omits_reason() {
        let mood = Mood {
            id: MoodId::new(),
            ext_id: 1,
            moods: vec!["calm".to_string()],
            valence: 1,
            context: vec![],
            reason: "private".to_string(),
            timestamp: Timestamp::now(),
        };

        let json = serde_json::to_string(&MoodResponse::from(mood)).unwrap();

        assert!(!json.contains("private"));
        assert!(json.contains("\"extId\":1"));
    }
}
