use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// A note as the backend stores it. The server owns `id` and `updated_at`;
/// everything else round-trips through the editor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: i64,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub event_date: Option<String>,
    #[serde(default)]
    pub event_time: Option<String>,
    pub updated_at: String,
}

impl Note {
    /// Case-insensitive substring match over title and content.
    /// Used when server-side search is unavailable.
    pub fn matches(&self, query: &str) -> bool {
        let q = query.to_lowercase();
        self.title.to_lowercase().contains(&q) || self.content.to_lowercase().contains(&q)
    }

    /// Parse the server timestamp. The backend emits ISO-8601 but not always
    /// with an offset, so try RFC 3339 first and fall back to a naive parse
    /// interpreted as UTC.
    pub fn updated_at_utc(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.updated_at)
    }

    /// Timestamp formatted for display, or the raw string if unparseable.
    pub fn updated_at_display(&self) -> String {
        match self.updated_at_utc() {
            Some(dt) => dt.format("%Y-%m-%d %H:%M").to_string(),
            None => self.updated_at.clone(),
        }
    }
}

fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateNoteRequest {
    pub title: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// Partial update: fields left as `None` are not sent, and the server
/// keeps its current values for them.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateNoteRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_time: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateRequest {
    pub target_lang: String,
}

/// Translate text that has no server-side note yet (an unsaved draft).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateTextRequest {
    pub target_lang: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateResponse {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub original_id: Option<i64>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateNoteRequest {
    pub input: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(title: &str, content: &str) -> Note {
        Note {
            id: 1,
            title: title.to_string(),
            content: content.to_string(),
            tags: vec![],
            event_date: None,
            event_time: None,
            updated_at: "2024-05-01T12:00:00".to_string(),
        }
    }

    #[test]
    fn test_matches_is_case_insensitive() {
        let note = sample("Grocery List", "Buy milk and eggs");
        assert!(note.matches("grocery"));
        assert!(note.matches("MILK"));
        assert!(!note.matches("meeting"));
    }

    #[test]
    fn test_matches_searches_content() {
        let note = sample("Untitled", "call the dentist");
        assert!(note.matches("dentist"));
    }

    #[test]
    fn test_timestamp_parses_naive_iso() {
        let note = sample("a", "b");
        let dt = note.updated_at_utc().unwrap();
        assert_eq!(dt.format("%Y-%m-%d %H:%M").to_string(), "2024-05-01 12:00");
    }

    #[test]
    fn test_timestamp_parses_rfc3339_and_fractional() {
        let mut note = sample("a", "b");
        note.updated_at = "2024-05-01T12:00:00Z".to_string();
        assert!(note.updated_at_utc().is_some());

        note.updated_at = "2024-05-01T12:00:00.123456".to_string();
        assert!(note.updated_at_utc().is_some());
    }

    #[test]
    fn test_timestamp_display_falls_back_to_raw() {
        let mut note = sample("a", "b");
        note.updated_at = "not a date".to_string();
        assert_eq!(note.updated_at_display(), "not a date");
    }

    #[test]
    fn test_note_deserializes_wire_shape() {
        let json = r#"{
            "id": 7,
            "title": "Lunch",
            "content": "with Bob",
            "tags": ["food"],
            "eventDate": "2024-06-01",
            "eventTime": null,
            "updatedAt": "2024-05-01T12:00:00"
        }"#;
        let note: Note = serde_json::from_str(json).unwrap();
        assert_eq!(note.id, 7);
        assert_eq!(note.tags, vec!["food"]);
        assert_eq!(note.event_date.as_deref(), Some("2024-06-01"));
        assert_eq!(note.event_time, None);
    }

    #[test]
    fn test_note_deserializes_without_optional_fields() {
        let json = r#"{"id":1,"title":"t","content":"c","updatedAt":"2024-01-01T00:00:00Z"}"#;
        let note: Note = serde_json::from_str(json).unwrap();
        assert!(note.tags.is_empty());
        assert_eq!(note.event_date, None);
    }

    #[test]
    fn test_update_request_skips_unset_fields() {
        let req = UpdateNoteRequest {
            title: Some("New".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_string(&req).unwrap();
        assert_eq!(json, r#"{"title":"New"}"#);
    }

    #[test]
    fn test_translate_request_uses_camel_case() {
        let req = TranslateRequest {
            target_lang: "fr".to_string(),
        };
        let json = serde_json::to_string(&req).unwrap();
        assert_eq!(json, r#"{"targetLang":"fr"}"#);
    }
}
