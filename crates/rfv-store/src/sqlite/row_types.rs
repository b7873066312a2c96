//! Row types for the three tables.
//!
//! Rows serialize directly as the HTTP wire shapes (snake_case fields).

use rfv_core::ValueKind;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A scheduled game session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionRow {
    /// Session ID (`sess_…`).
    pub id: String,
    /// Session title.
    pub title: String,
    /// When the session is scheduled to be played.
    pub scheduled_at: Option<String>,
    /// Free-text notes.
    pub notes: Option<String>,
    /// Creation timestamp.
    pub created_at: String,
}

/// One keyed attribute of a session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AttributeRow {
    /// Attribute ID (`attr_…`). Stable across upserts of the same key.
    pub id: String,
    /// Owning session.
    pub session_id: String,
    /// Key, unique per session.
    pub key: String,
    /// Arbitrary JSON value.
    pub value: Value,
    /// Kind derived from `value`.
    pub value_type: ValueKind,
    /// Refreshed on every write.
    pub updated_at: String,
}

/// A published recording document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RecordingRow {
    /// Recording ID (`rec_…`).
    pub id: String,
    /// Owning session.
    pub session_id: String,
    /// Document title.
    pub title: String,
    /// Summary text inserted into the document.
    pub summary: Option<String>,
    /// Externally issued document ID.
    pub doc_id: String,
    /// Shareable document URL.
    pub doc_url: String,
    /// Creation timestamp.
    pub created_at: String,
    /// Update timestamp (equal to `created_at`; recordings are immutable).
    pub updated_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn attribute_wire_shape() {
        let row = AttributeRow {
            id: "attr_1".into(),
            session_id: "sess_1".into(),
            key: "tags".into(),
            value: json!(["a", "b"]),
            value_type: ValueKind::Json,
            updated_at: "2025-11-28T19:00:00.000000Z".into(),
        };
        assert_eq!(
            serde_json::to_value(&row).unwrap(),
            json!({
                "id": "attr_1",
                "session_id": "sess_1",
                "key": "tags",
                "value": ["a", "b"],
                "value_type": "json",
                "updated_at": "2025-11-28T19:00:00.000000Z",
            })
        );
    }

    #[test]
    fn session_nulls_serialize() {
        let row = SessionRow {
            id: "sess_1".into(),
            title: "Session Zero".into(),
            scheduled_at: None,
            notes: None,
            created_at: "2025-11-28T19:00:00.000000Z".into(),
        };
        let value = serde_json::to_value(&row).unwrap();
        assert!(value["scheduled_at"].is_null());
        assert!(value["notes"].is_null());
    }
}
