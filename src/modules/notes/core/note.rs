use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::modules::notes::core::note_id::NoteId;

/// User-supplied payload of a note. Absent fields decode to their zero
/// value, empty strings are accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoteInfo {
    pub title: String,
    pub context: String,
    pub author: String,
    pub is_public: bool,
}

impl NoteInfo {
    /// Decodes a JSON object. Anything else, including an array, is rejected.
    pub fn from_json(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        match serde_json::from_slice::<serde_json::Value>(bytes)? {
            value @ serde_json::Value::Object(_) => serde_json::from_value(value),
            _ => Err(serde::de::Error::custom("note info must be a JSON object")),
        }
    }
}

/// A stored note. Built completely before it reaches the store and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    pub info: NoteInfo,
    pub created_at: DateTime<Utc>,
    // Always equal to created_at while notes cannot be edited.
    pub updated_at: DateTime<Utc>,
}

impl Note {
    pub fn new(id: NoteId, info: NoteInfo, now: DateTime<Utc>) -> Self {
        Self {
            id,
            info,
            created_at: now,
            updated_at: now,
        }
    }
}
