//! Database row types for PostgreSQL
//!
//! These types map directly to rows of the `songs` table and are
//! serialized as-is in API responses.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ============================================================================
// Database Row Types
// ============================================================================

/// Full song row from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SongRow {
    pub id: String,
    pub title: String,
    pub year: i32,
    pub genre: String,
    pub performer: String,
    pub duration: Option<i32>,
    pub album_id: Option<String>,
}

/// Lightweight projection returned by song listings
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct SongSummary {
    pub id: String,
    pub title: String,
    pub performer: String,
}

// ============================================================================
// Insert/Update Types
// ============================================================================

/// Mutable song fields, written wholesale on insert and update
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SongFields {
    pub title: String,
    pub year: i32,
    pub genre: String,
    pub performer: String,
    #[serde(default)]
    pub duration: Option<i32>,
    #[serde(default)]
    pub album_id: Option<String>,
}

/// Optional substring filters for song listings
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SongFilter {
    pub title: Option<String>,
    pub performer: Option<String>,
}

impl SongFilter {
    /// Title filter, treating an empty value as unset
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref().filter(|t| !t.is_empty())
    }

    /// Performer filter, treating an empty value as unset
    pub fn performer(&self) -> Option<&str> {
        self.performer.as_deref().filter(|p| !p.is_empty())
    }
}
