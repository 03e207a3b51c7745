use serde::Serialize;

use crate::db::models::{SongRow, SongSummary};

/// Response envelope shared by all song endpoints
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            status: "success",
            message: None,
            data: Some(data),
        }
    }

    pub fn with_message(mut self, message: &str) -> Self {
        self.message = Some(message.to_string());
        self
    }
}

impl ApiResponse<()> {
    /// Success envelope carrying only a message
    pub fn message(message: &str) -> Self {
        Self {
            status: "success",
            message: Some(message.to_string()),
            data: None,
        }
    }
}

/// Data for a created song
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SongCreatedData {
    pub song_id: String,
}

/// Data for a song listing
#[derive(Debug, Serialize)]
pub struct SongsData {
    pub songs: Vec<SongSummary>,
}

/// Data for a single song
#[derive(Debug, Serialize)]
pub struct SongData {
    pub song: SongRow,
}
