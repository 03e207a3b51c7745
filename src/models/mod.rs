//! API request/response types

pub mod song;

pub use song::{ApiResponse, SongCreatedData, SongData, SongsData};
