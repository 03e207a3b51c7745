//! Database repositories
//!
//! Repository pattern for database access, separating data access logic
//! from request handling.

pub mod songs;

// Re-export commonly used items
pub use songs::SongRepository;
