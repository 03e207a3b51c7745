//! Songs repository
//!
//! Single-statement CRUD over the `songs` table. Existence checks for
//! get/update/delete rely on the returned row or the affected-row count.

use rand::Rng;
use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::db::models::{SongFields, SongFilter, SongRow, SongSummary};
use crate::errors::SongError;
use crate::metrics;

const ID_PREFIX: &str = "song-";
const ID_LENGTH: usize = 16;
const ID_ALPHABET: &[u8] = b"useandom-26T198340PX75pxJACKVERYMINDBUSHWOLF_GQZbfghjklqvwyzrict";

/// Generate a new song id: `song-` followed by 16 URL-safe random symbols
pub fn generate_song_id() -> String {
    let mut rng = rand::rng();
    let suffix: String = (0..ID_LENGTH)
        .map(|_| ID_ALPHABET[rng.random_range(0..ID_ALPHABET.len())] as char)
        .collect();
    format!("{}{}", ID_PREFIX, suffix)
}

/// Wrap a filter value for a case-insensitive "contains" match
fn contains_pattern(value: &str) -> String {
    format!("%{}%", value)
}

/// Build the listing query, appending one ILIKE predicate per set filter
pub fn build_list_query(filter: &SongFilter) -> QueryBuilder<'static, Postgres> {
    let mut query = QueryBuilder::new("SELECT id, title, performer FROM songs");
    let mut has_where = false;

    for (column, value) in [("title", filter.title()), ("performer", filter.performer())] {
        let Some(value) = value else { continue };

        query.push(if has_where { " AND " } else { " WHERE " });
        query.push(column);
        query.push(" ILIKE ");
        query.push_bind(contains_pattern(value));
        has_where = true;
    }

    query
}

/// PostgreSQL-backed song repository
#[derive(Clone)]
pub struct SongRepository {
    pool: PgPool,
}

impl SongRepository {
    /// Create a repository over a shared connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new song and return its generated id
    pub async fn create(&self, fields: &SongFields) -> Result<String, SongError> {
        let result = self.insert(fields).await;
        metrics::record("create", &result);
        result
    }

    async fn insert(&self, fields: &SongFields) -> Result<String, SongError> {
        let id = generate_song_id();

        let row: Option<(String,)> = sqlx::query_as(
            r#"
            INSERT INTO songs (id, title, year, genre, performer, duration, album_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id
            "#,
        )
        .bind(&id)
        .bind(&fields.title)
        .bind(fields.year)
        .bind(&fields.genre)
        .bind(&fields.performer)
        .bind(fields.duration)
        .bind(&fields.album_id)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some((inserted,)) if !inserted.is_empty() => {
                tracing::debug!("Inserted song {}", inserted);
                Ok(inserted)
            }
            _ => Err(SongError::Invariant("Failed to add song".to_string())),
        }
    }

    /// List song projections, optionally filtered by title and/or performer
    pub async fn list(&self, filter: &SongFilter) -> Result<Vec<SongSummary>, SongError> {
        let mut query = build_list_query(filter);
        let result = query
            .build_query_as::<SongSummary>()
            .fetch_all(&self.pool)
            .await
            .map_err(SongError::from);

        metrics::record("list", &result);
        result
    }

    /// Get the full record for one song
    pub async fn get_by_id(&self, id: &str) -> Result<SongRow, SongError> {
        let result = sqlx::query_as::<_, SongRow>(
            r#"
            SELECT id, title, year, genre, performer, duration, album_id
            FROM songs
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(SongError::from)
        .and_then(|row| row.ok_or_else(|| SongError::NotFound("Song not found".to_string())));

        metrics::record("get_by_id", &result);
        result
    }

    /// Replace every mutable field of an existing song
    pub async fn update(&self, id: &str, fields: &SongFields) -> Result<(), SongError> {
        let result = sqlx::query(
            r#"
            UPDATE songs SET
                title = $2,
                year = $3,
                genre = $4,
                performer = $5,
                duration = $6,
                album_id = $7
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(&fields.title)
        .bind(fields.year)
        .bind(&fields.genre)
        .bind(&fields.performer)
        .bind(fields.duration)
        .bind(&fields.album_id)
        .execute(&self.pool)
        .await
        .map_err(SongError::from)
        .and_then(|done| {
            if done.rows_affected() == 0 {
                Err(SongError::NotFound(
                    "Failed to update song: id not found".to_string(),
                ))
            } else {
                Ok(())
            }
        });

        metrics::record("update", &result);
        result
    }

    /// Delete a song by id
    pub async fn delete(&self, id: &str) -> Result<(), SongError> {
        let result = sqlx::query("DELETE FROM songs WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(SongError::from)
            .and_then(|done| {
                if done.rows_affected() == 0 {
                    Err(SongError::NotFound(
                        "Failed to delete song: id not found".to_string(),
                    ))
                } else {
                    Ok(())
                }
            });

        metrics::record("delete", &result);
        result
    }
}
