use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::models::Submission;

/// Insert one submission. The id and timestamps are assigned here; a UUIDv7
/// id keeps insertion order recoverable even when timestamps collide.
pub async fn create(
    pool: &SqlitePool,
    kind: &str,
    data: &serde_json::Value,
) -> Result<Submission, sqlx::Error> {
    let now = Utc::now();

    sqlx::query_as::<_, Submission>(
        "INSERT INTO submissions (id, kind, data, created_at, updated_at)
         VALUES ($1, $2, $3, $4, $5) RETURNING *",
    )
    .bind(Uuid::now_v7())
    .bind(kind)
    .bind(data)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await
}

/// List submissions in insertion order, optionally restricted to one
/// discriminator. No pagination; callers get the full set.
pub async fn list(
    pool: &SqlitePool,
    kind: Option<&str>,
) -> Result<Vec<Submission>, sqlx::Error> {
    match kind {
        Some(kind) => {
            sqlx::query_as::<_, Submission>(
                "SELECT * FROM submissions WHERE kind = $1 ORDER BY created_at, id",
            )
            .bind(kind)
            .fetch_all(pool)
            .await
        }
        None => {
            sqlx::query_as::<_, Submission>("SELECT * FROM submissions ORDER BY created_at, id")
                .fetch_all(pool)
                .await
        }
    }
}
