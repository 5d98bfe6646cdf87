use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

/// One daily rating submission. Rows are append-only.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SurveyEntry {
    pub id: Uuid,
    pub user_id: String,
    pub date_taken: OffsetDateTime,
    pub rating: i32,
}

/// Inserts a new entry stamped with the current time. The unique daily index
/// on (user_id, UTC date) makes this fail on a same-day duplicate.
pub async fn insert(db: &PgPool, user_id: &str, rating: i32) -> Result<SurveyEntry, sqlx::Error> {
    sqlx::query_as::<_, SurveyEntry>(
        r#"
        INSERT INTO survey_entries (user_id, rating)
        VALUES ($1, $2)
        RETURNING id, user_id, date_taken, rating
        "#,
    )
    .bind(user_id)
    .bind(rating)
    .fetch_one(db)
    .await
}

pub async fn list_by_user(db: &PgPool, user_id: &str) -> Result<Vec<SurveyEntry>, sqlx::Error> {
    sqlx::query_as::<_, SurveyEntry>(
        r#"
        SELECT id, user_id, date_taken, rating
        FROM survey_entries
        WHERE user_id = $1
        ORDER BY date_taken ASC
        "#,
    )
    .bind(user_id)
    .fetch_all(db)
    .await
}

pub async fn latest_by_user(
    db: &PgPool,
    user_id: &str,
) -> Result<Option<SurveyEntry>, sqlx::Error> {
    sqlx::query_as::<_, SurveyEntry>(
        r#"
        SELECT id, user_id, date_taken, rating
        FROM survey_entries
        WHERE user_id = $1
        ORDER BY date_taken DESC
        LIMIT 1
        "#,
    )
    .bind(user_id)
    .fetch_optional(db)
    .await
}
