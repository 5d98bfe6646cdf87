use sqlx::PgPool;
use tracing::info;

use super::repo::{self, SurveyEntry};
use crate::error::ApiError;

/// Records today's rating for the user. The unique daily index is the
/// authority on duplicates, so two concurrent submissions cannot both land.
pub async fn submit(db: &PgPool, user_id: &str, rating: i32) -> Result<SurveyEntry, ApiError> {
    let entry = repo::insert(db, user_id, rating).await.map_err(|e| {
        if is_unique_violation(&e) {
            ApiError::Conflict("You have already submitted your survey for today!".into())
        } else {
            ApiError::Database(e)
        }
    })?;
    info!(user_id = %entry.user_id, entry_id = %entry.id, rating = entry.rating, "survey entry recorded");
    Ok(entry)
}

/// All entries for the user, ascending by submission time.
pub async fn history(db: &PgPool, user_id: &str) -> Result<Vec<SurveyEntry>, ApiError> {
    Ok(repo::list_by_user(db, user_id).await?)
}

/// The most recent entry, if any.
pub async fn latest(db: &PgPool, user_id: &str) -> Result<Option<SurveyEntry>, ApiError> {
    Ok(repo::latest_by_user(db, user_id).await?)
}

fn is_unique_violation(e: &sqlx::Error) -> bool {
    matches!(e, sqlx::Error::Database(db) if db.is_unique_violation())
}
