use crate::models::Project;
use sqlx::PgPool;
use tracing::Instrument;

pub async fn fetch_by_user(pool: &PgPool, user_id: &str) -> Result<Vec<Project>, String> {
    let query_span = tracing::info_span!("Fetch user projects.", user_id = %user_id);
    sqlx::query_as::<_, Project>(
        r#"SELECT id, user_id, name, description, thumbnail_url, created_at
        FROM projects
        WHERE user_id = $1
        ORDER BY created_at DESC"#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to fetch projects, error: {:?}", err);
        "Internal Server Error".to_string()
    })
}

pub async fn count_by_user(pool: &PgPool, user_id: &str) -> Result<i64, String> {
    let query_span = tracing::info_span!("Count user projects.");
    sqlx::query_scalar::<_, i64>(r#"SELECT COUNT(*) FROM projects WHERE user_id = $1"#)
        .bind(user_id)
        .fetch_one(pool)
        .instrument(query_span)
        .await
        .map_err(|err| {
            tracing::error!("Failed to count projects, error: {:?}", err);
            "Internal Server Error".to_string()
        })
}
