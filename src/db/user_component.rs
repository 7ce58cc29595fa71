use sqlx::PgPool;
use tracing::Instrument;
use uuid::Uuid;

pub async fn exists(pool: &PgPool, user_id: &str, component_id: Uuid) -> Result<bool, String> {
    let query_span = tracing::info_span!("Check saved component.");
    sqlx::query_scalar::<_, bool>(
        r#"SELECT EXISTS(SELECT 1 FROM user_components WHERE user_id = $1 AND component_id = $2)"#,
    )
    .bind(user_id)
    .bind(component_id)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to check saved component, error: {:?}", err);
        "Internal Server Error".to_string()
    })
}

pub async fn insert(pool: &PgPool, user_id: &str, component_id: Uuid) -> Result<(), String> {
    let query_span = tracing::info_span!("Save component for user.");
    sqlx::query(
        r#"INSERT INTO user_components (user_id, component_id)
        VALUES ($1, $2)
        ON CONFLICT (user_id, component_id) DO NOTHING"#,
    )
    .bind(user_id)
    .bind(component_id)
    .execute(pool)
    .instrument(query_span)
    .await
    .map(|_| ())
    .map_err(|err| {
        tracing::error!("Failed to save component, error: {:?}", err);
        "Failed to save component".to_string()
    })
}

pub async fn delete(pool: &PgPool, user_id: &str, component_id: Uuid) -> Result<(), String> {
    let query_span = tracing::info_span!("Remove saved component.");
    sqlx::query(r#"DELETE FROM user_components WHERE user_id = $1 AND component_id = $2"#)
        .bind(user_id)
        .bind(component_id)
        .execute(pool)
        .instrument(query_span)
        .await
        .map(|_| ())
        .map_err(|err| {
            tracing::error!("Failed to remove saved component, error: {:?}", err);
            "Failed to remove saved component".to_string()
        })
}

pub async fn count_by_user(pool: &PgPool, user_id: &str) -> Result<i64, String> {
    let query_span = tracing::info_span!("Count saved components.");
    sqlx::query_scalar::<_, i64>(r#"SELECT COUNT(*) FROM user_components WHERE user_id = $1"#)
        .bind(user_id)
        .fetch_one(pool)
        .instrument(query_span)
        .await
        .map_err(|err| {
            tracing::error!("Failed to count saved components, error: {:?}", err);
            "Internal Server Error".to_string()
        })
}
