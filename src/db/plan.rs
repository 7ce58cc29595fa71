use crate::models::Plan;
use sqlx::PgPool;
use tracing::Instrument;
use uuid::Uuid;

pub async fn fetch_all(pool: &PgPool) -> Result<Vec<Plan>, String> {
    let query_span = tracing::info_span!("Fetch plan catalog.");
    sqlx::query_as::<_, Plan>(
        r#"SELECT id, name, price, description, features, created_at
        FROM plans
        ORDER BY price ASC, name ASC"#,
    )
    .fetch_all(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to fetch plans, error: {:?}", err);
        "Internal Server Error".to_string()
    })
}

pub async fn fetch(pool: &PgPool, id: Uuid) -> Result<Option<Plan>, String> {
    let query_span = tracing::info_span!("Fetch plan by id.", plan_id = %id);
    sqlx::query_as::<_, Plan>(
        r#"SELECT id, name, price, description, features, created_at
        FROM plans
        WHERE id = $1"#,
    )
    .bind(id)
    .fetch_optional(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to fetch plan, error: {:?}", err);
        "Internal Server Error".to_string()
    })
}
