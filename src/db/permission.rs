use crate::models::AccessPermission;
use sqlx::PgPool;
use tracing::Instrument;
use uuid::Uuid;

pub async fn fetch(
    pool: &PgPool,
    plan_id: Uuid,
    resource_type: &str,
) -> Result<Option<AccessPermission>, String> {
    let query_span = tracing::info_span!(
        "Fetch access permission.",
        plan_id = %plan_id,
        resource_type = %resource_type
    );
    sqlx::query_as::<_, AccessPermission>(
        r#"SELECT plan_id, resource_type, can_access
        FROM access_permissions
        WHERE plan_id = $1 AND resource_type = $2"#,
    )
    .bind(plan_id)
    .bind(resource_type)
    .fetch_optional(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to fetch permission, error: {:?}", err);
        "Internal Server Error".to_string()
    })
}

pub async fn fetch_by_plans(
    pool: &PgPool,
    plan_ids: &[Uuid],
) -> Result<Vec<AccessPermission>, String> {
    let query_span = tracing::info_span!("Fetch access permissions of plans.");
    sqlx::query_as::<_, AccessPermission>(
        r#"SELECT plan_id, resource_type, can_access
        FROM access_permissions
        WHERE plan_id = ANY($1)
        ORDER BY resource_type"#,
    )
    .bind(plan_ids)
    .fetch_all(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to fetch permissions, error: {:?}", err);
        "Internal Server Error".to_string()
    })
}
