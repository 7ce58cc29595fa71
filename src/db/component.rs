use crate::forms::ComponentQuery;
use crate::models::Component;
use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::Instrument;
use uuid::Uuid;

const COLUMNS: &str = "c.id, c.name, c.description, c.language_type, c.category, c.is_premium, \
    c.code, c.preview_url, c.github_repo_id, c.created_at";

/// Escapes LIKE wildcards so the search term is matched literally.
pub(crate) fn like_pattern(term: &str) -> String {
    let escaped = term
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{}%", escaped)
}

pub async fn query(pool: &PgPool, filter: &ComponentQuery) -> Result<Vec<Component>, String> {
    let query_span = tracing::info_span!("Query component catalog.", filter = ?filter);

    let mut builder: QueryBuilder<Postgres> =
        QueryBuilder::new(format!("SELECT {COLUMNS} FROM components c WHERE TRUE"));

    if let Some(language) = filter.language_type.as_deref().filter(|s| !s.is_empty()) {
        builder.push(" AND c.language_type = ").push_bind(language.to_string());
    }
    if let Some(is_premium) = filter.is_premium {
        builder.push(" AND c.is_premium = ").push_bind(is_premium);
    }
    if let Some(category) = filter.category.as_deref().filter(|s| !s.is_empty()) {
        builder.push(" AND c.category = ").push_bind(category.to_string());
    }
    if let Some(term) = filter.search_query.as_deref().filter(|s| !s.is_empty()) {
        let pattern = like_pattern(term);
        builder
            .push(" AND (c.name ILIKE ")
            .push_bind(pattern.clone())
            .push(" OR c.description ILIKE ")
            .push_bind(pattern)
            .push(")");
    }
    builder.push(" ORDER BY c.created_at DESC");

    builder
        .build_query_as::<Component>()
        .fetch_all(pool)
        .instrument(query_span)
        .await
        .map_err(|err| {
            tracing::error!("Failed to query components, error: {:?}", err);
            "Internal Server Error".to_string()
        })
}

pub async fn fetch(pool: &PgPool, id: Uuid) -> Result<Option<Component>, String> {
    let query_span = tracing::info_span!("Fetch component by id.", component_id = %id);
    let sql = format!("SELECT {COLUMNS} FROM components c WHERE c.id = $1");

    sqlx::query_as::<_, Component>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .instrument(query_span)
        .await
        .map_err(|err| {
            tracing::error!("Failed to fetch component, error: {:?}", err);
            "Internal Server Error".to_string()
        })
}

pub async fn fetch_by_language(
    pool: &PgPool,
    language_type: &str,
    id: Uuid,
) -> Result<Option<Component>, String> {
    let query_span = tracing::info_span!(
        "Fetch component by language and id.",
        language_type = %language_type,
        component_id = %id
    );
    let sql = format!("SELECT {COLUMNS} FROM components c WHERE c.id = $1 AND LOWER(c.language_type) = LOWER($2)");

    sqlx::query_as::<_, Component>(&sql)
        .bind(id)
        .bind(language_type)
        .fetch_optional(pool)
        .instrument(query_span)
        .await
        .map_err(|err| {
            tracing::error!("Failed to fetch component, error: {:?}", err);
            "Internal Server Error".to_string()
        })
}

pub async fn fetch_saved_by_user(pool: &PgPool, user_id: &str) -> Result<Vec<Component>, String> {
    let query_span = tracing::info_span!("Fetch saved components.", user_id = %user_id);
    let sql = format!(
        "SELECT {COLUMNS} FROM components c \
        JOIN user_components uc ON uc.component_id = c.id \
        WHERE uc.user_id = $1 \
        ORDER BY uc.created_at DESC"
    );

    sqlx::query_as::<_, Component>(&sql)
        .bind(user_id)
        .fetch_all(pool)
        .instrument(query_span)
        .await
        .map_err(|err| {
            tracing::error!("Failed to fetch saved components, error: {:?}", err);
            "Internal Server Error".to_string()
        })
}

pub async fn set_github_repo(
    pool: &PgPool,
    component_id: Uuid,
    repo_id: Uuid,
) -> Result<Option<Component>, String> {
    let query_span = tracing::info_span!(
        "Link component to repository.",
        component_id = %component_id,
        repo_id = %repo_id
    );
    let sql = format!(
        "UPDATE components c SET github_repo_id = $2 WHERE c.id = $1 RETURNING {COLUMNS}"
    );

    sqlx::query_as::<_, Component>(&sql)
        .bind(component_id)
        .bind(repo_id)
        .fetch_optional(pool)
        .instrument(query_span)
        .await
        .map_err(|err| {
            tracing::error!("Failed to link component to repository, error: {:?}", err);
            "Failed to link component to repository".to_string()
        })
}
