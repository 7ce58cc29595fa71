use crate::connectors::RepositoryInfo;
use crate::models::{GithubCollaborator, GithubRepository};
use sqlx::PgPool;
use tracing::Instrument;
use uuid::Uuid;

pub async fn insert_repository(
    pool: &PgPool,
    repo: &RepositoryInfo,
) -> Result<GithubRepository, String> {
    let query_span = tracing::info_span!("Store GitHub repository.", repo = %repo.name);
    sqlx::query_as::<_, GithubRepository>(
        r#"INSERT INTO github_repositories (repo_name, repo_owner, repo_url, is_private, github_repo_id)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, repo_name, repo_owner, repo_url, is_private, github_repo_id, created_at"#,
    )
    .bind(&repo.name)
    .bind(&repo.owner.login)
    .bind(&repo.html_url)
    .bind(repo.private)
    .bind(repo.id.to_string())
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to store repository, error: {:?}", err);
        "Failed to store repository data".to_string()
    })
}

pub async fn fetch_repository(pool: &PgPool, id: Uuid) -> Result<Option<GithubRepository>, String> {
    let query_span = tracing::info_span!("Fetch GitHub repository.", repo_id = %id);
    sqlx::query_as::<_, GithubRepository>(
        r#"SELECT id, repo_name, repo_owner, repo_url, is_private, github_repo_id, created_at
        FROM github_repositories
        WHERE id = $1"#,
    )
    .bind(id)
    .fetch_optional(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to fetch repository, error: {:?}", err);
        "Internal Server Error".to_string()
    })
}

pub async fn fetch_repositories(pool: &PgPool) -> Result<Vec<GithubRepository>, String> {
    let query_span = tracing::info_span!("Fetch GitHub repositories.");
    sqlx::query_as::<_, GithubRepository>(
        r#"SELECT id, repo_name, repo_owner, repo_url, is_private, github_repo_id, created_at
        FROM github_repositories
        ORDER BY created_at DESC"#,
    )
    .fetch_all(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to fetch repositories, error: {:?}", err);
        "Failed to fetch repositories".to_string()
    })
}

pub async fn insert_collaborator(
    pool: &PgPool,
    repository_id: Uuid,
    email: &str,
    permission: &str,
) -> Result<GithubCollaborator, String> {
    let query_span = tracing::info_span!("Store GitHub collaborator.", repo_id = %repository_id);
    sqlx::query_as::<_, GithubCollaborator>(
        r#"INSERT INTO github_collaborators (repository_id, email, permission_level)
        VALUES ($1, $2, $3)
        RETURNING id, repository_id, email, permission_level, created_at"#,
    )
    .bind(repository_id)
    .bind(email)
    .bind(permission)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to store collaborator, error: {:?}", err);
        "Failed to store collaborator data".to_string()
    })
}

pub async fn fetch_collaborators(
    pool: &PgPool,
    repository_id: Uuid,
) -> Result<Vec<GithubCollaborator>, String> {
    let query_span = tracing::info_span!("Fetch GitHub collaborators.", repo_id = %repository_id);
    sqlx::query_as::<_, GithubCollaborator>(
        r#"SELECT id, repository_id, email, permission_level, created_at
        FROM github_collaborators
        WHERE repository_id = $1
        ORDER BY created_at ASC"#,
    )
    .bind(repository_id)
    .fetch_all(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to fetch collaborators, error: {:?}", err);
        "Failed to fetch collaborators".to_string()
    })
}
