use crate::db;
use crate::forms;
use crate::helpers::JsonResponse;
use crate::middleware::authentication::AuthUser;
use crate::models::{self, GITHUB_INTEGRATION};
use crate::services::AccessResolver;
use actix_web::{put, web, Responder, Result};
use sqlx::PgPool;
use uuid::Uuid;

#[tracing::instrument(name = "Link component to repository.", skip(pg_pool, resolver))]
#[put("/{id}/repository")]
pub async fn link_repository_handler(
    user: AuthUser,
    path: web::Path<(Uuid,)>,
    form: web::Json<forms::LinkRepository>,
    pg_pool: web::Data<PgPool>,
    resolver: web::Data<AccessResolver>,
) -> Result<impl Responder> {
    if !resolver.check_access(Some(user.id()), GITHUB_INTEGRATION).await {
        return Err(JsonResponse::<models::Component>::build()
            .forbidden("GitHub integration is not included in your plan"));
    }

    let (component_id,) = path.into_inner();

    db::github::fetch_repository(pg_pool.get_ref(), form.repo_id)
        .await
        .map_err(|err| JsonResponse::<models::Component>::build().internal_server_error(err))?
        .ok_or_else(|| JsonResponse::<models::Component>::build().not_found("Repository not found"))?;

    db::component::set_github_repo(pg_pool.get_ref(), component_id, form.repo_id)
        .await
        .map_err(|err| JsonResponse::<models::Component>::build().internal_server_error(err))?
        .map(|component| JsonResponse::build().set_item(component).ok("Repository linked"))
        .ok_or_else(|| JsonResponse::<models::Component>::build().not_found("Component not found"))
}
