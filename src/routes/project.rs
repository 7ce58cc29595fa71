use crate::db;
use crate::helpers::JsonResponse;
use crate::middleware::authentication::AuthUser;
use crate::models;
use actix_web::{get, web, Responder, Result};
use sqlx::PgPool;

#[tracing::instrument(name = "Get user's project list.", skip(pg_pool))]
#[get("")]
pub async fn list_handler(user: AuthUser, pg_pool: web::Data<PgPool>) -> Result<impl Responder> {
    db::project::fetch_by_user(pg_pool.get_ref(), user.id())
        .await
        .map_err(|err| JsonResponse::<models::Project>::build().internal_server_error(err))
        .map(|projects| JsonResponse::build().set_list(projects).ok("OK"))
}
