use crate::db;
use crate::helpers::JsonResponse;
use crate::models;
use actix_web::{get, web, Responder, Result};
use sqlx::PgPool;

#[tracing::instrument(name = "List subscription plans.", skip(pg_pool))]
#[get("")]
pub async fn list_handler(pg_pool: web::Data<PgPool>) -> Result<impl Responder> {
    db::plan::fetch_all(pg_pool.get_ref())
        .await
        .map_err(|err| JsonResponse::<models::Plan>::build().internal_server_error(err))
        .map(|plans| JsonResponse::build().set_list(plans).ok("OK"))
}
