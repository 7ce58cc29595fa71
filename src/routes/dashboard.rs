use crate::db;
use crate::helpers::JsonResponse;
use crate::middleware::authentication::AuthUser;
use crate::services::AccessResolver;
use crate::views;
use actix_web::{get, web, Responder, Result};
use sqlx::PgPool;

#[tracing::instrument(name = "List saved components of the user.", skip(pg_pool, resolver))]
#[get("/components")]
pub async fn saved_components_handler(
    user: AuthUser,
    pg_pool: web::Data<PgPool>,
    resolver: web::Data<AccessResolver>,
) -> Result<impl Responder> {
    let components = db::component::fetch_saved_by_user(pg_pool.get_ref(), user.id())
        .await
        .map_err(|err| {
            JsonResponse::<views::component::Listed>::build().internal_server_error(err)
        })?;

    let has_active_subscription = resolver.has_active_subscription(Some(user.id())).await;
    let list = super::component::listing(resolver.get_ref(), Some(user.id()), components).await;

    Ok(JsonResponse::build()
        .set_list(list)
        .set_meta(serde_json::json!({
            "has_active_subscription": has_active_subscription,
        }))
        .ok("OK"))
}
