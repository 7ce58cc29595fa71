use crate::db;
use crate::helpers::JsonResponse;
use crate::middleware::authentication::AuthUser;
use crate::services::AccessResolver;
use crate::views;
use actix_web::{get, web, Responder, Result};
use sqlx::PgPool;

#[tracing::instrument(name = "Get profile of the user.", skip(pg_pool, resolver))]
#[get("")]
pub async fn profile_handler(
    user: AuthUser,
    pg_pool: web::Data<PgPool>,
    resolver: web::Data<AccessResolver>,
) -> Result<impl Responder> {
    let saved_components = db::user_component::count_by_user(pg_pool.get_ref(), user.id())
        .await
        .map_err(|err| JsonResponse::<views::profile::Profile>::build().internal_server_error(err))?;
    let projects = db::project::count_by_user(pg_pool.get_ref(), user.id())
        .await
        .map_err(|err| JsonResponse::<views::profile::Profile>::build().internal_server_error(err))?;
    let plan = resolver.active_plan(Some(user.id())).await;

    let profile = views::profile::Profile {
        id: user.id.clone(),
        email: user.email.clone(),
        plan,
        saved_components,
        projects,
    };

    Ok(JsonResponse::build()
        .set_id(&profile.id)
        .set_item(profile)
        .ok("OK"))
}
