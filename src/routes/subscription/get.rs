use crate::helpers::JsonResponse;
use crate::middleware::authentication::AuthUser;
use crate::models;
use crate::services::AccessResolver;
use actix_web::{get, web, Responder, Result};

#[tracing::instrument(name = "Get active plan of the user.", skip(resolver))]
#[get("")]
pub async fn active_plan_handler(
    user: AuthUser,
    resolver: web::Data<AccessResolver>,
) -> Result<impl Responder> {
    match resolver.active_plan(Some(user.id())).await {
        Some(plan) => Ok(JsonResponse::build().set_id(plan.id).set_item(plan).ok("OK")),
        None => Err(JsonResponse::<models::Plan>::build().not_found("No active subscription")),
    }
}
