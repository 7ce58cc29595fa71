use crate::configuration::Settings;
use crate::db;
use crate::forms;
use crate::helpers::JsonResponse;
use crate::middleware::authentication::AuthUser;
use crate::models;
use actix_web::{post, web, Responder, Result};
use serde_valid::Validate;
use sqlx::PgPool;

#[tracing::instrument(name = "Upsert subscription.", skip(pg_pool, settings))]
#[post("")]
pub async fn upsert_handler(
    user: AuthUser,
    form: web::Json<forms::UpsertSubscription>,
    pg_pool: web::Data<PgPool>,
    settings: web::Data<Settings>,
) -> Result<impl Responder> {
    let form = form.into_inner();
    if let Err(errors) = form.validate() {
        return Err(JsonResponse::<models::Subscription>::build().form_error(errors.to_string()));
    }

    let plan_id = form.plan_id.ok_or_else(|| {
        JsonResponse::<models::Subscription>::build().bad_request("planId is required")
    })?;

    db::plan::fetch(pg_pool.get_ref(), plan_id)
        .await
        .map_err(|err| JsonResponse::<models::Subscription>::build().internal_server_error(err))?
        .ok_or_else(|| JsonResponse::<models::Subscription>::build().not_found("Plan not found"))?;

    let subscription = db::subscription::upsert(
        pg_pool.get_ref(),
        user.id(),
        plan_id,
        form.stripe_subscription_id.as_deref(),
        form.status(),
        settings.subscription.period_days,
    )
    .await
    .map_err(|err| JsonResponse::<models::Subscription>::build().internal_server_error(err))?;

    Ok(JsonResponse::build()
        .set_id(subscription.id)
        .set_item(subscription)
        .ok("Subscription saved"))
}
