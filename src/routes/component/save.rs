use crate::db;
use crate::forms;
use crate::helpers::JsonResponse;
use crate::middleware::authentication::AuthUser;
use actix_web::{post, web, Responder, Result};
use serde_json::{json, Value};
use sqlx::PgPool;

#[tracing::instrument(name = "Toggle saved component.", skip(pg_pool))]
#[post("/save")]
pub async fn save_handler(
    user: AuthUser,
    form: web::Json<forms::SaveComponent>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let component_id = form
        .component_id
        .ok_or_else(|| JsonResponse::<Value>::build().bad_request("componentId is required"))?;

    db::component::fetch(pg_pool.get_ref(), component_id)
        .await
        .map_err(|err| JsonResponse::<Value>::build().internal_server_error(err))?
        .ok_or_else(|| JsonResponse::<Value>::build().not_found("Component not found"))?;

    let saved = db::user_component::exists(pg_pool.get_ref(), user.id(), component_id)
        .await
        .map_err(|err| JsonResponse::<Value>::build().internal_server_error(err))?;

    if saved {
        db::user_component::delete(pg_pool.get_ref(), user.id(), component_id)
            .await
            .map_err(|err| JsonResponse::<Value>::build().internal_server_error(err))?;

        return Ok(JsonResponse::build()
            .set_id(component_id)
            .set_item(json!({ "saved": false }))
            .ok("Component removed from saved items"));
    }

    db::user_component::insert(pg_pool.get_ref(), user.id(), component_id)
        .await
        .map_err(|err| JsonResponse::<Value>::build().internal_server_error(err))?;

    Ok(JsonResponse::build()
        .set_id(component_id)
        .set_item(json!({ "saved": true }))
        .ok("Component saved successfully"))
}
