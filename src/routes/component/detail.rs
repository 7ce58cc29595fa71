use crate::db;
use crate::helpers::JsonResponse;
use crate::middleware::authentication::AuthUser;
use crate::models::component_resource_type;
use crate::services::AccessResolver;
use crate::views;
use actix_web::{get, web, Responder, Result};
use sqlx::PgPool;
use uuid::Uuid;

#[tracing::instrument(name = "Get component.", skip(pg_pool, resolver))]
#[get("/{language}/{id}")]
pub async fn detail_handler(
    user: Option<AuthUser>,
    path: web::Path<(String, Uuid)>,
    pg_pool: web::Data<PgPool>,
    resolver: web::Data<AccessResolver>,
) -> Result<impl Responder> {
    let (language, id) = path.into_inner();

    let component = db::component::fetch_by_language(pg_pool.get_ref(), &language, id)
        .await
        .map_err(|err| JsonResponse::<views::component::Detail>::build().internal_server_error(err))?
        .ok_or_else(|| {
            JsonResponse::<views::component::Detail>::build().not_found("Component not found")
        })?;

    if component.is_premium {
        let Some(user) = user.as_ref() else {
            return Err(JsonResponse::<views::component::Detail>::build()
                .set_meta(serde_json::json!({ "redirect": "/sign-in" }))
                .unauthorized("Sign in to view premium components"));
        };

        let resource_type = component_resource_type(&component.language_type);
        if !resolver.check_access(Some(user.id()), &resource_type).await {
            return Err(JsonResponse::<views::component::Detail>::build()
                .set_meta(serde_json::json!({ "resource_type": resource_type }))
                .forbidden("Your plan does not include these components"));
        }
    }

    let saved = match user.as_ref() {
        Some(user) => Some(
            db::user_component::exists(pg_pool.get_ref(), user.id(), component.id)
                .await
                .map_err(|err| {
                    JsonResponse::<views::component::Detail>::build().internal_server_error(err)
                })?,
        ),
        None => None,
    };

    let mut detail = views::component::Detail::from(component);
    detail.saved = saved;

    Ok(JsonResponse::build()
        .set_id(detail.component.id)
        .set_item(detail)
        .ok("OK"))
}
