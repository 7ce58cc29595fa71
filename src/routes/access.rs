use crate::helpers::JsonResponse;
use crate::middleware::authentication::AuthUser;
use crate::services::AccessResolver;
use actix_web::{get, web, Responder, Result};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct AccessCheck {
    pub resource_type: String,
    pub can_access: bool,
}

#[tracing::instrument(name = "List permissions of the user.", skip(resolver))]
#[get("")]
pub async fn list_handler(
    user: AuthUser,
    resolver: web::Data<AccessResolver>,
) -> Result<impl Responder> {
    let permissions = resolver.user_permissions(Some(user.id())).await;
    Ok(JsonResponse::build().set_list(permissions).ok("OK"))
}

#[tracing::instrument(name = "Check access to a resource type.", skip(resolver))]
#[get("/{resource_type}")]
pub async fn item_handler(
    user: Option<AuthUser>,
    path: web::Path<(String,)>,
    resolver: web::Data<AccessResolver>,
) -> Result<impl Responder> {
    let (resource_type,) = path.into_inner();
    let can_access = resolver
        .check_access(user.as_ref().map(AuthUser::id), &resource_type)
        .await;

    Ok(JsonResponse::build()
        .set_item(AccessCheck {
            resource_type,
            can_access,
        })
        .ok("OK"))
}
