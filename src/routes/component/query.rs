use crate::db;
use crate::forms;
use crate::helpers::JsonResponse;
use crate::middleware::authentication::AuthUser;
use crate::services::AccessResolver;
use crate::views;
use actix_web::{post, web, Responder, Result};
use serde_valid::Validate;
use sqlx::PgPool;

#[tracing::instrument(name = "Query component catalog.", skip(pg_pool, resolver))]
#[post("/query")]
pub async fn query_handler(
    user: Option<AuthUser>,
    form: web::Json<forms::ComponentQuery>,
    pg_pool: web::Data<PgPool>,
    resolver: web::Data<AccessResolver>,
) -> Result<impl Responder> {
    if let Err(errors) = form.validate() {
        return Err(JsonResponse::<views::component::Listed>::build().form_error(errors.to_string()));
    }

    let components = db::component::query(pg_pool.get_ref(), &form)
        .await
        .map_err(|err| {
            JsonResponse::<views::component::Listed>::build().internal_server_error(err)
        })?;

    let list = super::listing(
        resolver.get_ref(),
        user.as_ref().map(AuthUser::id),
        components,
    )
    .await;

    Ok(JsonResponse::build().set_list(list).ok("OK"))
}
