use crate::helpers::JsonResponse;
use crate::models;
use actix_web::{dev::Payload, FromRequest, HttpMessage, HttpRequest};
use std::future::{ready, Ready};
use std::ops::Deref;
use std::sync::Arc;

/// The signed-in user. Extraction fails with 401 for anonymous requests;
/// wrap in `Option` where a session is optional.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Arc<models::User>);

impl AuthUser {
    pub fn id(&self) -> &str {
        self.0.id.as_str()
    }
}

impl Deref for AuthUser {
    type Target = models::User;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequest for AuthUser {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let user = req.extensions().get::<Arc<models::User>>().cloned();
        ready(match user {
            Some(user) => Ok(AuthUser(user)),
            None => Err(JsonResponse::<models::User>::build().unauthorized("Authentication required")),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, web, App, HttpResponse, Responder};

    async fn whoami(user: AuthUser) -> impl Responder {
        HttpResponse::Ok().body(user.id().to_string())
    }

    async fn maybe(user: Option<AuthUser>) -> impl Responder {
        HttpResponse::Ok().body(user.map(|u| u.id().to_string()).unwrap_or_default())
    }

    #[actix_web::test]
    async fn anonymous_request_is_rejected() {
        let app = test::init_service(App::new().route("/", web::get().to(whoami))).await;
        let req = test::TestRequest::get().uri("/").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["code"], 401);
    }

    #[actix_web::test]
    async fn user_from_extensions_is_extracted() {
        let app = test::init_service(
            App::new()
                .wrap_fn(|req, srv| {
                    req.extensions_mut().insert(Arc::new(models::User {
                        id: "user-7".to_string(),
                        ..Default::default()
                    }));
                    actix_web::dev::Service::call(srv, req)
                })
                .route("/", web::get().to(whoami))
                .route("/maybe", web::get().to(maybe)),
        )
        .await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(test::read_body(resp).await, "user-7");

        let resp =
            test::call_service(&app, test::TestRequest::get().uri("/maybe").to_request()).await;
        assert_eq!(test::read_body(resp).await, "user-7");
    }

    #[actix_web::test]
    async fn optional_user_is_none_for_anonymous() {
        let app = test::init_service(App::new().route("/", web::get().to(maybe))).await;
        let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert!(test::read_body(resp).await.is_empty());
    }
}
