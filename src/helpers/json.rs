use actix_web::error::{Error, InternalError};
use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse};
use serde_derive::Serialize;

/// Envelope shared by every endpoint except the GitHub proxy.
#[derive(Serialize, Debug)]
pub struct JsonResponse<T> {
    pub(crate) status: String,
    pub(crate) message: String,
    pub(crate) code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) item: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) list: Option<Vec<T>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) meta: Option<serde_json::Value>,
}

pub struct JsonResponseBuilder<T>
where
    T: serde::Serialize,
{
    id: Option<String>,
    item: Option<T>,
    list: Option<Vec<T>>,
    meta: Option<serde_json::Value>,
}

impl<T> JsonResponse<T>
where
    T: serde::Serialize,
{
    pub fn build() -> JsonResponseBuilder<T> {
        JsonResponseBuilder {
            id: None,
            item: None,
            list: None,
            meta: None,
        }
    }
}

impl<T> JsonResponseBuilder<T>
where
    T: serde::Serialize,
{
    pub fn set_id(mut self, id: impl ToString) -> Self {
        self.id = Some(id.to_string());
        self
    }

    pub fn set_item(mut self, item: T) -> Self {
        self.item = Some(item);
        self
    }

    pub fn set_list(mut self, list: Vec<T>) -> Self {
        self.list = Some(list);
        self
    }

    pub fn set_meta(mut self, meta: serde_json::Value) -> Self {
        self.meta = Some(meta);
        self
    }

    fn into_response(self, status: StatusCode, message: String) -> JsonResponse<T> {
        let label = if status.is_success() { "OK" } else { "Error" };
        let message = if message.trim().is_empty() {
            status
                .canonical_reason()
                .unwrap_or("Unknown status")
                .to_string()
        } else {
            message
        };

        JsonResponse {
            status: label.to_string(),
            message,
            code: status.as_u16(),
            id: self.id,
            item: self.item,
            list: self.list,
            meta: self.meta,
        }
    }

    /// Serialized error envelope, for places that cannot return a typed response.
    pub fn to_string(self, status: StatusCode, message: impl Into<String>) -> String {
        let body = self.into_response(status, message.into());
        serde_json::to_string(&body).unwrap_or_default()
    }

    pub fn ok(self, message: impl Into<String>) -> web::Json<JsonResponse<T>> {
        web::Json(self.into_response(StatusCode::OK, message.into()))
    }

    pub fn error(self, status: StatusCode, message: impl Into<String>) -> Error {
        let message = message.into();
        let body = self.into_response(status, message.clone());
        InternalError::from_response(message, HttpResponse::build(status).json(body)).into()
    }

    pub fn bad_request(self, message: impl Into<String>) -> Error {
        self.error(StatusCode::BAD_REQUEST, message)
    }

    pub fn form_error(self, message: impl Into<String>) -> Error {
        self.error(StatusCode::BAD_REQUEST, message)
    }

    pub fn unauthorized(self, message: impl Into<String>) -> Error {
        self.error(StatusCode::UNAUTHORIZED, message)
    }

    pub fn forbidden(self, message: impl Into<String>) -> Error {
        self.error(StatusCode::FORBIDDEN, message)
    }

    pub fn not_found(self, message: impl Into<String>) -> Error {
        self.error(StatusCode::NOT_FOUND, message)
    }

    pub fn internal_server_error(self, message: impl Into<String>) -> Error {
        self.error(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}
