use axum::{
  http::StatusCode,
  response::{IntoResponse, Response},
  Json,
};
use serde_json::json;

#[derive(Debug)]
pub struct AppError {
  pub status_code: StatusCode,
  pub message: String,
}

impl AppError {
  pub fn new(status_code: StatusCode, message: impl Into<String>) -> Self {
    Self {
      status_code,
      message: message.into(),
    }
  }

  pub fn bad_request(message: impl Into<String>) -> Self {
    Self::new(StatusCode::BAD_REQUEST, message)
  }

  pub fn internal_server_error(message: impl Into<String>) -> Self {
    Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
  }
}

impl IntoResponse for AppError {
  fn into_response(self) -> Response {
    let body = Json(json!({
      "error": self.message,
      "status_code": self.status_code.as_u16(),
    }));

    (self.status_code, body).into_response()
  }
}

impl From<crate::domains::contact::service::ContactServiceError> for AppError {
  fn from(error: crate::domains::contact::service::ContactServiceError) -> Self {
    use crate::domains::contact::service::ContactServiceError;
    match error {
      ContactServiceError::ValidationError(msg) => AppError::bad_request(msg),
      ContactServiceError::MailTransport(msg) => {
        tracing::error!("Mail transport error: {}", msg);
        AppError::internal_server_error("Failed to send message")
      }
    }
  }
}
