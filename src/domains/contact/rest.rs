use axum::{
  extract::{Json, State},
  http::StatusCode,
  routing::{post, Router},
};

use super::model::ContactRequest;
use crate::{
  state::{AppState, SharedAppState},
  AppError,
};

pub fn contact_routes() -> Router<SharedAppState> {
  Router::new().route("/contact", post(contact_handler))
}

pub async fn contact_handler(
  State(state): State<SharedAppState>,
  Json(payload): Json<ContactRequest>,
) -> Result<StatusCode, AppError> {
  // Feature-flagged off: answer 410 Gone without touching the transport.
  if !state.contact_form_enabled() {
    return Ok(StatusCode::GONE);
  }

  state.send_contact(payload).await?;

  Ok(StatusCode::OK)
}
