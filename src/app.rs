use axum::{
  http::{header::CONTENT_TYPE, HeaderValue, Method, StatusCode},
  routing::get,
  Router,
};
use tower_http::cors::CorsLayer;

use crate::{domains::contact::rest::contact_routes, state::SharedAppState};

pub fn create_app(state: SharedAppState, cors_origin: HeaderValue) -> Router {
  let cors = CorsLayer::new()
    .allow_origin(cors_origin)
    .allow_methods([Method::POST])
    .allow_headers([CONTENT_TYPE]);

  Router::new()
    .route("/health", get(health_check_handler))
    .nest("/api", contact_routes())
    .layer(cors)
    .with_state(state)
}

pub async fn health_check_handler() -> StatusCode {
  StatusCode::OK
}
