use std::sync::Arc;

use tokio::signal;

use axum::http::HeaderValue;
use dotenvy::dotenv;

use contact_relay_api::app::create_app;
use contact_relay_api::config::AppConfig;
use contact_relay_api::domains::contact::service::ContactServiceImpl;
use contact_relay_api::email::SmtpMailer;
use contact_relay_api::state::SharedAppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  dotenv().ok();

  tracing_subscriber::fmt::init();

  let config = AppConfig::from_env()?;
  let cors_origin: HeaderValue = config.cors_origin.parse()?;

  let mailer = SmtpMailer::new(config.smtp.clone())?;
  let contact_service = Arc::new(ContactServiceImpl::new(mailer, config.contact_to.clone()));
  let state = SharedAppState::new(contact_service, config.contact_form_enabled);
  let app = create_app(state, cors_origin);

  let listener = tokio::net::TcpListener::bind("0.0.0.0:8000").await?;

  tracing::info!("Server running on http://0.0.0.0:8000");

  axum::serve(listener, app)
    .with_graceful_shutdown(shutdown_signal())
    .await?;

  Ok(())
}

async fn shutdown_signal() {
  let ctrl_c = async {
    signal::ctrl_c().await.expect("Failed to install Ctrl+C handler");
  };

  #[cfg(unix)]
  let terminate = async {
    signal::unix::signal(signal::unix::SignalKind::terminate())
      .expect("Failed to install signal handler")
      .recv()
      .await;
  };

  #[cfg(not(unix))]
  let terminate = std::future::pending::<()>();

  tokio::select! {
      _ = ctrl_c => {},
      _ = terminate => {},
  }

  tracing::info!("Received termination signal, shutting down gracefully...");
}
