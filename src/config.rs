use std::env;

use anyhow::Context;

use crate::email::SmtpConfig;

/// Process-wide configuration, read once at startup and held immutably for
/// the lifetime of the process.
#[derive(Debug, Clone)]
pub struct AppConfig {
  /// Fixed recipient of every relayed contact message.
  pub contact_to: String,
  /// The single front-end origin allowed to call the API cross-origin.
  pub cors_origin: String,
  /// When false, `POST /api/contact` answers 410 Gone without touching SMTP.
  pub contact_form_enabled: bool,
  pub smtp: SmtpConfig,
}

impl AppConfig {
  pub fn from_env() -> anyhow::Result<Self> {
    let contact_to = env::var("CONTACT_TO").context("CONTACT_TO environment variable must be set")?;

    let cors_origin = env::var("CORS_ORIGIN").unwrap_or_else(|_| "http://localhost:3000".to_string());

    let contact_form_enabled = env::var("CONTACT_FORM_ENABLED")
      .map(|v| v != "false" && v != "0")
      .unwrap_or(true);

    let smtp = SmtpConfig {
      host: env::var("SMTP_HOST").unwrap_or_else(|_| "smtp.gmail.com".to_string()),
      port: env::var("SMTP_PORT")
        .unwrap_or_else(|_| "587".to_string())
        .parse()
        .unwrap_or(587),
      username: env::var("SMTP_USERNAME").context("SMTP_USERNAME environment variable must be set")?,
      password: env::var("SMTP_PASSWORD").context("SMTP_PASSWORD environment variable must be set")?,
      from_email: env::var("SMTP_FROM_EMAIL").context("SMTP_FROM_EMAIL environment variable must be set")?,
    };

    Ok(AppConfig {
      contact_to,
      cors_origin,
      contact_form_enabled,
      smtp,
    })
  }
}
