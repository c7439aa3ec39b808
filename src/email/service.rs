use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use lettre::{
  message::header::ContentType, transport::smtp::authentication::Credentials, AsyncSmtpTransport, AsyncTransport,
  Message, Tokio1Executor,
};

use crate::email::types::{MailTransportError, SmtpConfig};

/// Bound on a single SMTP dispatch so a dead relay cannot hold a request open
/// indefinitely.
const SMTP_TIMEOUT: Duration = Duration::from_secs(30);

/// The single operation the mail transport exposes to the rest of the
/// application.
#[async_trait]
pub trait Mailer: Send + Sync {
  async fn send(&self, to: &str, reply_to: &str, subject: &str, body: &str) -> Result<(), MailTransportError>;
}

pub struct SmtpMailer {
  smtp_config: SmtpConfig,
  transporter: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailer {
  pub fn new(smtp_config: SmtpConfig) -> Result<Self> {
    let creds = Credentials::new(smtp_config.username.clone(), smtp_config.password.clone());

    let transporter = if smtp_config.host == "localhost" || smtp_config.host == "mailhog" {
      AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&smtp_config.host)
        .credentials(creds)
        .port(smtp_config.port)
        .timeout(Some(SMTP_TIMEOUT))
        .build()
    } else {
      AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&smtp_config.host)?
        .credentials(creds)
        .port(smtp_config.port)
        .timeout(Some(SMTP_TIMEOUT))
        .build()
    };

    Ok(SmtpMailer {
      smtp_config,
      transporter,
    })
  }
}

#[async_trait]
impl Mailer for SmtpMailer {
  async fn send(&self, to: &str, reply_to: &str, subject: &str, body: &str) -> Result<(), MailTransportError> {
    let email = Message::builder()
      .from(self.smtp_config.from_email.parse()?)
      .reply_to(reply_to.parse()?)
      .to(to.parse()?)
      .subject(subject)
      .header(ContentType::TEXT_PLAIN)
      .body(body.to_string())?;

    self.transporter.send(email).await?;

    Ok(())
  }
}
