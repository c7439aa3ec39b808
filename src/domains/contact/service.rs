use std::error::Error;

use async_trait::async_trait;
use validator::Validate;

use super::model::ContactRequest;
use crate::email::{MailTransportError, Mailer};

#[derive(Debug)]
pub enum ContactServiceError {
  ValidationError(String),
  MailTransport(String),
}

impl Error for ContactServiceError {}

impl std::fmt::Display for ContactServiceError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      ContactServiceError::ValidationError(msg) => write!(f, "Validation Error: {}", msg),
      ContactServiceError::MailTransport(msg) => write!(f, "Mail Transport Error: {}", msg),
    }
  }
}

impl From<MailTransportError> for ContactServiceError {
  fn from(err: MailTransportError) -> Self {
    ContactServiceError::MailTransport(err.to_string())
  }
}

#[async_trait]
pub trait ContactService: Send + Sync {
  async fn send_contact(&self, req: ContactRequest) -> Result<(), ContactServiceError>;
}

pub struct ContactServiceImpl<M> {
  mailer: M,
  contact_to: String,
}

impl<M: Mailer> ContactServiceImpl<M> {
  pub fn new(mailer: M, contact_to: impl Into<String>) -> Self {
    Self {
      mailer,
      contact_to: contact_to.into(),
    }
  }
}

#[async_trait]
impl<M: Mailer> ContactService for ContactServiceImpl<M> {
  async fn send_contact(&self, req: ContactRequest) -> Result<(), ContactServiceError> {
    req
      .validate()
      .map_err(|e| ContactServiceError::ValidationError(format!("Validation failed: {}", e)))?;

    let subject = format!("New contact form message from {}", req.name);
    let body = format!(
      "You received a new message from your website:\n\nName: {}\nEmail: {}\n\nMessage:\n{}\n",
      req.name, req.email, req.message
    );

    // Reply-to carries the submitter's address so the owner can answer
    // directly; the recipient is always the configured constant.
    match self.mailer.send(&self.contact_to, &req.email, &subject, &body).await {
      Ok(()) => {
        tracing::info!("Contact message relayed to {}", self.contact_to);
        Ok(())
      }
      Err(e) => {
        tracing::error!("Failed to relay contact message: {}", e);
        Err(e.into())
      }
    }
  }
}
