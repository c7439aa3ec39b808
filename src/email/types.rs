use std::error::Error;

#[derive(Debug, Clone)]
pub struct SmtpConfig {
  pub host: String,
  pub port: u16,
  pub username: String,
  pub password: String,
  pub from_email: String,
}

/// Failure of the mail-transport capability. Not retried and not recovered
/// locally; callers surface it as a failed response.
#[derive(Debug)]
pub enum MailTransportError {
  InvalidAddress(String),
  Transport(String),
}

impl Error for MailTransportError {}

impl std::fmt::Display for MailTransportError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      MailTransportError::InvalidAddress(msg) => write!(f, "Invalid address: {}", msg),
      MailTransportError::Transport(msg) => write!(f, "Mail transport failed: {}", msg),
    }
  }
}

impl From<lettre::address::AddressError> for MailTransportError {
  fn from(err: lettre::address::AddressError) -> Self {
    MailTransportError::InvalidAddress(err.to_string())
  }
}

impl From<lettre::error::Error> for MailTransportError {
  fn from(err: lettre::error::Error) -> Self {
    MailTransportError::Transport(format!("Failed to build message: {}", err))
  }
}

impl From<lettre::transport::smtp::Error> for MailTransportError {
  fn from(err: lettre::transport::smtp::Error) -> Self {
    MailTransportError::Transport(err.to_string())
  }
}
