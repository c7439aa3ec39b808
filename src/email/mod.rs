//! Outbound email via SMTP.
//!
//! This module provides the mail-transport capability the contact service
//! dispatches through, implemented with lettre.

mod service;
mod types;

pub use service::{Mailer, SmtpMailer};
pub use types::{MailTransportError, SmtpConfig};
