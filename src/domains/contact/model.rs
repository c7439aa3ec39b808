use serde::{Deserialize, Serialize};
use validator::Validate;

/// A contact-form submission. Created on request arrival and discarded once
/// the email is dispatched; never persisted.
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct ContactRequest {
  #[validate(length(min = 1, max = 255, message = "Name is required"))]
  pub name: String,
  #[validate(email(message = "A valid email address is required"))]
  pub email: String,
  #[validate(length(min = 1, message = "Message is required"))]
  pub message: String,
}
