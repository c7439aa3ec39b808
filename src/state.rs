use std::sync::Arc;

use crate::domains::contact::{
  model::ContactRequest,
  service::{ContactService, ContactServiceError},
};

pub trait AppState: Clone + Send + Sync + 'static {
  fn send_contact(
    &self,
    req: ContactRequest,
  ) -> impl std::future::Future<Output = Result<(), ContactServiceError>> + Send;
  fn contact_form_enabled(&self) -> bool;
}

/// Shared across concurrent requests; read-only after startup.
#[derive(Clone)]
pub struct SharedAppState {
  pub contact_service: Arc<dyn ContactService>,
  pub contact_form_enabled: bool,
}

impl SharedAppState {
  pub fn new(contact_service: Arc<dyn ContactService>, contact_form_enabled: bool) -> Self {
    Self {
      contact_service,
      contact_form_enabled,
    }
  }
}

impl AppState for SharedAppState {
  async fn send_contact(&self, req: ContactRequest) -> Result<(), ContactServiceError> {
    self.contact_service.send_contact(req).await
  }

  fn contact_form_enabled(&self) -> bool {
    self.contact_form_enabled
  }
}
