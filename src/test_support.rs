use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
  body::{Body, Bytes},
  http::{HeaderValue, Request, StatusCode},
  Router,
};
use serde::Serialize;
use tower::ServiceExt;

use crate::{
  app::create_app,
  domains::contact::service::ContactServiceImpl,
  email::{MailTransportError, Mailer},
  state::SharedAppState,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentEmail {
  pub to: String,
  pub reply_to: String,
  pub subject: String,
  pub body: String,
}

/// Mailer that records every dispatch instead of talking to an SMTP relay.
#[derive(Clone, Default)]
pub struct RecordingMailer {
  sent: Arc<Mutex<Vec<SentEmail>>>,
}

impl RecordingMailer {
  pub fn sent(&self) -> Vec<SentEmail> {
    self.sent.lock().expect("sent emails lock").clone()
  }
}

#[async_trait]
impl Mailer for RecordingMailer {
  async fn send(&self, to: &str, reply_to: &str, subject: &str, body: &str) -> Result<(), MailTransportError> {
    self.sent.lock().expect("sent emails lock").push(SentEmail {
      to: to.to_string(),
      reply_to: reply_to.to_string(),
      subject: subject.to_string(),
      body: body.to_string(),
    });
    Ok(())
  }
}

/// Mailer that fails every dispatch, as an unreachable relay would.
#[derive(Clone, Default)]
pub struct FailingMailer;

#[async_trait]
impl Mailer for FailingMailer {
  async fn send(&self, _to: &str, _reply_to: &str, _subject: &str, _body: &str) -> Result<(), MailTransportError> {
    Err(MailTransportError::Transport("connection refused".to_string()))
  }
}

pub fn app_with_mailer<M: Mailer + 'static>(mailer: M, contact_form_enabled: bool) -> Router {
  let contact_service = Arc::new(ContactServiceImpl::new(mailer, "owner@example.com"));
  let state = SharedAppState::new(contact_service, contact_form_enabled);
  create_app(state, HeaderValue::from_static("http://localhost:3000"))
}

pub async fn post_json<T: Serialize>(app: Router, uri: &str, body: &T) -> (StatusCode, Bytes) {
  let request = Request::builder()
    .method("POST")
    .uri(uri)
    .header("content-type", "application/json")
    .body(Body::from(serde_json::to_vec(body).expect("serialize request body")))
    .expect("build request");

  let response = app.oneshot(request).await.expect("handle request");
  let status = response.status();
  let body = axum::body::to_bytes(response.into_body(), usize::MAX)
    .await
    .expect("read response body");
  (status, body)
}
