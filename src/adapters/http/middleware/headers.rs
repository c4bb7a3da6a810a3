//! Required-header gate.

use async_trait::async_trait;
use axum::http::header::HeaderName;
use axum::http::request::Parts;

use super::gate::{Gate, GateRejection};
use crate::adapters::http::error::PreconditionError;

/// Rejects requests that lack a header, with 400 `MISSING_HEADER`.
#[derive(Debug, Clone)]
pub struct RequiredHeaderGate {
    header: HeaderName,
}

impl RequiredHeaderGate {
    pub fn new(header: HeaderName) -> Self {
        Self { header }
    }
}

#[async_trait]
impl Gate for RequiredHeaderGate {
    fn name(&self) -> &'static str {
        "required_header"
    }

    async fn check(&self, parts: &Parts) -> Result<(), GateRejection> {
        if parts.headers.contains_key(&self.header) {
            Ok(())
        } else {
            Err(PreconditionError::MissingHeader(self.header.to_string()).into())
        }
    }
}
