//! Content-Type allow-list gate.

use async_trait::async_trait;
use axum::http::header::CONTENT_TYPE;
use axum::http::request::Parts;

use super::gate::{Gate, GateRejection};
use crate::adapters::http::error::PreconditionError;

/// Allows a request only if its `Content-Type` starts with an allowed prefix.
///
/// Prefixes are tried in order and the first match wins, so
/// `application/json` admits `application/json; charset=utf-8`. A missing or
/// empty header is rejected with `MissingContentTypeHeader`; any other
/// mismatch with `UnexpectedContentType`. Both become 400.
#[derive(Debug, Clone)]
pub struct ContentTypeGate {
    allowed: Vec<String>,
}

impl ContentTypeGate {
    pub fn new<I, S>(allowed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allowed: allowed.into_iter().map(Into::into).collect(),
        }
    }

    /// Checks a raw header value against the allow-list.
    pub fn evaluate(&self, content_type: Option<&str>) -> Result<(), PreconditionError> {
        let value = match content_type {
            Some(v) if !v.is_empty() => v,
            _ => return Err(PreconditionError::MissingContentTypeHeader),
        };

        if self.allowed.iter().any(|prefix| value.starts_with(prefix.as_str())) {
            Ok(())
        } else {
            Err(PreconditionError::UnexpectedContentType(value.to_string()))
        }
    }
}

#[async_trait]
impl Gate for ContentTypeGate {
    fn name(&self) -> &'static str {
        "content_type"
    }

    async fn check(&self, parts: &Parts) -> Result<(), GateRejection> {
        let header = parts.headers.get(CONTENT_TYPE).map(|v| {
            v.to_str()
                .map(str::to_string)
                .unwrap_or_else(|_| String::from_utf8_lossy(v.as_bytes()).into_owned())
        });
        self.evaluate(header.as_deref()).map_err(Into::into)
    }
}
