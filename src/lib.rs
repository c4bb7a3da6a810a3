//! Personal API - personal data aggregation backend
//!
//! Serves mood and commit activity over HTTP. Access is gated by
//! permission codes resolved through an [`ports::AuthorizationService`],
//! and external resources live behind a [`ports::ServiceProvider`] whose
//! teardown runs through a [`lifecycle::FinalizerRegistry`].

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod lifecycle;
pub mod ports;
