//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Access Control
//!
//! - `AuthorizationService` - Resolves access codes to granted permissions
//!
//! ## Service Providers
//!
//! - `Lifecycle` - Explicit open/close of external resources
//! - `MoodService` - Mood storage
//! - `ServiceProvider` - `Lifecycle + MoodService`, the server's single dependency
//!
//! ## Activity Sources
//!
//! - `CommitSource` - Recent commit activity

mod authorization_service;
mod commit_source;
mod mood_service;
mod service_provider;

pub use authorization_service::AuthorizationService;
pub use commit_source::CommitSource;
pub use mood_service::MoodService;
pub use service_provider::{Lifecycle, ProviderError, ServiceProvider};
