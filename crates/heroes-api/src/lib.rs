//! Herodex heroes web API adapter.
//!
//! Implements the [`roster::HeroStore`] trait over HTTP against the heroes
//! web API. URL construction, request bodies and headers, status checking,
//! response decoding, and error-to-fallback recovery all live here; the
//! [`roster`] crate sees only the port traits.
//!
//! ## Architectural Layer
//!
//! **Infrastructure.** This crate must not contain domain rules. The one
//! behavioral contract it adds is failure containment: every recovered
//! transport failure produces a diagnostic `tracing` event and one message
//! sink entry, and the caller receives the empty/absent fallback instead of
//! an error.

pub mod client;
pub mod config;
pub mod error;

pub use client::HeroApiClient;
pub use config::HeroApiConfig;
pub use error::HeroApiError;
