//! Roster: register users from a form and list them newest-first.
//!
//! Layout follows ports and adapters:
//! - [`domain`] holds the user record, registration service and ports.
//! - [`inbound`] exposes the HTTP handlers.
//! - [`outbound`] implements persistence against PostgreSQL or memory.
//! - [`middleware`] carries request-scoped tracing.

pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

pub use domain::TraceId;
pub use middleware::Trace;
