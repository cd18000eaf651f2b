//! Domain primitives, services and ports.
//!
//! Purpose: define the user record, the registration use-cases and the ports
//! they depend on, independent of HTTP or database details.
//!
//! Public surface:
//! - `User`, `NewUser`, `UserId`, `UserName`, `EmailAddress`: the user record.
//! - `RegistrationForm`, `RegistrationOutcome`, `UserRegistrationService`:
//!   the write and read paths.
//! - `Error`, `ErrorCode`: transport-agnostic failures.
//! - `TraceId`: request correlation identifier.

pub mod error;
pub mod ports;
pub mod registration;
pub mod trace_id;
pub mod user;

pub use self::error::{Error, ErrorCode, ErrorValidationError, TRACE_ID_HEADER};
pub use self::registration::{RegistrationForm, RegistrationOutcome, UserRegistrationService};
pub use self::trace_id::TraceId;
pub use self::user::{EmailAddress, NewUser, User, UserId, UserName, UserValidationError};
