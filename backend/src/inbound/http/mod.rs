//! HTTP inbound adapter: the users page and health probes.

pub mod error;
pub mod health;
pub mod page;
pub mod state;
pub mod users;

pub use error::ApiResult;
