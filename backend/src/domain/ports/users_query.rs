//! Driving port for the users listing.
//!
//! Inbound adapters use this port to fetch the page contents without
//! importing outbound persistence concerns.

use async_trait::async_trait;

use crate::domain::{Error, User};

/// Domain use-case port for listing users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersQuery: Send + Sync {
    /// Return every user, most recently created first.
    async fn list_users(&self) -> Result<Vec<User>, Error>;
}
