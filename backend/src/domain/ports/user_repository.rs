//! Port abstraction for user persistence adapters and their errors.
use async_trait::async_trait;

use crate::domain::{NewUser, User};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "user repository query failed: {message}",
    }
}

/// Store of user records. The store owns identifier assignment.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a user and return it with a freshly assigned, never reused id.
    async fn create(&self, user: &NewUser) -> Result<User, UserPersistenceError>;

    /// Fetch every stored user. Ordering is unspecified.
    async fn list_all(&self) -> Result<Vec<User>, UserPersistenceError>;
}
