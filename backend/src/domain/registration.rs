//! User registration service.
//!
//! Implements both driving ports over a single [`UserRepository`]: the write
//! path stores a user when the submitted form carries a name and an email,
//! the read path lists every user newest-first.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::ports::{
    UserPersistenceError, UserRegistrationCommand, UserRepository, UsersQuery,
};
use crate::domain::{EmailAddress, Error, NewUser, User, UserName};

/// Raw registration submission. Absent fields are `None`, never an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl RegistrationForm {
    /// Build a form from optional field values.
    #[must_use]
    pub fn new(name: Option<String>, email: Option<String>) -> Self {
        Self { name, email }
    }

    /// Convert to a pending user when both fields are present and non-empty.
    ///
    /// # Examples
    /// ```
    /// use roster::domain::RegistrationForm;
    ///
    /// let form = RegistrationForm::new(Some("Ada".into()), Some(String::new()));
    /// assert!(form.into_new_user().is_none());
    /// ```
    #[must_use]
    pub fn into_new_user(self) -> Option<NewUser> {
        let name = UserName::new(self.name?).ok()?;
        let email = EmailAddress::new(self.email?).ok()?;
        Some(NewUser::new(name, email))
    }
}

/// Result of a registration attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationOutcome {
    /// A user was stored.
    Created(User),
    /// A field was missing or empty; nothing was stored.
    Skipped,
}

fn map_persistence_error(error: UserPersistenceError) -> Error {
    match error {
        UserPersistenceError::Connection { message } => Error::service_unavailable(message),
        UserPersistenceError::Query { message } => Error::internal(message),
    }
}

/// Registration service implementing the user driving ports.
pub struct UserRegistrationService<R: ?Sized> {
    repository: Arc<R>,
}

impl<R: ?Sized> UserRegistrationService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

impl<R: ?Sized> Clone for UserRegistrationService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

#[async_trait]
impl<R> UserRegistrationCommand for UserRegistrationService<R>
where
    R: UserRepository + ?Sized,
{
    async fn register(&self, form: RegistrationForm) -> Result<RegistrationOutcome, Error> {
        let Some(new_user) = form.into_new_user() else {
            debug!("registration skipped: name or email missing");
            return Ok(RegistrationOutcome::Skipped);
        };

        let user = self
            .repository
            .create(&new_user)
            .await
            .map_err(map_persistence_error)?;
        debug!(user_id = %user.id(), "user registered");
        Ok(RegistrationOutcome::Created(user))
    }
}

#[async_trait]
impl<R> UsersQuery for UserRegistrationService<R>
where
    R: UserRepository + ?Sized,
{
    async fn list_users(&self) -> Result<Vec<User>, Error> {
        let mut users = self
            .repository
            .list_all()
            .await
            .map_err(map_persistence_error)?;
        users.sort_unstable_by_key(|user| std::cmp::Reverse(user.id()));
        Ok(users)
    }
}

#[cfg(test)]
#[path = "registration_tests.rs"]
mod tests;
