//! Driving port for registering users from submitted form data.

use async_trait::async_trait;

use crate::domain::{Error, RegistrationForm, RegistrationOutcome};

/// Domain use-case port for the registration write path.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRegistrationCommand: Send + Sync {
    /// Store a user when both form fields are present.
    ///
    /// Missing or empty fields are not an error: the call succeeds with
    /// [`RegistrationOutcome::Skipped`] and nothing is written.
    async fn register(&self, form: RegistrationForm) -> Result<RegistrationOutcome, Error>;
}
