//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only depend
//! on domain ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::UserRegistrationService;
use crate::domain::ports::{UserRegistrationCommand, UserRepository, UsersQuery};

use super::page::UsersPage;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub registration: Arc<dyn UserRegistrationCommand>,
    pub users: Arc<dyn UsersQuery>,
    pub page: Arc<UsersPage>,
}

impl HttpState {
    /// Construct state from explicit ports.
    pub fn new(
        registration: Arc<dyn UserRegistrationCommand>,
        users: Arc<dyn UsersQuery>,
        page: Arc<UsersPage>,
    ) -> Self {
        Self {
            registration,
            users,
            page,
        }
    }

    /// Wire both driving ports to one [`UserRegistrationService`] over
    /// `repository`.
    ///
    /// # Errors
    /// Returns a Tera error if the embedded page template fails to parse.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use roster::inbound::http::state::HttpState;
    /// use roster::outbound::persistence::InMemoryUserRepository;
    ///
    /// let state = HttpState::from_repository(Arc::new(InMemoryUserRepository::new()))
    ///     .expect("page template parses");
    /// let _users = state.users.clone();
    /// ```
    pub fn from_repository(repository: Arc<dyn UserRepository>) -> Result<Self, tera::Error> {
        let service = Arc::new(UserRegistrationService::new(repository));
        Ok(Self::new(
            service.clone(),
            service,
            Arc::new(UsersPage::new()?),
        ))
    }
}
