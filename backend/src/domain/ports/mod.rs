//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driving ports ([`UserRegistrationCommand`], [`UsersQuery`]) are what
//! inbound adapters call; the driven port ([`UserRepository`]) is what
//! outbound persistence adapters implement.

mod macros;
mod user_registration_command;
mod user_repository;
mod users_query;

pub(crate) use macros::define_port_error;

#[cfg(test)]
pub use user_registration_command::MockUserRegistrationCommand;
pub use user_registration_command::UserRegistrationCommand;
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserPersistenceError, UserRepository};
#[cfg(test)]
pub use users_query::MockUsersQuery;
pub use users_query::UsersQuery;
