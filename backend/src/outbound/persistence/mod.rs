//! User persistence adapters.
//!
//! - [`DieselUserRepository`] stores users in PostgreSQL through Diesel,
//!   `diesel-async` and a `bb8` pool.
//! - [`InMemoryUserRepository`] keeps users in process memory and backs the
//!   server when no database URL is configured.
//!
//! Diesel row structs (`models.rs`) and schema definitions (`schema.rs`) are
//! internal; adapters only hand domain types across the port.
//!
//! # Example
//!
//! ```no_run
//! use roster::outbound::persistence::{DbPool, DieselUserRepository, PoolConfig};
//!
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/roster")).await?;
//! let repo = DieselUserRepository::new(pool);
//! # let _ = repo;
//! # Ok(())
//! # }
//! ```

mod diesel_error_mapping;
mod diesel_user_repository;
mod in_memory_user_repository;
pub mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_user_repository::DieselUserRepository;
pub use in_memory_user_repository::InMemoryUserRepository;
pub use migrations::{MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
