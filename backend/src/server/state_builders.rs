//! Builders selecting port implementations for the HTTP state.

use std::sync::Arc;

use actix_web::web;
use tracing::warn;

use roster::domain::ports::UserRepository;
use roster::inbound::http::state::HttpState;
use roster::outbound::persistence::{DieselUserRepository, InMemoryUserRepository};

use super::ServerConfig;

/// Use PostgreSQL when a pool is configured, otherwise the in-memory store.
fn build_user_repository(config: &ServerConfig) -> Arc<dyn UserRepository> {
    match &config.db_pool {
        Some(pool) => Arc::new(DieselUserRepository::new(pool.clone())),
        None => {
            warn!("no database configured; users are kept in memory and lost on restart");
            Arc::new(InMemoryUserRepository::new())
        }
    }
}

/// Build the shared HTTP state.
///
/// # Errors
/// Returns [`std::io::Error`] when the page template fails to parse.
pub(super) fn build_http_state(config: &ServerConfig) -> std::io::Result<web::Data<HttpState>> {
    let state = HttpState::from_repository(build_user_repository(config))
        .map_err(|err| std::io::Error::other(format!("users page template: {err}")))?;
    Ok(web::Data::new(state))
}
