//! Diesel table definitions for the PostgreSQL schema.
//!
//! Must match `backend/migrations` exactly. `diesel print-schema` regenerates
//! this file from a live database.

diesel::table! {
    /// Registered users. `id` comes from a `BIGSERIAL` sequence.
    users (id) {
        id -> Int8,
        name -> Text,
        email -> Text,
    }
}
