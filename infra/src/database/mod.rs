//! Database access for the durable refresh-token store.

pub mod postgres;

pub use postgres::{connect, PgTokenRepository, PgUserRepository};
