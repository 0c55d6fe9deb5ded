//! Organization store implementations.
//!
//! - `MemoryStore` - In-memory, for tests and one-off runs
//! - `PostgresStore` - PostgreSQL via sqlx (requires `postgres` feature)

pub mod memory;

#[cfg(feature = "postgres")]
pub mod postgres;

pub use memory::MemoryStore;

#[cfg(feature = "postgres")]
pub use postgres::PostgresStore;
