// Service exports
pub mod cache;
pub mod memory;
pub mod postgres;
pub mod store;

pub use cache::CachedProfileStore;
pub use memory::{InMemoryProfileStore, SeedData};
pub use postgres::PostgresProfileStore;
pub use store::{ProfileStore, StoreError};
