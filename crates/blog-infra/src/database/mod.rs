//! Database connection management and the SeaORM repository.

mod connections;
pub mod entity;
mod postgres_repo;

pub use connections::{DatabaseConfig, connect};
pub use postgres_repo::PostgresBlogRepository;
