//! # Blog Infrastructure
//!
//! Concrete implementations of the ports defined in `blog-core`.
//! This crate contains the PostgreSQL storage adapter.

pub mod database;

pub use database::{DatabaseConfig, PostgresBlogRepository, connect};
