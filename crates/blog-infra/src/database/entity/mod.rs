//! SeaORM entity models.

pub mod blog;
