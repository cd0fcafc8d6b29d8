//! Catalog domain entities and the value objects they are built from.

pub mod category;
pub mod game;
pub mod types;
