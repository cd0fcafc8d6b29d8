pub mod categories;
pub mod games;
pub mod stats;
