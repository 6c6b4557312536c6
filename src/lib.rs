pub mod arsenal;
pub mod collision;
pub mod compute;
pub mod entities;
pub mod error;
pub mod fleet;
pub mod geometry;
pub mod scores;
pub mod settings;
pub mod ship;
pub mod stats;
