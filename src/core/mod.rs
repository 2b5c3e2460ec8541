pub mod component;
pub mod error;
pub mod graph;
pub mod linking;
pub mod types;
