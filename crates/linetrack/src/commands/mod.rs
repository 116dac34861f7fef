pub mod analyze;
pub mod completion;
pub mod config;
pub mod graph;
pub mod validate;
