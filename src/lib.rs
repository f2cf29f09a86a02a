pub mod cli;
pub mod config;
pub mod engine;
pub mod logging;
pub mod models;
pub mod store;

pub use store::Store;
