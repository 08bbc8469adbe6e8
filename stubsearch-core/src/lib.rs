pub mod api;
pub mod config;
pub mod data;
pub mod error;
pub mod logging;
pub mod query;
pub mod search;
pub mod server;
