pub mod config;
pub mod error;
pub mod format;
pub mod models;
pub mod schedule;
pub mod season;
