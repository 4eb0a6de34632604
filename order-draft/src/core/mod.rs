//! Core module - configuration
//!
//! - [`Config`] - store configuration
//! - [`PersistMode`] - how snapshots reach durable storage

pub mod config;

pub use config::{Config, PersistMode};
