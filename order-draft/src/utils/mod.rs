//! Utility module - logging

pub mod logger;
