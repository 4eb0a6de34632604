//! Order draft store for the meal-subscription storefront
//!
//! Keeps the customer's pending order (meal, delivery date, servings) in
//! memory, derives totals, and persists the draft so it survives restarts.
//!
//! # Module Structure
//!
//! ```text
//! order-draft/src/
//! ├── core/          # configuration
//! ├── cart/          # draft event sourcing and persistence
//! ├── catalog.rs     # meal lookup for add-by-id
//! └── utils/         # logging
//! ```

pub mod cart;
pub mod catalog;
pub mod core;
pub mod utils;

pub use cart::{CartManager, DraftStorage, ManagerError, MemoryStore, SnapshotStore};
pub use catalog::{CatalogLookup, StaticCatalog};
pub use core::{Config, PersistMode};
pub use utils::logger::{init_logger, init_logger_with_file};

/// Load `.env`, read the configuration, prepare the work dir and start logging
pub fn setup_environment() -> std::io::Result<Config> {
    dotenv::dotenv().ok();

    let config = Config::from_env();
    std::fs::create_dir_all(&config.work_dir)?;
    if let Some(dir) = &config.log_dir {
        std::fs::create_dir_all(dir)?;
    }
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());

    Ok(config)
}
