pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::http::HttpCatalog;
pub use adapters::notify::{ChannelNotifier, LogNotifier};
pub use adapters::storage::FileCartStore;
pub use config::Settings;
pub use core::manager::CartManager;
pub use domain::model::{Cart, CartLine, Notice, Product, ProductId, Stock};
pub use utils::error::{CartError, Result};
