#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_url, Validate};
use serde::{Deserialize, Serialize};

/// Resolved settings the adapters are built from, whichever source
/// (CLI flags or TOML file) they came out of.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub api_base_url: String,
    pub cart_path: String,
}

impl ConfigProvider for Settings {
    fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    fn cart_dir(&self) -> &str {
        &self.cart_path
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_url("api_base_url", &self.api_base_url)?;
        validate_path("cart_path", &self.cart_path)?;
        Ok(())
    }
}
