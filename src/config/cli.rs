use crate::config::toml_config::TomlConfig;
use crate::config::Settings;
use crate::domain::model::ProductId;
use crate::utils::error::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "shopcart")]
#[command(about = "A storefront shopping-cart manager")]
pub struct CliConfig {
    #[arg(long, default_value = "http://localhost:3333")]
    pub api_base_url: String,

    #[arg(long, default_value = "./data")]
    pub cart_path: String,

    #[arg(long, help = "Read settings from a TOML file instead of flags")]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Add one unit of a product to the cart
    Add { product_id: ProductId },
    /// Remove a product's line from the cart
    Remove { product_id: ProductId },
    /// Set a product's amount to an exact value
    Set { product_id: ProductId, amount: i64 },
    /// Print the cart contents
    Show,
    /// List catalog products with their in-cart amounts
    List,
}

impl CliConfig {
    pub fn settings(&self) -> Result<Settings> {
        match &self.config {
            Some(path) => Ok(TomlConfig::from_file(path)?.into_settings()),
            None => Ok(Settings {
                api_base_url: self.api_base_url.clone(),
                cart_path: self.cart_path.clone(),
            }),
        }
    }
}
