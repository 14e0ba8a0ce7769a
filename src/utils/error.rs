use crate::domain::model::ProductId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CartError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Config file error: {0}")]
    ConfigParseError(#[from] toml::de::Error),

    #[error("product {product_id} is out of stock (requested {requested}, available {available})")]
    OutOfStock {
        product_id: ProductId,
        requested: u32,
        available: u32,
    },

    #[error("product {product_id} is not in the cart")]
    NotInCart { product_id: ProductId },

    #[error("Invalid config value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl CartError {
    /// Stock rejections get their own notice; every other failure is generic.
    pub fn is_out_of_stock(&self) -> bool {
        matches!(self, CartError::OutOfStock { .. })
    }
}

pub type Result<T> = std::result::Result<T, CartError>;
