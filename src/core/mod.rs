pub mod manager;

pub use crate::domain::model::{Cart, CartLine, Notice, Product, ProductId, Stock};
pub use crate::domain::ports::{CartStore, Catalog, ConfigProvider, Notifier};
pub use crate::utils::error::Result;
