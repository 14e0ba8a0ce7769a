use crate::domain::model::{Notice, Product, ProductId, Stock};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Read-only product/stock lookups against the remote catalog service.
#[async_trait]
pub trait Catalog: Send + Sync {
    async fn product(&self, id: ProductId) -> Result<Product>;
    async fn stock(&self, id: ProductId) -> Result<Stock>;
    async fn products(&self) -> Result<Vec<Product>>;
}

/// Key-value persistence for the serialized cart. Access is local and
/// synchronous; one fixed key holds the whole cart.
pub trait CartStore: Send + Sync {
    fn load(&self) -> Result<Option<String>>;
    fn save(&self, payload: &str) -> Result<()>;
}

/// Sink for user-facing notices (the toast replacement).
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: Notice);
}

pub trait ConfigProvider: Send + Sync {
    fn api_base_url(&self) -> &str;
    fn cart_dir(&self) -> &str;
}
