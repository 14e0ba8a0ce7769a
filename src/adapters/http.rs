use crate::domain::model::{Product, ProductId, Stock};
use crate::domain::ports::Catalog;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;

/// Catalog over the storefront REST API: `products/{id}` and `stock/{id}`.
pub struct HttpCatalog {
    base_url: String,
    client: Client,
}

impl HttpCatalog {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    // 所有失敗(連線、非 2xx、解析)一律視為查詢失敗
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}/{}", self.base_url, path);
        tracing::debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        tracing::debug!("API response status: {}", response.status());

        let payload = response.error_for_status()?.json::<T>().await?;
        Ok(payload)
    }
}

#[async_trait]
impl Catalog for HttpCatalog {
    async fn product(&self, id: ProductId) -> Result<Product> {
        self.get_json(&format!("products/{}", id)).await
    }

    async fn stock(&self, id: ProductId) -> Result<Stock> {
        self.get_json(&format!("stock/{}", id)).await
    }

    async fn products(&self) -> Result<Vec<Product>> {
        self.get_json("products").await
    }
}
