mod config;

pub use config::CatalogConfig;

use async_trait::async_trait;
use log::info;
use reqwest::{Client, Method, Request};
use thiserror::Error;
use tradeboard_api_types::{Item, ItemsView};

#[derive(Error, Debug)]
pub enum Error {
    #[error("URL parse error: {0}")]
    UrlParseError(#[from] url::ParseError),
    #[error("HTTP Error: {0}")]
    HttpError(#[from] reqwest::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Anything that can hand over the full item catalog in one go.
#[async_trait]
pub trait CatalogSource {
    async fn fetch_items(&self) -> Result<Vec<Item>, Error>;
}

pub struct CatalogClient {
    client: Client,
    config: CatalogConfig,
}

impl CatalogClient {
    pub fn new(config: CatalogConfig) -> Result<Self, Error> {
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .build()?;
        Ok(CatalogClient { client, config })
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    pub async fn get_items(&self) -> Result<ItemsView, Error> {
        let request = Request::new(Method::GET, self.config.endpoint.clone());
        info!("Getting item catalog: {}", request.url());
        let response = self.client.execute(request).await?.error_for_status()?;
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl CatalogSource for CatalogClient {
    async fn fetch_items(&self) -> Result<Vec<Item>, Error> {
        Ok(self.get_items().await?.items)
    }
}
