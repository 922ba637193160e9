use crate::Error;
use serde::{Deserialize, Serialize};
use url::Url;

/// Where the catalog comes from and how we introduce ourselves to it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    pub endpoint: Url,
    pub user_agent: String,
}

impl CatalogConfig {
    pub const DEFAULT_ENDPOINT: &'static str =
        "https://2004items-production.up.railway.app/api/items";
    pub const DEFAULT_USER_AGENT: &'static str = concat!("tradeboard/", env!("CARGO_PKG_VERSION"));

    pub fn new(endpoint: &str) -> Result<Self, Error> {
        Ok(Self {
            endpoint: Url::parse(endpoint)?,
            user_agent: Self::DEFAULT_USER_AGENT.to_string(),
        })
    }

    pub fn with_user_agent(mut self, user_agent: impl ToString) -> Self {
        self.user_agent = user_agent.to_string();
        self
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            endpoint: Url::parse(Self::DEFAULT_ENDPOINT).expect("default endpoint is a valid url"),
            user_agent: Self::DEFAULT_USER_AGENT.to_string(),
        }
    }
}
