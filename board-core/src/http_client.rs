use crate::error::BoardError;
use crate::{PostSource, RawPost, User};
use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{ACCEPT, HeaderValue};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::debug;

pub const DEFAULT_API_URL: &str = "https://jsonplaceholder.typicode.com";

#[derive(Clone)]
pub struct BoardClientHttp {
    client: Arc<Client>,
    base_url: String,
}

impl BoardClientHttp {
    pub fn connect(endpoint: &str) -> Result<Self, BoardError> {
        let base_url = endpoint.trim_end_matches('/').to_string();
        Ok(Self {
            client: Arc::new(Client::builder().build()?),
            base_url,
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, BoardError> {
        let url = format!("{}/{}", self.base_url, path);
        let resp = self
            .client
            .get(&url)
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(BoardError::Http {
                status: status.as_u16(),
                url,
            });
        }

        let bytes = resp.bytes().await?;
        debug!(url = %url, bytes = bytes.len(), "fetched collection");
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[async_trait(?Send)]
impl PostSource for BoardClientHttp {
    async fn fetch_posts(&self) -> Result<Vec<RawPost>, BoardError> {
        self.get_json("posts").await
    }

    async fn fetch_users(&self) -> Result<Vec<User>, BoardError> {
        self.get_json("users").await
    }
}
