use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use crate::domain::ports::ImageSearch;
use crate::error::AppError;
use crate::infra::http::error_from_response;

/// Google Custom Search-style collaborator: a black box that returns zero or
/// more candidate image URLs for a free-text query.
pub struct HttpImageSearch {
    client: Client,
    endpoint: String,
    api_key: String,
    cx: String,
}

impl HttpImageSearch {
    pub fn new(client: Client, endpoint: String, api_key: String, cx: String) -> Self {
        Self {
            client,
            endpoint,
            api_key,
            cx,
        }
    }
}

#[async_trait]
impl ImageSearch for HttpImageSearch {
    async fn search(&self, query: &str) -> Result<Vec<String>, AppError> {
        if query.is_empty() {
            return Ok(Vec::new());
        }

        let res = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("q", query),
                ("cx", &self.cx),
                ("searchType", "image"),
                ("key", &self.api_key),
            ])
            .send()
            .await?;
        if !res.status().is_success() {
            return Err(error_from_response("GET image search", res).await);
        }

        let body: Value = res.json().await?;
        let links = body
            .get("items")
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(|item| item.get("link").and_then(Value::as_str))
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();
        Ok(links)
    }
}
