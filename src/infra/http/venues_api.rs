use async_trait::async_trait;
use reqwest::Client;

use crate::domain::models::venue::{NewVenue, Venue};
use crate::domain::ports::VenuesApi;
use crate::error::AppError;
use crate::infra::http::error_from_response;

pub struct HttpVenuesApi {
    client: Client,
    base_url: String,
}

impl HttpVenuesApi {
    pub fn new(client: Client, base_url: String) -> Self {
        Self { client, base_url }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl VenuesApi for HttpVenuesApi {
    async fn list(&self) -> Result<Vec<Venue>, AppError> {
        let res = self.client.get(self.url("/venues")).send().await?;
        if !res.status().is_success() {
            return Err(error_from_response("GET /venues", res).await);
        }
        Ok(res.json().await?)
    }

    async fn get(&self, id: &str) -> Result<Venue, AppError> {
        let res = self
            .client
            .get(self.url(&format!("/venues/{}", id)))
            .send()
            .await?;
        if res.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(AppError::NotFound(format!("Venue {} not found", id)));
        }
        if !res.status().is_success() {
            return Err(error_from_response("GET /venues/{id}", res).await);
        }
        Ok(res.json().await?)
    }

    async fn create(&self, venue: &NewVenue) -> Result<String, AppError> {
        let res = self
            .client
            .post(self.url("/venues"))
            .json(venue)
            .send()
            .await?;
        if !res.status().is_success() {
            return Err(error_from_response("POST /venues", res).await);
        }
        // The server answers with the bare venue id, not JSON.
        Ok(res.text().await?.trim().to_string())
    }
}
