use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::domain::models::event::{Event, NewEvent};
use crate::domain::ports::EventsApi;
use crate::error::AppError;
use crate::infra::http::error_from_response;

pub struct HttpEventsApi {
    client: Client,
    base_url: String,
}

impl HttpEventsApi {
    pub fn new(client: Client, base_url: String) -> Self {
        Self { client, base_url }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl EventsApi for HttpEventsApi {
    async fn list(&self) -> Result<Vec<Event>, AppError> {
        let res = self.client.get(self.url("/events")).send().await?;
        if !res.status().is_success() {
            return Err(error_from_response("GET /events", res).await);
        }
        Ok(res.json().await?)
    }

    async fn get(&self, id: &str) -> Result<Event, AppError> {
        let res = self
            .client
            .get(self.url(&format!("/events/{}", id)))
            .send()
            .await?;
        if res.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(AppError::NotFound(format!("Event {} not found", id)));
        }
        if !res.status().is_success() {
            return Err(error_from_response("GET /events/{id}", res).await);
        }
        Ok(res.json().await?)
    }

    async fn create(&self, event: &NewEvent) -> Result<Event, AppError> {
        debug!(name = %event.event_name, "creating event");
        let res = self
            .client
            .post(self.url("/events"))
            .json(event)
            .send()
            .await?;
        if !res.status().is_success() {
            return Err(error_from_response("POST /events", res).await);
        }
        Ok(res.json().await?)
    }

    async fn update(&self, id: &str, event: &NewEvent) -> Result<Event, AppError> {
        let res = self
            .client
            .put(self.url(&format!("/events/{}", id)))
            .json(event)
            .send()
            .await?;
        if !res.status().is_success() {
            return Err(error_from_response("PUT /events/{id}", res).await);
        }
        Ok(res.json().await?)
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let res = self
            .client
            .delete(self.url(&format!("/events/{}", id)))
            .send()
            .await?;
        if !res.status().is_success() {
            return Err(error_from_response("DELETE /events/{id}", res).await);
        }
        Ok(())
    }
}
