use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::domain::models::booking::{Booking, NewBooking};
use crate::domain::ports::BookingsApi;
use crate::error::AppError;
use crate::infra::http::error_from_response;

pub struct HttpBookingsApi {
    client: Client,
    base_url: String,
}

impl HttpBookingsApi {
    pub fn new(client: Client, base_url: String) -> Self {
        Self { client, base_url }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl BookingsApi for HttpBookingsApi {
    async fn list(&self) -> Result<Vec<Booking>, AppError> {
        let res = self.client.get(self.url("/bookings")).send().await?;
        if !res.status().is_success() {
            return Err(error_from_response("GET /bookings", res).await);
        }
        Ok(res.json().await?)
    }

    async fn create(&self, booking: &NewBooking) -> Result<Booking, AppError> {
        debug!(event_id = %booking.event_id, "creating booking");
        let res = self
            .client
            .post(self.url("/bookings"))
            .json(booking)
            .send()
            .await?;
        if !res.status().is_success() {
            return Err(error_from_response("POST /bookings", res).await);
        }
        Ok(res.json().await?)
    }

    async fn cancel(&self, booking: &Booking) -> Result<(), AppError> {
        let res = self
            .client
            .put(self.url(&format!("/bookings/{}", booking.id)))
            .json(booking)
            .send()
            .await?;
        if !res.status().is_success() {
            return Err(error_from_response("PUT /bookings/{id}", res).await);
        }
        Ok(())
    }
}
