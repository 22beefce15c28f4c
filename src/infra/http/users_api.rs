use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::domain::models::user::{NewUser, User};
use crate::domain::ports::UsersApi;
use crate::error::AppError;
use crate::infra::http::error_from_response;

pub struct HttpUsersApi {
    client: Client,
    base_url: String,
}

impl HttpUsersApi {
    pub fn new(client: Client, base_url: String) -> Self {
        Self { client, base_url }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl UsersApi for HttpUsersApi {
    async fn register(&self, user: &NewUser) -> Result<User, AppError> {
        let res = self
            .client
            .post(self.url("/users"))
            .json(user)
            .send()
            .await?;
        if !res.status().is_success() {
            return Err(error_from_response("POST /users", res).await);
        }
        Ok(res.json().await?)
    }

    async fn login(&self, email: &str, password: &str) -> Result<String, AppError> {
        debug!(email, "logging in");
        let res = self
            .client
            .get(self.url("/users/login"))
            .query(&[("email", email), ("password", password)])
            .send()
            .await?;
        if !res.status().is_success() {
            return Err(error_from_response("GET /users/login", res).await);
        }
        // The token comes back as plain text, not JSON.
        Ok(res.text().await?.trim().to_string())
    }

    async fn list(&self) -> Result<Vec<User>, AppError> {
        let res = self.client.get(self.url("/users")).send().await?;
        if !res.status().is_success() {
            return Err(error_from_response("GET /users", res).await);
        }
        Ok(res.json().await?)
    }
}
