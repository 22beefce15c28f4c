use crate::domain::models::{
    booking::{Booking, NewBooking},
    event::{Event, NewEvent},
    session::Session,
    user::{NewUser, User},
    venue::{NewVenue, Venue},
};
use crate::error::AppError;
use async_trait::async_trait;

#[async_trait]
pub trait EventsApi: Send + Sync {
    async fn list(&self) -> Result<Vec<Event>, AppError>;
    async fn get(&self, id: &str) -> Result<Event, AppError>;
    async fn create(&self, event: &NewEvent) -> Result<Event, AppError>;
    async fn update(&self, id: &str, event: &NewEvent) -> Result<Event, AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait VenuesApi: Send + Sync {
    async fn list(&self) -> Result<Vec<Venue>, AppError>;
    async fn get(&self, id: &str) -> Result<Venue, AppError>;
    /// Returns the new venue's id, which the server sends as plain text.
    async fn create(&self, venue: &NewVenue) -> Result<String, AppError>;
}

#[async_trait]
pub trait BookingsApi: Send + Sync {
    async fn list(&self) -> Result<Vec<Booking>, AppError>;
    async fn create(&self, booking: &NewBooking) -> Result<Booking, AppError>;
    /// Pushes a CANCELLED projection of the booking to the server.
    async fn cancel(&self, booking: &Booking) -> Result<(), AppError>;
}

#[async_trait]
pub trait UsersApi: Send + Sync {
    async fn register(&self, user: &NewUser) -> Result<User, AppError>;
    /// Returns the opaque bearer token the login endpoint emits as plain text.
    async fn login(&self, email: &str, password: &str) -> Result<String, AppError>;
    async fn list(&self) -> Result<Vec<User>, AppError>;
}

#[async_trait]
pub trait ImageSearch: Send + Sync {
    async fn search(&self, query: &str) -> Result<Vec<String>, AppError>;
}

/// Client-side persistence of the authenticated session so a restart does
/// not log the user out.
pub trait SessionStore: Send + Sync {
    fn load(&self) -> Result<Option<Session>, AppError>;
    fn save(&self, session: &Session) -> Result<(), AppError>;
    fn clear(&self) -> Result<(), AppError>;
}
