#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use serde_json::json;
use uuid::Uuid;

use eventhub_client::config::Config;
use eventhub_client::domain::models::{
    booking::{Booking, NewBooking},
    event::{Event, EventType, NewEvent, TicketPricing, TicketTier},
    session::Session,
    user::{NewUser, Role, User},
    venue::{NewVenue, Venue},
};
use eventhub_client::domain::ports::{
    BookingsApi, EventsApi, ImageSearch, SessionStore, UsersApi, VenuesApi,
};
use eventhub_client::domain::services::auth_context::AuthContext;
use eventhub_client::domain::services::booking_service::BookingService;
use eventhub_client::error::AppError;
use eventhub_client::state::AppState;

fn transient(endpoint: &str) -> AppError {
    AppError::Status {
        endpoint: endpoint.to_string(),
        status: 503,
        message: "service unavailable".to_string(),
    }
}

#[derive(Default)]
pub struct InMemoryEventsApi {
    pub events: Mutex<Vec<Event>>,
    pub fail: AtomicBool,
}

#[async_trait]
impl EventsApi for InMemoryEventsApi {
    async fn list(&self) -> Result<Vec<Event>, AppError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(transient("GET /events"));
        }
        Ok(self.events.lock().unwrap().clone())
    }

    async fn get(&self, id: &str) -> Result<Event, AppError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(transient("GET /events/{id}"));
        }
        self.events
            .lock()
            .unwrap()
            .iter()
            .find(|e| e.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Event {} not found", id)))
    }

    async fn create(&self, event: &NewEvent) -> Result<Event, AppError> {
        let created = Event {
            id: Uuid::new_v4().to_string(),
            event_name: event.event_name.clone(),
            event_description: event.event_description.clone(),
            event_category: event.event_category.clone(),
            event_type: event.event_type,
            start_date_time: event.start_date_time,
            end_date_time: event.end_date_time,
            venue_id: Some(event.venue_id.clone()),
            ticket_details: event.ticket_details.clone(),
            contact: event.contact.clone(),
            additional_message: event.additional_message.clone(),
            event_photo_url: event.event_photo_url.clone(),
            cover_photo_url: event.cover_photo_url.clone(),
        };
        self.events.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn update(&self, id: &str, event: &NewEvent) -> Result<Event, AppError> {
        let mut events = self.events.lock().unwrap();
        let existing = events
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Event {} not found", id)))?;
        existing.event_name = event.event_name.clone();
        existing.event_description = event.event_description.clone();
        existing.event_type = event.event_type;
        existing.start_date_time = event.start_date_time;
        existing.end_date_time = event.end_date_time;
        existing.ticket_details = event.ticket_details.clone();
        Ok(existing.clone())
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let mut events = self.events.lock().unwrap();
        let before = events.len();
        events.retain(|e| e.id != id);
        if events.len() == before {
            return Err(AppError::NotFound(format!("Event {} not found", id)));
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryVenuesApi {
    pub venues: Mutex<Vec<Venue>>,
    pub fail: AtomicBool,
}

#[async_trait]
impl VenuesApi for InMemoryVenuesApi {
    async fn list(&self) -> Result<Vec<Venue>, AppError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(transient("GET /venues"));
        }
        Ok(self.venues.lock().unwrap().clone())
    }

    async fn get(&self, id: &str) -> Result<Venue, AppError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(transient("GET /venues/{id}"));
        }
        self.venues
            .lock()
            .unwrap()
            .iter()
            .find(|v| v.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Venue {} not found", id)))
    }

    async fn create(&self, venue: &NewVenue) -> Result<String, AppError> {
        let id = Uuid::new_v4().to_string();
        self.venues.lock().unwrap().push(Venue {
            id: id.clone(),
            venue_name: venue.venue_name.clone(),
            capacity: venue.capacity,
            address: venue.address.clone(),
            city: venue.city.clone(),
            zip_code: venue.zip_code.clone(),
            manager: venue.manager.clone(),
        });
        Ok(id)
    }
}

#[derive(Default)]
pub struct InMemoryBookingsApi {
    pub bookings: Mutex<Vec<Booking>>,
    pub fail_create: AtomicBool,
    pub fail_list: AtomicBool,
}

#[async_trait]
impl BookingsApi for InMemoryBookingsApi {
    async fn list(&self) -> Result<Vec<Booking>, AppError> {
        if self.fail_list.load(Ordering::SeqCst) {
            return Err(transient("GET /bookings"));
        }
        Ok(self.bookings.lock().unwrap().clone())
    }

    async fn create(&self, booking: &NewBooking) -> Result<Booking, AppError> {
        if self.fail_create.load(Ordering::SeqCst) {
            return Err(transient("POST /bookings"));
        }
        let created = Booking {
            id: Uuid::new_v4().to_string(),
            user_id: booking.user_id.clone(),
            event_id: booking.event_id.clone(),
            number_of_tickets: booking.number_of_tickets,
            total_amount: booking.total_amount,
            booking_status: booking.booking_status,
            payment_status: booking.payment_status,
            booking_date: booking.booking_date,
            cancellation_deadline: booking.cancellation_deadline,
            booking_payment_ids: booking.booking_payment_ids.clone(),
        };
        self.bookings.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn cancel(&self, booking: &Booking) -> Result<(), AppError> {
        let mut bookings = self.bookings.lock().unwrap();
        let stored = bookings
            .iter_mut()
            .find(|b| b.id == booking.id)
            .ok_or_else(|| AppError::NotFound(format!("Booking {} not found", booking.id)))?;
        stored.booking_status = booking.booking_status;
        Ok(())
    }
}

/// Issues real (HS256-signed) JWTs so the claim-decoding path is exercised
/// end to end.
#[derive(Default)]
pub struct FakeUsersApi {
    pub accounts: Mutex<Vec<(User, String)>>,
}

impl FakeUsersApi {
    pub fn seed(&self, user: User, password: &str) {
        self.accounts
            .lock()
            .unwrap()
            .push((user, password.to_string()));
    }
}

#[async_trait]
impl UsersApi for FakeUsersApi {
    async fn register(&self, new_user: &NewUser) -> Result<User, AppError> {
        let mut accounts = self.accounts.lock().unwrap();
        if accounts.iter().any(|(u, _)| u.email == new_user.email) {
            return Err(AppError::Status {
                endpoint: "POST /users".into(),
                status: 409,
                message: "Email already registered".into(),
            });
        }
        let user = User {
            id: Uuid::new_v4().to_string(),
            username: new_user.username.clone(),
            email: new_user.email.clone(),
            role: Role::User,
        };
        accounts.push((user.clone(), new_user.password.clone()));
        Ok(user)
    }

    async fn login(&self, email: &str, password: &str) -> Result<String, AppError> {
        let accounts = self.accounts.lock().unwrap();
        let user = accounts
            .iter()
            .find(|(u, p)| u.email == email && p == password)
            .map(|(u, _)| u.clone())
            .ok_or(AppError::Status {
                endpoint: "GET /users/login".into(),
                status: 401,
                message: "Invalid credentials".into(),
            })?;
        let claims = json!({
            "id": user.id,
            "username": user.username,
            "email": user.email,
            "role": user.role,
        });
        Ok(encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap())
    }

    async fn list(&self) -> Result<Vec<User>, AppError> {
        Ok(self
            .accounts
            .lock()
            .unwrap()
            .iter()
            .map(|(u, _)| u.clone())
            .collect())
    }
}

#[derive(Default)]
pub struct InMemorySessionStore {
    pub inner: Mutex<Option<Session>>,
}

impl SessionStore for InMemorySessionStore {
    fn load(&self) -> Result<Option<Session>, AppError> {
        Ok(self.inner.lock().unwrap().clone())
    }

    fn save(&self, session: &Session) -> Result<(), AppError> {
        *self.inner.lock().unwrap() = Some(session.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), AppError> {
        *self.inner.lock().unwrap() = None;
        Ok(())
    }
}

pub struct StubImageSearch {
    pub urls: Vec<String>,
    pub fail: AtomicBool,
}

impl Default for StubImageSearch {
    fn default() -> Self {
        Self {
            urls: vec!["https://img.example/1.jpg".into()],
            fail: AtomicBool::new(false),
        }
    }
}

#[async_trait]
impl ImageSearch for StubImageSearch {
    async fn search(&self, query: &str) -> Result<Vec<String>, AppError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(transient("GET image search"));
        }
        if query.is_empty() {
            return Ok(Vec::new());
        }
        Ok(self.urls.clone())
    }
}

pub struct TestApp {
    pub state: AppState,
    pub events: Arc<InMemoryEventsApi>,
    pub venues: Arc<InMemoryVenuesApi>,
    pub bookings: Arc<InMemoryBookingsApi>,
    pub users: Arc<FakeUsersApi>,
    pub session_store: Arc<InMemorySessionStore>,
    pub image_search: Arc<StubImageSearch>,
}

impl TestApp {
    pub fn new() -> Self {
        let events = Arc::new(InMemoryEventsApi::default());
        let venues = Arc::new(InMemoryVenuesApi::default());
        let bookings = Arc::new(InMemoryBookingsApi::default());
        let users = Arc::new(FakeUsersApi::default());
        let session_store = Arc::new(InMemorySessionStore::default());
        let image_search = Arc::new(StubImageSearch::default());

        let auth = Arc::new(AuthContext::new(users.clone(), session_store.clone()));
        let booking_service = Arc::new(BookingService::new(bookings.clone()));

        let state = AppState {
            config: test_config(),
            events_api: events.clone(),
            venues_api: venues.clone(),
            bookings_api: bookings.clone(),
            users_api: users.clone(),
            image_search: image_search.clone(),
            auth,
            booking_service,
        };

        Self {
            state,
            events,
            venues,
            bookings,
            users,
            session_store,
            image_search,
        }
    }

    pub async fn sign_in(&self, role: Role) -> User {
        let user = User {
            id: Uuid::new_v4().to_string(),
            username: "alice".into(),
            email: format!("{}@example.com", Uuid::new_v4()),
            role,
        };
        self.users.seed(user.clone(), "pw");
        self.state
            .auth
            .login(&user.email, "pw")
            .await
            .expect("test login failed")
    }

    pub fn seed_event(&self, event: Event) {
        self.events.events.lock().unwrap().push(event);
    }

    pub fn seed_venue(&self, venue: Venue) {
        self.venues.venues.lock().unwrap().push(venue);
    }
}

pub fn test_config() -> Config {
    Config {
        api_base_url: "http://localhost:8080/api".into(),
        request_timeout_secs: 10,
        image_search_url: "http://localhost:8081".into(),
        image_search_key: String::new(),
        image_search_cx: String::new(),
        session_file: std::env::temp_dir().join(format!("session-{}.json", Uuid::new_v4())),
    }
}

pub fn future_event(id: &str, event_type: EventType, price: f64, quantity: Option<i64>) -> Event {
    let pricing = if price > 0.0 {
        TicketPricing::Paid
    } else {
        TicketPricing::Free
    };
    Event {
        id: id.to_string(),
        event_name: format!("Event {}", id),
        event_description: "An event".into(),
        event_category: "TECH".into(),
        event_type,
        start_date_time: Utc::now() + Duration::days(7),
        end_date_time: Utc::now() + Duration::days(7) + Duration::hours(4),
        venue_id: None,
        ticket_details: vec![TicketTier {
            ticket_name: "General".into(),
            ticket_price: price,
            ticket_price_details: pricing,
            ticket_quantity: quantity,
        }],
        contact: None,
        additional_message: None,
        event_photo_url: None,
        cover_photo_url: None,
    }
}
