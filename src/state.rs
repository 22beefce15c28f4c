use std::sync::Arc;

use crate::config::Config;
use crate::domain::ports::{BookingsApi, EventsApi, ImageSearch, UsersApi, VenuesApi};
use crate::domain::services::auth_context::AuthContext;
use crate::domain::services::booking_service::BookingService;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub events_api: Arc<dyn EventsApi>,
    pub venues_api: Arc<dyn VenuesApi>,
    pub bookings_api: Arc<dyn BookingsApi>,
    pub users_api: Arc<dyn UsersApi>,
    pub image_search: Arc<dyn ImageSearch>,
    pub auth: Arc<AuthContext>,
    pub booking_service: Arc<BookingService>,
}
