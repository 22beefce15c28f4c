use std::sync::Arc;

use tracing::info;

use crate::config::Config;
use crate::domain::services::auth_context::AuthContext;
use crate::domain::services::booking_service::BookingService;
use crate::infra::http::{
    bookings_api::HttpBookingsApi, build_client, events_api::HttpEventsApi,
    image_search::HttpImageSearch, users_api::HttpUsersApi, venues_api::HttpVenuesApi,
};
use crate::infra::session::FileSessionStore;
use crate::state::AppState;

/// Wires the HTTP adapters and services into one shared state record. Every
/// call site gets its base URL from here; nothing else knows the origin.
pub fn bootstrap_state(config: &Config) -> AppState {
    let client = build_client(config.request_timeout_secs);
    let base = config.api_base_url.clone();

    info!("Connecting to API at {}", base);

    let events_api = Arc::new(HttpEventsApi::new(client.clone(), base.clone()));
    let venues_api = Arc::new(HttpVenuesApi::new(client.clone(), base.clone()));
    let bookings_api = Arc::new(HttpBookingsApi::new(client.clone(), base.clone()));
    let users_api = Arc::new(HttpUsersApi::new(client.clone(), base.clone()));
    let image_search = Arc::new(HttpImageSearch::new(
        client,
        config.image_search_url.clone(),
        config.image_search_key.clone(),
        config.image_search_cx.clone(),
    ));

    let session_store = Arc::new(FileSessionStore::new(config.session_file.clone()));
    let auth = Arc::new(AuthContext::new(users_api.clone(), session_store));
    let booking_service = Arc::new(BookingService::new(bookings_api.clone()));

    AppState {
        config: config.clone(),
        events_api,
        venues_api,
        bookings_api,
        users_api,
        image_search,
        auth,
        booking_service,
    }
}
