pub mod admin;
pub mod booking_flow;
pub mod discovery;
pub mod event_detail;
pub mod my_bookings;
