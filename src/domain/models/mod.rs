pub mod booking;
pub mod event;
pub mod session;
pub mod user;
pub mod venue;
