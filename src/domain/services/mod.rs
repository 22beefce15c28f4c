pub mod auth_context;
pub mod booking_service;
pub mod eligibility;
pub mod presentation;
