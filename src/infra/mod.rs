pub mod factory;
pub mod http;
pub mod session;
