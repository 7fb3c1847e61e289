pub mod auth_api;
pub mod error;
pub mod http;
pub mod wallet_api;
