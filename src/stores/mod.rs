// Client-side state
// Session token, wallet cache and the page controllers built on them

pub mod dashboard;
pub mod login;
pub mod session;
pub mod wallet_cache;
