pub mod accommodation;
pub mod auth;
pub mod user;
