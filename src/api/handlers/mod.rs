pub mod accommodation;
pub mod admin;
pub mod destination;
pub mod health;
pub mod user;
