pub mod auth;
pub mod deck;
pub mod session;
