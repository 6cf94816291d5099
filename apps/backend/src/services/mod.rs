pub mod auth;
pub mod choices;
pub mod deck;
pub mod session;
