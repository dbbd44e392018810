pub mod auth;
pub mod authors;
pub mod health;
pub mod users;
