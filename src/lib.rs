pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod middleware;
pub mod openapi;
pub mod repos;
pub mod services;
pub mod state;
