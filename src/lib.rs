pub mod app;
pub mod auth;
pub mod config;
pub mod dashboard;
pub mod db;
pub mod health;
pub mod profiles;
pub mod reference;
pub mod state;
