pub mod app;
pub mod auth;
pub mod config;
pub mod content;
pub mod courses;
pub mod db;
pub mod enrollments;
pub mod error;
pub mod progress;
pub mod state;
pub mod users;
pub mod validation;
