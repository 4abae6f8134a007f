pub mod claims;
mod dto;
pub mod handlers;
pub mod jwt;
pub mod password;

pub use handlers::router;
