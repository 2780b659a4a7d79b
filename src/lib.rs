// Public API for integration tests and UI hosts

pub mod clock;
pub mod config;
pub mod error;
pub mod handlers;
pub mod protocol;
pub mod random;
pub mod state;
pub mod types;
pub mod wheel;
