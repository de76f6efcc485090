pub mod agent;
pub mod collection;
pub mod config;
pub mod config_status;
pub mod error;
pub mod session;

// Re-export common error type
pub use error::VchatError;
