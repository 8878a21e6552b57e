//! # MovaSafe Config
//!
//! Configuration types for the MovaSafe API.
//!
//! This crate provides configuration structures loaded from environment variables:
//!
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//!
//! # Example
//!
//! ```ignore
//! use movasafe_config::CorsConfig;
//!
//! // Load config from environment
//! let cors_config = CorsConfig::from_env();
//! ```

pub mod cors;

// Re-export commonly used types at crate root
pub use cors::CorsConfig;
