//! Configuration modules for the MovaSafe API.
//!
//! Configuration types live in the `movasafe-config` workspace crate and are
//! re-exported here so application code addresses them as `crate::config::*`.
//! Everything is loaded from environment variables with hardcoded defaults;
//! see each module for the variable names.
//!
//! # Modules
//!
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration

pub use movasafe_config::cors;
