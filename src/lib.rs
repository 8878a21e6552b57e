//! # MovaSafe API
//!
//! Backend service for the MovaSafe admin portal. This crate hosts the
//! cross-origin resource sharing (CORS) policy layer through which every
//! browser request from the portal frontend passes: the frontend is served
//! from a different origin than the API, so without this policy the browser
//! would refuse to let the portal read any response.
//!
//! ## Architecture
//!
//! ```text
//! src/
//! ├── config/           # Configuration modules (CORS)
//! ├── modules/          # Feature modules
//! │   └── health/      # Liveness endpoint
//! ├── logging.rs        # Request logging middleware
//! ├── router.rs         # Main application router + CORS layer
//! └── state.rs          # Shared application state
//! ```
//!
//! The policy itself lives in the `movasafe-config` workspace crate as an
//! immutable [`config::cors::CorsConfig`] value, built once at startup from
//! environment variables and installed over the whole router in
//! [`router::init_router`]. Application code never consults or mutates it
//! per-request; the layer does the matching.
//!
//! ## Policy
//!
//! - Origins: explicit allow-list, exact scheme + host + port matches.
//!   Default is the portal's dev origins (`http://localhost:3000` and the
//!   dev-LAN address `http://192.168.206.1:3000`); deployments set
//!   `ALLOWED_ORIGINS`.
//! - Methods: `GET, POST, PUT, DELETE, OPTIONS, PATCH`.
//! - Headers: whatever the preflight asks for is echoed back.
//! - Credentials: allowed, which is why the origin list must never be a
//!   wildcard.
//! - Preflight answers are cacheable for one hour.
//!
//! ## Modules
//!
//! - [`config`]: Application configuration
//! - [`logging`]: Request logging middleware
//! - [`modules`]: Feature modules
//! - [`router`]: Main application router
//! - [`state`]: Shared application state

pub mod config;
pub mod logging;
pub mod modules;
pub mod router;
pub mod state;
