//! Admin Client - HTTP client for the InHarmony platform API
//!
//! Provides the console's session handling, query cache, route guarding,
//! and per-resource API calls. Rendering is left to whatever front end sits
//! on top; everything here is toolkit-agnostic state and IO.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod guard;
pub mod http;
pub mod multipart;
pub mod session;
pub mod views;

pub use api::AdminClient;
pub use cache::QueryCache;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use guard::{Destination, GuardState, RouteGuard};
pub use http::HttpClient;
pub use multipart::ImageFile;
pub use session::{SessionStore, SessionUser};

// Re-export shared types for convenience
pub use shared::{Locale, Role, User};
