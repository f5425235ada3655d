//! Shared types for the InHarmony admin console
//!
//! Wire-level DTOs mirrored from the platform API, response envelopes,
//! and utility types used across the console crates.

pub mod auth;
pub mod image;
pub mod locale;
pub mod models;
pub mod response;
pub mod validate;

// Re-exports
pub use auth::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse, Role, User, UserUpdate};
pub use image::{ImageRef, ImageSet};
pub use locale::Locale;
pub use response::{ApiResponse, Pagination};
pub use serde::{Deserialize, Serialize};
