//! Core types for the ComandAS client.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod email;
pub mod id;
pub mod role;
pub mod series;
pub mod session;
pub mod user;

pub use email::{Email, EmailError};
pub use id::*;
pub use role::Role;
pub use series::Series;
pub use session::Session;
pub use user::UserRecord;
