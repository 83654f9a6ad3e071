//! ComandAS Core - Shared types library.
//!
//! This crate provides the domain types used across the ComandAS client:
//! - `app` - The headless client (screens, transports, session handling)
//! - `integration-tests` - End-to-end scenario tests
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients, no
//! channel plumbing. This keeps it lightweight and allows it to be used
//! anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, roles, emails, the session object, and the
//!   chart series shapes the backend serves

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
