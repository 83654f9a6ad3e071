//! ComandAS headless client.
//!
//! The browser chrome of the ComandAS restaurant app - forms, charts,
//! dialogs, toasts - is supplied by whatever view layer embeds this
//! crate. What lives here is everything underneath: typed calls against
//! the backend's HTTP endpoints, the live-update channel used to notify
//! other connected clients, the locally persisted session object, and
//! the screen controllers (sign-in, sign-up, user administration,
//! profile, admin dashboard) that wire those together.
//!
//! # Architecture
//!
//! - [`provider`] - the HTTP request wrapper: an [`provider::ApiTransport`]
//!   trait plus a `reqwest` implementation
//! - [`api`] - typed per-endpoint clients with explicit result records
//! - [`live`] - the live-update channel: subscribe/publish by topic plus
//!   a connectivity flag, with an in-process implementation
//! - [`storage`] - the local key-value store behind the session object
//! - [`session`] - explicit read/write/clear lifecycle for the cached
//!   session, injected into screens instead of ambient global state
//! - [`screens`] - one controller per screen; every user action returns
//!   a typed outcome (toasts, navigation, dialog requests) instead of
//!   touching a UI directly
//!
//! # Example
//!
//! ```rust,no_run
//! use comandas_app::config::ClientConfig;
//! use comandas_app::screens::sign_in::SignInScreen;
//! use comandas_app::state::AppContext;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ClientConfig::from_env()?;
//! let ctx = AppContext::new(config);
//!
//! let mut screen = SignInScreen::new(&ctx);
//! screen.form.name = "ana".to_owned();
//! screen.form.password = "secreto".to_owned();
//! let outcome = screen.submit().await;
//!
//! if let Some(route) = outcome.navigate {
//!     println!("navigate to {}", route.as_path());
//! }
//! # Ok(())
//! # }
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod config;
pub mod error;
pub mod forms;
pub mod live;
pub mod navigator;
pub mod notice;
pub mod provider;
pub mod screens;
pub mod session;
pub mod state;
pub mod storage;
pub mod telemetry;
