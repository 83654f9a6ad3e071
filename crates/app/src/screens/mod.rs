//! Screen controllers.
//!
//! One controller per screen of the app. Controllers own their
//! form state, talk to the typed endpoint clients, and hand every UI
//! consequence back to the caller as data: a [`Notice`] to toast, a
//! [`Route`] to navigate to, a dialog to open. Nothing in here renders.
//!
//! [`Notice`]: crate::notice::Notice
//! [`Route`]: crate::navigator::Route

pub mod dashboard;
pub mod profile;
pub mod sign_in;
pub mod sign_up;
pub mod user_admin;
