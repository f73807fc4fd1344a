//! Browser and API services.
//!
//! # Services
//!
//! - [`waitlist`] - Waitlist submission to the external API
//! - [`clipboard`] - Copy text to the system clipboard
//! - [`download`] - Save the validation image locally
//!
//! All of them are one-shot: no retry, no timeout, no cancellation.
//! Callers turn the error into a notification.

pub mod waitlist;
pub mod clipboard;
pub mod download;

pub use waitlist::*;
pub use clipboard::*;
pub use download::*;
