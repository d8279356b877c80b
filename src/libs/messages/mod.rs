//! Centralized user-facing text.
//!
//! Every message shown to a user, returned in an [`Outcome`](crate::libs::outcome::Outcome)
//! or in a validation result is a [`Message`] variant rendered through its
//! `Display` implementation.

pub mod display;
pub mod macros;
pub mod types;

pub use types::Message;
