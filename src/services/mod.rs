//! Controllers that turn user intents into state transitions.
//!
//! DESIGN
//! ======
//! Each controller writes through a [`crate::state::store::StateHandle`], so
//! the same code runs against Leptos signals on the page and against
//! `LocalStore` under test. Deferred work is returned or awaited here; the
//! caller decides where to spawn it.

pub mod chat_bot;
pub mod submission;
