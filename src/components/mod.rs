//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the signup form controls, the support chat widget, and
//! the outcome modal, reading and writing shared state from Leptos context
//! providers.

pub mod chat_widget;
pub mod form_field;
pub mod notification_modal;
