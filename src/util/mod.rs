//! Utility helpers shared across page modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (timers) and pure
//! rules (validation) from page and component logic.

pub mod timer;
pub mod validation;
