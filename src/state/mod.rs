//! Page-level state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`form`, `chat`) so the two widgets on the page
//! never share data. `store` defines the handle both controllers write
//! through, so the same transition code drives Leptos signals in the browser
//! and plain containers in tests.

pub mod chat;
pub mod form;
pub mod store;
