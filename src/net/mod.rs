//! External collaborators of the signup page.
//!
//! ARCHITECTURE
//! ============
//! `account` is the account-creation seam and `notify` the user-facing
//! notification seam. Both are traits so controllers can be driven by mocks.

pub mod account;
pub mod notify;
