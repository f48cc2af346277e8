//! Session management.

mod session;

pub use session::Session;
