//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The only process-wide state this app carries is the browser session;
//! everything else is route-local signal state owned by its page.

pub mod session;
