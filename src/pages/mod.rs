//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering
//! details to `components`. Access control lives in the route table and
//! guard, not in the pages themselves.

pub mod admin_dashboard;
pub mod admin_login;
pub mod employee_dashboard;
pub mod home;
pub mod login;
pub mod manager_dashboard;
pub mod signup;
