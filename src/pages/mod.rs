//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (guards, redirects, async
//! submissions) and delegates the logic to `state`.

pub mod dashboard;
pub mod home;
pub mod login;
pub mod register;
