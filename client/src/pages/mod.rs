//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (guards, submit flows) and
//! delegates rendering details to `components`.

pub mod profile;
pub mod sign_in;
pub mod sign_up;
