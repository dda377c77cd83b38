//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and its own mock dataset, and
//! delegates rendering details to `components`.

pub mod catalog;
pub mod home;
pub mod my_listings;
pub mod new_listing;
pub mod profile;
