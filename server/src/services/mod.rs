//! Domain services used by HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own data access so route handlers can stay focused on
//! protocol translation and viewer checks.

pub mod store;
