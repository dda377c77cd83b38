//! Network boundary modules.
//!
//! ARCHITECTURE
//! ============
//! `api` is the only place that knows server URLs; pages call its async
//! helpers and fold the results into their local state.

pub mod api;
