//! Shared marketplace domain model and view state.
//!
//! This crate owns the listing/profile data model used by both `server` and
//! `client`, plus every derivation the pages perform on it (catalog
//! filtering, status partitions, draft image bounds, edit/view toggles).
//! Nothing here touches the DOM, the network, or a clock, so each piece can
//! be driven directly from unit tests.

pub mod catalog;
pub mod draft;
pub mod error;
pub mod fixtures;
pub mod listing;
pub mod manager;
pub mod profile;
pub mod submission;
pub mod viewer;

pub use error::MarketError;
pub use listing::{Category, Condition, Listing, ListingId, ListingStats, ListingStatus, Price};
pub use viewer::{Member, Viewer};
