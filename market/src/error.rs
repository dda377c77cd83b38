//! Errors raised by listing-set mutations.

use crate::listing::{ListingId, ListingStatus};

/// Error returned by [`crate::manager::OwnerListings`] operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MarketError {
    /// No listing with this id exists in the set.
    #[error("listing not found: {0}")]
    ListingNotFound(ListingId),
    /// Owners may only move listings between active and paused.
    #[error("status {0} cannot be set by the owner")]
    InvalidStatusTarget(ListingStatus),
}
