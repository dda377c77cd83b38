//! Owner listing management: status tabs, pause/activate, confirmed delete.
//!
//! DESIGN
//! ======
//! Deletion is split into a request and a resolution so the confirmation
//! prompt lives in the UI while the set itself only changes on an explicit
//! `Confirmed`. A cancelled request is a no-op.

#[cfg(test)]
#[path = "manager_test.rs"]
mod manager_test;

use serde::{Deserialize, Serialize};

use crate::error::MarketError;
use crate::listing::{Listing, ListingId, ListingStatus};

/// Tabs on the owner's listing page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusTab {
    #[default]
    All,
    Active,
    Paused,
    Sold,
}

impl StatusTab {
    pub const ALL: [Self; 4] = [Self::All, Self::Active, Self::Paused, Self::Sold];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Active => "Active",
            Self::Paused => "Paused",
            Self::Sold => "Sold",
        }
    }

    #[must_use]
    pub fn from_str(raw: &str) -> Option<Self> {
        match raw {
            "all" => Some(Self::All),
            "active" => Some(Self::Active),
            "paused" => Some(Self::Paused),
            "sold" => Some(Self::Sold),
            _ => None,
        }
    }

    #[must_use]
    pub fn admits(self, status: ListingStatus) -> bool {
        match self {
            Self::All => true,
            Self::Active => status == ListingStatus::Active,
            Self::Paused => status == ListingStatus::Paused,
            Self::Sold => status == ListingStatus::Sold,
        }
    }
}

/// Per-status totals for the stat cards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    pub total: usize,
    pub active: usize,
    pub paused: usize,
    pub sold: usize,
}

impl StatusCounts {
    #[must_use]
    pub fn for_tab(self, tab: StatusTab) -> usize {
        match tab {
            StatusTab::All => self.total,
            StatusTab::Active => self.active,
            StatusTab::Paused => self.paused,
            StatusTab::Sold => self.sold,
        }
    }
}

/// The one status control offered for a listing row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusChange {
    Pause,
    Activate,
}

impl StatusChange {
    #[must_use]
    pub fn target(self) -> ListingStatus {
        match self {
            Self::Pause => ListingStatus::Paused,
            Self::Activate => ListingStatus::Active,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Pause => "Pause",
            Self::Activate => "Activate",
        }
    }
}

/// Control shown for a listing in `status`. Sold listings get none.
#[must_use]
pub fn offered_change(status: ListingStatus) -> Option<StatusChange> {
    match status {
        ListingStatus::Active => Some(StatusChange::Pause),
        ListingStatus::Paused => Some(StatusChange::Activate),
        ListingStatus::Sold => None,
    }
}

/// Outcome of the delete confirmation prompt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    Cancelled,
}

/// A pending delete awaiting confirmation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeleteRequest {
    pub id: ListingId,
    pub title: String,
}

impl DeleteRequest {
    #[must_use]
    pub fn prompt(&self) -> &'static str {
        "Are you sure you want to delete this listing?"
    }
}

/// The signed-in owner's listing set.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OwnerListings {
    listings: Vec<Listing>,
}

impl OwnerListings {
    #[must_use]
    pub fn new(listings: Vec<Listing>) -> Self {
        Self { listings }
    }

    #[must_use]
    pub fn all(&self) -> &[Listing] {
        &self.listings
    }

    #[must_use]
    pub fn get(&self, id: ListingId) -> Option<&Listing> {
        self.listings.iter().find(|l| l.id == id)
    }

    /// Listings shown under `tab`, in set order.
    #[must_use]
    pub fn by_tab(&self, tab: StatusTab) -> Vec<&Listing> {
        self.listings.iter().filter(|l| tab.admits(l.status)).collect()
    }

    #[must_use]
    pub fn counts(&self) -> StatusCounts {
        self.listings.iter().fold(
            StatusCounts { total: self.listings.len(), ..StatusCounts::default() },
            |mut acc, l| {
                match l.status {
                    ListingStatus::Active => acc.active += 1,
                    ListingStatus::Paused => acc.paused += 1,
                    ListingStatus::Sold => acc.sold += 1,
                }
                acc
            },
        )
    }

    /// Replace one listing's status, leaving every other field untouched.
    ///
    /// # Errors
    ///
    /// [`MarketError::InvalidStatusTarget`] when `target` is `Sold`,
    /// [`MarketError::ListingNotFound`] for an unknown id.
    pub fn set_status(&mut self, id: ListingId, target: ListingStatus) -> Result<(), MarketError> {
        if target == ListingStatus::Sold {
            return Err(MarketError::InvalidStatusTarget(target));
        }
        let listing = self
            .listings
            .iter_mut()
            .find(|l| l.id == id)
            .ok_or(MarketError::ListingNotFound(id))?;
        listing.status = target;
        Ok(())
    }

    /// Apply the control offered for `id`'s current status.
    ///
    /// Returns the new status, or `None` when nothing is offered (sold).
    ///
    /// # Errors
    ///
    /// [`MarketError::ListingNotFound`] for an unknown id.
    pub fn apply_offered_change(&mut self, id: ListingId) -> Result<Option<ListingStatus>, MarketError> {
        let current = self.get(id).ok_or(MarketError::ListingNotFound(id))?.status;
        let Some(change) = offered_change(current) else {
            return Ok(None);
        };
        self.set_status(id, change.target())?;
        Ok(Some(change.target()))
    }

    /// Start a delete. Nothing changes until [`Self::resolve_delete`].
    ///
    /// # Errors
    ///
    /// [`MarketError::ListingNotFound`] for an unknown id.
    pub fn request_delete(&self, id: ListingId) -> Result<DeleteRequest, MarketError> {
        let listing = self.get(id).ok_or(MarketError::ListingNotFound(id))?;
        Ok(DeleteRequest { id, title: listing.title.clone() })
    }

    /// Finish a delete. Only `Confirmed` removes the listing.
    pub fn resolve_delete(&mut self, request: DeleteRequest, confirmation: Confirmation) -> Option<Listing> {
        match confirmation {
            Confirmation::Cancelled => None,
            Confirmation::Confirmed => {
                let index = self.listings.iter().position(|l| l.id == request.id)?;
                Some(self.listings.remove(index))
            }
        }
    }
}
