//! Marketplace data access.
//!
//! DESIGN
//! ======
//! `MarketStore` is the boundary handlers talk to. `MemoryStore` is the only
//! implementation: the catalog, one owner's listings, and one profile, all
//! seeded from fixtures and lost on restart. Owner mutations go through
//! `OwnerListings` so the server enforces the same status and delete rules
//! as the browser.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use market::catalog::{CatalogQuery, filter_listings};
use market::manager::{Confirmation, OwnerListings, StatusCounts, StatusTab};
use market::profile::UserProfile;
use market::{Listing, ListingId, ListingStatus, MarketError, fixtures};
use tokio::sync::RwLock;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error(transparent)]
    Market(#[from] MarketError),
}

/// Async data-access trait. Enables swapping the backing store in tests.
#[async_trait::async_trait]
pub trait MarketStore: Send + Sync {
    /// Public catalog listings matching `query`, in catalog order.
    async fn catalog(&self, query: &CatalogQuery) -> Vec<Listing>;

    /// The owner's listings under `tab` plus totals across all tabs.
    async fn owner_listings(&self, tab: StatusTab) -> (Vec<Listing>, StatusCounts);

    /// Set one owned listing to `Active` or `Paused`.
    ///
    /// # Errors
    ///
    /// [`StoreError::Market`] for an unknown id or a `Sold` target.
    async fn set_status(&self, id: ListingId, status: ListingStatus) -> Result<Listing, StoreError>;

    /// Remove one owned listing.
    ///
    /// # Errors
    ///
    /// [`StoreError::Market`] for an unknown id.
    async fn delete_listing(&self, id: ListingId) -> Result<Listing, StoreError>;

    async fn profile(&self) -> UserProfile;
}

pub struct MemoryStore {
    catalog: Vec<Listing>,
    owned: RwLock<OwnerListings>,
    profile: UserProfile,
}

impl MemoryStore {
    #[must_use]
    pub fn new(catalog: Vec<Listing>, owned: Vec<Listing>, profile: UserProfile) -> Self {
        Self { catalog, owned: RwLock::new(OwnerListings::new(owned)), profile }
    }

    /// Store seeded with the demo dataset.
    #[must_use]
    pub fn seeded() -> Self {
        Self::new(fixtures::catalog_listings(), fixtures::owner_listings(), fixtures::demo_profile())
    }
}

#[async_trait::async_trait]
impl MarketStore for MemoryStore {
    async fn catalog(&self, query: &CatalogQuery) -> Vec<Listing> {
        filter_listings(&self.catalog, query).into_iter().cloned().collect()
    }

    async fn owner_listings(&self, tab: StatusTab) -> (Vec<Listing>, StatusCounts) {
        let owned = self.owned.read().await;
        (owned.by_tab(tab).into_iter().cloned().collect(), owned.counts())
    }

    async fn set_status(&self, id: ListingId, status: ListingStatus) -> Result<Listing, StoreError> {
        let mut owned = self.owned.write().await;
        owned.set_status(id, status)?;
        let listing = owned.get(id).cloned().ok_or(MarketError::ListingNotFound(id))?;
        Ok(listing)
    }

    async fn delete_listing(&self, id: ListingId) -> Result<Listing, StoreError> {
        let mut owned = self.owned.write().await;
        let request = owned.request_delete(id)?;
        // The browser already asked; a server delete is always confirmed.
        let removed = owned.resolve_delete(request, Confirmation::Confirmed).ok_or(MarketError::ListingNotFound(id))?;
        Ok(removed)
    }

    async fn profile(&self) -> UserProfile {
        self.profile.clone()
    }
}
