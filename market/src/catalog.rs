//! Listing catalog filtering.
//!
//! DESIGN
//! ======
//! The visible subset is always re-derived from the full set, never from the
//! previous result, so clearing a filter restores every listing. Matching is
//! a case-insensitive substring test on the title or the category label,
//! then an exact category match unless the filter is `All`. Order is the
//! underlying set's insertion order; the sort key is recorded for display
//! only and does not reorder anything.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use serde::{Deserialize, Serialize};

use crate::listing::{Category, Listing};

/// Category selector with an `All` sentinel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Only(category) => category.label(),
        }
    }

    /// Parse a selector label; `"All"` maps to the sentinel.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        if label == "All" {
            return Some(Self::All);
        }
        Category::from_label(label).map(Self::Only)
    }

    /// Options offered by the catalog selector, sentinel first.
    #[must_use]
    pub fn options() -> Vec<Self> {
        std::iter::once(Self::All).chain(Category::ALL.into_iter().map(Self::Only)).collect()
    }

    fn admits(self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == category,
        }
    }
}

/// Sort selector. Recorded but never applied to result order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortKey {
    #[default]
    Newest,
    PriceLowToHigh,
    PriceHighToLow,
    Distance,
}

impl SortKey {
    pub const ALL: [Self; 4] = [Self::Newest, Self::PriceLowToHigh, Self::PriceHighToLow, Self::Distance];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Newest => "Newest",
            Self::PriceLowToHigh => "Price: Low to High",
            Self::PriceHighToLow => "Price: High to Low",
            Self::Distance => "Distance",
        }
    }

    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.label() == label)
    }
}

/// Current catalog controls.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogQuery {
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub category: CategoryFilter,
    #[serde(default)]
    pub sort: SortKey,
}

impl CatalogQuery {
    /// Whether `listing` passes both the text and category filters.
    ///
    /// An empty search string applies no text filter. Any other string,
    /// including whitespace, is matched as-is.
    #[must_use]
    pub fn matches(&self, listing: &Listing) -> bool {
        let text_ok = self.search.is_empty() || {
            let needle = self.search.to_lowercase();
            listing.title.to_lowercase().contains(&needle)
                || listing.category.label().to_lowercase().contains(&needle)
        };
        text_ok && self.category.admits(listing.category)
    }

    #[must_use]
    pub fn is_filtered(&self) -> bool {
        !self.search.is_empty() || self.category != CategoryFilter::All
    }
}

/// Ordered subset of `listings` matching `query`.
#[must_use]
pub fn filter_listings<'a>(listings: &'a [Listing], query: &CatalogQuery) -> Vec<&'a Listing> {
    listings.iter().filter(|listing| query.matches(listing)).collect()
}

/// Browse view state: the full listing set plus the active controls.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CatalogView {
    listings: Vec<Listing>,
    query: CatalogQuery,
}

impl CatalogView {
    #[must_use]
    pub fn new(listings: Vec<Listing>) -> Self {
        Self { listings, query: CatalogQuery::default() }
    }

    #[must_use]
    pub fn query(&self) -> &CatalogQuery {
        &self.query
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.query.search = search.into();
    }

    pub fn set_category(&mut self, category: CategoryFilter) {
        self.query.category = category;
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        self.query.sort = sort;
    }

    /// Reset search and category. The sort selection is left alone.
    pub fn clear_filters(&mut self) {
        self.query.search.clear();
        self.query.category = CategoryFilter::All;
    }

    #[must_use]
    pub fn visible(&self) -> Vec<&Listing> {
        filter_listings(&self.listings, &self.query)
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.listings.len()
    }

    /// Result count line, e.g. `Showing 2 of 6 products`.
    #[must_use]
    pub fn summary(&self) -> String {
        format!("Showing {} of {} products", self.visible().len(), self.total())
    }

    /// First `limit` listings of the unfiltered set, for the landing page.
    #[must_use]
    pub fn preview(&self, limit: usize) -> Vec<&Listing> {
        self.listings.iter().take(limit).collect()
    }
}
