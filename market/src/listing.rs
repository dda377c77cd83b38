//! Listing data model shared by every marketplace view.
//!
//! DESIGN
//! ======
//! Category, condition and status are closed enums rather than strings so
//! filters and tab partitions compare by value. Serde names follow the labels
//! shown in the UI so JSON payloads read the same as the page.

#[cfg(test)]
#[path = "listing_test.rs"]
mod listing_test;

use std::fmt;

use serde::{Deserialize, Serialize};
use time::Date;
use time::macros::format_description;

// =============================================================================
// IDS AND PRICES
// =============================================================================

/// Stable listing identifier. Assigned once, never changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListingId(pub u32);

impl fmt::Display for ListingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error returned by [`Price::parse`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PriceError {
    #[error("price is required")]
    Empty,
    #[error("price cannot be negative")]
    Negative,
    #[error("price has more than two decimal places")]
    TooPrecise,
    #[error("invalid price: {0}")]
    Invalid(String),
}

/// Non-negative price stored in whole cents.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(pub u64);

impl Price {
    /// Price from a whole-dollar amount.
    #[must_use]
    pub const fn dollars(amount: u64) -> Self {
        Self(amount * 100)
    }

    #[must_use]
    pub const fn cents(self) -> u64 {
        self.0
    }

    /// Parse user input such as `"899"`, `"899.5"` or `"899.99"`.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError`] for empty, negative, non-numeric or
    /// over-precise input.
    pub fn parse(raw: &str) -> Result<Self, PriceError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(PriceError::Empty);
        }
        if raw.starts_with('-') {
            return Err(PriceError::Negative);
        }

        let (whole, frac) = raw.split_once('.').unwrap_or((raw, ""));
        let digits_only = |s: &str| s.chars().all(|c| c.is_ascii_digit());
        if (whole.is_empty() && frac.is_empty()) || !digits_only(whole) || !digits_only(frac) {
            return Err(PriceError::Invalid(raw.to_owned()));
        }
        if frac.len() > 2 {
            return Err(PriceError::TooPrecise);
        }

        let invalid = || PriceError::Invalid(raw.to_owned());
        let whole: u64 = if whole.is_empty() { 0 } else { whole.parse().map_err(|_| invalid())? };
        let frac_cents: u64 = match frac.len() {
            0 => 0,
            1 => frac.parse::<u64>().map_err(|_| invalid())? * 10,
            _ => frac.parse().map_err(|_| invalid())?,
        };

        whole
            .checked_mul(100)
            .and_then(|c| c.checked_add(frac_cents))
            .map(Self)
            .ok_or_else(invalid)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (whole, cents) = (self.0 / 100, self.0 % 100);
        if cents == 0 { write!(f, "${whole}") } else { write!(f, "${whole}.{cents:02}") }
    }
}

// =============================================================================
// ENUMERATED ATTRIBUTES
// =============================================================================

/// Fixed listing categories offered by the creation form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Electronics,
    Fashion,
    #[serde(rename = "Home & Garden")]
    HomeGarden,
    Cars,
    Sports,
    Books,
    #[serde(rename = "Music & Instruments")]
    MusicInstruments,
    #[serde(rename = "Toys & Games")]
    ToysGames,
    #[serde(rename = "Health & Beauty")]
    HealthBeauty,
    Other,
}

impl Category {
    pub const ALL: [Self; 10] = [
        Self::Electronics,
        Self::Fashion,
        Self::HomeGarden,
        Self::Cars,
        Self::Sports,
        Self::Books,
        Self::MusicInstruments,
        Self::ToysGames,
        Self::HealthBeauty,
        Self::Other,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Electronics => "Electronics",
            Self::Fashion => "Fashion",
            Self::HomeGarden => "Home & Garden",
            Self::Cars => "Cars",
            Self::Sports => "Sports",
            Self::Books => "Books",
            Self::MusicInstruments => "Music & Instruments",
            Self::ToysGames => "Toys & Games",
            Self::HealthBeauty => "Health & Beauty",
            Self::Other => "Other",
        }
    }

    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Item condition, best to worst.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Condition {
    New,
    #[serde(rename = "Like New")]
    LikeNew,
    Excellent,
    #[serde(rename = "Very Good")]
    VeryGood,
    Good,
    Fair,
    Poor,
}

impl Condition {
    pub const ALL: [Self; 7] =
        [Self::New, Self::LikeNew, Self::Excellent, Self::VeryGood, Self::Good, Self::Fair, Self::Poor];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::New => "New",
            Self::LikeNew => "Like New",
            Self::Excellent => "Excellent",
            Self::VeryGood => "Very Good",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::Poor => "Poor",
        }
    }

    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Publication status of a listing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingStatus {
    Active,
    Paused,
    Sold,
}

impl ListingStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Paused => "paused",
            Self::Sold => "sold",
        }
    }

    #[must_use]
    pub fn from_str(raw: &str) -> Option<Self> {
        match raw {
            "active" => Some(Self::Active),
            "paused" => Some(Self::Paused),
            "sold" => Some(Self::Sold),
            _ => None,
        }
    }
}

impl fmt::Display for ListingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// LISTING
// =============================================================================

/// Engagement counters shown on the owner's listing rows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingStats {
    pub views: u32,
    pub favorites: u32,
    pub messages: u32,
}

/// A published classified listing.
///
/// `sold_on` is present exactly when `status` is [`ListingStatus::Sold`] for
/// listings built from fixture data; owner status changes only touch `status`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: ListingId,
    pub title: String,
    pub description: String,
    pub price: Price,
    pub category: Category,
    pub condition: Condition,
    pub status: ListingStatus,
    pub location: String,
    pub seller: String,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub stats: ListingStats,
    pub posted_on: Date,
    #[serde(default)]
    pub sold_on: Option<Date>,
}

/// Render a date the way listing cards show it, e.g. `Jan 15, 2024`.
#[must_use]
pub fn display_date(date: Date) -> String {
    let format = format_description!("[month repr:short] [day padding:none], [year]");
    date.format(&format).unwrap_or_else(|_| date.to_string())
}
