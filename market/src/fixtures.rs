//! Hard-coded mock datasets.
//!
//! Each page seeds its own copy at mount; the server's in-memory store is
//! seeded from the same functions so both sides agree on ids.

use time::macros::date;

use crate::listing::{Category, Condition, Listing, ListingId, ListingStats, ListingStatus, Price};
use crate::profile::{ProfileStats, UserProfile};
use crate::viewer::Member;

/// Id of the signed-in demo user that owns [`owner_listings`].
pub const DEMO_MEMBER_ID: &str = "1";

#[allow(clippy::too_many_arguments)]
fn active(
    id: u32,
    title: &str,
    price: u64,
    category: Category,
    condition: Condition,
    location: &str,
    seller: &str,
    featured: bool,
    posted_on: time::Date,
) -> Listing {
    Listing {
        id: ListingId(id),
        title: title.to_owned(),
        description: String::new(),
        price: Price::dollars(price),
        category,
        condition,
        status: ListingStatus::Active,
        location: location.to_owned(),
        seller: seller.to_owned(),
        featured,
        stats: ListingStats::default(),
        posted_on,
        sold_on: None,
    }
}

/// Listings shown on the public catalog.
#[must_use]
pub fn catalog_listings() -> Vec<Listing> {
    vec![
        active(
            1,
            "iPhone 14 Pro - Excellent Condition",
            899,
            Category::Electronics,
            Condition::LikeNew,
            "New York, NY",
            "John D.",
            true,
            date!(2024 - 01 - 15),
        ),
        active(
            2,
            "Nike Air Max 90 - Size 10",
            120,
            Category::Fashion,
            Condition::Good,
            "Los Angeles, CA",
            "Sarah M.",
            false,
            date!(2024 - 01 - 10),
        ),
        active(
            3,
            "MacBook Pro 2023 - 16GB RAM",
            1299,
            Category::Electronics,
            Condition::Excellent,
            "San Francisco, CA",
            "Mike R.",
            true,
            date!(2024 - 01 - 14),
        ),
        active(
            4,
            "Vintage Leather Jacket - Medium",
            85,
            Category::Fashion,
            Condition::Good,
            "Chicago, IL",
            "Lisa K.",
            false,
            date!(2024 - 01 - 12),
        ),
        active(
            5,
            "Professional Camera Kit",
            450,
            Category::Electronics,
            Condition::VeryGood,
            "Austin, TX",
            "Alex P.",
            false,
            date!(2024 - 01 - 16),
        ),
        active(
            6,
            "Gaming Chair - Almost New",
            200,
            Category::HomeGarden,
            Condition::LikeNew,
            "Seattle, WA",
            "Chris B.",
            false,
            date!(2024 - 01 - 13),
        ),
    ]
}

/// Listings owned by the demo member, one per status plus a second active one.
#[must_use]
pub fn owner_listings() -> Vec<Listing> {
    let owned = |id: u32,
                 title: &str,
                 price: u64,
                 category: Category,
                 condition: Condition,
                 status: ListingStatus,
                 stats: ListingStats,
                 posted_on: time::Date| Listing {
        id: ListingId(id),
        title: title.to_owned(),
        description: String::new(),
        price: Price::dollars(price),
        category,
        condition,
        status,
        location: "New York, NY".to_owned(),
        seller: "John D.".to_owned(),
        featured: false,
        stats,
        posted_on,
        sold_on: None,
    };

    let mut phone = owned(
        1,
        "iPhone 14 Pro - Excellent Condition",
        899,
        Category::Electronics,
        Condition::LikeNew,
        ListingStatus::Active,
        ListingStats { views: 156, favorites: 23, messages: 8 },
        date!(2024 - 01 - 15),
    );
    phone.description =
        "Selling my iPhone 14 Pro in excellent condition. Barely used, always kept in a case with screen protector."
            .to_owned();

    let mut setup = owned(
        2,
        "Gaming Setup - Complete Package",
        1200,
        Category::Electronics,
        Condition::VeryGood,
        ListingStatus::Active,
        ListingStats { views: 89, favorites: 12, messages: 5 },
        date!(2024 - 01 - 10),
    );
    setup.description = "Complete gaming setup including monitor, keyboard, mouse, and headset.".to_owned();

    let mut jacket = owned(
        3,
        "Vintage Leather Jacket",
        85,
        Category::Fashion,
        Condition::Good,
        ListingStatus::Paused,
        ListingStats { views: 34, favorites: 7, messages: 2 },
        date!(2024 - 01 - 05),
    );
    jacket.description = "Authentic vintage leather jacket from the 80s. Size medium.".to_owned();

    let mut bike = owned(
        4,
        "Road Bike - Trek",
        450,
        Category::Sports,
        Condition::Good,
        ListingStatus::Sold,
        ListingStats { views: 78, favorites: 15, messages: 12 },
        date!(2023 - 12 - 28),
    );
    bike.description = "Well-maintained Trek road bike. Perfect for commuting or weekend rides.".to_owned();
    bike.sold_on = Some(date!(2024 - 01 - 08));

    vec![phone, setup, jacket, bike]
}

/// The demo member used when the viewer is configured as signed in.
#[must_use]
pub fn demo_member() -> Member {
    Member { id: DEMO_MEMBER_ID.to_owned(), display_name: "John Doe".to_owned() }
}

/// Profile of the demo member.
#[must_use]
pub fn demo_profile() -> UserProfile {
    UserProfile {
        id: DEMO_MEMBER_ID.to_owned(),
        first_name: "John".to_owned(),
        last_name: "Doe".to_owned(),
        email: "john.doe@example.com".to_owned(),
        phone: "+1 (555) 123-4567".to_owned(),
        location: "New York, NY".to_owned(),
        joined_on: date!(2024 - 01 - 01),
        bio: "I love buying and selling vintage items and electronics. Always looking for great deals!".to_owned(),
        stats: ProfileStats { sales: 23, purchases: 15, rating: 4.8, response_time: "< 1 hour".to_owned() },
    }
}

/// Category tiles on the landing page with their advertised counts.
#[must_use]
pub fn category_highlights() -> Vec<(Category, &'static str)> {
    vec![
        (Category::Electronics, "2,847 ads"),
        (Category::Fashion, "1,923 ads"),
        (Category::HomeGarden, "1,456 ads"),
        (Category::Cars, "892 ads"),
        (Category::Sports, "734 ads"),
        (Category::Books, "523 ads"),
    ]
}
