//! Catalog card for a single listing.

use leptos::prelude::*;
use market::Listing;
use market::listing::display_date;

/// A clickable card summarizing a listing on the catalog and landing pages.
/// `compact` drops the condition/seller rows for the landing page grid.
#[component]
pub fn ListingCard(listing: Listing, #[prop(optional)] compact: bool) -> impl IntoView {
    let Listing { id, title, price, category, condition, location, seller, featured, posted_on, .. } = listing;
    let href = format!("/products/{id}");
    let posted = display_date(posted_on);
    let class = if compact { "listing-card listing-card--compact" } else { "listing-card" };

    let details = (!compact).then(|| {
        view! {
            <div class="listing-card__meta">
                <span>"Condition: " {condition.label()}</span>
                <span class="muted">{posted}</span>
            </div>
            <div class="listing-card__footer">
                <span class="muted">"by " {seller}</span>
                <span class="btn btn--small btn--outline">"View Details"</span>
            </div>
        }
    });

    view! {
        <article class=class>
            <a href=href class="listing-card__link">
                <div class="listing-card__image">
                    {featured.then(|| view! { <span class="badge badge--secondary listing-card__featured">"Featured"</span> })}
                </div>
                <div class="listing-card__header">
                    <span class="badge badge--outline">{category.label()}</span>
                    <span class="listing-card__price">{price.to_string()}</span>
                </div>
                <h3 class="listing-card__title">{title}</h3>
                <p class="listing-card__location">{location}</p>
                {details}
            </a>
        </article>
    }
}
