//! Landing page: hero, category tiles, and a preview of recent listings.

use leptos::prelude::*;
use market::catalog::CatalogView;
use market::fixtures;

use crate::components::listing_card::ListingCard;

const PREVIEW_COUNT: usize = 4;

#[component]
pub fn HomePage() -> impl IntoView {
    let catalog = CatalogView::new(fixtures::catalog_listings());
    let preview: Vec<_> = catalog.preview(PREVIEW_COUNT).into_iter().cloned().collect();

    view! {
        <div class="home-page">
            <section class="hero">
                <h1>"Find everything you need"</h1>
                <p class="muted">
                    "Buy and sell locally. Discover amazing deals on products from people near you."
                </p>
                <div class="hero__actions">
                    <a class="btn btn--primary btn--large" href="/products">"Browse Products"</a>
                    <a class="btn btn--outline btn--large" href="/products/new">"Start Selling"</a>
                </div>
            </section>

            <section class="home-page__section">
                <h2>"Popular Categories"</h2>
                <div class="category-grid">
                    {fixtures::category_highlights()
                        .into_iter()
                        .map(|(category, count)| {
                            view! {
                                <a class="category-tile" href="/products">
                                    <span class="category-tile__name">{category.label()}</span>
                                    <span class="category-tile__count muted">{count}</span>
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </section>

            <section class="home-page__section">
                <div class="home-page__section-header">
                    <h2>"Featured Products"</h2>
                    <a class="btn btn--outline" href="/products">"View All"</a>
                </div>
                <div class="listing-grid">
                    {preview
                        .into_iter()
                        .map(|listing| view! { <ListingCard listing=listing compact=true/> })
                        .collect::<Vec<_>>()}
                </div>
            </section>

            <section class="cta">
                <h2>"Ready to start selling?"</h2>
                <p class="muted">"List your first item in minutes."</p>
                <a class="btn btn--primary" href="/register">"Get Started"</a>
            </section>
        </div>
    }
}
