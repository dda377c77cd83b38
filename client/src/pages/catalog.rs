//! Browse page: search box, category and sort selectors, listing grid.
//!
//! DESIGN
//! ======
//! The page holds one `CatalogView` signal; every control writes the query
//! and the grid re-derives from the full set. "Load more" is cosmetic.

use leptos::prelude::*;
use market::catalog::{CatalogView, CategoryFilter, SortKey};
use market::fixtures;

use crate::components::listing_card::ListingCard;

#[component]
pub fn CatalogPage() -> impl IntoView {
    let catalog = RwSignal::new(CatalogView::new(fixtures::catalog_listings()));

    let visible = Memo::new(move |_| catalog.with(|c| c.visible().into_iter().cloned().collect::<Vec<_>>()));
    let summary = move || catalog.with(CatalogView::summary);
    let search = move || catalog.with(|c| c.query().search.clone());
    let category_label = move || catalog.with(|c| c.query().category.label());
    let sort_label = move || catalog.with(|c| c.query().sort.label());

    let on_search = move |ev: leptos::ev::Event| catalog.update(|c| c.set_search(event_target_value(&ev)));
    let on_category = move |ev: leptos::ev::Event| {
        if let Some(filter) = CategoryFilter::from_label(&event_target_value(&ev)) {
            catalog.update(|c| c.set_category(filter));
        }
    };
    let on_sort = move |ev: leptos::ev::Event| {
        if let Some(key) = SortKey::from_label(&event_target_value(&ev)) {
            catalog.update(|c| c.set_sort(key));
        }
    };
    let on_clear = move |_| catalog.update(CatalogView::clear_filters);

    view! {
        <div class="catalog-page">
            <header class="page-header">
                <div>
                    <h1>"Browse Products"</h1>
                    <p class="muted">"Discover amazing deals from people near you"</p>
                </div>
                <a class="btn btn--primary" href="/products/new">"Sell Item"</a>
            </header>

            <div class="catalog-page__filters">
                <input
                    class="input catalog-page__search"
                    type="search"
                    placeholder="Search products..."
                    prop:value=search
                    on:input=on_search
                />
                <select class="select" prop:value=category_label on:change=on_category>
                    {CategoryFilter::options()
                        .into_iter()
                        .map(|f| view! { <option value=f.label()>{f.label()}</option> })
                        .collect::<Vec<_>>()}
                </select>
                <select class="select" prop:value=sort_label on:change=on_sort>
                    {SortKey::ALL
                        .into_iter()
                        .map(|k| view! { <option value=k.label()>{k.label()}</option> })
                        .collect::<Vec<_>>()}
                </select>
            </div>

            <p class="muted catalog-page__count">{summary}</p>

            <Show
                when=move || visible.with(|v| !v.is_empty())
                fallback=move || {
                    view! {
                        <div class="empty-state">
                            <h3>"No products found"</h3>
                            <p class="muted">"Try adjusting your search terms or filters"</p>
                            <button class="btn btn--outline" on:click=on_clear>
                                "Clear Filters"
                            </button>
                        </div>
                    }
                }
            >
                <div class="listing-grid">
                    {move || {
                        visible
                            .get()
                            .into_iter()
                            .map(|listing| view! { <ListingCard listing=listing/> })
                            .collect::<Vec<_>>()
                    }}
                </div>
                <div class="catalog-page__more">
                    <button class="btn btn--outline btn--large">"Load More Products"</button>
                </div>
            </Show>
        </div>
    }
}
