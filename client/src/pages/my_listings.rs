//! Owner listing manager: stat cards, status tabs, pause/activate, delete.
//!
//! DESIGN
//! ======
//! The owner's set lives in a page-local `OwnerListings` signal. Status
//! changes and confirmed deletes are applied locally first, then forwarded
//! to the server best-effort. Delete goes through `ConfirmDialog`; only the
//! confirm button resolves the pending request as `Confirmed`.

#[cfg(test)]
#[path = "my_listings_test.rs"]
mod my_listings_test;

use leptos::prelude::*;
use market::listing::display_date;
use market::manager::{Confirmation, DeleteRequest, OwnerListings, StatusCounts, StatusTab, offered_change};
use market::{Listing, ListingId, ListingStatus, fixtures};

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::stat_card::StatCard;
use crate::state::session::SessionState;

/// Badge modifier class for a status pill.
fn status_badge_class(status: ListingStatus) -> &'static str {
    match status {
        ListingStatus::Active => "badge badge--active",
        ListingStatus::Paused => "badge badge--paused",
        ListingStatus::Sold => "badge badge--sold",
    }
}

/// Tab caption with its count, e.g. `Active (2)`.
fn tab_caption(tab: StatusTab, counts: StatusCounts) -> String {
    format!("{} ({})", tab.label(), counts.for_tab(tab))
}

fn empty_tab_message(tab: StatusTab) -> &'static str {
    match tab {
        StatusTab::All => "You haven't listed anything yet.",
        StatusTab::Active => "No active listings.",
        StatusTab::Paused => "No paused listings.",
        StatusTab::Sold => "Nothing sold yet.",
    }
}

fn forward_status(id: ListingId, status: ListingStatus) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        if let Err(e) = crate::net::api::update_listing_status(id, status).await {
            log::warn!("status change for listing {id} not forwarded: {e}");
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, status);
    }
}

fn forward_delete(id: ListingId) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        if let Err(e) = crate::net::api::delete_listing(id).await {
            log::warn!("delete of listing {id} not forwarded: {e}");
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
    }
}

#[component]
pub fn MyListingsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let owned = RwSignal::new(OwnerListings::new(fixtures::owner_listings()));
    let tab = RwSignal::new(StatusTab::All);
    let pending_delete = RwSignal::new(None::<DeleteRequest>);

    let counts = Memo::new(move |_| owned.with(OwnerListings::counts));
    let rows = Memo::new(move |_| {
        let tab = tab.get();
        owned.with(|set| set.by_tab(tab).into_iter().cloned().collect::<Vec<_>>())
    });

    let on_status = Callback::new(move |id: ListingId| {
        let changed = owned.try_update(|set| set.apply_offered_change(id)).and_then(Result::ok).flatten();
        if let Some(status) = changed {
            forward_status(id, status);
        }
    });
    let on_delete = Callback::new(move |id: ListingId| {
        pending_delete.set(owned.with(|set| set.request_delete(id).ok()));
    });
    let on_confirm = Callback::new(move |()| {
        let Some(request) = pending_delete.get_untracked() else {
            return;
        };
        pending_delete.set(None);
        let id = request.id;
        let removed = owned.try_update(|set| set.resolve_delete(request, Confirmation::Confirmed)).flatten();
        if removed.is_some() {
            forward_delete(id);
        }
    });
    let on_cancel = Callback::new(move |()| {
        if let Some(request) = pending_delete.get_untracked() {
            pending_delete.set(None);
            owned.update(|set| {
                set.resolve_delete(request, Confirmation::Cancelled);
            });
        }
    });

    let stat = move |f: fn(StatusCounts) -> usize| Signal::derive(move || f(counts.get()).to_string());

    view! {
        <div class="my-listings-page">
            <header class="page-header">
                <div>
                    <h1>"My Products"</h1>
                    <p class="muted">"Manage your listings and track performance"</p>
                </div>
                <a class="btn btn--primary" href="/products/new">"+ Add New Product"</a>
            </header>

            <Show when=move || session.with(SessionState::needs_sign_in)>
                <p class="notice">
                    "You are browsing demo listings. " <a href="/login">"Log in"</a>
                    " to manage your own."
                </p>
            </Show>

            <div class="stat-grid">
                <StatCard value=stat(|c| c.total) label="Total Listings"/>
                <StatCard value=stat(|c| c.active) label="Active" tone="green"/>
                <StatCard value=stat(|c| c.paused) label="Paused" tone="yellow"/>
                <StatCard value=stat(|c| c.sold) label="Sold" tone="blue"/>
            </div>

            <div class="tabs" role="tablist">
                {StatusTab::ALL
                    .into_iter()
                    .map(|t| {
                        view! {
                            <button
                                class="tabs__trigger"
                                class:tabs__trigger--active=move || tab.get() == t
                                on:click=move |_| tab.set(t)
                            >
                                {move || tab_caption(t, counts.get())}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>

            <Show
                when=move || rows.with(|r| !r.is_empty())
                fallback=move || {
                    view! {
                        <div class="empty-state">
                            <p class="muted">{move || empty_tab_message(tab.get())}</p>
                            <a class="btn btn--primary" href="/products/new">"Create Your First Listing"</a>
                        </div>
                    }
                }
            >
                <div class="listing-rows">
                    {move || {
                        rows.get()
                            .into_iter()
                            .map(|listing| view! { <ListingRow listing=listing on_status=on_status on_delete=on_delete/> })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </Show>

            <Show when=move || pending_delete.with(Option::is_some)>
                <ConfirmDialog
                    title="Delete listing"
                    message=pending_delete
                        .get_untracked()
                        .map(|r| format!("{} \u{201c}{}\u{201d}", r.prompt(), r.title))
                        .unwrap_or_default()
                    confirm_label="Delete"
                    on_confirm=on_confirm
                    on_cancel=on_cancel
                />
            </Show>
        </div>
    }
}

/// One row of the owner's listing table.
#[component]
fn ListingRow(listing: Listing, on_status: Callback<ListingId>, on_delete: Callback<ListingId>) -> impl IntoView {
    let id = listing.id;
    let change = offered_change(listing.status);
    let sold_line = listing.sold_on.filter(|_| listing.status == ListingStatus::Sold).map(|d| {
        view! { <p class="listing-row__sold">"Sold on " {display_date(d)}</p> }
    });

    view! {
        <article class="listing-row">
            <div class="listing-row__thumb"></div>
            <div class="listing-row__body">
                <div class="listing-row__heading">
                    <h3>{listing.title.clone()}</h3>
                    <span class=status_badge_class(listing.status)>{listing.status.as_str()}</span>
                </div>
                <p class="listing-row__price">{listing.price.to_string()}</p>
                <p class="muted listing-row__description">{listing.description.clone()}</p>
                <div class="listing-row__stats muted">
                    <span>{listing.stats.views} " views"</span>
                    <span>{listing.stats.favorites} " favorites"</span>
                    <span>{listing.stats.messages} " messages"</span>
                    <span>"Posted " {display_date(listing.posted_on)}</span>
                </div>
                {sold_line}
            </div>
            <div class="listing-row__actions">
                <a class="btn btn--small" href=format!("/products/{id}")>"View"</a>
                {change.map(|c| {
                    view! {
                        <button class="btn btn--small" on:click=move |_| on_status.run(id)>
                            {c.label()}
                        </button>
                    }
                })}
                <button class="btn btn--small btn--danger" on:click=move |_| on_delete.run(id)>
                    "Delete"
                </button>
            </div>
        </article>
    }
}
