//! Sticky site header with navigation and the account menu.
//!
//! DESIGN
//! ======
//! Which links appear is decided by `market::viewer::nav_links`; this
//! component only places them by slot, so the anonymous/member switch is
//! tested without rendering.

use leptos::prelude::*;
use market::viewer::{NavLink, NavSlot, nav_links};

use crate::state::session::SessionState;

#[component]
pub fn SiteHeader() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let menu_open = RwSignal::new(false);

    let links = Memo::new(move |_| session.with(|s| nav_links(&s.viewer)));
    let in_slot = move |slot: NavSlot| -> Vec<NavLink> {
        links.get().into_iter().filter(|l| l.slot == slot).collect()
    };
    let initials = move || session.with(|s| s.viewer.member().map(market::Member::initials).unwrap_or_default());
    let display_name = move || {
        session.with(|s| s.viewer.member().map(|m| m.display_name.clone()).unwrap_or_default())
    };

    view! {
        <header class="site-header">
            <div class="site-header__inner">
                <a href="/" class="site-header__brand">"Bazaar"</a>
                <nav class="site-header__nav">
                    {move || {
                        in_slot(NavSlot::Primary)
                            .into_iter()
                            .map(|l| view! { <a class="site-header__link" href=l.href>{l.label}</a> })
                            .collect::<Vec<_>>()
                    }}
                </nav>
                <div class="site-header__actions">
                    <input class="site-header__search" type="search" placeholder="Search products..."/>
                    {move || {
                        in_slot(NavSlot::Action)
                            .into_iter()
                            .map(|l| view! { <a class="btn btn--small" href=l.href>{l.label}</a> })
                            .collect::<Vec<_>>()
                    }}
                    <Show when=move || session.with(|s| s.viewer.is_member())>
                        <div class="account-menu">
                            <button
                                class="account-menu__avatar"
                                title="Account"
                                on:click=move |_| menu_open.update(|open| *open = !*open)
                            >
                                {initials}
                            </button>
                            <Show when=move || menu_open.get()>
                                <div class="account-menu__dropdown" on:click=move |_| menu_open.set(false)>
                                    <p class="account-menu__label">{display_name}</p>
                                    {in_slot(NavSlot::Account)
                                        .into_iter()
                                        .map(|l| view! { <a class="account-menu__item" href=l.href>{l.label}</a> })
                                        .collect::<Vec<_>>()}
                                </div>
                            </Show>
                        </div>
                    </Show>
                </div>
            </div>
        </header>
    }
}
