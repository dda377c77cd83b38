//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::site_header::SiteHeader;
use crate::pages::{
    catalog::CatalogPage, home::HomePage, my_listings::MyListingsPage, new_listing::NewListingPage,
    profile::ProfilePage,
};
use crate::state::session::SessionState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session context and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    provide_context(session);

    // Resolve the viewer once on mount; anonymous until the server answers.
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let viewer = crate::net::api::fetch_viewer().await;
            session.update(|s| s.resolve(viewer));
        });
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/bazaar.css"/>
        <Title text="Bazaar"/>

        <Router>
            <SiteHeader/>
            <main class="page">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("products") view=CatalogPage/>
                    <Route path=(StaticSegment("products"), StaticSegment("new")) view=NewListingPage/>
                    <Route path=StaticSegment("my-products") view=MyListingsPage/>
                    <Route path=StaticSegment("profile") view=ProfilePage/>
                </Routes>
            </main>
        </Router>
    }
}
