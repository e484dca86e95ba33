//! Application router component.
//!
//! Hash-based routing driven by native `hashchange` events.
//!
//! - **URL hash is the source of truth**: the active page is derived from `#/path`
//! - **Buttons navigate through [`RouteContext`]**: it updates the hash and the
//!   route signal together
//! - **hashchange events**: browser back/forward buttons work automatically

use leptos::ev::hashchange;
use leptos::prelude::*;
use log::debug;

use crate::components::pages::{Home, NotFound, PricingPage, UploadPage};
use crate::core::Navigator;
use crate::models::AppRoute;

stylance::import_crate_style!(css, "src/components/pages/pages.module.css");

/// Current route, provided to every component below [`AppRouter`].
#[derive(Clone, Copy)]
pub struct RouteContext(pub RwSignal<AppRoute>);

impl RouteContext {
    /// Set the route if it changed. No-op once the router has been unmounted.
    fn sync(&self, route: AppRoute) {
        match self.0.try_get_untracked() {
            Some(current) if current != route => {
                let _ = self.0.try_set(route);
            }
            Some(_) => {}
            None => debug!("route signal disposed, ignoring {}", route.to_hash()),
        }
    }
}

impl Navigator for RouteContext {
    fn navigate(&self, path: &str) {
        let route = AppRoute::from_path(path);
        debug!("navigating to {}", route.to_hash());
        route.push();
        self.sync(route);
    }
}

/// Main application router.
///
/// - `#/` → Home
/// - `#/upload` → Upload confirmation
/// - `#/pricing` → Pricing
/// - anything else → Not found
#[component]
pub fn AppRouter() -> impl IntoView {
    let route = RwSignal::new(AppRoute::current());
    let ctx = RouteContext(route);
    provide_context(ctx);

    // Listen for hashchange while mounted; removed again on unmount
    let listener = window_event_listener(hashchange, move |_| {
        ctx.sync(AppRoute::current());
    });
    on_cleanup(move || listener.remove());

    view! {
        <main class=css::page>
            {move || match route.get() {
                AppRoute::Home => view! { <Home /> }.into_any(),
                AppRoute::Upload => view! { <UploadPage /> }.into_any(),
                AppRoute::Pricing => view! { <PricingPage /> }.into_any(),
                AppRoute::NotFound(path) => view! { <NotFound path=path /> }.into_any(),
            }}
        </main>
    }
}
