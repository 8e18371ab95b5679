//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The root owns the two process-wide stores. `ViewportBroadcast` is fed by
//! the window `resize` event (every event publishes, nothing is debounced)
//! and forwards each descriptor into an `RwSignal` that components read.
//! `BoardSync` wraps the `gloo-net` transport and is shared by every page
//! that talks to the case service.

use std::rc::Rc;

use board::BoardSync;
use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};
use viewport::{Subscription, ViewportBroadcast};

use crate::components::nav_bar::NavBar;
use crate::components::viewport_debug::ViewportDebug;
use crate::net::api::HttpRemote;
use crate::pages::{
    detail::DetailPage, home::HomePage, overview::OverviewPage, search::SearchPage, viewport_demo::ViewportDemoPage,
};
use crate::state::board::BoardState;
use crate::util::window::inner_size;

/// Shared board coordinator. Pages clone the `Rc` out before awaiting.
pub type SyncHandle = StoredValue<Rc<BoardSync<HttpRemote>>, LocalStorage>;

/// Keeps the viewport store and its signal forwarding alive for the page's
/// lifetime.
pub struct ViewportHub {
    pub broadcast: ViewportBroadcast,
    _forward: Subscription,
}

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let (width, height) = inner_size();
    let broadcast = ViewportBroadcast::new(width, height);
    let viewport = RwSignal::new(broadcast.current());
    let forward = broadcast.subscribe(move |descriptor| viewport.set(*descriptor));
    install_resize_publisher(&broadcast);
    log::debug!("viewport starts at {width}x{height} ({})", broadcast.current().tier());

    let sync: SyncHandle = StoredValue::new_local(Rc::new(BoardSync::new(HttpRemote::from_config())));
    let board = RwSignal::new(BoardState::default());

    provide_context(viewport);
    provide_context(StoredValue::new_local(ViewportHub { broadcast, _forward: forward }));
    provide_context(sync);
    provide_context(board);

    view! {
        <Title text="Servicefall"/>

        <Router>
            <NavBar/>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("uebersicht") view=OverviewPage/>
                    <Route path=StaticSegment("suche") view=SearchPage/>
                    <Route path=(StaticSegment("servicefall"), ParamSegment("id")) view=DetailPage/>
                    <Route path=StaticSegment("viewport-demo") view=ViewportDemoPage/>
                </Routes>
            </main>
            <ViewportDebug/>
        </Router>
    }
}

/// Publish the window size on every `resize`. The listener stays installed
/// for the life of the page.
fn install_resize_publisher(broadcast: &ViewportBroadcast) {
    #[cfg(feature = "csr")]
    {
        let broadcast = broadcast.clone();
        let _listener = window_event_listener(leptos::ev::resize, move |_| {
            let (width, height) = inner_size();
            broadcast.publish(width, height);
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = broadcast;
    }
}
