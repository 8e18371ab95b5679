//! Dashboard listing the signed-in user's own cases.
//!
//! SYSTEM CONTEXT
//! ==============
//! Landing route. Fetches `/servicefall/meine` once per mount and lists the
//! cases in board column order.

use board::{LoadError, Remote, WorkItem, sort_by_status};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;

use crate::app::SyncHandle;
use crate::components::item_summary::ItemSummary;
use crate::components::viewport_container::ViewportContainer;

#[component]
pub fn HomePage() -> impl IntoView {
    let sync = expect_context::<SyncHandle>();
    let cases = RwSignal::new(Vec::<WorkItem>::new());
    let error = RwSignal::new(None::<String>);
    let loading = RwSignal::new(true);

    let coordinator = sync.get_value();
    spawn_local(async move {
        match coordinator.remote().fetch_mine().await {
            Ok(items) => cases.set(sort_by_status(items)),
            Err(err) => {
                log::warn!("loading my cases failed: {err}");
                error.set(Some(LoadError::from(err).user_message()));
            }
        }
        loading.set(false);
    });

    view! {
        <Title text="Dashboard"/>
        <ViewportContainer class="home-page">
            <h1 class="page-title">"Dashboard"</h1>
            <section class="panel">
                <h2 class="panel__title">"My cases"</h2>
                <Show when=move || error.with(Option::is_some)>
                    <p class="page-error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <Show
                    when=move || !loading.get()
                    fallback=|| view! { <p class="page-hint">"Loading cases..."</p> }
                >
                    <Show
                        when=move || cases.with(|c| !c.is_empty())
                        fallback=|| view! { <p class="page-hint">"No cases yet."</p> }
                    >
                        <ul class="item-list">
                            {move || {
                                cases
                                    .get()
                                    .into_iter()
                                    .map(|item| view! { <ItemSummary item=item/> })
                                    .collect_view()
                            }}
                        </ul>
                    </Show>
                </Show>
            </section>
        </ViewportContainer>
    }
}
