//! Case search with free text and status/priority filters.
//!
//! ORDERING
//! ========
//! Edits are debounced by `SEARCH_DEBOUNCE_MS`; `SearchState` sequence numbers
//! decide whether a timer may still fire its request and whether a response
//! may still be shown.

use board::{Priority, Remote, Status};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;

use crate::app::SyncHandle;
use crate::components::item_summary::ItemSummary;
use crate::components::viewport_container::ViewportContainer;
use crate::state::search::SearchState;

#[component]
pub fn SearchPage() -> impl IntoView {
    let sync = expect_context::<SyncHandle>();
    let state = RwSignal::new(SearchState::default());

    let schedule = move |seq: Option<u64>| {
        let Some(seq) = seq else {
            return;
        };
        let coordinator = sync.get_value();
        spawn_local(async move {
            debounce().await;
            let Some(query) = state.try_update(|s| s.begin(seq)).flatten() else {
                return;
            };
            let result = coordinator.remote().search(&query).await;
            if let Err(err) = &result {
                log::warn!("search failed: {err}");
            }
            state.update(|s| {
                if !s.finish(seq, result) {
                    log::debug!("search response {seq} superseded");
                }
            });
        });
    };

    view! {
        <Title text="Search"/>
        <ViewportContainer class="search-page">
            <h1 class="page-title">"Case search"</h1>
            <input
                class="search-page__input"
                type="text"
                placeholder="Search term..."
                prop:value=move || state.with(|s| s.query.text.clone())
                on:input=move |ev| schedule(state.try_update(|s| s.set_text(event_target_value(&ev))))
            />
            <div class="search-page__filters">
                <fieldset class="filter-group">
                    <legend>"Status"</legend>
                    {Status::ALL
                        .into_iter()
                        .map(|status| {
                            view! {
                                <button
                                    class="chip"
                                    class:chip--active=move || state.with(|s| s.query.statuses.contains(&status))
                                    on:click=move |_| schedule(state.try_update(|s| s.toggle_status(status)))
                                >
                                    {status.as_wire()}
                                </button>
                            }
                        })
                        .collect_view()}
                </fieldset>
                <fieldset class="filter-group">
                    <legend>"Priority"</legend>
                    {Priority::ALL
                        .into_iter()
                        .map(|priority| {
                            view! {
                                <button
                                    class="chip"
                                    class:chip--active=move || state.with(|s| s.query.priorities.contains(&priority))
                                    on:click=move |_| schedule(state.try_update(|s| s.toggle_priority(priority)))
                                >
                                    {priority.as_wire()}
                                </button>
                            }
                        })
                        .collect_view()}
                </fieldset>
            </div>

            <Show when=move || state.with(|s| s.loading)>
                <p class="page-hint">"Searching..."</p>
            </Show>
            <Show when=move || state.with(|s| s.error.is_some())>
                <p class="page-error">{move || state.with(|s| s.error.clone().unwrap_or_default())}</p>
            </Show>
            <ul class="item-list">
                {move || {
                    state
                        .with(|s| s.results.clone())
                        .into_iter()
                        .map(|item| view! { <ItemSummary item=item show_priority=true/> })
                        .collect_view()
                }}
            </ul>
            <Show when=move || state.with(SearchState::shows_no_results)>
                <p class="page-hint">"No results found"</p>
            </Show>
        </ViewportContainer>
    }
}

#[cfg_attr(not(feature = "csr"), allow(clippy::unused_async))]
async fn debounce() {
    #[cfg(feature = "csr")]
    gloo_timers::future::TimeoutFuture::new(crate::state::search::SEARCH_DEBOUNCE_MS).await;
}
