//! Kanban overview with drag-and-drop status changes.
//!
//! SYSTEM CONTEXT
//! ==============
//! Loads the full collection through the shared `BoardSync` on mount. A drop
//! is resolved synchronously against the coordinator's board; only a real
//! status change goes to the service, after which the coordinator re-fetches
//! and the page adopts its snapshot. Nothing is patched locally, so a failed
//! change leaves the card where it was.

use board::Status;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;

use crate::app::SyncHandle;
use crate::components::status_column::StatusColumn;
use crate::components::viewport_container::ViewportContainer;
use crate::state::board::BoardState;

#[component]
pub fn OverviewPage() -> impl IntoView {
    let state = expect_context::<RwSignal<BoardState>>();
    let sync = expect_context::<SyncHandle>();

    reload(sync, state);

    let on_drop = Callback::new(move |(status, raw): (Status, String)| {
        let coordinator = sync.get_value();
        match coordinator.resolve_drop(status, &raw) {
            Ok(Some(intent)) => {
                state.update(BoardState::begin_change);
                spawn_local(async move {
                    let result = coordinator.apply_status_change(intent).await;
                    if let Err(err) = &result {
                        log::warn!("{err}");
                    }
                    state.update(|s| s.finish_change(&result, coordinator.board(), coordinator.generation()));
                });
            }
            Ok(None) => state.update(|s| s.feedback.end()),
            Err(err) => state.update(|s| s.drop_refused(&err)),
        }
    });

    // Board-only memo: drag feedback must not re-render the columns.
    let board = Memo::new(move |_| state.with(|s| s.board.clone()));

    view! {
        <Title text="Overview"/>
        <ViewportContainer fluid=true class="overview-page">
            <h1 class="page-title">"Übersicht"</h1>
            <Show when=move || state.with(|s| s.error.is_some())>
                <p class="page-error">{move || state.with(|s| s.error.clone().unwrap_or_default())}</p>
            </Show>
            <Show when=move || state.with(BoardState::is_busy)>
                <p class="page-hint">"Updating..."</p>
            </Show>
            <div class="overview-page__columns">
                {move || {
                    board.with(|b| {
                        b.columns()
                            .map(|(status, items)| {
                                view! { <StatusColumn status=status items=items.to_vec() on_drop=on_drop/> }
                            })
                            .collect_view()
                    })
                }}
            </div>
        </ViewportContainer>
    }
}

/// Fetch the full board and mirror the coordinator's result into `state`.
fn reload(sync: SyncHandle, state: RwSignal<BoardState>) {
    let coordinator = sync.get_value();
    state.update(BoardState::begin_load);
    spawn_local(async move {
        let result = coordinator.load_all().await;
        if let Err(err) = &result {
            log::warn!("{err}");
        }
        state.update(|s| s.finish_load(&result, coordinator.board(), coordinator.generation()));
    });
}
