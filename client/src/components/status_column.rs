//! Kanban column that accepts card drops.
//!
//! DESIGN
//! ======
//! The column only forwards the raw payload text and its own status. Decoding,
//! tag checks, and the same-column no-op are decided by the sync coordinator
//! against the board it currently holds.

use board::{Status, WorkItem};
use leptos::ev::DragEvent;
use leptos::prelude::*;

use crate::components::work_item_card::WorkItemCard;
use crate::state::board::BoardState;
use crate::util::dnd::{allow_move, read_payload};

/// A status column. `on_drop` receives `(column status, raw payload)`.
#[component]
pub fn StatusColumn(status: Status, items: Vec<WorkItem>, on_drop: Callback<(Status, String)>) -> impl IntoView {
    let state = expect_context::<RwSignal<BoardState>>();
    let count = items.len();

    let on_dragover = move |ev: DragEvent| {
        allow_move(&ev);
        if !state.with_untracked(|s| s.feedback.is_over(status)) {
            state.update(|s| s.feedback.enter(status));
        }
    };
    let on_dragleave = move |_: DragEvent| state.update(|s| s.feedback.leave(status));
    let on_drop_handler = move |ev: DragEvent| {
        ev.prevent_default();
        on_drop.run((status, read_payload(&ev)));
    };
    let over = move || state.with(|s| s.feedback.is_over(status));

    view! {
        <section
            class="status-column"
            class:status-column--over=over
            data-status=status.slug()
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:drop=on_drop_handler
        >
            <header class="status-column__header">
                <h2 class="status-column__title">{status.as_wire()}</h2>
                <span class="status-column__count">{count}</span>
            </header>
            <div class="status-column__items">
                {items.into_iter().map(|item| view! { <WorkItemCard item=item/> }).collect_view()}
            </div>
        </section>
    }
}
