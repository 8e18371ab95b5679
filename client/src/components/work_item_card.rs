//! Draggable kanban card.

use board::{DragPayload, WorkItem};
use leptos::ev::DragEvent;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::board::BoardState;
use crate::util::dnd::write_payload;
use crate::util::format::truncate;

/// One case on the overview board. Dragging it carries its id to a column.
#[component]
pub fn WorkItemCard(item: WorkItem) -> impl IntoView {
    let state = expect_context::<RwSignal<BoardState>>();
    let id = item.id;
    let href = format!("/servicefall/{id}");
    let priority = item.priority;
    let excerpt = (!item.description.is_empty()).then(|| truncate(&item.description, 80));

    let on_dragstart = move |ev: DragEvent| {
        write_payload(&ev, &DragPayload::new(id));
        state.update(|s| s.feedback.start(id));
    };
    let on_dragend = move |_: DragEvent| state.update(|s| s.feedback.end());
    let dragging = move || state.with(|s| s.feedback.is_dragging(id));

    view! {
        <article
            class="work-item-card"
            class:work-item-card--dragging=dragging
            data-priority=priority.slug()
            draggable="true"
            on:dragstart=on_dragstart
            on:dragend=on_dragend
        >
            <h3 class="work-item-card__title">
                <A href=href>{item.title}</A>
            </h3>
            <p class="work-item-card__priority">"Priority: " {priority.as_wire()}</p>
            {excerpt.map(|text| view! { <p class="work-item-card__excerpt">{text}</p> })}
        </article>
    }
}
