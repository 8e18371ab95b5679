//! Compact case row for lists (dashboard, search results).

use board::WorkItem;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn ItemSummary(item: WorkItem, #[prop(optional)] show_priority: bool) -> impl IntoView {
    let href = format!("/servicefall/{}", item.id);
    let priority = item.priority.as_wire();

    view! {
        <li class="item-summary" data-status=item.status.slug()>
            <h3 class="item-summary__title">
                <A href=href>{item.title}</A>
            </h3>
            <p class="item-summary__meta">"Status: " {item.status.as_wire()}</p>
            <Show when=move || show_priority>
                <p class="item-summary__meta">"Priority: " {priority}</p>
            </Show>
        </li>
    }
}
