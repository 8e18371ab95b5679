//! Case detail: description, status selector, and comments.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads `/servicefall/{id}` on mount and whenever the route id changes; a
//! route change clears the shown case first and `DetailState` drops responses
//! for ids the page has moved past. Changing the status sends the change and
//! re-fetches the single case; the selector only shows the new value once the
//! service confirms it.

#[cfg(test)]
#[path = "detail_test.rs"]
mod detail_test;

use board::{ItemId, Remote, Status, update_item_status};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;
use leptos_router::hooks::use_params_map;

use crate::app::SyncHandle;
use crate::components::viewport_container::ViewportContainer;
use crate::state::detail::DetailState;
use crate::util::format::format_timestamp;

#[component]
pub fn DetailPage() -> impl IntoView {
    let params = use_params_map();
    let sync = expect_context::<SyncHandle>();
    let state = RwSignal::new(DetailState::default());

    Effect::new(move || {
        let Some(id) = parse_case_id(params.read().get("id").as_deref()) else {
            state.update(DetailState::invalid_route);
            return;
        };
        let Some(seq) = state.try_update(DetailState::navigate) else {
            return;
        };
        let coordinator = sync.get_value();
        spawn_local(async move {
            let result = coordinator.remote().fetch_one(id).await;
            if let Err(err) = &result {
                log::warn!("loading case {id} failed: {err}");
            }
            state.update(|s| {
                if !s.finish_load(seq, result) {
                    log::debug!("case {id} response superseded");
                }
            });
        });
    });

    let on_status_change = move |ev: leptos::ev::Event| {
        let Some(target) = Status::from_wire(&event_target_value(&ev)) else {
            return;
        };
        let Some((seq, intent)) = state.try_update(|s| s.begin_change(target)).flatten() else {
            return;
        };
        let coordinator = sync.get_value();
        spawn_local(async move {
            let result = update_item_status(coordinator.remote(), intent).await;
            if let Err(err) = &result {
                log::warn!("{err}");
            }
            state.update(|s| {
                if !s.finish_change(seq, result) {
                    log::debug!("status change for case {} superseded", intent.item_id);
                }
            });
        });
    };

    let item = Memo::new(move |_| state.with(|s| s.item.clone()));
    let error = Memo::new(move |_| state.with(|s| s.error.clone()));

    view! {
        <Title text="Case"/>
        <ViewportContainer class="detail-page">
            <Show when=move || error.with(Option::is_some)>
                <p class="page-error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <Show
                when=move || item.with(Option::is_some)
                fallback=move || {
                    view! {
                        <Show when=move || state.with(DetailState::is_loading)>
                            <p class="page-hint">"Loading case..."</p>
                        </Show>
                    }
                }
            >
                <section class="panel">
                    <h2 class="panel__title">{move || item.with(|i| i.as_ref().map(|i| i.title.clone()))}</h2>
                    <p class="detail-page__description">
                        {move || item.with(|i| i.as_ref().map(|i| i.description.clone()))}
                    </p>
                    <p class="detail-page__meta">
                        "Priority: " {move || item.with(|i| i.as_ref().map(|i| i.priority.as_wire()))}
                    </p>
                    <label class="detail-page__status">
                        "Status: "
                        // Tracks `state` so a refused change snaps back.
                        <select
                            prop:value=move || state.with(|s| s.item.as_ref().map(|i| i.status.as_wire()).unwrap_or_default())
                            prop:disabled=move || state.with(|s| s.saving)
                            on:change=on_status_change
                        >
                            {Status::ALL
                                .into_iter()
                                .map(|status| {
                                    let selected = move || state.with(|s| s.item.as_ref().is_some_and(|i| i.status == status));
                                    view! {
                                        <option value=status.as_wire() prop:selected=selected>
                                            {status.as_wire()}
                                        </option>
                                    }
                                })
                                .collect_view()}
                        </select>
                    </label>
                </section>
                <section class="panel">
                    <h3 class="panel__title">"Comments"</h3>
                    {move || {
                        let comments = item.with(|i| i.as_ref().map(|i| i.comments.clone()).unwrap_or_default());
                        if comments.is_empty() {
                            view! { <p class="page-hint">"No comments yet."</p> }.into_any()
                        } else {
                            view! {
                                <ul class="comment-list">
                                    {comments
                                        .into_iter()
                                        .map(|comment| {
                                            view! {
                                                <li class="comment-list__item">
                                                    <p>{comment.text}</p>
                                                    <p class="comment-list__date">
                                                        "Created: " {format_timestamp(&comment.created_at)}
                                                    </p>
                                                </li>
                                            }
                                        })
                                        .collect_view()}
                                </ul>
                            }
                                .into_any()
                        }
                    }}
                </section>
            </Show>
        </ViewportContainer>
    }
}

/// Route parameter to case id; `None` for missing or non-numeric ids.
fn parse_case_id(raw: Option<&str>) -> Option<ItemId> {
    raw?.parse().ok()
}
