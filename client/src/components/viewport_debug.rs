//! Viewport debug overlay.
//!
//! Shows the live dimensions and tier in a corner badge; a click expands the
//! scale factor and the breakpoint table. Not rendered in release builds.

use leptos::prelude::*;
use viewport::ViewportDescriptor;

use crate::state::viewport::{breakpoint_rows, dimension_label, tier_color};

#[component]
pub fn ViewportDebug(#[prop(default = true)] show: bool) -> impl IntoView {
    let viewport = expect_context::<RwSignal<ViewportDescriptor>>();
    let expanded = RwSignal::new(false);
    let visible = show && cfg!(debug_assertions);
    let color = move || tier_color(viewport.get().tier());

    view! {
        <Show when=move || visible>
            <aside
                class="viewport-debug"
                class:viewport-debug--expanded=move || expanded.get()
                style=move || format!("border-color: {};", color())
                on:click=move |_| expanded.update(|e| *e = !*e)
            >
                <div class="viewport-debug__badge">
                    <span class="viewport-debug__size">{move || dimension_label(&viewport.get())}</span>
                    <span class="viewport-debug__dot" style=move || format!("background-color: {};", color())></span>
                    <span class="viewport-debug__tier">{move || viewport.get().tier().label()}</span>
                </div>
                <Show when=move || expanded.get()>
                    <div class="viewport-debug__details">
                        <div>{move || format!("Scale Factor: {:.2}", viewport.get().scale())}</div>
                        <div class="viewport-debug__heading">"Breakpoints:"</div>
                        {move || {
                            breakpoint_rows(&viewport.get())
                                .into_iter()
                                .map(|row| {
                                    let marker = if row.active { " ←" } else { "" };
                                    view! {
                                        <div
                                            class="viewport-debug__row"
                                            class:viewport-debug__row--active=row.active
                                            style=row.active.then(|| format!("color: {};", color()))
                                        >
                                            <span>{row.tier.name()}</span>
                                            <span>{format!("{}px{marker}", row.min_width)}</span>
                                        </div>
                                    }
                                })
                                .collect_view()
                        }}
                    </div>
                    <div class="viewport-debug__hint">
                        {move || if expanded.get() { "Click to collapse" } else { "Click to expand" }}
                    </div>
                </Show>
            </aside>
        </Show>
    }
}
