//! Viewport demo page: shows the live descriptor and tier-scaled content.

use leptos::prelude::*;
use leptos_meta::Title;
use viewport::ViewportDescriptor;

use crate::app::ViewportHub;
use crate::components::viewport_container::ViewportContainer;
use crate::state::viewport::{DemoMetrics, demo_gradient, dimension_label};

const DEMO_CARDS: usize = 8;

#[component]
pub fn ViewportDemoPage() -> impl IntoView {
    let viewport = expect_context::<RwSignal<ViewportDescriptor>>();
    let hub = expect_context::<StoredValue<ViewportHub, LocalStorage>>();
    let metrics = move || DemoMetrics::for_tier(viewport.get().tier());

    let hero_style = move || {
        let m = metrics();
        format!("background: {}; padding: {}rem;", demo_gradient(viewport.get().tier()), m.hero_padding)
    };
    let card_style = move || format!("padding: {}rem;", metrics().card_padding);
    let revision = move || {
        viewport.track();
        hub.with_value(|h| h.broadcast.revision())
    };

    view! {
        <Title text="Viewport demo"/>
        <ViewportContainer class="viewport-demo">
            <section class="viewport-demo__hero" style=hero_style>
                <h1
                    class="viewport-demo__title"
                    style=move || {
                        let m = metrics();
                        format!("font-size: {}rem; margin-bottom: {}rem;", m.hero_title, m.hero_title_gap)
                    }
                >
                    "4K Viewport Demo"
                </h1>
                <div class="viewport-demo__text" style=move || format!("font-size: {}rem;", metrics().hero_text)>
                    <p>
                        "Current viewport: "
                        <strong>{move || format!("{}px", dimension_label(&viewport.get()))}</strong>
                        {move || format!(" ({})", viewport.get().breakpoint())}
                    </p>
                    <p>"Scale factor: " <strong>{move || format!("{:.2}", viewport.get().scale())}</strong></p>
                    <p>"Updates received: " {revision}</p>
                    <p>"Resize the window to see the layout adapt across tiers."</p>
                </div>
            </section>
            <div class="viewport-demo__cards">
                {(1..=DEMO_CARDS)
                    .map(|n| {
                        view! {
                            <article class="viewport-demo__card" style=card_style>
                                <h3 style=move || format!("font-size: {}rem;", metrics().card_title)>
                                    {format!("Card {n}")}
                                </h3>
                                <p style=move || format!("font-size: {}rem;", metrics().card_text)>
                                    "This card scales with the viewport size."
                                </p>
                            </article>
                        }
                    })
                    .collect_view()}
            </div>
        </ViewportContainer>
    }
}
