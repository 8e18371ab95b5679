//! Width-capped content box that scales with the viewport tier.

use leptos::prelude::*;
use viewport::ViewportDescriptor;

use crate::state::viewport::container_style;

/// Centered container whose max width, padding, font size, and line height
/// follow the current viewport. `fluid` removes the width cap.
#[component]
pub fn ViewportContainer(
    children: Children,
    #[prop(optional)] fluid: bool,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let viewport = expect_context::<RwSignal<ViewportDescriptor>>();
    let style = move || container_style(&viewport.get(), fluid).to_css();
    let class = if class.is_empty() { "viewport-container".to_owned() } else { format!("viewport-container {class}") };

    view! {
        <div class=class style=style>
            {children()}
        </div>
    }
}
