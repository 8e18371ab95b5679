//! Top navigation with the collapsible route menu.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::util::auth::has_session;

const LINKS: [(&str, &str); 4] = [
    ("/", "Dashboard"),
    ("/suche", "Search"),
    ("/uebersicht", "Overview"),
    ("/viewport-demo", "Viewport"),
];

#[component]
pub fn NavBar() -> impl IntoView {
    let menu_open = RwSignal::new(false);
    let signed_in = has_session();

    view! {
        <header class="nav-bar">
            <A href="/">
                <span class="nav-bar__brand">"Servicefall"</span>
            </A>
            <Show when=move || !signed_in>
                <span class="nav-bar__session" title="No token in local storage">
                    "Not signed in"
                </span>
            </Show>
            <nav class="nav-bar__menu">
                <button
                    class="btn nav-bar__toggle"
                    aria-label="Menu"
                    aria-expanded=move || menu_open.get().to_string()
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    "☰"
                </button>
                <Show when=move || menu_open.get()>
                    <ul class="nav-bar__links" on:click=move |_| menu_open.set(false)>
                        {LINKS
                            .into_iter()
                            .map(|(href, label)| view! { <li><A href=href>{label}</A></li> })
                            .collect_view()}
                    </ul>
                </Show>
            </nav>
        </header>
    }
}
