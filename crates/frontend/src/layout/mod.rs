pub mod sidebar;

use leptos::prelude::*;
use sidebar::Sidebar;

/// Application shell: fixed sidebar on the left, routed content on the right.
///
/// ```text
/// +---------+--------------------------------+
/// | Sidebar |           Content              |
/// +---------+--------------------------------+
/// ```
///
/// On narrow screens the sidebar collapses behind a toggle button and an
/// overlay that closes it on any outside click.
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    let (sidebar_open, set_sidebar_open) = signal(false);

    view! {
        <div class="app-container">
            <button
                class="mobile-toggle"
                on:click=move |_| set_sidebar_open.update(|open| *open = !*open)
            >
                {move || if sidebar_open.get() { "\u{2715}" } else { "\u{2630}" }}
            </button>

            <div
                class=move || {
                    if sidebar_open.get() { "sidebar-overlay show" } else { "sidebar-overlay" }
                }
                on:click=move |_| set_sidebar_open.set(false)
            ></div>

            <Sidebar open=sidebar_open on_close=move || set_sidebar_open.set(false) />

            <div class="main-content">{children()}</div>
        </div>
    }
}
