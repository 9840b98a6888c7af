//! Sidebar navigation grouped into labeled sections, with a pulsing badge
//! on Dashboard while any job is inside the deadline window.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::domain::jobs::notifications::NotificationService;
use crate::shared::icons::icon;

struct NavSection {
    label: &'static str,
    items: Vec<(&'static str, &'static str, &'static str)>, // (href, label, icon)
}

fn nav_sections() -> Vec<NavSection> {
    vec![
        NavSection {
            label: "Main",
            items: vec![("/", "Dashboard", "layout-dashboard")],
        },
        NavSection {
            label: "Customer",
            items: vec![
                ("/clients", "Clients", "users"),
                ("/new-client", "Add Client", "plus-circle"),
            ],
        },
        NavSection {
            label: "Orders",
            items: vec![("/new", "New Order", "plus-circle")],
        },
        NavSection {
            label: "System",
            items: vec![("/admin", "Admin & Settings", "settings")],
        },
    ]
}

#[component]
pub fn Sidebar(
    open: ReadSignal<bool>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let notifications =
        use_context::<NotificationService>().expect("NotificationService not found in context");
    let critical_count = notifications.count;

    view! {
        <aside class=move || if open.get() { "sidebar open" } else { "sidebar" }>
            <div class="sidebar-brand">
                {icon("printer")}
                <span>"Job Order"</span>
            </div>

            <nav class="sidebar-nav">
                {nav_sections()
                    .into_iter()
                    .map(|section| {
                        view! {
                            <div class="nav-section">
                                <span class="nav-label">{section.label}</span>
                                {section
                                    .items
                                    .into_iter()
                                    .map(|(href, label, icon_name)| {
                                        let is_dashboard = href == "/";
                                        view! {
                                            <A
                                                href=href
                                                attr:class="nav-item"
                                                on:click=move |_| on_close.run(())
                                            >
                                                <div class="nav-item-label">
                                                    {icon(icon_name)}
                                                    <span>{label}</span>
                                                </div>
                                                <Show when=move || {
                                                    is_dashboard && critical_count.get() > 0
                                                }>
                                                    <span class="badge pulse">
                                                        {move || critical_count.get()}
                                                    </span>
                                                </Show>
                                            </A>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        }
                    })
                    .collect_view()}
            </nav>

            <div class="sidebar-footer">
                <p>"\u{a9} Printo Cards"</p>
            </div>
        </aside>
    }
}
