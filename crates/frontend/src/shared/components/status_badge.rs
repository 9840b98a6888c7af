use leptos::prelude::*;

/// Colored pill for a job's workflow status. Unknown values fall back to
/// the "received" style so freshly added statuses still render.
#[component]
#[allow(non_snake_case)]
pub fn StatusBadge(#[prop(into)] status: Signal<String>) -> impl IntoView {
    let class = move || {
        let suffix = match status.get().as_str() {
            "Received" => "received",
            "In Design" => "design",
            "In Production" => "production",
            "Quality Check" => "quality",
            "Dispatched" => "dispatched",
            "Completed" => "completed",
            _ => "received",
        };
        format!("badge badge-{}", suffix)
    };

    view! { <span class=class>{move || status.get()}</span> }
}
