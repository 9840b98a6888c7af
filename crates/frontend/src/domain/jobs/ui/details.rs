use contracts::jobs::{Job, JOB_STATUSES};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::domain::jobs::api;
use crate::shared::components::StatusBadge;
use crate::shared::date_utils::{format_date, format_datetime};
use crate::shared::icons::icon;
use crate::shared::text_utils::title_case_key;

/// Read-only job order view: status control, client and delivery details,
/// the item breakdown, and print-only framing for the production slip.
#[component]
#[allow(non_snake_case)]
pub fn JobDetailsPage() -> impl IntoView {
    let params = use_params_map();
    let job_id = move || {
        params
            .read()
            .get("id")
            .and_then(|raw| raw.parse::<i64>().ok())
            .unwrap_or_default()
    };

    let (job, set_job) = signal::<Option<Job>>(None);
    let (loading, set_loading) = signal(true);
    let (updating, set_updating) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    Effect::new(move |_| {
        let id = job_id();
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_job(id).await {
                Ok(loaded) => {
                    set_job.set(Some(loaded));
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(format!("Failed to load job order: {}", e))),
            }
            set_loading.set(false);
        });
    });

    let handle_status_change = move |ev: leptos::ev::Event| {
        let new_status = event_target_value(&ev);
        let id = job_id();
        set_updating.set(true);
        spawn_local(async move {
            match api::update_status(id, new_status.clone()).await {
                Ok(()) => {
                    set_job.update(|job| {
                        if let Some(job) = job {
                            job.status = new_status;
                        }
                    });
                }
                Err(e) => set_error.set(Some(format!("Failed to update status: {}", e))),
            }
            set_updating.set(false);
        });
    };

    let navigate = use_navigate();
    // Callback keeps the handler Copy so the nested Show render closures
    // below stay callable more than once.
    let handle_delete = Callback::new(move |_: ()| {
        let confirmed = web_sys::window()
            .map(|win| {
                win.confirm_with_message(
                    "Are you sure you want to delete this job order? This cannot be undone.",
                )
                .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        let id = job_id();
        let navigate = navigate.clone();
        spawn_local(async move {
            match api::delete_job(id).await {
                Ok(()) => navigate("/", Default::default()),
                Err(e) => set_error.set(Some(format!("Failed to delete job order: {}", e))),
            }
        });
    });

    let handle_print = move |_| {
        if let Some(win) = web_sys::window() {
            let _ = win.print();
        }
    };

    view! {
        <Show
            when=move || !loading.get()
            fallback=|| view! { <div class="container loading-state">"Loading..."</div> }
        >
            <Show
                when=move || job.read().is_some()
                fallback=|| view! { <div class="container">"Job not found"</div> }
            >
                {move || {
                    let job = job.get().unwrap_or_default();
                    let display_id = job.display_id();
                    let status = RwSignal::new(job.status.clone());
                    let current_status = job.status.clone();
                    let total_qty: i64 = job.items.iter().map(|i| i.quantity).sum();
                    let edit_href = format!("/job/edit/{}", job.id);
                    view! {
                        <div class="container">
                            <div class="print-only print-header">
                                <h1>"PRINTO JOB ORDER"</h1>
                                <p>"Production Slip & Feedback Form"</p>
                                <div class="print-meta">
                                    <span>"Order Date: " {format_datetime(&job.created_at)}</span>
                                    <span>"Job ID: " {display_id.clone()}</span>
                                </div>
                            </div>

                            <div class="page-nav">
                                <A href="/" attr:class="btn btn-outline">
                                    {icon("arrow-left")}
                                    " Back to Dashboard"
                                </A>
                                <div class="section-actions">
                                    <A href=edit_href attr:class="btn btn-primary">
                                        {icon("edit")}
                                        " Edit"
                                    </A>
                                    <button
                                        class="btn btn-outline btn-danger"
                                        on:click=move |_| handle_delete.run(())
                                    >
                                        {icon("trash")}
                                        " Delete"
                                    </button>
                                    <button class="btn btn-outline" on:click=handle_print>
                                        {icon("printer")}
                                        " Print Job Slip"
                                    </button>
                                </div>
                            </div>

                            <Show when=move || error.get().is_some()>
                                <div class="error-message">
                                    {move || error.get().unwrap_or_default()}
                                </div>
                            </Show>

                            <div class="card job-header-card">
                                <div class="job-header">
                                    <div>
                                        <h1>"Job Order: " {display_id.clone()}</h1>
                                        <div class="job-created">
                                            {icon("clock")}
                                            " Created: "
                                            {format_datetime(&job.created_at)}
                                        </div>
                                    </div>

                                    <div class="status-panel">
                                        <div class="status-panel-label">"Current Status"</div>
                                        <StatusBadge status=Signal::derive(move || {
                                            status.get()
                                        }) />
                                        <select
                                            class="form-control"
                                            disabled=move || updating.get()
                                            on:change=move |ev| {
                                                status.set(event_target_value(&ev));
                                                handle_status_change(ev);
                                            }
                                        >
                                            {JOB_STATUSES
                                                .iter()
                                                .map(|s| {
                                                    view! {
                                                        <option
                                                            value=*s
                                                            selected={*s == current_status}
                                                        >
                                                            {*s}
                                                        </option>
                                                    }
                                                })
                                                .collect_view()}
                                        </select>
                                    </div>
                                </div>

                                <div class="job-summary-strip">
                                    <div>
                                        <strong>"Staff: "</strong>
                                        {job.header.submitted_by.clone()}
                                        <Show when={
                                            let contact = job.header.submitted_contact.clone();
                                            move || !contact.is_empty()
                                        }>
                                            <small>
                                                " (" {job.header.submitted_contact.clone()} ")"
                                            </small>
                                        </Show>
                                    </div>
                                    <div>
                                        <strong>"Total Items: "</strong>
                                        {job.items.len()}
                                        " items (Qty: "
                                        {total_qty}
                                        ")"
                                    </div>
                                </div>
                            </div>

                            <div class="row">
                                <div class="col">
                                    <div class="card">
                                        <h3 class="section-title">"Client Information"</h3>
                                        <p>
                                            <strong>"Name: "</strong>
                                            {job.header.client_name.clone()}
                                        </p>
                                        <Show when={
                                            let company = job.header.client_company.clone();
                                            move || !company.is_empty()
                                        }>
                                            <p>
                                                <strong>"Company: "</strong>
                                                {job.header.client_company.clone()}
                                            </p>
                                        </Show>
                                        <p>
                                            <strong>"Phone: "</strong>
                                            {or_na(&job.header.client_phone)}
                                        </p>
                                        <p>
                                            <strong>"Email: "</strong>
                                            {or_na(&job.header.client_email)}
                                        </p>
                                        <Show when={
                                            let address = job.header.client_address.clone();
                                            move || !address.is_empty()
                                        }>
                                            <p>
                                                <strong>"Address: "</strong>
                                                {job.header.client_address.clone()}
                                            </p>
                                        </Show>
                                    </div>
                                </div>
                                <div class="col">
                                    <div class="card">
                                        <h3 class="section-title">"Delivery Details"</h3>
                                        <p>
                                            <strong>"Expected Date: "</strong>
                                            {format_date(&job.header.expected_delivery_date)}
                                        </p>
                                        <p>
                                            <strong>"Priority: "</strong>
                                            {job.header.priority.clone()}
                                        </p>
                                        <p>
                                            <strong>"Mode: "</strong>
                                            {job.header.delivery_mode.clone()}
                                        </p>
                                    </div>
                                </div>
                            </div>

                            <div class="card items-card">
                                <h3 class="section-title">
                                    "Product Items - " {job.items.len()}
                                </h3>
                                <div class="table-container">
                                    <table>
                                        <thead>
                                            <tr>
                                                <th>"Product"</th>
                                                <th>"Details"</th>
                                                <th>"Quantity"</th>
                                                <th>"Rate"</th>
                                                <th>"Advance"</th>
                                                <th>"Additional Info"</th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {job.items
                                                .iter()
                                                .map(|item| {
                                                    let attrs = item.display_attrs();
                                                    let customs: Vec<(String, String)> = item
                                                        .custom_fields
                                                        .iter()
                                                        .filter(|(_, v)| !v.trim().is_empty())
                                                        .map(|(k, v)| {
                                                            (title_case_key(k), v.clone())
                                                        })
                                                        .collect();
                                                    let card_size = item.card_size.trim()
                                                        .to_string();
                                                    let additional = item.additional_info.clone();
                                                    view! {
                                                        <tr>
                                                            <td>
                                                                <div class="item-product">
                                                                    {item.product_type.clone()}
                                                                </div>
                                                                <Show when={
                                                                    let size = card_size.clone();
                                                                    move || !size.is_empty()
                                                                }>
                                                                    <div class="item-size">
                                                                        "Size: " {card_size.clone()}
                                                                    </div>
                                                                </Show>
                                                            </td>
                                                            <td class="item-details">
                                                                {attrs
                                                                    .into_iter()
                                                                    .map(|(label, value)| {
                                                                        view! {
                                                                            <div>
                                                                                <strong>
                                                                                    {label} ": "
                                                                                </strong>
                                                                                {value}
                                                                            </div>
                                                                        }
                                                                    })
                                                                    .collect_view()}
                                                                {customs
                                                                    .into_iter()
                                                                    .map(|(label, value)| {
                                                                        view! {
                                                                            <div>
                                                                                <strong>
                                                                                    {label} ": "
                                                                                </strong>
                                                                                {value}
                                                                            </div>
                                                                        }
                                                                    })
                                                                    .collect_view()}
                                                            </td>
                                                            <td>{item.quantity}</td>
                                                            <td>"\u{20b9}" {item.rate}</td>
                                                            <td>"\u{20b9}" {item.advance_amount}</td>
                                                            <td class="item-notes">
                                                                {if additional.is_empty() {
                                                                    view! {
                                                                        <span class="muted">
                                                                            "None"
                                                                        </span>
                                                                    }
                                                                        .into_any()
                                                                } else {
                                                                    additional.into_any()
                                                                }}
                                                            </td>
                                                        </tr>
                                                    }
                                                })
                                                .collect_view()}
                                        </tbody>
                                    </table>
                                </div>
                            </div>

                            <div class="card instructions-card">
                                <h3 class="section-title">"Instructions"</h3>
                                <div class="instructions-body">
                                    {or_none(&job.header.special_instructions)}
                                </div>
                            </div>

                            <div class="print-only print-footer">
                                <div class="print-terms">
                                    <h4>"Terms & Conditions"</h4>
                                    <ul>
                                        <li>"Colors may vary slightly from screen to print."</li>
                                        <li>"Check all spelling and details before approval."</li>
                                        <li>"No returns or refunds after production starts."</li>
                                    </ul>
                                </div>
                                <div class="print-signatures">
                                    <div class="signature-line">"Staff Signature"</div>
                                    <div class="signature-line">"Customer Signature"</div>
                                </div>
                                <div class="print-note">
                                    "This is a computer-generated document. No seal required."
                                </div>
                            </div>
                        </div>
                    }
                }}
            </Show>
        </Show>
    }
}

fn or_na(value: &str) -> String {
    if value.is_empty() {
        "N/A".to_string()
    } else {
        value.to_string()
    }
}

fn or_none(value: &str) -> String {
    if value.is_empty() {
        "None".to_string()
    } else {
        value.to_string()
    }
}
