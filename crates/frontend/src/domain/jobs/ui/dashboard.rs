use contracts::jobs::{due_label, upcoming_jobs, JobSummary, JOB_STATUSES};
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::domain::jobs::api;
use crate::shared::components::StatusBadge;
use crate::shared::date_utils::{format_date, today};
use crate::shared::export::{export_to_csv, CsvExportable};
use crate::shared::icons::icon;

impl CsvExportable for JobSummary {
    fn headers() -> Vec<&'static str> {
        vec![
            "Job ID",
            "Date",
            "Submitted By",
            "Client",
            "Product Type",
            "Material",
            "Quantity",
            "Priority",
            "Status",
        ]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.display_id(),
            format_date(&self.created_at),
            self.submitted_by.clone(),
            self.client_name.clone(),
            self.product_type.clone(),
            self.material.clone(),
            self.quantity.to_string(),
            self.priority.clone(),
            self.status.clone(),
        ]
    }
}

fn date_part(raw: &str) -> &str {
    raw.split(['T', ' ']).next().unwrap_or(raw)
}

#[component]
#[allow(non_snake_case)]
pub fn Dashboard() -> impl IntoView {
    let (jobs, set_jobs) = signal::<Vec<JobSummary>>(Vec::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);
    let (search, set_search) = signal(String::new());
    let (status_filter, set_status_filter) = signal("All".to_string());
    let (date_filter, set_date_filter) = signal(String::new());
    let (due_date_filter, set_due_date_filter) = signal(String::new());

    let query = use_query_map();
    let client_filter = Memo::new(move |_| {
        query
            .read()
            .get("client_id")
            .and_then(|raw| raw.parse::<i64>().ok())
    });

    // Refetch when the client filter in the URL changes.
    Effect::new(move |_| {
        let client_id = client_filter.get();
        set_loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_jobs(client_id).await {
                Ok(list) => {
                    set_jobs.set(list);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
            set_loading.set(false);
        });
    });

    let stats = move || {
        let list = jobs.get();
        let total = list.len();
        let completed = list.iter().filter(|j| j.is_closed()).count();
        (total, total - completed, completed)
    };

    let filtered = move || {
        let query = search.get();
        let status = status_filter.get();
        let created = date_filter.get();
        let due = due_date_filter.get();
        jobs.get()
            .into_iter()
            .filter(|job| {
                (query.is_empty() || job.matches_search(&query))
                    && (status == "All" || job.status == status)
                    && (created.is_empty() || date_part(&job.created_at) == created)
                    && (due.is_empty()
                        || (!job.expected_delivery_date.is_empty()
                            && date_part(&job.expected_delivery_date) == due))
            })
            .collect::<Vec<_>>()
    };

    let upcoming = move || upcoming_jobs(&jobs.get(), today());

    let navigate = use_navigate();
    let open_job = {
        let navigate = navigate.clone();
        move |id: i64| navigate(&format!("/job/{}", id), Default::default())
    };
    let show_all = move |_| navigate("/", Default::default());

    let handle_export = move |_| {
        let rows = filtered();
        let filename = format!("job_orders_{}.csv", today().format("%Y-%m-%d"));
        if let Err(e) = export_to_csv(&rows, &filename) {
            set_error.set(Some(e));
        }
    };

    view! {
        <div class="container">
            <div class="section-title">
                <h2>"Dashboard"</h2>
                <div class="section-actions">
                    <Show when=move || client_filter.get().is_some()>
                        <button class="btn btn-outline" on:click=show_all.clone()>
                            "Show All Jobs"
                        </button>
                    </Show>
                    <button class="btn btn-outline" on:click=handle_export>
                        {icon("download")}
                        " Export CSV"
                    </button>
                </div>
            </div>

            <Show when=move || error.get().is_some()>
                <div class="error-message">{move || error.get().unwrap_or_default()}</div>
            </Show>

            <div class="row stats-row">
                <div class="card col stat-primary">
                    <h3>"Total Jobs"</h3>
                    <div class="stat-value">{move || stats().0}</div>
                </div>
                <div class="card col stat-accent">
                    <h3>"Active / Pending"</h3>
                    <div class="stat-value">{move || stats().1}</div>
                </div>
                <div class="card col stat-success">
                    <h3>"Completed"</h3>
                    <div class="stat-value">{move || stats().2}</div>
                </div>
            </div>

            <Show
                clone:open_job
                when=move || !upcoming().is_empty()
                fallback=move || {
                    view! {
                        <div class="card deadline-box-empty">
                            {icon("bell")}
                            <span>"No pending or upcoming critical deadlines."</span>
                        </div>
                    }
                }
            >
                <div class="card deadline-box">
                    <div class="deadline-box-header">
                        {icon("bell")}
                        <h3>"Critical Deadlines (Overdue & Upcoming)"</h3>
                        <span class="badge badge-count">{move || upcoming().len()}</span>
                    </div>

                    <div class="deadline-grid">
                        <For
                            each={move || upcoming().into_iter().take(6).collect::<Vec<_>>()}
                            key=|due| due.job.id
                            children={
                                let open_job = open_job.clone();
                                move |due| {
                                    let card_class = if due.is_overdue() {
                                        "deadline-card overdue"
                                    } else {
                                        "deadline-card"
                                    };
                                    let label_class = match due.days {
                                        d if d < 0 => "due-label overdue",
                                        0 => "due-label today",
                                        _ => "due-label",
                                    };
                                    let open_job = open_job.clone();
                                    let job_id = due.job.id;
                                    view! {
                                        <div
                                            class=card_class
                                            on:click=move |_| open_job(job_id)
                                        >
                                            <div>
                                                <div class="deadline-job-id">
                                                    {due.job.display_id()}
                                                </div>
                                                <div class="deadline-client">
                                                    {due.job.client_name.clone()}
                                                </div>
                                                <div class="deadline-date">
                                                    {icon("clock")}
                                                    " Due: "
                                                    {format_date(&due.job.expected_delivery_date)}
                                                </div>
                                            </div>
                                            <div class=label_class>{due_label(due.days)}</div>
                                        </div>
                                    }
                                }
                            }
                        />
                    </div>
                    <Show when={move || upcoming().len() > 6}>
                        <div class="deadline-more">
                            {move || format!("And {} more critical tasks...", upcoming().len() - 6)}
                        </div>
                    </Show>
                </div>
            </Show>

            <div class="card filter-bar">
                <div class="row">
                    <div class="col filter-search">
                        <label class="form-label">"Search"</label>
                        <input
                            type="text"
                            class="form-control"
                            placeholder="Search Client, Staff, or Job ID..."
                            value=move || search.get()
                            on:input=move |ev| set_search.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="col">
                        <label class="form-label">"Status"</label>
                        <select
                            class="form-control"
                            on:change=move |ev| set_status_filter.set(event_target_value(&ev))
                        >
                            <option value="All">"All Statuses"</option>
                            {JOB_STATUSES
                                .iter()
                                .map(|s| view! { <option value=*s>{*s}</option> })
                                .collect_view()}
                        </select>
                    </div>
                    <div class="col">
                        <label class="form-label">"Created Date"</label>
                        <div class="filter-date">
                            <input
                                type="date"
                                class="form-control"
                                prop:value=move || date_filter.get()
                                on:input=move |ev| set_date_filter.set(event_target_value(&ev))
                            />
                            <Show when=move || !date_filter.get().is_empty()>
                                <button
                                    class="btn btn-outline"
                                    title="Clear Date"
                                    on:click=move |_| set_date_filter.set(String::new())
                                >
                                    "X"
                                </button>
                            </Show>
                        </div>
                    </div>
                    <div class="col">
                        <label class="form-label">"Due Date Search"</label>
                        <div class="filter-date">
                            <input
                                type="date"
                                class="form-control"
                                prop:value=move || due_date_filter.get()
                                on:input=move |ev| {
                                    set_due_date_filter.set(event_target_value(&ev))
                                }
                            />
                            <Show when=move || !due_date_filter.get().is_empty()>
                                <button
                                    class="btn btn-outline"
                                    title="Clear Due Date"
                                    on:click=move |_| set_due_date_filter.set(String::new())
                                >
                                    "X"
                                </button>
                            </Show>
                        </div>
                    </div>
                </div>
            </div>

            <div class="card table-card">
                <div class="table-container">
                    <table>
                        <thead>
                            <tr>
                                <th>"Job ID"</th>
                                <th>"Date"</th>
                                <th>"Due Date"</th>
                                <th>"Client"</th>
                                <th>"Product"</th>
                                <th>"Qty"</th>
                                <th>"Priority"</th>
                                <th>"Submitted By"</th>
                                <th>"Status"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <Show
                                when=move || !loading.get()
                                fallback=|| {
                                    view! {
                                        <tr>
                                            <td colspan="9" class="table-empty">"Loading..."</td>
                                        </tr>
                                    }
                                }
                            >
                                <Show
                                    clone:open_job
                                    when=move || !filtered().is_empty()
                                    fallback=|| {
                                        view! {
                                            <tr>
                                                <td colspan="9" class="table-empty">
                                                    "No jobs found"
                                                </td>
                                            </tr>
                                        }
                                    }
                                >
                                    <For
                                        each=filtered
                                        key=|job| job.id
                                        children={
                                            let open_job = open_job.clone();
                                            move |job| {
                                                let open_job = open_job.clone();
                                                let urgent = job.priority == "Urgent";
                                                let job_id = job.id;
                                                let status = job.status.clone();
                                                view! {
                                                    <tr
                                                        class="clickable-row"
                                                        on:click=move |_| open_job(job_id)
                                                    >
                                                        <td class="job-id-cell">
                                                            {job.display_id()}
                                                        </td>
                                                        <td>{format_date(&job.created_at)}</td>
                                                        <td class=if urgent {
                                                            "due-cell urgent"
                                                        } else {
                                                            "due-cell"
                                                        }>
                                                            {format_date(
                                                                &job.expected_delivery_date,
                                                            )}
                                                        </td>
                                                        <td>{job.client_name.clone()}</td>
                                                        <td>{job.product_type.clone()}</td>
                                                        <td>{job.quantity}</td>
                                                        <td class=if urgent {
                                                            "priority-cell urgent"
                                                        } else {
                                                            "priority-cell"
                                                        }>{job.priority.clone()}</td>
                                                        <td>{job.submitted_by.clone()}</td>
                                                        <td>
                                                            <StatusBadge status=Signal::derive(
                                                                move || status.clone(),
                                                            ) />
                                                        </td>
                                                    </tr>
                                                }
                                            }
                                        }
                                    />
                                </Show>
                            </Show>
                        </tbody>
                    </table>
                </div>
            </div>
        </div>
    }
}
