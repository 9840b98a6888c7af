use contracts::clients::ClientDto;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::domain::clients::api;
use crate::shared::icons::icon;

/// Create and edit form for a client. Mounted with an `:id` route param it
/// loads that client; without one it starts blank.
#[component]
#[allow(non_snake_case)]
pub fn ClientEditor() -> impl IntoView {
    let params = use_params_map();
    let client_id = move || {
        params
            .read()
            .get("id")
            .and_then(|raw| raw.parse::<i64>().ok())
    };
    let is_edit = move || client_id().is_some();

    let dto = RwSignal::new(ClientDto::default());
    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    if let Some(id) = client_id() {
        spawn_local(async move {
            match api::fetch_client(id).await {
                Ok(client) => dto.set(ClientDto::from(&client)),
                Err(e) => set_error.set(Some(format!("Failed to load client: {}", e))),
            }
        });
    }

    let navigate = use_navigate();
    let on_submit = {
        let navigate = navigate.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let payload = dto.get();
            if let Err(e) = payload.validate() {
                set_error.set(Some(e));
                return;
            }
            let id = client_id();
            let navigate = navigate.clone();
            set_saving.set(true);
            spawn_local(async move {
                let result = match id {
                    Some(id) => api::update_client(id, &payload).await,
                    None => api::create_client(&payload).await,
                };
                set_saving.set(false);
                match result {
                    Ok(()) => navigate("/clients", Default::default()),
                    Err(e) => set_error.set(Some(format!("Failed to save client: {}", e))),
                }
            });
        }
    };

    let on_delete = move |_| {
        let Some(id) = client_id() else { return };
        let confirmed = web_sys::window()
            .map(|win| {
                win.confirm_with_message(
                    "Are you sure you want to delete this client? Their job history is kept.",
                )
                .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        let navigate = navigate.clone();
        spawn_local(async move {
            match api::delete_client(id).await {
                Ok(()) => navigate("/clients", Default::default()),
                Err(e) => set_error.set(Some(format!("Failed to delete client: {}", e))),
            }
        });
    };

    view! {
        <div class="container">
            <div class="page-nav">
                <A href="/clients" attr:class="btn btn-outline">
                    {icon("arrow-left")}
                    " Back to Clients"
                </A>
            </div>

            <div class="section-title">
                <h2>{move || if is_edit() { "Edit Client" } else { "Add New Client" }}</h2>
            </div>

            <Show when=move || error.get().is_some()>
                <div class="error-message">{move || error.get().unwrap_or_default()}</div>
            </Show>

            <div class="card form-card">
                <form on:submit=on_submit>
                    <div class="row">
                        <div class="col">
                            <label class="form-label">"Client Name *"</label>
                            <input
                                type="text"
                                class="form-control"
                                required
                                placeholder="Full Name"
                                prop:value=move || dto.read().name.clone()
                                on:input=move |ev| {
                                    dto.update(|d| d.name = event_target_value(&ev))
                                }
                            />
                        </div>
                        <div class="col">
                            <label class="form-label">"Company"</label>
                            <input
                                type="text"
                                class="form-control"
                                prop:value=move || dto.read().company.clone()
                                on:input=move |ev| {
                                    dto.update(|d| d.company = event_target_value(&ev))
                                }
                            />
                        </div>
                    </div>

                    <div class="row">
                        <div class="col">
                            <label class="form-label">"Email"</label>
                            <input
                                type="email"
                                class="form-control"
                                prop:value=move || dto.read().email.clone()
                                on:input=move |ev| {
                                    dto.update(|d| d.email = event_target_value(&ev))
                                }
                            />
                        </div>
                        <div class="col">
                            <label class="form-label">"Phone"</label>
                            <input
                                type="tel"
                                class="form-control"
                                prop:value=move || dto.read().phone.clone()
                                on:input=move |ev| {
                                    dto.update(|d| d.phone = event_target_value(&ev))
                                }
                            />
                        </div>
                    </div>

                    <div class="form-group">
                        <label class="form-label">"Address"</label>
                        <textarea
                            class="form-control"
                            prop:value=move || dto.read().address.clone()
                            on:input=move |ev| {
                                dto.update(|d| d.address = event_target_value(&ev))
                            }
                        ></textarea>
                    </div>

                    <div class="form-group">
                        <label class="form-label">"Notes"</label>
                        <textarea
                            class="form-control"
                            prop:value=move || dto.read().notes.clone()
                            on:input=move |ev| {
                                dto.update(|d| d.notes = event_target_value(&ev))
                            }
                        ></textarea>
                    </div>

                    <div class="form-actions">
                        <button
                            type="submit"
                            class="btn btn-primary"
                            disabled=move || saving.get()
                        >
                            {icon("save")}
                            {move || if saving.get() { " Saving..." } else { " Save Client" }}
                        </button>
                        <Show when=is_edit>
                            <button
                                type="button"
                                class="btn btn-outline btn-danger"
                                on:click=on_delete.clone()
                            >
                                {icon("trash")}
                                " Delete"
                            </button>
                        </Show>
                    </div>
                </form>
            </div>
        </div>
    }
}
