use contracts::clients::Client;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::domain::clients::api;
use crate::shared::icons::icon;

#[component]
#[allow(non_snake_case)]
pub fn ClientList() -> impl IntoView {
    let (clients, set_clients) = signal::<Vec<Client>>(Vec::new());
    let (search, set_search) = signal(String::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);

    let fetch = move || {
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_clients().await {
                Ok(list) => {
                    set_clients.set(list);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
            set_loading.set(false);
        });
    };
    fetch();

    let handle_delete = move |id: i64, name: String| {
        let confirmed = web_sys::window()
            .map(|win| {
                win.confirm_with_message(&format!(
                    "Are you sure you want to delete {}? This will remove their record but keep their job history.",
                    name
                ))
                .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        wasm_bindgen_futures::spawn_local(async move {
            match api::delete_client(id).await {
                Ok(()) => set_clients.update(|list| list.retain(|c| c.id != id)),
                Err(e) => set_error.set(Some(format!("Failed to delete client: {}", e))),
            }
        });
    };

    let filtered = move || {
        let query = search.get();
        clients
            .get()
            .into_iter()
            .filter(|c| query.is_empty() || c.matches_search(&query))
            .collect::<Vec<_>>()
    };

    view! {
        <div class="container">
            <div class="section-title">
                <h2>"Clients"</h2>
                <A href="/new-client" attr:class="btn btn-primary">
                    {icon("plus-circle")}
                    " Add Client"
                </A>
            </div>

            <Show when=move || error.get().is_some()>
                <div class="error-message">{move || error.get().unwrap_or_default()}</div>
            </Show>

            <div class="card search-bar">
                {icon("search")}
                <input
                    type="text"
                    class="form-control"
                    placeholder="Search Clients..."
                    value=move || search.get()
                    on:input=move |ev| set_search.set(event_target_value(&ev))
                />
            </div>

            <Show
                when=move || !loading.get()
                fallback=|| view! { <p>"Loading clients..."</p> }
            >
                <Show
                    when=move || !filtered().is_empty()
                    fallback=|| view! { <p>"No clients found."</p> }
                >
                    <div class="client-grid">
                        <For
                            each=filtered
                            key=|client| client.id
                            children=move |client| {
                                let Client {
                                    id,
                                    name,
                                    company,
                                    email,
                                    phone,
                                    address,
                                    ..
                                } = client;
                                let initial =
                                    name.chars().next().map(String::from).unwrap_or_default();
                                let delete_name = name.clone();
                                view! {
                                    <div class="card client-card">
                                        <div class="client-card-header">
                                            <div class="client-avatar">{initial}</div>
                                            <div class="client-card-title">
                                                <h3>{name}</h3>
                                                <Show when={
                                                    let company = company.clone();
                                                    move || !company.is_empty()
                                                }>
                                                    <div class="client-company">{company.clone()}</div>
                                                </Show>
                                            </div>
                                            <div class="client-card-actions">
                                                <A
                                                    href=format!("/client/edit/{}", id)
                                                    attr:class="btn btn-outline"
                                                    attr:title="Edit Client"
                                                >
                                                    {icon("edit")}
                                                </A>
                                                <button
                                                    class="btn btn-outline btn-danger"
                                                    title="Delete Client"
                                                    on:click=move |_| handle_delete(
                                                        id,
                                                        delete_name.clone(),
                                                    )
                                                >
                                                    {icon("trash")}
                                                </button>
                                            </div>
                                        </div>

                                        <div class="client-contacts">
                                            <Show when={
                                                let email = email.clone();
                                                move || !email.is_empty()
                                            }>
                                                <div>{email.clone()}</div>
                                            </Show>
                                            <Show when={
                                                let phone = phone.clone();
                                                move || !phone.is_empty()
                                            }>
                                                <div>{phone.clone()}</div>
                                            </Show>
                                            <Show when={
                                                let address = address.clone();
                                                move || !address.is_empty()
                                            }>
                                                <div>{address.clone()}</div>
                                            </Show>
                                        </div>

                                        <div class="client-card-footer">
                                            <A
                                                href=format!("/?client_id={}", id)
                                                attr:class="btn btn-outline btn-block"
                                            >
                                                {icon("eye")}
                                                " View Orders"
                                            </A>
                                        </div>
                                    </div>
                                }
                            }
                        />
                    </div>
                </Show>
            </Show>
        </div>
    }
}
