use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::shared::icons::icon;
use crate::system::auth::{api, storage};

#[component]
pub fn LoginPage() -> impl IntoView {
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let username_val = username.get();
        let password_val = password.get();
        let navigate = navigate.clone();

        set_is_loading.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            match api::login(username_val, password_val).await {
                Ok(user) => {
                    let user_json = user.to_string();
                    storage::save_session(&user_json);
                    set_is_loading.set(false);
                    navigate("/admin", Default::default());
                }
                Err(e) => {
                    set_error_message.set(Some(e));
                    set_is_loading.set(false);
                }
            }
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box card">
                <div class="login-brand">
                    {icon("settings")}
                    <h2>"Admin Login"</h2>
                </div>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label class="form-label">"Username"</label>
                        <input
                            type="text"
                            class="form-control"
                            value=move || username.get()
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <div class="form-group">
                        <label class="form-label">"Password"</label>
                        <input
                            type="password"
                            class="form-control"
                            value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <button
                        type="submit"
                        class="btn btn-primary btn-block"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() { "Logging in..." } else { "Login" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
