use contracts::catalog::{
    Catalog, CategoryDto, OptionScope, ProductDto, Setting, SettingDto,
};
use contracts::staff::{StaffDto, StaffMember};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::domain::catalog::api as catalog_api;
use crate::domain::staff::api as staff_api;
use crate::shared::icons::icon;
use crate::system::auth::storage;

fn alert(message: &str) {
    if let Some(win) = web_sys::window() {
        let _ = win.alert_with_message(message);
    }
}

fn confirm(message: &str) -> bool {
    web_sys::window()
        .map(|win| win.confirm_with_message(message).unwrap_or(false))
        .unwrap_or(false)
}

fn parse_scope(raw: &str) -> OptionScope {
    raw.parse::<i64>()
        .map(OptionScope::Product)
        .unwrap_or(OptionScope::Universal)
}

/// In-place edit buffer for one option value.
#[derive(Clone, PartialEq)]
struct SettingEdit {
    id: i64,
    category: String,
    value: String,
    scope: OptionScope,
}

#[derive(Clone, Copy, PartialEq)]
enum Tab {
    Config,
    Staff,
}

/// Configuration console behind the login: product types, customization
/// categories, option values and the staff directory.
#[component]
#[allow(non_snake_case)]
pub fn AdminPage() -> impl IntoView {
    let catalog = RwSignal::new(Catalog::default());
    let staff_list = RwSignal::new(Vec::<StaffMember>::new());
    let (loading, set_loading) = signal(true);
    let active_tab = RwSignal::new(Tab::Config);

    let selected_product = RwSignal::new(None::<i64>);

    let new_product = RwSignal::new(String::new());
    let new_category = RwSignal::new(String::new());
    let new_setting_category = RwSignal::new("printing_type".to_string());
    let new_setting_scope = RwSignal::new(OptionScope::Universal);
    let new_setting_value = RwSignal::new(String::new());

    let editing_product = RwSignal::new(None::<(i64, String)>);
    let editing_category = RwSignal::new(None::<(i64, String)>);
    let editing_setting = RwSignal::new(None::<SettingEdit>);

    let staff_form = RwSignal::new(StaffDto::default());
    let editing_staff = RwSignal::new(None::<i64>);

    let reload = move || {
        spawn_local(async move {
            match catalog_api::fetch_catalog().await {
                Ok(cat) => catalog.set(cat),
                Err(e) => log::error!("Failed to load catalog: {}", e),
            }
            match staff_api::fetch_staff().await {
                Ok(list) => staff_list.set(list),
                Err(e) => log::error!("Failed to load staff: {}", e),
            }
            set_loading.set(false);
        });
    };

    // Session gate: unauthenticated visits bounce to the login screen.
    {
        let navigate = use_navigate();
        Effect::new(move |_| {
            if storage::is_logged_in() {
                reload();
            } else {
                navigate("/login", Default::default());
            }
        });
    }

    let logout = {
        let navigate = use_navigate();
        move |_| {
            storage::clear_session();
            navigate("/login", Default::default());
        }
    };

    // --- Products ---

    let add_product = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let dto = ProductDto {
            name: new_product.get_untracked().trim().to_string(),
        };
        if dto.name.is_empty() {
            return;
        }
        spawn_local(async move {
            match catalog_api::create_product(&dto).await {
                Ok(()) => {
                    new_product.set(String::new());
                    reload();
                }
                Err(_) => alert("Error adding product (likely duplicate)."),
            }
        });
    };

    let save_product = move |id: i64| {
        let name = editing_product
            .get_untracked()
            .map(|(_, name)| name)
            .unwrap_or_default();
        spawn_local(async move {
            match catalog_api::update_product(id, &ProductDto { name }).await {
                Ok(()) => {
                    editing_product.set(None);
                    reload();
                }
                Err(_) => alert("Error updating product."),
            }
        });
    };

    let delete_product = move |id: i64| {
        if !confirm(
            "Remove this product? This will leave its custom options orphaned (but still viewable).",
        ) {
            return;
        }
        spawn_local(async move {
            match catalog_api::delete_product(id).await {
                Ok(()) => reload(),
                Err(_) => alert("Error deleting product."),
            }
        });
    };

    // --- Categories ---

    let add_category = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let dto = CategoryDto::from_display_name(&new_category.get_untracked());
        if dto.validate().is_err() {
            return;
        }
        spawn_local(async move {
            match catalog_api::create_category(&dto).await {
                Ok(()) => {
                    new_category.set(String::new());
                    reload();
                }
                Err(_) => alert("Error adding category."),
            }
        });
    };

    let save_category = move |id: i64| {
        let Some((_, display_name)) = editing_category.get_untracked() else {
            return;
        };
        let dto = CategoryDto::from_display_name(&display_name);
        spawn_local(async move {
            match catalog_api::update_category(id, &dto).await {
                Ok(()) => {
                    editing_category.set(None);
                    reload();
                }
                Err(_) => alert("Error updating category."),
            }
        });
    };

    let delete_category = move |id: i64, name: String| {
        if !confirm(&format!(
            "Remove category \"{}\"? This will not delete existing options but they may not show up correctly on forms.",
            name
        )) {
            return;
        }
        spawn_local(async move {
            match catalog_api::delete_category(id).await {
                Ok(()) => reload(),
                Err(_) => alert("Error deleting category."),
            }
        });
    };

    // --- Settings ---

    let add_setting = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let dto = SettingDto {
            category: new_setting_category.get_untracked(),
            value: new_setting_value.get_untracked().trim().to_string(),
            scope: new_setting_scope.get_untracked(),
        };
        if dto.validate().is_err() {
            return;
        }
        spawn_local(async move {
            match catalog_api::create_setting(&dto).await {
                Ok(_) => {
                    new_setting_value.set(String::new());
                    reload();
                }
                Err(e) => alert(&format!("Error adding setting: {}", e)),
            }
        });
    };

    let save_setting = move |id: i64| {
        let Some(edit) = editing_setting.get_untracked() else {
            return;
        };
        let dto = SettingDto {
            category: edit.category,
            value: edit.value,
            scope: edit.scope,
        };
        spawn_local(async move {
            match catalog_api::update_setting(id, &dto).await {
                Ok(()) => {
                    editing_setting.set(None);
                    reload();
                }
                Err(_) => alert("Error updating setting."),
            }
        });
    };

    let delete_setting = move |id: i64| {
        if !confirm("Remove this option?") {
            return;
        }
        spawn_local(async move {
            match catalog_api::delete_setting(id).await {
                Ok(()) => reload(),
                Err(_) => alert("Error deleting setting."),
            }
        });
    };

    // Option values narrowed to the selected product, grouped by category in
    // first-seen order.
    let grouped_settings = move || {
        let cat = catalog.get();
        let selected = selected_product.get();
        let mut groups: Vec<(String, Vec<Setting>)> = Vec::new();
        for setting in &cat.settings {
            let visible = match selected {
                Some(pid) => setting.scope.applies_to(Some(pid)),
                None => true,
            };
            if !visible {
                continue;
            }
            match groups.iter_mut().find(|(name, _)| *name == setting.category) {
                Some((_, items)) => items.push(setting.clone()),
                None => groups.push((setting.category.clone(), vec![setting.clone()])),
            }
        }
        groups
    };

    // --- Staff ---

    let submit_staff = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let dto = staff_form.get_untracked();
        if dto.validate().is_err() {
            return;
        }
        let editing = editing_staff.get_untracked();
        spawn_local(async move {
            let result = match editing {
                Some(id) => staff_api::update_staff(id, &dto).await,
                None => staff_api::create_staff(&dto).await,
            };
            match result {
                Ok(()) => {
                    staff_form.set(StaffDto::default());
                    editing_staff.set(None);
                    reload();
                }
                Err(_) => alert("Error saving staff member."),
            }
        });
    };

    let delete_staff = move |id: i64| {
        if !confirm("Remove this staff member?") {
            return;
        }
        spawn_local(async move {
            match staff_api::delete_staff(id).await {
                Ok(()) => reload(),
                Err(_) => alert("Error deleting staff."),
            }
        });
    };

    view! {
        <div class="container">
            <div class="section-title admin-header">
                <h2>"Admin & Configurations"</h2>
                <div class="tab-buttons">
                    <button
                        class=move || {
                            if active_tab.get() == Tab::Config {
                                "btn btn-primary"
                            } else {
                                "btn btn-outline"
                            }
                        }
                        on:click=move |_| active_tab.set(Tab::Config)
                    >
                        {icon("settings")}
                        " Configuration"
                    </button>
                    <button
                        class=move || {
                            if active_tab.get() == Tab::Staff {
                                "btn btn-primary"
                            } else {
                                "btn btn-outline"
                            }
                        }
                        on:click=move |_| active_tab.set(Tab::Staff)
                    >
                        {icon("users")}
                        " Staff"
                    </button>
                    <button class="btn btn-outline btn-danger tab-logout" on:click=logout>
                        "Logout"
                    </button>
                </div>
            </div>

            <Show
                when=move || !loading.get()
                fallback=|| view! { <div class="loading-state">"Loading..."</div> }
            >
                <Show
                    when=move || active_tab.get() == Tab::Config
                    fallback=move || {
                        view! {
                            <div class="row">
                                <div class="col">
                                    <div class="card">
                                        <div class="card-head">
                                            {icon("users")}
                                            <h3>
                                                {move || {
                                                    if editing_staff.get().is_some() {
                                                        "Update Staff Member"
                                                    } else {
                                                        "Add New Staff Member"
                                                    }
                                                }}
                                            </h3>
                                        </div>
                                        <form on:submit=submit_staff>
                                            <div class="form-group">
                                                <label class="form-label">"Full Name *"</label>
                                                <input
                                                    type="text"
                                                    class="form-control"
                                                    placeholder="John Doe"
                                                    required
                                                    prop:value=move || staff_form.read().name.clone()
                                                    on:input=move |ev| {
                                                        staff_form.update(|f| {
                                                            f.name = event_target_value(&ev)
                                                        })
                                                    }
                                                />
                                            </div>
                                            <div class="form-group">
                                                <label class="form-label">"Department"</label>
                                                <input
                                                    type="text"
                                                    class="form-control"
                                                    placeholder="Sales, Design, etc."
                                                    prop:value=move || {
                                                        staff_form.read().department.clone()
                                                    }
                                                    on:input=move |ev| {
                                                        staff_form.update(|f| {
                                                            f.department = event_target_value(&ev)
                                                        })
                                                    }
                                                />
                                            </div>
                                            <div class="row">
                                                <div class="col">
                                                    <label class="form-label">"Phone"</label>
                                                    <input
                                                        type="text"
                                                        class="form-control"
                                                        prop:value=move || {
                                                            staff_form.read().phone.clone()
                                                        }
                                                        on:input=move |ev| {
                                                            staff_form.update(|f| {
                                                                f.phone = event_target_value(&ev)
                                                            })
                                                        }
                                                    />
                                                </div>
                                                <div class="col">
                                                    <label class="form-label">"Email"</label>
                                                    <input
                                                        type="email"
                                                        class="form-control"
                                                        prop:value=move || {
                                                            staff_form.read().email.clone()
                                                        }
                                                        on:input=move |ev| {
                                                            staff_form.update(|f| {
                                                                f.email = event_target_value(&ev)
                                                            })
                                                        }
                                                    />
                                                </div>
                                            </div>
                                            <div class="form-actions">
                                                <button type="submit" class="btn btn-primary">
                                                    {move || {
                                                        if editing_staff.get().is_some() {
                                                            "Update Staff Member"
                                                        } else {
                                                            "Add Staff Member"
                                                        }
                                                    }}
                                                </button>
                                                <Show when=move || editing_staff.get().is_some()>
                                                    <button
                                                        type="button"
                                                        class="btn btn-outline"
                                                        on:click=move |_| {
                                                            editing_staff.set(None);
                                                            staff_form.set(StaffDto::default());
                                                        }
                                                    >
                                                        "Cancel"
                                                    </button>
                                                </Show>
                                            </div>
                                        </form>
                                    </div>
                                </div>

                                <div class="col col-wide">
                                    <div class="card">
                                        <div class="card-head">
                                            {icon("users")}
                                            <h3>"Team Directory"</h3>
                                        </div>
                                        <div class="table-container">
                                            <table>
                                                <thead>
                                                    <tr>
                                                        <th>"Name"</th>
                                                        <th>"Department"</th>
                                                        <th>"Contact"</th>
                                                        <th class="actions-col">"Actions"</th>
                                                    </tr>
                                                </thead>
                                                <tbody>
                                                    <Show
                                                        when=move || !staff_list.read().is_empty()
                                                        fallback=|| {
                                                            view! {
                                                                <tr>
                                                                    <td colspan="4" class="table-empty">
                                                                        "No staff members added yet."
                                                                    </td>
                                                                </tr>
                                                            }
                                                        }
                                                    >
                                                        {move || {
                                                            staff_list
                                                                .get()
                                                                .into_iter()
                                                                .map(|member| {
                                                                    let id = member.id;
                                                                    let edit_member = member.clone();
                                                                    view! {
                                                                        <tr>
                                                                            <td>
                                                                                <strong>{member.name.clone()}</strong>
                                                                            </td>
                                                                            <td>
                                                                                {if member.department.is_empty() {
                                                                                    "-".to_string()
                                                                                } else {
                                                                                    member.department.clone()
                                                                                }}
                                                                            </td>
                                                                            <td class="contact-cell">
                                                                                <div>{member.phone.clone()}</div>
                                                                                <div class="muted">{member.email.clone()}</div>
                                                                            </td>
                                                                            <td class="actions-col">
                                                                                <button
                                                                                    class="btn btn-outline btn-small"
                                                                                    on:click=move |_| {
                                                                                        editing_staff.set(Some(id));
                                                                                        staff_form.set(StaffDto::from(&edit_member));
                                                                                    }
                                                                                >
                                                                                    {icon("edit")}
                                                                                </button>
                                                                                <button
                                                                                    class="btn btn-outline btn-small btn-danger"
                                                                                    on:click=move |_| delete_staff(id)
                                                                                >
                                                                                    {icon("trash")}
                                                                                </button>
                                                                            </td>
                                                                        </tr>
                                                                    }
                                                                })
                                                                .collect_view()
                                                        }}
                                                    </Show>
                                                </tbody>
                                            </table>
                                        </div>
                                    </div>
                                </div>
                            </div>
                        }
                    }
                >
                    <div class="row admin-config">
                        <div class="col">
                            <div class="card">
                                <div class="card-head">
                                    {icon("settings")}
                                    <h3>"Product Types"</h3>
                                </div>

                                <form class="inline-form" on:submit=add_product>
                                    <input
                                        type="text"
                                        class="form-control"
                                        placeholder="New Product"
                                        required
                                        prop:value=move || new_product.get()
                                        on:input=move |ev| {
                                            new_product.set(event_target_value(&ev))
                                        }
                                    />
                                    <button type="submit" class="btn btn-primary">
                                        {icon("plus")}
                                    </button>
                                </form>

                                <div class="list-group">
                                    <div
                                        class=move || {
                                            if selected_product.get().is_none() {
                                                "list-row selectable selected"
                                            } else {
                                                "list-row selectable"
                                            }
                                        }
                                        on:click=move |_| {
                                            selected_product.set(None);
                                            new_setting_scope.set(OptionScope::Universal);
                                        }
                                    >
                                        <strong>"All Customizations"</strong>
                                    </div>
                                    <div class="list-group-label">"Filter by Product"</div>
                                    {move || {
                                        catalog
                                            .get()
                                            .products
                                            .into_iter()
                                            .map(|product| {
                                                let id = product.id;
                                                let name = product.name.clone();
                                                let editing = editing_product
                                                    .get()
                                                    .filter(|(eid, _)| *eid == id);
                                                let row_class = if selected_product.get()
                                                    == Some(id)
                                                {
                                                    "list-row selectable selected"
                                                } else {
                                                    "list-row selectable"
                                                };
                                                match editing {
                                                    Some((_, draft)) => {
                                                        view! {
                                                            <div class="list-row">
                                                                <input
                                                                    class="form-control"
                                                                    prop:value=draft
                                                                    on:input=move |ev| {
                                                                        editing_product.set(
                                                                            Some((id, event_target_value(&ev))),
                                                                        )
                                                                    }
                                                                />
                                                                <button
                                                                    class="btn btn-primary btn-small"
                                                                    on:click=move |_| save_product(id)
                                                                >
                                                                    "Save"
                                                                </button>
                                                                <button
                                                                    class="btn btn-outline btn-small"
                                                                    on:click=move |_| editing_product.set(None)
                                                                >
                                                                    "Cancel"
                                                                </button>
                                                            </div>
                                                        }
                                                            .into_any()
                                                    }
                                                    None => {
                                                        let edit_name = name.clone();
                                                        view! {
                                                            <div
                                                                class=row_class
                                                                on:click=move |_| {
                                                                    selected_product.set(Some(id));
                                                                    new_setting_scope.set(OptionScope::Product(id));
                                                                }
                                                            >
                                                                <span>{name.clone()}</span>
                                                                <div class="list-row-actions">
                                                                    <button
                                                                        class="btn btn-outline btn-small"
                                                                        on:click=move |ev: leptos::ev::MouseEvent| {
                                                                            ev.stop_propagation();
                                                                            editing_product.set(Some((id, edit_name.clone())));
                                                                        }
                                                                    >
                                                                        {icon("edit")}
                                                                    </button>
                                                                    <button
                                                                        class="btn btn-outline btn-small btn-danger"
                                                                        on:click=move |ev: leptos::ev::MouseEvent| {
                                                                            ev.stop_propagation();
                                                                            delete_product(id);
                                                                        }
                                                                    >
                                                                        {icon("trash")}
                                                                    </button>
                                                                </div>
                                                            </div>
                                                        }
                                                            .into_any()
                                                    }
                                                }
                                            })
                                            .collect_view()
                                    }}
                                </div>
                            </div>

                            <div class="card">
                                <div class="card-head">
                                    {icon("settings")}
                                    <h3>"Customization Categories"</h3>
                                </div>

                                <form class="inline-form" on:submit=add_category>
                                    <input
                                        type="text"
                                        class="form-control"
                                        placeholder="New Category (e.g. Packing)"
                                        required
                                        prop:value=move || new_category.get()
                                        on:input=move |ev| {
                                            new_category.set(event_target_value(&ev))
                                        }
                                    />
                                    <button type="submit" class="btn btn-primary">
                                        {icon("plus")}
                                    </button>
                                </form>

                                <div class="list-group">
                                    {move || {
                                        catalog
                                            .get()
                                            .categories
                                            .into_iter()
                                            .map(|cat| {
                                                let id = cat.id;
                                                let editing = editing_category
                                                    .get()
                                                    .filter(|(eid, _)| *eid == id);
                                                match editing {
                                                    Some((_, draft)) => {
                                                        view! {
                                                            <div class="list-row">
                                                                <input
                                                                    class="form-control"
                                                                    prop:value=draft
                                                                    on:input=move |ev| {
                                                                        editing_category.set(
                                                                            Some((id, event_target_value(&ev))),
                                                                        )
                                                                    }
                                                                />
                                                                <button
                                                                    class="btn btn-primary btn-small"
                                                                    on:click=move |_| save_category(id)
                                                                >
                                                                    "Save"
                                                                </button>
                                                                <button
                                                                    class="btn btn-outline btn-small"
                                                                    on:click=move |_| editing_category.set(None)
                                                                >
                                                                    "Cancel"
                                                                </button>
                                                            </div>
                                                        }
                                                            .into_any()
                                                    }
                                                    None => {
                                                        let display = cat.display_name.clone();
                                                        let machine = cat.name.clone();
                                                        let del_name = cat.name.clone();
                                                        view! {
                                                            <div class="list-row">
                                                                <div class="list-row-main">
                                                                    <span class="list-row-title">{display.clone()}</span>
                                                                    <span class="list-row-sub">"ID: " {machine}</span>
                                                                </div>
                                                                <div class="list-row-actions">
                                                                    <button
                                                                        class="btn btn-outline btn-small"
                                                                        on:click=move |_| {
                                                                            editing_category.set(Some((id, display.clone())))
                                                                        }
                                                                    >
                                                                        {icon("edit")}
                                                                    </button>
                                                                    <button
                                                                        class="btn btn-outline btn-small btn-danger"
                                                                        on:click=move |_| delete_category(id, del_name.clone())
                                                                    >
                                                                        {icon("trash")}
                                                                    </button>
                                                                </div>
                                                            </div>
                                                        }
                                                            .into_any()
                                                    }
                                                }
                                            })
                                            .collect_view()
                                    }}
                                </div>
                            </div>
                        </div>

                        <div class="col col-wide">
                            <div class="card">
                                <div class="card-head">
                                    {icon("settings")}
                                    <div>
                                        <h3>"Customizations & Options"</h3>
                                        {move || match selected_product.get() {
                                            Some(pid) => view! {
                                                <span class="card-head-sub accent">
                                                    "Showing options for: "
                                                    {catalog.read().scope_label(
                                                        OptionScope::Product(pid),
                                                    )}
                                                </span>
                                            }
                                                .into_any(),
                                            None => view! {
                                                <span class="card-head-sub">
                                                    "Showing all universal and product-specific options"
                                                </span>
                                            }
                                                .into_any(),
                                        }}
                                    </div>
                                </div>

                                <form class="inline-form" on:submit=add_setting>
                                    <select
                                        class="form-control"
                                        prop:value=move || new_setting_category.get()
                                        on:change=move |ev| {
                                            new_setting_category.set(event_target_value(&ev))
                                        }
                                    >
                                        {move || {
                                            let current = new_setting_category.get();
                                            catalog
                                                .get()
                                                .categories
                                                .into_iter()
                                                .map(|c| {
                                                    let selected = c.name == current;
                                                    view! {
                                                        <option value=c.name.clone() selected=selected>
                                                            {c.display_name}
                                                        </option>
                                                    }
                                                })
                                                .collect_view()
                                        }}
                                    </select>
                                    <select
                                        class="form-control"
                                        on:change=move |ev| {
                                            new_setting_scope.set(
                                                parse_scope(&event_target_value(&ev)),
                                            )
                                        }
                                    >
                                        <option
                                            value=""
                                            selected=move || {
                                                new_setting_scope.get() == OptionScope::Universal
                                            }
                                        >
                                            "Apply to All"
                                        </option>
                                        {move || {
                                            let current = new_setting_scope.get();
                                            catalog
                                                .get()
                                                .products
                                                .into_iter()
                                                .map(|p| {
                                                    let selected =
                                                        current == OptionScope::Product(p.id);
                                                    view! {
                                                        <option
                                                            value=p.id.to_string()
                                                            selected=selected
                                                        >
                                                            {p.name}
                                                        </option>
                                                    }
                                                })
                                                .collect_view()
                                        }}
                                    </select>
                                    <input
                                        type="text"
                                        class="form-control"
                                        placeholder="Option Value"
                                        required
                                        prop:value=move || new_setting_value.get()
                                        on:input=move |ev| {
                                            new_setting_value.set(event_target_value(&ev))
                                        }
                                    />
                                    <button type="submit" class="btn btn-primary">
                                        {icon("plus")}
                                        " Add"
                                    </button>
                                </form>

                                <div class="row settings-grid">
                                    {move || {
                                        let cat = catalog.get();
                                        grouped_settings()
                                            .into_iter()
                                            .map(|(category, items)| {
                                                let label = cat.category_label(&category);
                                                let record = cat
                                                    .categories
                                                    .iter()
                                                    .find(|c| c.name == category)
                                                    .cloned();
                                                let cat_for_rows = cat.clone();
                                                view! {
                                                    <div class="col settings-group">
                                                        <div class="settings-group-head">
                                                            <h4>{label}</h4>
                                                            {record
                                                                .map(|rec| {
                                                                    let rec_id = rec.id;
                                                                    let rec_display = rec.display_name.clone();
                                                                    let rec_name = rec.name.clone();
                                                                    view! {
                                                                        <div class="list-row-actions">
                                                                            <button
                                                                                class="btn btn-outline btn-small"
                                                                                title="Edit Category Name"
                                                                                on:click=move |_| {
                                                                                    editing_category.set(
                                                                                        Some((rec_id, rec_display.clone())),
                                                                                    )
                                                                                }
                                                                            >
                                                                                {icon("edit")}
                                                                            </button>
                                                                            <button
                                                                                class="btn btn-outline btn-small btn-danger"
                                                                                title="Delete Category"
                                                                                on:click=move |_| {
                                                                                    delete_category(rec_id, rec_name.clone())
                                                                                }
                                                                            >
                                                                                {icon("trash")}
                                                                            </button>
                                                                        </div>
                                                                    }
                                                                })}
                                                        </div>
                                                        {items
                                                            .into_iter()
                                                            .map(|setting| {
                                                                let sid = setting.id;
                                                                let editing = editing_setting
                                                                    .get()
                                                                    .filter(|e| e.id == sid);
                                                                match editing {
                                                                    Some(edit) => {
                                                                        let scope_now = edit.scope;
                                                                        view! {
                                                                            <div class="list-row editing">
                                                                                <input
                                                                                    class="form-control"
                                                                                    prop:value=edit.value.clone()
                                                                                    on:input=move |ev| {
                                                                                        editing_setting.update(|e| {
                                                                                            if let Some(e) = e {
                                                                                                e.value = event_target_value(&ev);
                                                                                            }
                                                                                        })
                                                                                    }
                                                                                />
                                                                                <select
                                                                                    class="form-control"
                                                                                    on:change=move |ev| {
                                                                                        let scope = parse_scope(&event_target_value(&ev));
                                                                                        editing_setting.update(|e| {
                                                                                            if let Some(e) = e {
                                                                                                e.scope = scope;
                                                                                            }
                                                                                        })
                                                                                    }
                                                                                >
                                                                                    <option
                                                                                        value=""
                                                                                        selected={scope_now == OptionScope::Universal}
                                                                                    >
                                                                                        "Universal"
                                                                                    </option>
                                                                                    {catalog
                                                                                        .read()
                                                                                        .products
                                                                                        .iter()
                                                                                        .map(|p| {
                                                                                            let selected = scope_now == OptionScope::Product(p.id);
                                                                                            view! {
                                                                                                <option
                                                                                                    value=p.id.to_string()
                                                                                                    selected=selected
                                                                                                >
                                                                                                    {p.name.clone()}
                                                                                                </option>
                                                                                            }
                                                                                        })
                                                                                        .collect_view()}
                                                                                </select>
                                                                                <button
                                                                                    class="btn btn-primary btn-small"
                                                                                    on:click=move |_| save_setting(sid)
                                                                                >
                                                                                    "Save"
                                                                                </button>
                                                                                <button
                                                                                    class="btn btn-outline btn-small"
                                                                                    on:click=move |_| editing_setting.set(None)
                                                                                >
                                                                                    "Cancel"
                                                                                </button>
                                                                            </div>
                                                                        }
                                                                            .into_any()
                                                                    }
                                                                    None => {
                                                                        let scope = setting.scope;
                                                                        let scope_class = match scope {
                                                                            OptionScope::Universal => "list-row-sub",
                                                                            OptionScope::Product(_) => "list-row-sub accent",
                                                                        };
                                                                        let edit_setting = setting.clone();
                                                                        view! {
                                                                            <div class="list-row">
                                                                                <div class="list-row-main">
                                                                                    <span class="list-row-title">
                                                                                        {setting.value.clone()}
                                                                                    </span>
                                                                                    <span class=scope_class>
                                                                                        {cat_for_rows.scope_label(scope)}
                                                                                    </span>
                                                                                </div>
                                                                                <div class="list-row-actions">
                                                                                    <button
                                                                                        class="btn btn-outline btn-small"
                                                                                        on:click=move |_| {
                                                                                            editing_setting.set(Some(SettingEdit {
                                                                                                id: sid,
                                                                                                category: edit_setting.category.clone(),
                                                                                                value: edit_setting.value.clone(),
                                                                                                scope: edit_setting.scope,
                                                                                            }))
                                                                                        }
                                                                                    >
                                                                                        {icon("edit")}
                                                                                    </button>
                                                                                    <button
                                                                                        class="btn btn-outline btn-small btn-danger"
                                                                                        on:click=move |_| delete_setting(sid)
                                                                                    >
                                                                                        {icon("trash")}
                                                                                    </button>
                                                                                </div>
                                                                            </div>
                                                                        }
                                                                            .into_any()
                                                                    }
                                                                }
                                                            })
                                                            .collect_view()}
                                                    </div>
                                                }
                                            })
                                            .collect_view()
                                    }}
                                </div>
                            </div>
                        </div>
                    </div>
                </Show>
            </Show>
        </div>
    }
}
