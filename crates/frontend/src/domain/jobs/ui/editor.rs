use contracts::catalog::{is_core_category, Catalog, OptionScope, Setting, SettingDto};
use contracts::clients::Client;
use contracts::jobs::{LineItemDraft, OrderForm, DELIVERY_MODES, PRIORITIES};
use contracts::staff::StaffMember;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::domain::catalog::api as catalog_api;
use crate::domain::clients::api as clients_api;
use crate::domain::jobs::api;
use crate::domain::staff::api as staff_api;
use crate::shared::icons::icon;

fn alert(message: &str) {
    if let Some(win) = web_sys::window() {
        let _ = win.alert_with_message(message);
    }
}

fn prompt(message: &str) -> Option<String> {
    web_sys::window()?
        .prompt_with_message(message)
        .ok()
        .flatten()
        .filter(|value| !value.is_empty())
}

/// Create and edit form for a job order. Mounted with an `:id` route param
/// it loads that job; without one it starts with a single blank item.
#[component]
#[allow(non_snake_case)]
pub fn JobEditor() -> impl IntoView {
    let params = use_params_map();
    let job_id = move || {
        params
            .read()
            .get("id")
            .and_then(|raw| raw.parse::<i64>().ok())
    };
    let is_edit = job_id().is_some();

    let form = RwSignal::new(OrderForm::default());
    let catalog = RwSignal::new(Catalog::default());
    let clients = RwSignal::new(Vec::<Client>::new());
    let staff = RwSignal::new(Vec::<StaffMember>::new());
    let (loading, set_loading) = signal(true);
    let (saving, set_saving) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    // Initial load: catalog, clients and staff together, then the job when
    // editing.
    {
        let id = job_id();
        spawn_local(async move {
            let loaded: Result<(), String> = async {
                let cat = catalog_api::fetch_catalog().await?;
                clients.set(clients_api::fetch_clients().await?);
                staff.set(staff_api::fetch_staff().await?);
                match id {
                    Some(id) => {
                        let job = api::fetch_job(id).await?;
                        form.set(OrderForm::from_job(&cat, &job));
                    }
                    None => form.set(OrderForm::new(&cat)),
                }
                catalog.set(cat);
                Ok(())
            }
            .await;
            if let Err(e) = loaded {
                set_error.set(Some(format!("Failed to load form data: {}", e)));
            }
            set_loading.set(false);
        });
    }

    let item_index = move |id: u64| {
        form.read_untracked()
            .items
            .iter()
            .position(|item| item.draft_id == id)
    };

    let item_field = move |id: u64, getter: fn(&LineItemDraft) -> String| {
        form.read()
            .items
            .iter()
            .find(|item| item.draft_id == id)
            .map(getter)
            .unwrap_or_default()
    };

    let item_options = move |id: u64, category: &str| -> Vec<String> {
        let form = form.read();
        form.items
            .iter()
            .position(|item| item.draft_id == id)
            .and_then(|ix| form.options.get(ix))
            .and_then(|options| options.get(category).cloned())
            .unwrap_or_default()
    };

    let set_field = move |id: u64, name: &str, value: String| {
        let Some(ix) = item_index(id) else { return };
        let cat = catalog.get_untracked();
        form.update(|f| f.set_item_field(&cat, ix, name, &value));
    };

    let toggle_accessory = move |id: u64, value: String, checked: bool| {
        let Some(ix) = item_index(id) else { return };
        form.update(|f| f.toggle_accessory(ix, &value, checked));
    };

    let add_item = move |_| {
        let cat = catalog.get_untracked();
        form.update(|f| f.add_item(&cat));
    };

    let remove_item = move |id: u64| {
        let Some(ix) = item_index(id) else { return };
        form.update(|f| f.remove_item(ix));
    };

    // Adds a new option value for the item's product from inside the form:
    // prompt for the value, create the setting, then fold it back into the
    // catalog and select it.
    let quick_add = move |id: u64, category: String| {
        let cat = catalog.get_untracked();
        let Some(ix) = item_index(id) else { return };
        let product_id = match form.read_untracked().quick_add_target(&cat, ix) {
            Ok(pid) => pid,
            Err(msg) => {
                alert(&msg);
                return;
            }
        };
        let product_name = cat
            .product_by_id(product_id)
            .map(|p| p.name.clone())
            .unwrap_or_default();
        let Some(value) = prompt(&format!(
            "Enter new {} for {}:",
            category.replace('_', " "),
            product_name
        )) else {
            return;
        };
        spawn_local(async move {
            let dto = SettingDto {
                category: category.clone(),
                value: value.clone(),
                scope: OptionScope::Product(product_id),
            };
            match catalog_api::create_setting(&dto).await {
                Ok(new_id) => {
                    let setting = Setting {
                        id: new_id,
                        category,
                        value,
                        scope: OptionScope::Product(product_id),
                    };
                    let mut cat = catalog.get_untracked();
                    if let Some(ix) = item_index(id) {
                        form.update(|f| f.apply_quick_add(&mut cat, ix, setting));
                        catalog.set(cat);
                    }
                }
                Err(e) => {
                    log::error!("Quick add failed: {}", e);
                    alert("Failed to add option.");
                }
            }
        });
    };

    let handle_client_select = move |ev: leptos::ev::Event| {
        let raw = event_target_value(&ev);
        let picked = raw
            .parse::<i64>()
            .ok()
            .and_then(|id| clients.read().iter().find(|c| c.id == id).cloned());
        form.update(|f| f.select_client(picked.as_ref()));
    };

    let navigate = use_navigate();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let payload = form.get_untracked();
        if let Err(e) = payload.validate() {
            set_error.set(Some(e));
            return;
        }
        let id = job_id();
        let navigate = navigate.clone();
        set_saving.set(true);
        spawn_local(async move {
            let result = match id {
                Some(id) => api::update_job(id, &payload).await,
                None => api::create_job(&payload).await,
            };
            set_saving.set(false);
            match result {
                Ok(()) => {
                    if id.is_some() {
                        alert("Job Order Updated Successfully!");
                    } else {
                        alert("Job Order Submitted Successfully!");
                    }
                    navigate("/", Default::default());
                }
                Err(e) => set_error.set(Some(format!("Failed to save job order: {}", e))),
            }
        });
    };

    view! {
        <div class="container">
            <div class="section-title">
                <h2>{if is_edit { "Edit Job Order" } else { "New Job Order" }}</h2>
            </div>

            <Show when=move || error.get().is_some()>
                <div class="error-message">{move || error.get().unwrap_or_default()}</div>
            </Show>

            <Show
                when=move || !loading.get()
                fallback=|| view! { <p>"Loading..."</p> }
            >
                <form on:submit=on_submit.clone()>
                    <div class="card form-group">
                        <h3 class="form-section-title">"Staff Information"</h3>
                        <div class="row">
                            <div class="col">
                                <label class="form-label">
                                    "Submitted By (Staff Member) *"
                                </label>
                                <select
                                    class="form-control"
                                    required
                                    prop:value=move || form.read().header.submitted_by.clone()
                                    on:change=move |ev| {
                                        form.update(|f| {
                                            f.header.submitted_by = event_target_value(&ev)
                                        })
                                    }
                                >
                                    <option value="">"-- Select Staff Member --"</option>
                                    {move || {
                                        let current = form.read().header.submitted_by.clone();
                                        staff
                                            .get()
                                            .into_iter()
                                            .map(|s| {
                                                let selected = s.name == current;
                                                let value = s.name.clone();
                                                view! {
                                                    <option value=value selected=selected>
                                                        {s.name}
                                                    </option>
                                                }
                                            })
                                            .collect_view()
                                    }}
                                </select>
                            </div>
                        </div>
                    </div>

                    <div class="card form-group">
                        <h3 class="form-section-title">"Client Details"</h3>
                        <div class="row">
                            <div class="col">
                                <label class="form-label">"Existing Client"</label>
                                <select class="form-control" on:change=handle_client_select>
                                    <option value="">"-- Walk-in / New Client --"</option>
                                    {move || {
                                        let current = form.read().header.client_id.clone();
                                        clients
                                            .get()
                                            .into_iter()
                                            .map(|c| {
                                                let id = c.id.to_string();
                                                let selected = id == current;
                                                view! {
                                                    <option value=id selected=selected>
                                                        {c.name}
                                                    </option>
                                                }
                                            })
                                            .collect_view()
                                    }}
                                </select>
                            </div>
                            <div class="col">
                                <label class="form-label">"Client Name *"</label>
                                <input
                                    type="text"
                                    class="form-control"
                                    required
                                    prop:value=move || form.read().header.client_name.clone()
                                    on:input=move |ev| {
                                        form.update(|f| {
                                            f.header.client_name = event_target_value(&ev)
                                        })
                                    }
                                />
                            </div>
                            <div class="col">
                                <label class="form-label">"Phone"</label>
                                <input
                                    type="tel"
                                    class="form-control"
                                    prop:value=move || form.read().header.client_phone.clone()
                                    on:input=move |ev| {
                                        form.update(|f| {
                                            f.header.client_phone = event_target_value(&ev)
                                        })
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
                                    prop:value=move || form.read().header.client_email.clone()
                                    on:input=move |ev| {
                                        form.update(|f| {
                                            f.header.client_email = event_target_value(&ev)
                                        })
                                    }
                                />
                            </div>
                            <div class="col">
                                <label class="form-label">"Company"</label>
                                <input
                                    type="text"
                                    class="form-control"
                                    prop:value=move || form.read().header.client_company.clone()
                                    on:input=move |ev| {
                                        form.update(|f| {
                                            f.header.client_company = event_target_value(&ev)
                                        })
                                    }
                                />
                            </div>
                            <div class="col">
                                <label class="form-label">"Address"</label>
                                <input
                                    type="text"
                                    class="form-control"
                                    prop:value=move || form.read().header.client_address.clone()
                                    on:input=move |ev| {
                                        form.update(|f| {
                                            f.header.client_address = event_target_value(&ev)
                                        })
                                    }
                                />
                            </div>
                        </div>
                    </div>

                    <div class="card form-group">
                        <h3 class="form-section-title">"Product Items"</h3>
                        <For
                            each=move || {
                                form.read().items.iter().map(|i| i.draft_id).collect::<Vec<_>>()
                            }
                            key=|id| *id
                            children=move |id| {
                                let quick_select = move |label: &'static str,
                                                         category: &'static str,
                                                         placeholder: Option<&'static str>,
                                                         getter: fn(&LineItemDraft) -> String| {
                                    view! {
                                        <Show when=move || !item_options(id, category).is_empty()>
                                            <div class="col">
                                                <label class="form-label">{label}</label>
                                                <div class="select-with-add">
                                                    <select
                                                        class="form-control"
                                                        prop:value=move || item_field(id, getter)
                                                        on:change=move |ev| set_field(
                                                            id,
                                                            category,
                                                            event_target_value(&ev),
                                                        )
                                                    >
                                                        {placeholder
                                                            .map(|p| {
                                                                view! { <option value="">{p}</option> }
                                                            })}
                                                        {move || {
                                                            let current = item_field(id, getter);
                                                            item_options(id, category)
                                                                .into_iter()
                                                                .map(|v| {
                                                                    let selected = v == current;
                                                                    let value = v.clone();
                                                                    view! {
                                                                        <option
                                                                            value=value
                                                                            selected=selected
                                                                        >
                                                                            {v}
                                                                        </option>
                                                                    }
                                                                })
                                                                .collect_view()
                                                        }}
                                                    </select>
                                                    <button
                                                        type="button"
                                                        class="btn btn-outline"
                                                        on:click=move |_| quick_add(
                                                            id,
                                                            category.to_string(),
                                                        )
                                                    >
                                                        "+"
                                                    </button>
                                                </div>
                                            </div>
                                        </Show>
                                    }
                                };

                                view! {
                                    <div class="item-card">
                                        <div class="item-card-actions">
                                            <button
                                                type="button"
                                                class="btn btn-outline btn-danger"
                                                title="Remove Item"
                                                on:click=move |_| remove_item(id)
                                            >
                                                {icon("trash")}
                                            </button>
                                        </div>

                                        <div class="row">
                                            <div class="col">
                                                <label class="form-label">"Product Type"</label>
                                                <select
                                                    class="form-control"
                                                    prop:value=move || {
                                                        item_field(id, |i| i.product_type.clone())
                                                    }
                                                    on:change=move |ev| set_field(
                                                        id,
                                                        "product_type",
                                                        event_target_value(&ev),
                                                    )
                                                >
                                                    {move || {
                                                        let current = item_field(
                                                            id,
                                                            |i| i.product_type.clone(),
                                                        );
                                                        catalog
                                                            .read()
                                                            .products
                                                            .iter()
                                                            .map(|p| {
                                                                let selected = p.name == current;
                                                                view! {
                                                                    <option
                                                                        value=p.name.clone()
                                                                        selected=selected
                                                                    >
                                                                        {p.name.clone()}
                                                                    </option>
                                                                }
                                                            })
                                                            .collect_view()
                                                    }}
                                                </select>
                                            </div>
                                            {quick_select(
                                                "Size",
                                                "card_size",
                                                None,
                                                |i| i.card_size.clone(),
                                            )}
                                            <div class="col">
                                                <label class="form-label">"Quantity *"</label>
                                                <input
                                                    type="number"
                                                    class="form-control"
                                                    required
                                                    min="1"
                                                    prop:value=move || {
                                                        item_field(id, |i| i.quantity.clone())
                                                    }
                                                    on:input=move |ev| set_field(
                                                        id,
                                                        "quantity",
                                                        event_target_value(&ev),
                                                    )
                                                />
                                            </div>
                                            <div class="col">
                                                <label class="form-label">"Rate per Piece"</label>
                                                <input
                                                    type="number"
                                                    class="form-control"
                                                    placeholder="0.00"
                                                    prop:value=move || {
                                                        item_field(id, |i| i.rate.clone())
                                                    }
                                                    on:input=move |ev| set_field(
                                                        id,
                                                        "rate",
                                                        event_target_value(&ev),
                                                    )
                                                />
                                            </div>
                                            <div class="col">
                                                <label class="form-label">"Advance Amount"</label>
                                                <input
                                                    type="number"
                                                    class="form-control"
                                                    placeholder="0.00"
                                                    prop:value=move || {
                                                        item_field(id, |i| i.advance_amount.clone())
                                                    }
                                                    on:input=move |ev| set_field(
                                                        id,
                                                        "advance_amount",
                                                        event_target_value(&ev),
                                                    )
                                                />
                                            </div>
                                        </div>

                                        <div class="row">
                                            {quick_select(
                                                "Material",
                                                "material",
                                                None,
                                                |i| i.material.clone(),
                                            )}
                                            {quick_select(
                                                "Printing Type",
                                                "printing_type",
                                                None,
                                                |i| i.printing_type.clone(),
                                            )}
                                            {quick_select(
                                                "Printing Mode",
                                                "printing_mode",
                                                None,
                                                |i| i.printing_mode.clone(),
                                            )}
                                            {quick_select(
                                                "Finish",
                                                "finish",
                                                None,
                                                |i| i.finish.clone(),
                                            )}
                                        </div>

                                        <div class="row">
                                            {quick_select(
                                                "Binding",
                                                "binding",
                                                Some("-- Select Binding --"),
                                                |i| i.binding.clone(),
                                            )}
                                            {quick_select(
                                                "Corner",
                                                "corner",
                                                Some("-- Select Corner --"),
                                                |i| i.corner.clone(),
                                            )}
                                            {quick_select(
                                                "Paper Thickness",
                                                "paper_thickness",
                                                Some("-- Select Thickness --"),
                                                |i| i.paper_thickness.clone(),
                                            )}
                                        </div>

                                        <Show when=move || {
                                            !item_options(id, "accessories").is_empty()
                                        }>
                                            <div class="form-group">
                                                <label class="form-label">"Accessories"</label>
                                                <div class="checkbox-group">
                                                    {move || {
                                                        let checked_now = form
                                                            .read()
                                                            .items
                                                            .iter()
                                                            .find(|i| i.draft_id == id)
                                                            .map(|i| i.accessories.clone())
                                                            .unwrap_or_default();
                                                        item_options(id, "accessories")
                                                            .into_iter()
                                                            .map(|acc| {
                                                                let checked = checked_now
                                                                    .contains(&acc);
                                                                let acc_for_toggle = acc.clone();
                                                                view! {
                                                                    <label class="checkbox-item">
                                                                        <input
                                                                            type="checkbox"
                                                                            prop:checked=checked
                                                                            on:change=move |ev| {
                                                                                toggle_accessory(
                                                                                    id,
                                                                                    acc_for_toggle.clone(),
                                                                                    event_target_checked(&ev),
                                                                                )
                                                                            }
                                                                        />
                                                                        {acc}
                                                                    </label>
                                                                }
                                                            })
                                                            .collect_view()
                                                    }}
                                                </div>
                                            </div>
                                        </Show>

                                        {move || {
                                            let custom_cats: Vec<_> = catalog
                                                .read()
                                                .categories
                                                .iter()
                                                .filter(|c| {
                                                    !is_core_category(&c.name)
                                                        && !item_options(id, &c.name).is_empty()
                                                })
                                                .cloned()
                                                .collect();
                                            if custom_cats.is_empty() {
                                                return ().into_any();
                                            }
                                            view! {
                                                <div class="custom-fields">
                                                    <div class="row">
                                                        {custom_cats
                                                            .into_iter()
                                                            .map(|cat| {
                                                                let name = cat.name.clone();
                                                                let field_name = cat.name.clone();
                                                                let quick_name = cat.name.clone();
                                                                let value_name = cat.name.clone();
                                                                view! {
                                                                    <div class="col">
                                                                        <div class="custom-field-head">
                                                                            <label class="form-label">
                                                                                {cat.display_name.clone()}
                                                                            </label>
                                                                            <button
                                                                                type="button"
                                                                                class="btn btn-outline btn-small"
                                                                                on:click=move |_| quick_add(
                                                                                    id,
                                                                                    quick_name.clone(),
                                                                                )
                                                                            >
                                                                                "+ Add"
                                                                            </button>
                                                                        </div>
                                                                        <select
                                                                            class="form-control"
                                                                            on:change=move |ev| set_field(
                                                                                id,
                                                                                &field_name,
                                                                                event_target_value(&ev),
                                                                            )
                                                                        >
                                                                            <option value="">"-- None --"</option>
                                                                            {
                                                                                let current = form
                                                                                    .read()
                                                                                    .items
                                                                                    .iter()
                                                                                    .find(|i| i.draft_id == id)
                                                                                    .and_then(|i| {
                                                                                        i.custom_fields.get(&value_name).cloned()
                                                                                    })
                                                                                    .unwrap_or_default();
                                                                                item_options(id, &name)
                                                                                    .into_iter()
                                                                                    .map(|v| {
                                                                                        let selected = v == current;
                                                                                        let value = v.clone();
                                                                                        view! {
                                                                                            <option value=value selected=selected>
                                                                                                {v}
                                                                                            </option>
                                                                                        }
                                                                                    })
                                                                                    .collect_view()
                                                                            }
                                                                        </select>
                                                                    </div>
                                                                }
                                                            })
                                                            .collect::<Vec<_>>()}
                                                    </div>
                                                </div>
                                            }
                                                .into_any()
                                        }}

                                        <div class="row">
                                            <div class="col">
                                                <label class="form-label">"Variable Data"</label>
                                                <input
                                                    type="text"
                                                    class="form-control"
                                                    placeholder="Names list, numbering, etc."
                                                    prop:value=move || {
                                                        item_field(id, |i| i.variable_data.clone())
                                                    }
                                                    on:input=move |ev| set_field(
                                                        id,
                                                        "variable_data",
                                                        event_target_value(&ev),
                                                    )
                                                />
                                            </div>
                                        </div>

                                        <div class="row">
                                            <div class="col">
                                                <label class="form-label">
                                                    "Additional Information"
                                                </label>
                                                <textarea
                                                    class="form-control"
                                                    rows="2"
                                                    placeholder="Any specific instructions for this product item..."
                                                    prop:value=move || {
                                                        item_field(
                                                            id,
                                                            |i| i.additional_info.clone(),
                                                        )
                                                    }
                                                    on:input=move |ev| set_field(
                                                        id,
                                                        "additional_info",
                                                        event_target_value(&ev),
                                                    )
                                                ></textarea>
                                            </div>
                                        </div>
                                    </div>
                                }
                            }
                        />

                        <button type="button" class="btn btn-outline" on:click=add_item>
                            {icon("plus")}
                            " Add Another Item"
                        </button>
                    </div>

                    <div class="card form-group">
                        <h3 class="form-section-title">"Production & Delivery"</h3>
                        <div class="form-group">
                            <label class="form-label">"Special Instructions"</label>
                            <textarea
                                class="form-control"
                                rows="3"
                                prop:value=move || {
                                    form.read().header.special_instructions.clone()
                                }
                                on:input=move |ev| {
                                    form.update(|f| {
                                        f.header.special_instructions = event_target_value(&ev)
                                    })
                                }
                            ></textarea>
                        </div>
                        <div class="row">
                            <div class="col">
                                <label class="form-label">"Expected Delivery Date"</label>
                                <input
                                    type="date"
                                    class="form-control"
                                    prop:value=move || {
                                        form.read().header.expected_delivery_date.clone()
                                    }
                                    on:input=move |ev| {
                                        form.update(|f| {
                                            f.header.expected_delivery_date =
                                                event_target_value(&ev)
                                        })
                                    }
                                />
                            </div>
                            <div class="col">
                                <label class="form-label">"Priority"</label>
                                <select
                                    class="form-control"
                                    prop:value=move || form.read().header.priority.clone()
                                    on:change=move |ev| {
                                        form.update(|f| {
                                            f.header.priority = event_target_value(&ev)
                                        })
                                    }
                                >
                                    {move || {
                                        let current = form.read().header.priority.clone();
                                        PRIORITIES
                                            .iter()
                                            .map(|p| {
                                                view! {
                                                    <option
                                                        value=*p
                                                        selected={*p == current}
                                                    >
                                                        {*p}
                                                    </option>
                                                }
                                            })
                                            .collect_view()
                                    }}
                                </select>
                            </div>
                            <div class="col">
                                <label class="form-label">"Delivery Mode"</label>
                                <select
                                    class="form-control"
                                    prop:value=move || form.read().header.delivery_mode.clone()
                                    on:change=move |ev| {
                                        form.update(|f| {
                                            f.header.delivery_mode = event_target_value(&ev)
                                        })
                                    }
                                >
                                    {move || {
                                        let current = form.read().header.delivery_mode.clone();
                                        DELIVERY_MODES
                                            .iter()
                                            .map(|m| {
                                                view! {
                                                    <option
                                                        value=*m
                                                        selected={*m == current}
                                                    >
                                                        {*m}
                                                    </option>
                                                }
                                            })
                                            .collect_view()
                                    }}
                                </select>
                            </div>
                        </div>
                    </div>

                    <div class="form-actions">
                        <button
                            type="submit"
                            class="btn btn-primary"
                            disabled=move || saving.get()
                        >
                            {icon("save")}
                            {move || {
                                if saving.get() {
                                    " Submitting..."
                                } else if is_edit {
                                    " Update Job Order"
                                } else {
                                    " Submit Job Order"
                                }
                            }}
                        </button>
                    </div>
                </form>
            </Show>
        </div>
    }
}
