use crate::domain::customers::api;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use contracts::domain::customer::CustomerFormData;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;
use leptos_router::hooks::{use_navigate, use_params_map};
use leptos_router::NavigateOptions;

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Create/edit form for a single customer. Route `/customers/new` renders
/// an empty form; `/customers/:id/edit` prefills from the backend.
#[component]
pub fn CustomerFormPage() -> impl IntoView {
    let navigate = use_navigate();
    let params = use_params_map();
    let customer_id =
        Memo::new(move |_| params.with(|p| p.get("id").and_then(|s| s.parse::<i64>().ok())));

    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let company = RwSignal::new(String::new());
    let address = RwSignal::new(String::new());
    let city = RwSignal::new(String::new());
    let country = RwSignal::new(String::new());
    let notes = RwSignal::new(String::new());

    let (loading, set_loading) = signal(false);
    let (saving, set_saving) = signal(false);
    let (error, set_error) = signal(None::<String>);

    Effect::new(move |_| {
        let Some(id) = customer_id.get() else {
            return;
        };
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_customer(id).await {
                Ok(customer) => {
                    first_name.try_set(customer.first_name);
                    last_name.try_set(customer.last_name);
                    email.try_set(customer.email);
                    phone.try_set(customer.phone);
                    company.try_set(customer.company);
                    address.try_set(customer.address.unwrap_or_default());
                    city.try_set(customer.city.unwrap_or_default());
                    country.try_set(customer.country.unwrap_or_default());
                    notes.try_set(customer.notes.unwrap_or_default());
                    set_error.try_set(None);
                }
                Err(e) => {
                    set_error.try_set(Some(e));
                }
            }
            set_loading.try_set(false);
        });
    });

    let go_back = {
        let navigate = navigate.clone();
        move || navigate("/customers", NavigateOptions::default())
    };

    let handle_submit = {
        let go_back = go_back.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();

            let first = first_name.get_untracked().trim().to_string();
            let last = last_name.get_untracked().trim().to_string();
            let mail = email.get_untracked().trim().to_string();
            if first.is_empty() || last.is_empty() || mail.is_empty() {
                set_error.set(Some(
                    "First name, last name and email are required".to_string(),
                ));
                return;
            }
            if !mail.contains('@') {
                set_error.set(Some("Email address is not valid".to_string()));
                return;
            }

            let form = CustomerFormData {
                first_name: first,
                last_name: last,
                email: mail,
                phone: phone.get_untracked().trim().to_string(),
                company: company.get_untracked().trim().to_string(),
                address: optional(&address.get_untracked()),
                city: optional(&city.get_untracked()),
                country: optional(&country.get_untracked()),
                notes: optional(&notes.get_untracked()),
            };

            let id = customer_id.get_untracked();
            let go_back = go_back.clone();
            set_saving.set(true);
            set_error.set(None);
            spawn_local(async move {
                let result = match id {
                    Some(id) => api::update_customer(id, form).await,
                    None => api::create_customer(form).await,
                };
                match result {
                    Ok(_) => go_back(),
                    Err(e) => {
                        set_error.try_set(Some(e));
                        set_saving.try_set(false);
                    }
                }
            });
        }
    };

    let handle_cancel = {
        let go_back = go_back.clone();
        move |_| go_back()
    };

    let title = move || {
        if customer_id.get().is_some() {
            "Edit Customer"
        } else {
            "New Customer"
        }
    };

    let text_field = move |label: &'static str, value: RwSignal<String>, required: bool| {
        view! {
            <div class="form__field">
                <label class="form__label">
                    {label}
                    {required.then(|| view! { <span class="form__required">"*"</span> })}
                </label>
                <input
                    type="text"
                    class="form__input"
                    prop:value=value
                    on:input=move |ev| value.set(event_target_value(&ev))
                />
            </div>
        }
    };

    view! {
        <PageFrame page_id="customers--detail" category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <h1 class="page__title">{title}</h1>
            </div>

            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            {move || {
                if loading.get() {
                    return view! {
                        <div class="dashboard-section__placeholder">"Loading customer..."</div>
                    }
                    .into_any();
                }
                view! {
                    <form class="form" on:submit=handle_submit.clone()>
                        <div class="form__row">
                            {text_field("First Name", first_name, true)}
                            {text_field("Last Name", last_name, true)}
                        </div>
                        <div class="form__row">
                            {text_field("Email", email, true)}
                            {text_field("Phone", phone, false)}
                        </div>
                        <div class="form__row">
                            {text_field("Company", company, false)}
                            {text_field("Address", address, false)}
                        </div>
                        <div class="form__row">
                            {text_field("City", city, false)}
                            {text_field("Country", country, false)}
                        </div>
                        <div class="form__field">
                            <label class="form__label">"Notes"</label>
                            <textarea
                                class="form__textarea"
                                prop:value=notes
                                on:input=move |ev| notes.set(event_target_value(&ev))
                            ></textarea>
                        </div>

                        <div class="form__actions">
                            <button
                                type="submit"
                                class="button button--primary"
                                disabled=saving
                            >
                                {move || if saving.get() { "Saving..." } else { "Save" }}
                            </button>
                            <button
                                type="button"
                                class="button button--secondary"
                                on:click=handle_cancel.clone()
                            >
                                "Cancel"
                            </button>
                        </div>
                    </form>
                }
                .into_any()
            }}
        </PageFrame>
    }
}
