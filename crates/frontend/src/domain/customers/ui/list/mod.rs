pub mod state;

use self::state::{create_state, DEFAULT_PAGE_SIZE};
use crate::domain::customers::api;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::date_utils::format_date_opt;
use crate::shared::hooks::use_debounce;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

/// Customers list with server-side pagination and debounced name search.
/// A non-empty search query switches to the search endpoint (unpaged);
/// clearing it returns to the paged listing.
#[component]
pub fn CustomersListPage() -> impl IntoView {
    let navigate = use_navigate();
    let state = create_state();
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);

    let page = RwSignal::new(0u64);
    let refresh = RwSignal::new(0u64);
    let search_input = RwSignal::new(String::new());
    let debounced_query = use_debounce(search_input.into(), 500);

    // Page index resets when the query text changes, not on refresh.
    let last_query = StoredValue::new(String::new());

    let load = move |query: String, current_page: u64| {
        set_loading.set(true);
        spawn_local(async move {
            let result = if query.trim().is_empty() {
                api::fetch_customers(current_page, DEFAULT_PAGE_SIZE)
                    .await
                    .map(|p| (p.content, p.total_pages, p.total_elements))
            } else {
                api::search_customers(query.trim())
                    .await
                    .map(|items| {
                        let count = items.len() as u64;
                        (items, 1, count)
                    })
            };

            match result {
                Ok((items, total_pages, total_count)) => {
                    state.try_update(|s| {
                        s.items = items;
                        s.total_pages = total_pages;
                        s.total_count = total_count;
                    });
                    set_error.try_set(None);
                }
                Err(e) => {
                    set_error.try_set(Some(e));
                }
            }
            set_loading.try_set(false);
        });
    };

    Effect::new(move |_| {
        let query: String = debounced_query.get();
        let current_page = page.get();
        refresh.get();

        if last_query.try_get_value().as_deref() != Some(query.as_str()) {
            last_query.set_value(query.clone());
            if current_page != 0 {
                // Reruns the effect with page 0.
                page.set(0);
                return;
            }
        }
        load(query, current_page);
    });

    let on_page_change = Callback::new(move |new_page: u64| page.set(new_page));

    let handle_create = {
        let navigate = navigate.clone();
        move |_| navigate("/customers/new", NavigateOptions::default())
    };

    let handle_edit = {
        let navigate = navigate.clone();
        move |id: i64| {
            navigate(
                &format!("/customers/{}/edit", id),
                NavigateOptions::default(),
            )
        }
    };

    let handle_delete = move |id: i64, name: String| {
        let confirmed = web_sys::window()
            .map(|win| {
                win.confirm_with_message(&format!("Delete customer \"{}\"?", name))
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        spawn_local(async move {
            match api::delete_customer(id).await {
                Ok(()) => {
                    refresh.try_update(|n| *n += 1);
                }
                Err(e) => {
                    set_error.try_set(Some(e));
                }
            }
        });
    };

    view! {
        <PageFrame page_id="customers--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <h1 class="page__title">"Customers"</h1>
                <div class="page__actions">
                    <input
                        type="search"
                        class="search-input"
                        placeholder="Search by name..."
                        prop:value=search_input
                        on:input=move |ev| search_input.set(event_target_value(&ev))
                    />
                    <button class="button button--primary" on:click=handle_create>
                        {icon("plus")}
                        "New Customer"
                    </button>
                </div>
            </div>

            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <div class="table-container">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Name"</th>
                            <th class="table__header-cell">"Email"</th>
                            <th class="table__header-cell">"Company"</th>
                            <th class="table__header-cell">"Status"</th>
                            <th class="table__header-cell">"Last Contact"</th>
                            <th class="table__header-cell table__header-cell--actions"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            if loading.get() && state.with(|s| s.items.is_empty()) {
                                return view! {
                                    <tr>
                                        <td class="table__cell table__cell--empty" colspan="6">
                                            "Loading..."
                                        </td>
                                    </tr>
                                }
                                .into_any();
                            }
                            if state.with(|s| s.items.is_empty()) {
                                return view! {
                                    <tr>
                                        <td class="table__cell table__cell--empty" colspan="6">
                                            "No customers found"
                                        </td>
                                    </tr>
                                }
                                .into_any();
                            }
                            state
                                .with(|s| s.items.clone())
                                .into_iter()
                                .map(|customer| {
                                    let id = customer.id;
                                    let name = customer.full_name();
                                    let name_for_delete = name.clone();
                                    let handle_edit = handle_edit.clone();
                                    view! {
                                        <tr class="table__row">
                                            <td class="table__cell">{name}</td>
                                            <td class="table__cell">{customer.email.clone()}</td>
                                            <td class="table__cell">
                                                {if customer.company.is_empty() {
                                                    "-".to_string()
                                                } else {
                                                    customer.company.clone()
                                                }}
                                            </td>
                                            <td class="table__cell">
                                                <span class=customer.status.badge_class()>
                                                    {customer.status.as_str()}
                                                </span>
                                            </td>
                                            <td class="table__cell">
                                                {format_date_opt(&customer.last_contact_date)}
                                            </td>
                                            <td class="table__cell table__cell--actions">
                                                <button
                                                    class="button button--icon"
                                                    title="Edit"
                                                    on:click=move |_| handle_edit(id)
                                                >
                                                    {icon("edit")}
                                                </button>
                                                <button
                                                    class="button button--icon button--danger"
                                                    title="Delete"
                                                    on:click=move |_| handle_delete(
                                                        id,
                                                        name_for_delete.clone(),
                                                    )
                                                >
                                                    {icon("trash")}
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                                .into_any()
                        }}
                    </tbody>
                </table>
            </div>

            <PaginationControls
                current_page=page
                total_pages=Signal::derive(move || state.with(|s| s.total_pages))
                total_count=Signal::derive(move || state.with(|s| s.total_count))
                on_page_change=on_page_change
            />
        </PageFrame>
    }
}
