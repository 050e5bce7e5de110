use crate::domain::deals::api;
use crate::shared::icons::icon;
use crate::shared::number_format::format_money;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::deal::{Deal, DealStage};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

const BOARD_PAGE_SIZE: u64 = 100;

/// Pipeline board: one column per stage, deals move between neighbouring
/// columns via the card arrows.
#[component]
pub fn DealBoardPage() -> impl IntoView {
    let (deals, set_deals) = signal(Vec::<Deal>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);

    let load = move || {
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_deals(0, BOARD_PAGE_SIZE).await {
                Ok(page) => {
                    set_deals.try_set(page.content);
                    set_error.try_set(None);
                }
                Err(e) => {
                    set_error.try_set(Some(e));
                }
            }
            set_loading.try_set(false);
        });
    };

    load();

    let handle_move = move |id: i64, target: DealStage| {
        spawn_local(async move {
            match api::move_stage(id, target).await {
                Ok(updated) => {
                    set_deals.try_update(|all| {
                        if let Some(deal) = all.iter_mut().find(|d| d.id == id) {
                            *deal = updated;
                        }
                    });
                }
                Err(e) => {
                    set_error.try_set(Some(e));
                }
            }
        });
    };

    let handle_delete = move |id: i64, title: String| {
        let confirmed = web_sys::window()
            .map(|win| {
                win.confirm_with_message(&format!("Delete deal \"{}\"?", title))
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        spawn_local(async move {
            match api::delete_deal(id).await {
                Ok(()) => {
                    set_deals.try_update(|all| all.retain(|d| d.id != id));
                }
                Err(e) => {
                    set_error.try_set(Some(e));
                }
            }
        });
    };

    let columns = move || {
        let all = deals.get();
        DealStage::ORDER
            .iter()
            .copied()
            .map(|stage| {
                let column_deals: Vec<Deal> =
                    all.iter().filter(|d| d.stage == stage).cloned().collect();
                let count = column_deals.len();
                let total: f64 = column_deals.iter().map(|d| d.value).sum();

                view! {
                    <div class="board__column">
                        <div
                            class="board__column-header"
                            style:border-top-color=stage.color()
                        >
                            <span class="board__column-title">{stage.as_str()}</span>
                            <span class="board__column-meta">
                                {format!("{} \u{00b7} {}", count, format_money(total))}
                            </span>
                        </div>
                        <div class="board__cards">
                            {column_deals
                                .into_iter()
                                .map(|deal| {
                                    let id = deal.id;
                                    let title = deal.title.clone();
                                    let title_for_delete = title.clone();
                                    let previous = stage.previous();
                                    let next = stage.next();
                                    view! {
                                        <div class="deal-card">
                                            <div class="deal-card__title">{title}</div>
                                            <div class="deal-card__value">
                                                {format_money(deal.value)}
                                            </div>
                                            <div class="deal-card__customer">
                                                {format!(
                                                    "{} {}",
                                                    deal.customer.first_name,
                                                    deal.customer.last_name,
                                                )}
                                            </div>
                                            <div class="deal-card__assignee">
                                                {deal.assigned_to.clone()}
                                            </div>
                                            <div class="deal-card__actions">
                                                {previous
                                                    .map(|target| {
                                                        view! {
                                                            <button
                                                                class="button button--icon"
                                                                title=format!("Move to {}", target)
                                                                on:click=move |_| handle_move(id, target)
                                                            >
                                                                {icon("chevron-left")}
                                                            </button>
                                                        }
                                                    })}
                                                <button
                                                    class="button button--icon button--danger"
                                                    title="Delete"
                                                    on:click=move |_| handle_delete(
                                                        id,
                                                        title_for_delete.clone(),
                                                    )
                                                >
                                                    {icon("trash")}
                                                </button>
                                                {next
                                                    .map(|target| {
                                                        view! {
                                                            <button
                                                                class="button button--icon"
                                                                title=format!("Move to {}", target)
                                                                on:click=move |_| handle_move(id, target)
                                                            >
                                                                {icon("chevron-right")}
                                                            </button>
                                                        }
                                                    })}
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                }
            })
            .collect_view()
    };

    view! {
        <PageFrame page_id="deals--list" category=PAGE_CAT_LIST class="page--board">
            <div class="page__header">
                <h1 class="page__title">"Deals"</h1>
                <div class="page__actions">
                    <button class="button button--secondary" on:click=move |_| load()>
                        {icon("refresh")}
                        "Refresh"
                    </button>
                </div>
            </div>

            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            {move || {
                if loading.get() && deals.get().is_empty() {
                    view! {
                        <div class="dashboard-section__placeholder">"Loading deals..."</div>
                    }
                    .into_any()
                } else {
                    view! { <div class="board">{columns()}</div> }.into_any()
                }
            }}
        </PageFrame>
    }
}
