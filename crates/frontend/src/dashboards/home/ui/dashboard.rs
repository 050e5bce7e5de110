use crate::shared::api_utils::api_url;
use crate::shared::components::stat_card::{StatCard, ValueFormat};
use crate::shared::hooks::use_fetch;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use contracts::dashboards::analytics::DashboardStats;
use contracts::domain::deal::DealStage;
use leptos::prelude::*;
use std::collections::HashMap;
use thaw::*;

/// Home dashboard: headline stat cards plus the deals-by-stage chart.
#[component]
pub fn HomeDashboard() -> impl IntoView {
    let stats = use_fetch::<DashboardStats>(Signal::derive(|| api_url("/api/dashboard/stats")));

    let total_customers =
        Signal::derive(move || stats.data.get().map(|s| s.total_customers as f64));
    let active_deals = Signal::derive(move || stats.data.get().map(|s| s.total_deals as f64));
    let total_revenue = Signal::derive(move || stats.data.get().map(|s| s.total_revenue));
    let conversion_rate = Signal::derive(move || stats.data.get().map(|s| s.conversion_rate));

    let active_customers_subtitle = Signal::derive(move || {
        stats
            .data
            .get()
            .map(|s| format!("{} active", s.active_customers))
    });
    let won_deals_subtitle = Signal::derive(move || {
        stats.data.get().map(|s| format!("{} won", s.won_deals))
    });

    let on_refresh = move |_| stats.refetch();

    view! {
        <PageFrame page_id="home--dashboard" category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <h1 class="page__title">"Dashboard"</h1>
                <div class="page__actions">
                    <Button
                        appearance=ButtonAppearance::Subtle
                        size=ButtonSize::Small
                        on_click=on_refresh
                    >
                        {icon("refresh")}
                        "Refresh"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || {
                    stats.error.get().map(|e| {
                        view! {
                            <div class="alert alert--error">
                                {format!("Failed to load dashboard: {}", e)}
                            </div>
                        }
                    })
                }}

                <div class="stat-card-grid">
                    <StatCard
                        label="Total Customers"
                        icon_name="customers"
                        value=total_customers
                        format=ValueFormat::Integer
                        subtitle=active_customers_subtitle
                    />
                    <StatCard
                        label="Active Deals"
                        icon_name="briefcase"
                        value=active_deals
                        format=ValueFormat::Integer
                        subtitle=won_deals_subtitle
                    />
                    <StatCard
                        label="Revenue"
                        icon_name="dollar"
                        value=total_revenue
                        format=ValueFormat::Money
                    />
                    <StatCard
                        label="Conversion Rate"
                        icon_name="chart"
                        value=conversion_rate
                        format=ValueFormat::Percent
                    />
                </div>

                <DealsByStageChart />
            </div>
        </PageFrame>
    }
}

/// Horizontal bar chart of open pipeline volume per stage.
/// LOST deals are closed-out and stay off the chart.
#[component]
fn DealsByStageChart() -> impl IntoView {
    let by_stage = use_fetch::<HashMap<String, u32>>(Signal::derive(|| {
        api_url("/api/dashboard/deals-by-stage")
    }));

    let bars = move || {
        let counts = by_stage.data.get().unwrap_or_default();
        let items: Vec<(DealStage, u32)> = DealStage::ORDER
            .iter()
            .copied()
            .filter(|stage| *stage != DealStage::Lost)
            .map(|stage| (stage, counts.get(stage.as_str()).copied().unwrap_or(0)))
            .collect();
        let max = items.iter().map(|(_, n)| *n).max().unwrap_or(0).max(1);

        items
            .into_iter()
            .map(|(stage, count)| {
                let width = (count as f64 / max as f64) * 100.0;
                view! {
                    <div class="stage-chart__row">
                        <span class="stage-chart__label">{stage.as_str()}</span>
                        <div class="stage-chart__track">
                            <div
                                class="stage-chart__bar"
                                style:width=format!("{:.1}%", width)
                                style:background-color=stage.color()
                            ></div>
                        </div>
                        <span class="stage-chart__count">{count}</span>
                    </div>
                }
            })
            .collect_view()
    };

    view! {
        <div class="dashboard-section">
            <h2 class="dashboard-section__title">"Deals by Stage"</h2>
            {move || {
                if by_stage.loading.get() && by_stage.data.get().is_none() {
                    view! { <div class="dashboard-section__placeholder">"Loading..."</div> }
                        .into_any()
                } else if let Some(e) = by_stage.error.get() {
                    view! {
                        <div class="alert alert--error">
                            {format!("Failed to load pipeline: {}", e)}
                        </div>
                    }
                    .into_any()
                } else {
                    view! { <div class="stage-chart">{bars()}</div> }.into_any()
                }
            }}
        </div>
    }
}
