use crate::dashboards::analytics::hook::use_analytics;
use crate::shared::components::date_range_picker::DateRangePicker;
use crate::shared::components::stat_card::{StatCard, ValueFormat};
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::number_format::format_money;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use contracts::dashboards::analytics::{AnalyticsData, DateRange};
use contracts::domain::customer::CustomerStatus;
use leptos::prelude::*;
use thaw::*;

/// Analytics dashboard: date-range filtered charts over the cached
/// analytics aggregate.
#[component]
pub fn AnalyticsDashboard() -> impl IntoView {
    let analytics = use_analytics(None, None);

    let date_from = RwSignal::new(String::new());
    let date_to = RwSignal::new(String::new());

    // Both bounds must be set before the range is applied to the query.
    let on_range_change = Callback::new(move |(from, to): (String, String)| {
        date_from.set(from.clone());
        date_to.set(to.clone());
        if !from.is_empty() && !to.is_empty() {
            analytics.update_date_range(DateRange {
                start: from,
                end: to,
            });
        }
    });

    let on_refresh = move |_| analytics.refetch();

    let total_revenue =
        Signal::derive(move || analytics.data.get().map(|d| d.summary.total_revenue));
    let avg_deal_size =
        Signal::derive(move || analytics.data.get().map(|d| d.summary.avg_deal_size));
    let win_rate = Signal::derive(move || analytics.data.get().map(|d| d.summary.win_rate));
    let new_customers = Signal::derive(move || {
        analytics
            .data
            .get()
            .map(|d| d.summary.new_customers_this_period as f64)
    });
    let customers_subtitle = Signal::derive(move || {
        analytics
            .data
            .get()
            .map(|d| format!("of {} total", d.summary.total_customers))
    });

    let last_updated = move || {
        analytics
            .data
            .get()
            .map(|d| format!("Last updated: {}", format_datetime(&d.last_updated)))
    };

    view! {
        <PageFrame page_id="analytics--dashboard" category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <h1 class="page__title">"Analytics"</h1>
                <div class="page__actions">
                    <DateRangePicker
                        date_from=date_from
                        date_to=date_to
                        on_change=on_range_change
                    />
                    <Button
                        appearance=ButtonAppearance::Subtle
                        size=ButtonSize::Small
                        on_click=on_refresh
                        disabled=analytics.is_loading
                    >
                        {icon("refresh")}
                        "Refresh"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || {
                    analytics.error.get().map(|e| {
                        view! { <div class="alert alert--error">{e}</div> }
                    })
                }}

                {move || {
                    if analytics.is_loading.get() && analytics.data.get().is_none() {
                        return view! {
                            <div class="dashboard-section__placeholder">
                                "Loading analytics..."
                            </div>
                        }
                        .into_any();
                    }
                    match analytics.data.get() {
                        None => view! {
                            <div class="dashboard-section__placeholder">"No data"</div>
                        }
                        .into_any(),
                        Some(data) => view! {
                            <div class="stat-card-grid">
                                <StatCard
                                    label="Total Revenue"
                                    icon_name="dollar"
                                    value=total_revenue
                                    format=ValueFormat::Money
                                />
                                <StatCard
                                    label="Avg Deal Size"
                                    icon_name="briefcase"
                                    value=avg_deal_size
                                    format=ValueFormat::Money
                                />
                                <StatCard
                                    label="Win Rate"
                                    icon_name="chart"
                                    value=win_rate
                                    format=ValueFormat::Percent
                                />
                                <StatCard
                                    label="New Customers"
                                    icon_name="customers"
                                    value=new_customers
                                    format=ValueFormat::Integer
                                    subtitle=customers_subtitle
                                />
                            </div>

                            <div class="dashboard-grid">
                                <RevenueChart data=data.clone() />
                                <PipelineChart data=data.clone() />
                                <StatusDistribution data=data.clone() />
                                <ActivityChart data=data.clone() />
                            </div>

                            <div class="page__footnote">{last_updated()}</div>
                        }
                        .into_any(),
                    }
                }}
            </div>
        </PageFrame>
    }
}

/// Revenue vs. target, one bar pair per month.
#[component]
fn RevenueChart(data: AnalyticsData) -> impl IntoView {
    let max = data
        .revenue_by_month
        .iter()
        .flat_map(|m| [m.revenue, m.target])
        .fold(0.0_f64, f64::max)
        .max(1.0);

    let columns = data
        .revenue_by_month
        .iter()
        .map(|m| {
            let revenue_pct = (m.revenue / max) * 100.0;
            let target_pct = (m.target / max) * 100.0;
            let title = format!(
                "{}: {} (target {})",
                m.month,
                format_money(m.revenue),
                format_money(m.target)
            );
            view! {
                <div class="bar-chart__column" title=title>
                    <div class="bar-chart__bars">
                        <div
                            class="bar-chart__bar bar-chart__bar--revenue"
                            style:height=format!("{:.1}%", revenue_pct)
                        ></div>
                        <div
                            class="bar-chart__bar bar-chart__bar--target"
                            style:height=format!("{:.1}%", target_pct)
                        ></div>
                    </div>
                    <span class="bar-chart__tick">{m.month.clone()}</span>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="dashboard-section">
            <h2 class="dashboard-section__title">"Revenue vs Target"</h2>
            <div class="bar-chart">{columns}</div>
        </div>
    }
}

const PIPELINE_W: f64 = 600.0;
const PIPELINE_H: f64 = 200.0;

fn polyline_points(values: &[(usize, f64)], count: usize, max: f64) -> String {
    let step = if count > 1 {
        PIPELINE_W / (count - 1) as f64
    } else {
        0.0
    };
    values
        .iter()
        .map(|(i, v)| {
            let x = *i as f64 * step;
            let y = PIPELINE_H - (v / max) * PIPELINE_H;
            format!("{:.1},{:.1}", x, y)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Total pipeline value and won value over time, as SVG polylines.
#[component]
fn PipelineChart(data: AnalyticsData) -> impl IntoView {
    let history = data.pipeline_history;
    let max = history
        .iter()
        .flat_map(|p| [p.value, p.won_value])
        .fold(0.0_f64, f64::max)
        .max(1.0);
    let count = history.len();

    let value_points: Vec<(usize, f64)> =
        history.iter().enumerate().map(|(i, p)| (i, p.value)).collect();
    let won_points: Vec<(usize, f64)> = history
        .iter()
        .enumerate()
        .map(|(i, p)| (i, p.won_value))
        .collect();

    view! {
        <div class="dashboard-section">
            <h2 class="dashboard-section__title">"Pipeline History"</h2>
            <svg
                class="line-chart"
                viewBox=format!("0 0 {} {}", PIPELINE_W, PIPELINE_H)
                preserveAspectRatio="none"
            >
                <polyline
                    class="line-chart__series line-chart__series--total"
                    fill="none"
                    stroke="#3B82F6"
                    stroke-width="2"
                    points=polyline_points(&value_points, count, max)
                />
                <polyline
                    class="line-chart__series line-chart__series--won"
                    fill="none"
                    stroke="#10B981"
                    stroke-width="2"
                    points=polyline_points(&won_points, count, max)
                />
            </svg>
        </div>
    }
}

/// Customer status breakdown, largest bucket first.
#[component]
fn StatusDistribution(data: AnalyticsData) -> impl IntoView {
    let mut buckets: Vec<(String, u32)> = data.status_distribution.into_iter().collect();
    buckets.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    let max = buckets.iter().map(|(_, n)| *n).max().unwrap_or(0).max(1);

    let rows = buckets
        .into_iter()
        .map(|(status, count)| {
            let width = (count as f64 / max as f64) * 100.0;
            let badge = CustomerStatus::from_str(&status)
                .map(|s| s.badge_class())
                .unwrap_or("badge");
            view! {
                <div class="stage-chart__row">
                    <span class=format!("stage-chart__label {}", badge)>{status}</span>
                    <div class="stage-chart__track">
                        <div
                            class="stage-chart__bar"
                            style:width=format!("{:.1}%", width)
                        ></div>
                    </div>
                    <span class="stage-chart__count">{count}</span>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="dashboard-section">
            <h2 class="dashboard-section__title">"Customers by Status"</h2>
            <div class="stage-chart">{rows}</div>
        </div>
    }
}

/// Weekly activity counters.
#[component]
fn ActivityChart(data: AnalyticsData) -> impl IntoView {
    let rows = data
        .activity_by_week
        .iter()
        .map(|w| {
            view! {
                <tr>
                    <td class="activity-table__week">{w.week.clone()}</td>
                    <td>{w.calls}</td>
                    <td>{w.emails}</td>
                    <td>{w.meetings}</td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <div class="dashboard-section">
            <h2 class="dashboard-section__title">"Activity by Week"</h2>
            <table class="activity-table">
                <thead>
                    <tr>
                        <th>"Week"</th>
                        <th>"Calls"</th>
                        <th>"Emails"</th>
                        <th>"Meetings"</th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </div>
    }
}
