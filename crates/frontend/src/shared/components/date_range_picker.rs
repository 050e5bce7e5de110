use chrono::{Datelike, Duration, NaiveDate, Utc};
use leptos::prelude::*;
use thaw::*;

fn month_bounds(year: i32, month: u32) -> Option<(NaiveDate, NaiveDate)> {
    let start = NaiveDate::from_ymd_opt(year, month, 1)?;
    let end = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)? - Duration::days(1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)? - Duration::days(1)
    };
    Some((start, end))
}

/// DateRangePicker - two date inputs plus quick-select buttons for the
/// previous and current month. Emits `(from, to)` in `yyyy-mm-dd`.
#[component]
pub fn DateRangePicker(
    /// "from" date in yyyy-mm-dd format
    #[prop(into)]
    date_from: Signal<String>,

    /// "to" date in yyyy-mm-dd format
    #[prop(into)]
    date_to: Signal<String>,

    /// Callback when the range changes (from, to)
    on_change: Callback<(String, String)>,

    /// Optional label for the component
    #[prop(optional)]
    label: Option<String>,
) -> impl IntoView {
    let on_from_change = move |new_from: String| {
        let current_to = date_to.get_untracked();
        on_change.run((new_from, current_to));
    };

    let on_to_change = move |new_to: String| {
        let current_from = date_from.get_untracked();
        on_change.run((current_from, new_to));
    };

    let emit_month = move |year: i32, month: u32| {
        if let Some((start, end)) = month_bounds(year, month) {
            on_change.run((
                start.format("%Y-%m-%d").to_string(),
                end.format("%Y-%m-%d").to_string(),
            ));
        }
    };

    let on_current_month = move |_| {
        let now = Utc::now().date_naive();
        emit_month(now.year(), now.month());
    };

    // Steps back one month from the currently selected "from" date.
    let on_previous_month = move |_| {
        let current_from = date_from.get_untracked();
        if let Ok(current_date) = NaiveDate::parse_from_str(&current_from, "%Y-%m-%d") {
            let (year, month) = if current_date.month() == 1 {
                (current_date.year() - 1, 12)
            } else {
                (current_date.year(), current_date.month() - 1)
            };
            emit_month(year, month);
        }
    };

    view! {
        <Flex vertical=true gap=FlexGap::Small>
            {label.map(|l| view! {
                <Label>{l}</Label>
            })}

            <Flex class="date-range-picker" align=FlexAlign::Center gap=FlexGap::Small>
                <input
                    type="date"
                    prop:value=date_from
                    on:input=move |ev| {
                        on_from_change(event_target_value(&ev));
                    }
                />

                <div>"-"</div>

                <input
                    type="date"
                    prop:value=date_to
                    on:input=move |ev| {
                        on_to_change(event_target_value(&ev));
                    }
                />

                <ButtonGroup>
                    <Button
                        size=ButtonSize::Small
                        appearance=ButtonAppearance::Subtle
                        on_click=on_previous_month
                    >
                        "-1M"
                    </Button>
                    <Button
                        size=ButtonSize::Small
                        appearance=ButtonAppearance::Subtle
                        on_click=on_current_month
                    >
                        "0M"
                    </Button>
                </ButtonGroup>
            </Flex>
        </Flex>
    }
}
