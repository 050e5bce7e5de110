//! Debounced copy of a reactive value.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Returns a signal that follows `value` only after it has stayed unchanged
/// for `delay_ms`. Every new input value restarts the timer; a pending
/// update is dropped when superseded or when the owner is disposed.
pub fn use_debounce<T>(value: Signal<T>, delay_ms: u32) -> Signal<T>
where
    T: Clone + PartialEq + Send + Sync + 'static,
{
    let debounced = RwSignal::new(value.get_untracked());
    let timer_id = StoredValue::new(0u64);

    Effect::new(move |_| {
        let next = value.get();
        let id = timer_id
            .try_update_value(|t| {
                *t += 1;
                *t
            })
            .unwrap_or(0);
        spawn_local(async move {
            TimeoutFuture::new(delay_ms).await;
            // A newer value restarted the timer, or the owner was disposed.
            if timer_id.try_get_value() != Some(id) {
                return;
            }
            if debounced.try_get_untracked() != Some(next.clone()) {
                debounced.try_set(next);
            }
        });
    });

    on_cleanup(move || {
        timer_id.try_update_value(|t| *t += 1);
    });

    debounced.into()
}
