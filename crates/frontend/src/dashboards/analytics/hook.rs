//! `use_analytics` — analytics data hook with TTL caching and cancellation.
//!
//! Owns a per-instance cache and at most one in-flight request. Lifecycle:
//! fetch on activation and on every date-range change; serve fresh cache
//! entries synchronously; abort the outstanding request when superseded or
//! when the owner is disposed. A superseded response can never overwrite
//! state once a newer request has started (generation counter), and no
//! state is written after disposal (`try_*` access).

use super::api;
use super::cache::{cache_key, AnalyticsCache, DEFAULT_CACHE_TTL_MS};
use contracts::dashboards::analytics::{AnalyticsData, DateRange};
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::AbortController;

/// Decides whether a finishing request may still apply its result.
/// `begin` hands out monotonically increasing request ids; only the
/// holder of the newest id wins, so a response that raced against a
/// newer request (or arrived after `supersede`) writes nothing.
#[derive(Debug, Default)]
pub struct RequestGuard {
    current: u64,
}

impl RequestGuard {
    /// Register a new request, invalidating every earlier one.
    pub fn begin(&mut self) -> u64 {
        self.current += 1;
        self.current
    }

    pub fn is_current(&self, id: u64) -> bool {
        self.current == id
    }

    /// Invalidate all outstanding requests without starting a new one.
    pub fn supersede(&mut self) {
        self.current += 1;
    }
}

#[derive(Clone, Copy)]
pub struct UseAnalytics {
    pub data: ReadSignal<Option<AnalyticsData>>,
    pub is_loading: ReadSignal<bool>,
    pub error: ReadSignal<Option<String>>,
    refetch: Callback<()>,
    update_range: Callback<DateRange>,
}

impl UseAnalytics {
    /// Drop the cache entry for the current range and fetch again.
    /// Always performs a network call.
    pub fn refetch(&self) {
        self.refetch.run(());
    }

    /// Replace the active date range; triggers the fetch effect.
    pub fn update_date_range(&self, range: DateRange) {
        self.update_range.run(range);
    }
}

pub fn use_analytics(
    initial_range: Option<DateRange>,
    cache_ttl_ms: Option<f64>,
) -> UseAnalytics {
    let (data, set_data) = signal(None::<AnalyticsData>);
    let (is_loading, set_is_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);
    let (date_range, set_date_range) = signal(initial_range);

    let cache = StoredValue::new(AnalyticsCache::new(
        cache_ttl_ms.unwrap_or(DEFAULT_CACHE_TTL_MS),
    ));
    // Monotonic id of the newest request; stale responses compare against it.
    let generation = StoredValue::new(RequestGuard::default());
    // AbortController is not Send, keep it in the local arena.
    let inflight = StoredValue::new_local(None::<AbortController>);

    let run_fetch = move |range: Option<DateRange>, bypass_cache: bool| {
        let key = cache_key(range.as_ref());
        let now = js_sys::Date::now();

        if bypass_cache {
            cache.update_value(|c| c.invalidate(&key));
        } else if let Some(hit) = cache.try_update_value(|c| c.lookup(&key, now)).flatten() {
            set_data.set(Some(hit));
            set_error.set(None);
            set_is_loading.set(false);
            return;
        }

        // At most one outstanding request per hook instance.
        inflight.update_value(|slot| {
            if let Some(ctrl) = slot.take() {
                ctrl.abort();
            }
        });

        let gen = generation.try_update_value(|g| g.begin()).unwrap_or(0);
        let controller = AbortController::new().ok();
        let abort_signal = controller.as_ref().map(|c| c.signal());
        inflight.set_value(controller);

        set_is_loading.set(true);
        set_error.set(None);

        spawn_local(async move {
            let result = api::fetch_analytics(range.as_ref(), abort_signal.as_ref()).await;

            // Owner disposed, or a newer request started: discard silently.
            if generation.try_with_value(|g| g.is_current(gen)) != Some(true) {
                return;
            }
            inflight.set_value(None);

            match result {
                Ok(fresh) => {
                    cache.update_value(|c| c.store(key, fresh.clone(), js_sys::Date::now()));
                    set_data.set(Some(fresh));
                    set_error.set(None);
                }
                Err(err) if err.is_aborted() => {}
                Err(err) => {
                    log::error!("Analytics fetch error: {}", err);
                    set_error.set(Some(err.to_string()));
                }
            }
            set_is_loading.set(false);
        });
    };

    // Fetch on activation and whenever the date range changes.
    Effect::new(move |_| {
        run_fetch(date_range.get(), false);
    });

    on_cleanup(move || {
        // Invalidates any response still in flight.
        generation.try_update_value(|g| g.supersede());
        inflight.try_update_value(|slot| {
            if let Some(ctrl) = slot.take() {
                ctrl.abort();
            }
        });
    });

    let refetch = Callback::new(move |_| run_fetch(date_range.get_untracked(), true));
    let update_range = Callback::new(move |range: DateRange| set_date_range.set(Some(range)));

    UseAnalytics {
        data,
        is_loading,
        error,
        refetch,
        update_range,
    }
}

#[cfg(test)]
mod tests {
    use super::RequestGuard;

    #[test]
    fn sole_request_is_current() {
        let mut guard = RequestGuard::default();
        let id = guard.begin();
        assert!(guard.is_current(id));
    }

    #[test]
    fn newer_request_invalidates_older_one() {
        let mut guard = RequestGuard::default();
        let first = guard.begin();
        let second = guard.begin();

        // The slower first response must not be applied.
        assert!(!guard.is_current(first));
        assert!(guard.is_current(second));
    }

    #[test]
    fn supersede_invalidates_the_in_flight_request() {
        let mut guard = RequestGuard::default();
        let id = guard.begin();
        guard.supersede();

        assert!(!guard.is_current(id));
    }

    #[test]
    fn ids_stay_monotonic_across_supersede() {
        let mut guard = RequestGuard::default();
        let first = guard.begin();
        guard.supersede();
        let next = guard.begin();

        assert!(next > first);
        assert!(guard.is_current(next));
        assert!(!guard.is_current(first));
    }
}
