//! Generic single-URL fetch hook.
//!
//! Fetches on activation and whenever the URL signal changes. No caching,
//! no deduplication, no cancellation: a retriggered request simply
//! overwrites the pending state.

use gloo_net::http::Request;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::de::DeserializeOwned;

pub struct UseFetch<T: Send + Sync + 'static> {
    pub data: ReadSignal<Option<T>>,
    pub loading: ReadSignal<bool>,
    pub error: ReadSignal<Option<String>>,
    refetch: Callback<()>,
}

impl<T: Send + Sync + 'static> Clone for UseFetch<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for UseFetch<T> {}

impl<T: Send + Sync + 'static> UseFetch<T> {
    /// Repeat the request for the current URL.
    pub fn refetch(&self) {
        self.refetch.run(());
    }
}

async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T, String> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub fn use_fetch<T>(url: Signal<String>) -> UseFetch<T>
where
    T: DeserializeOwned + Send + Sync + 'static,
{
    let (data, set_data) = signal(None::<T>);
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);

    let load = move |target: String| {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match fetch_json::<T>(&target).await {
                Ok(value) => {
                    set_data.try_set(Some(value));
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
        load(url.get());
    });

    let refetch = Callback::new(move |_| load(url.get_untracked()));

    UseFetch {
        data,
        loading,
        error,
        refetch,
    }
}
