//! Analytics endpoint client with cooperative cancellation.

use crate::shared::api_utils::api_url;
use contracts::dashboards::analytics::{AnalyticsData, DateRange};
use gloo_net::http::Request;
use web_sys::AbortSignal;

/// Failure taxonomy of one analytics request. `Aborted` is never surfaced
/// to the view layer; everything else renders through `Display`.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalyticsError {
    Aborted,
    Http {
        status: u16,
        status_text: String,
        body: String,
    },
    Network(String),
    Parse(String),
}

impl AnalyticsError {
    pub fn is_aborted(&self) -> bool {
        matches!(self, AnalyticsError::Aborted)
    }
}

impl std::fmt::Display for AnalyticsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnalyticsError::Aborted => write!(f, "request cancelled"),
            AnalyticsError::Http {
                status,
                status_text,
                body,
            } => {
                write!(f, "Failed to fetch analytics: {} {}", status, status_text)?;
                if !body.is_empty() {
                    write!(f, " - {}", body)?;
                }
                Ok(())
            }
            AnalyticsError::Network(msg) => write!(f, "Request failed: {}", msg),
            AnalyticsError::Parse(msg) => write!(f, "Failed to parse response: {}", msg),
        }
    }
}

/// Query string for an optional range; parameters appear only when present.
fn analytics_query(range: Option<&DateRange>) -> String {
    let Some(range) = range else {
        return String::new();
    };
    let mut params: Vec<String> = Vec::new();
    if !range.start.is_empty() {
        params.push(format!("startDate={}", range.start));
    }
    if !range.end.is_empty() {
        params.push(format!("endDate={}", range.end));
    }
    if params.is_empty() {
        String::new()
    } else {
        format!("?{}", params.join("&"))
    }
}

fn classify_send_error(e: gloo_net::Error) -> AnalyticsError {
    match &e {
        gloo_net::Error::JsError(js) if js.name == "AbortError" => AnalyticsError::Aborted,
        _ => AnalyticsError::Network(e.to_string()),
    }
}

/// `GET {api_base}/api/analytics[?startDate=..&endDate=..]`.
///
/// The optional `signal` lets the caller abort the request; an abort
/// resolves to `AnalyticsError::Aborted`.
pub async fn fetch_analytics(
    range: Option<&DateRange>,
    signal: Option<&AbortSignal>,
) -> Result<AnalyticsData, AnalyticsError> {
    let url = format!("{}{}", api_url("/api/analytics"), analytics_query(range));

    let response = Request::get(&url)
        .abort_signal(signal)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(classify_send_error)?;

    if !response.ok() {
        let body = response.text().await.unwrap_or_default();
        return Err(AnalyticsError::Http {
            status: response.status(),
            status_text: response.status_text(),
            body,
        });
    }

    response
        .json::<AnalyticsData>()
        .await
        .map_err(|e| AnalyticsError::Parse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_is_empty_without_range() {
        assert_eq!(analytics_query(None), "");
    }

    #[test]
    fn query_includes_both_bounds() {
        let range = DateRange {
            start: "2024-01-01".into(),
            end: "2024-01-31".into(),
        };
        assert_eq!(
            analytics_query(Some(&range)),
            "?startDate=2024-01-01&endDate=2024-01-31"
        );
    }

    #[test]
    fn query_skips_empty_bounds() {
        let range = DateRange {
            start: "2024-01-01".into(),
            end: String::new(),
        };
        assert_eq!(analytics_query(Some(&range)), "?startDate=2024-01-01");
        let empty = DateRange {
            start: String::new(),
            end: String::new(),
        };
        assert_eq!(analytics_query(Some(&empty)), "");
    }

    #[test]
    fn http_error_message_contains_status_and_body() {
        let err = AnalyticsError::Http {
            status: 500,
            status_text: "Internal Server Error".into(),
            body: "boom".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("500"));
        assert!(msg.contains("boom"));
    }

    #[test]
    fn http_error_message_without_body_has_no_dash() {
        let err = AnalyticsError::Http {
            status: 404,
            status_text: "Not Found".into(),
            body: String::new(),
        };
        assert_eq!(err.to_string(), "Failed to fetch analytics: 404 Not Found");
    }

    #[test]
    fn only_abort_is_silent() {
        assert!(AnalyticsError::Aborted.is_aborted());
        assert!(!AnalyticsError::Network("x".into()).is_aborted());
    }
}
