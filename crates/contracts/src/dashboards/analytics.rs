use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ---------------------------------------------------------------------------
// Analytics aggregate
// ---------------------------------------------------------------------------

/// Revenue vs. target for one month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueByMonth {
    pub month: String,
    pub revenue: f64,
    pub target: f64,
}

/// Pipeline value snapshot for one date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelinePoint {
    pub date: String,
    pub value: f64,
    pub won_value: f64,
}

/// Activity counters for one week.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityByWeek {
    pub week: String,
    pub calls: u32,
    pub emails: u32,
    pub meetings: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSummary {
    pub total_revenue: f64,
    pub avg_deal_size: f64,
    pub win_rate: f64,
    pub total_customers: u64,
    pub new_customers_this_period: u64,
}

/// Read-only analytics aggregate returned by `GET /api/analytics`.
/// Replaced wholesale on every successful fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsData {
    pub revenue_by_month: Vec<RevenueByMonth>,
    pub pipeline_history: Vec<PipelinePoint>,
    pub status_distribution: HashMap<String, u32>,
    pub activity_by_week: Vec<ActivityByWeek>,
    pub summary: AnalyticsSummary,
    pub last_updated: String,
}

/// Inclusive date range filter, `YYYY-MM-DD` on both ends.
/// Also identifies the cache partition for analytics queries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: String,
    pub end: String,
}

// ---------------------------------------------------------------------------
// Dashboard stats
// ---------------------------------------------------------------------------

/// Headline numbers for the home dashboard (`GET /api/dashboard/stats`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_customers: u64,
    pub active_customers: u64,
    pub total_deals: u64,
    pub won_deals: u64,
    pub total_revenue: f64,
    pub conversion_rate: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analytics_data_parses_backend_shape() {
        let json = r#"{
            "revenueByMonth": [{"month": "2024-01", "revenue": 1000.0, "target": 1200.0}],
            "pipelineHistory": [{"date": "2024-01-31", "value": 5000.0, "wonValue": 900.0}],
            "statusDistribution": {"ACTIVE": 12, "LEAD": 4},
            "activityByWeek": [{"week": "2024-W04", "calls": 3, "emails": 10, "meetings": 1}],
            "summary": {
                "totalRevenue": 1000.0,
                "avgDealSize": 250.0,
                "winRate": 0.4,
                "totalCustomers": 16,
                "newCustomersThisPeriod": 2
            },
            "lastUpdated": "2024-02-01T00:00:00Z"
        }"#;
        let data: AnalyticsData = serde_json::from_str(json).unwrap();
        assert_eq!(data.revenue_by_month.len(), 1);
        assert_eq!(data.pipeline_history[0].won_value, 900.0);
        assert_eq!(data.status_distribution["ACTIVE"], 12);
        assert_eq!(data.summary.total_revenue, 1000.0);
        assert_eq!(data.last_updated, "2024-02-01T00:00:00Z");
    }

    #[test]
    fn dashboard_stats_parses_backend_shape() {
        let json = r#"{
            "totalCustomers": 120,
            "activeCustomers": 80,
            "totalDeals": 45,
            "wonDeals": 18,
            "totalRevenue": 250000.0,
            "conversionRate": 40.0
        }"#;
        let stats: DashboardStats = serde_json::from_str(json).unwrap();
        assert_eq!(stats.won_deals, 18);
        assert_eq!(stats.conversion_rate, 40.0);
    }
}
