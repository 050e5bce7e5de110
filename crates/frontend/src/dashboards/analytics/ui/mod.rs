mod dashboard;

pub use dashboard::AnalyticsDashboard;
