mod dashboard;

pub use dashboard::StockSummaryDashboard;
