pub mod ui;

pub use ui::StockSummaryDashboard;
