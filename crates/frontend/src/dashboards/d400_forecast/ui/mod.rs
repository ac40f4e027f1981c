pub mod dashboard;
pub mod orders_table;
pub mod prediction_chart;

pub use dashboard::ForecastDashboard;
