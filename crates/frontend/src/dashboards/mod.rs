pub mod d400_forecast;

pub use d400_forecast::ui::ForecastDashboard;
