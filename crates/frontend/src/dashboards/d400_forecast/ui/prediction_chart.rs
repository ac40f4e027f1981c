use contracts::dashboards::d400_forecast::{
    FORECASTED_DEMAND_KEY, ITEM_KEY, PREDICTED_QUANTITY_KEY,
};
use leptos::prelude::*;

use crate::dashboards::d400_forecast::state::ForecastController;
use crate::shared::components::line_chart::{ChartSeries, LineChart};
use crate::shared::components::table::column_title;

const PREDICTED_COLOR: &str = "#8884d8";
const DEMAND_COLOR: &str = "#ef4444";

/// Prediction chart. Pure projection of the prediction series: always
/// plots `Predicted_Quantity` over the `Item` axis, and adds the
/// ingredient-demand series only when at least one row carries a
/// numeric value for it. Presence is decided once for the whole column;
/// individual rows still pass through as-is.
#[component]
pub fn PredictionChart() -> impl IntoView {
    let controller =
        use_context::<ForecastController>().expect("ForecastController context not found");

    move || {
        controller.predictions.with(|predictions| {
            if predictions.is_empty() {
                return None;
            }

            let categories = predictions.labels(ITEM_KEY);
            let mut series = vec![ChartSeries {
                name: column_title(PREDICTED_QUANTITY_KEY),
                color: PREDICTED_COLOR,
                points: predictions.numeric_values(PREDICTED_QUANTITY_KEY),
            }];
            if predictions.has_numeric_column(FORECASTED_DEMAND_KEY) {
                series.push(ChartSeries {
                    name: column_title(FORECASTED_DEMAND_KEY),
                    color: DEMAND_COLOR,
                    points: predictions.numeric_values(FORECASTED_DEMAND_KEY),
                });
            }

            Some(view! {
                <div class="chart-wrapper">
                    <h2>"Predicted Inventory Needs"</h2>
                    <LineChart categories=categories series=series />
                </div>
            })
        })
    }
}
