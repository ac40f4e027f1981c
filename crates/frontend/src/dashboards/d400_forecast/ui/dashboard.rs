use leptos::prelude::*;
use wasm_bindgen::JsCast;

use super::orders_table::OrdersTable;
use super::prediction_chart::PredictionChart;
use crate::dashboards::d400_forecast::state::{ForecastController, WEEK_SLOTS};

/// Extract the first selected file from a file input change event.
fn selected_file(ev: &web_sys::Event) -> Option<web_sys::File> {
    ev.target()
        .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        .and_then(|input| input.files())
        .and_then(|files| files.get(0))
}

/// Forecast dashboard: upload form, inline error, orders table and
/// prediction chart. All workflow state lives on the controller; this
/// component only projects it.
#[component]
pub fn ForecastDashboard() -> impl IntoView {
    let controller =
        use_context::<ForecastController>().expect("ForecastController context not found");

    // Opportunistic load of previously computed predictions on mount
    Effect::new(move |_| {
        controller.load_predictions();
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        controller.submit();
    };

    let week_inputs = (0..WEEK_SLOTS)
        .map(|index| {
            let input_id = format!("week{}", index + 1);
            view! {
                <div class="file-input-group">
                    <label for=input_id.clone()>
                        {format!("Week {} Inventory CSV", index + 1)}
                    </label>
                    <input
                        id=input_id
                        type="file"
                        accept=".csv"
                        on:change=move |ev| controller.set_week_file(index, selected_file(&ev))
                    />
                    {move || {
                        controller.week_file_name(index).map(|name| {
                            view! {
                                <span class="file-name">{format!("Selected: {}", name)}</span>
                            }
                        })
                    }}
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="forecast-dashboard">
            <header class="forecast-dashboard__header">
                <h1>"Restaurant Inventory Forecast"</h1>
                <p>
                    "Upload 4 weeks of inventory CSVs to generate next week's order recommendations."
                </p>
            </header>

            <main>
                <form class="upload-form" on:submit=on_submit>
                    {week_inputs}

                    <button
                        type="submit"
                        disabled=move || controller.request.get().is_submitting()
                    >
                        {move || {
                            if controller.request.get().is_submitting() {
                                "Running forecast..."
                            } else {
                                "Run Forecast"
                            }
                        }}
                    </button>

                    <div class="file-input-group">
                        <label for="sales_plan">"Sales Plan CSV (optional)"</label>
                        <input
                            id="sales_plan"
                            type="file"
                            accept=".csv"
                            on:change=move |ev| controller.set_sales_plan(selected_file(&ev))
                        />
                        {move || {
                            controller.sales_plan_name().map(|name| {
                                view! {
                                    <span class="file-name">{format!("Selected: {}", name)}</span>
                                }
                            })
                        }}
                        <p class="hint">
                            "Format: Dish,Qty[,Multiplier]. Uses recipes.csv to compute ingredient demand."
                        </p>
                    </div>
                </form>

                {move || {
                    controller
                        .request
                        .with(|r| r.error().map(str::to_string))
                        .map(|message| view! { <div class="error-message">{message}</div> })
                }}

                <OrdersTable />

                <PredictionChart />
            </main>
        </div>
    }
}
