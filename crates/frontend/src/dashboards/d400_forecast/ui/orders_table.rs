use leptos::prelude::*;

use crate::dashboards::d400_forecast::state::ForecastController;
use crate::shared::components::table::{column_title, format_cell};

/// Order recommendations table. Pure projection of the latest
/// submission result: the column set comes from the keys of the first
/// row, nothing is rendered while the result is empty.
#[component]
pub fn OrdersTable() -> impl IntoView {
    let controller =
        use_context::<ForecastController>().expect("ForecastController context not found");

    move || {
        controller.orders.with(|orders| {
            if orders.is_empty() {
                return None;
            }
            let columns = orders.columns();

            let header = columns
                .iter()
                .map(|column| view! { <th>{column_title(column)}</th> })
                .collect_view();

            let body = orders
                .rows()
                .iter()
                .map(|row| {
                    let cells = columns
                        .iter()
                        .map(|column| {
                            view! { <td>{format_cell(column, row.get(column))}</td> }
                        })
                        .collect_view();
                    view! { <tr>{cells}</tr> }
                })
                .collect_view();

            Some(view! {
                <div class="table-wrapper">
                    <h2>"Next Week Order Recommendations"</h2>
                    <table>
                        <thead>
                            <tr>{header}</tr>
                        </thead>
                        <tbody>{body}</tbody>
                    </table>
                    <p class="hint">
                        "A copy of this data is also saved as "
                        <code>"backend/data/next_week_orders.csv"</code> " on the server."
                    </p>
                </div>
            })
        })
    }
}
