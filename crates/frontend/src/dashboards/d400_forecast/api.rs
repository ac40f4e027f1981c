use contracts::dashboards::d400_forecast::RecordSet;
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Multipart field names for the four weekly snapshots, in slot order.
/// The label reflects upload position, not any week metadata inside the
/// file.
pub const WEEK_FIELDS: [&str; 4] = ["week1", "week2", "week3", "week4"];
/// Multipart field name for the optional sales plan
/// (columns `Dish,Qty[,Multiplier]`).
pub const SALES_PLAN_FIELD: &str = "sales_plan";

/// Получить ранее рассчитанные предсказания
///
/// A non-success status means "not computed yet" and is reported as a
/// plain error string; the caller decides whether it is user-visible.
pub async fn get_predictions() -> Result<RecordSet, String> {
    let response = Request::get(&api_url("/api/predictions"))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Запустить расчёт: POST четырёх недельных CSV плюс опциональный план
/// продаж одним multipart-запросом
pub async fn run_forecast(
    weeks: &[web_sys::File; 4],
    sales_plan: Option<&web_sys::File>,
) -> Result<RecordSet, String> {
    let form = web_sys::FormData::new().map_err(|e| format!("{e:?}"))?;
    for (field, file) in WEEK_FIELDS.iter().zip(weeks.iter()) {
        form.append_with_blob_and_filename(field, file, &file.name())
            .map_err(|e| format!("{e:?}"))?;
    }
    if let Some(file) = sales_plan {
        form.append_with_blob_and_filename(SALES_PLAN_FIELD, file, &file.name())
            .map_err(|e| format!("{e:?}"))?;
    }

    let request = Request::post(&api_url("/api/run-forecast"))
        .body(form)
        .map_err(|e| format!("Request failed: {}", e))?;
    let response = request
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        let body = response.text().await.unwrap_or_default();
        return Err(server_error_message(response.status(), &body));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Error text shown when the forecast endpoint answers with a
/// non-success status.
pub fn server_error_message(status: u16, body: &str) -> String {
    let detail = if body.is_empty() {
        "Unable to run forecast"
    } else {
        body
    };
    format!("Server error ({}): {}", status, detail)
}
