use crate::dashboards::d400_forecast::state::ForecastController;
use crate::routes::routes::AppRoutes;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // One controller instance per session; all workflow mutations go
    // through its methods.
    provide_context(ForecastController::new());

    view! {
        <AppRoutes />
    }
}
