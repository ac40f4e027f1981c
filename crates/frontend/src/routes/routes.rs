use crate::dashboards::ForecastDashboard;
use crate::system::pages::login::LoginPage;
use leptos::prelude::*;

/// Gate the dashboard behind the login fragment. The flag is in-memory
/// only and lost on reload; the login form never talks to the workflow.
#[component]
pub fn AppRoutes() -> impl IntoView {
    let (signed_in, set_signed_in) = signal(false);

    view! {
        <Show
            when=move || signed_in.get()
            fallback=move || view! { <LoginPage on_login=move |_| set_signed_in.set(true) /> }
        >
            <ForecastDashboard />
        </Show>
    }
}
