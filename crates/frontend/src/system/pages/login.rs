use leptos::prelude::*;

/// Minimal password policy: 8+ characters with at least one digit.
fn is_valid_password(value: &str) -> bool {
    value.len() >= 8 && value.chars().any(|c| c.is_ascii_digit())
}

/// Cheap email shape check, no regex: one `@`, non-empty local part,
/// dotted domain.
fn is_valid_email(value: &str) -> bool {
    let mut parts = value.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        _ => false,
    }
}

/// Self-contained, stateless login form. Performs client-side
/// validation only and reports success through `on_login`; it holds no
/// session state and never talks to the forecast workflow.
#[component]
pub fn LoginPage(#[prop(into)] on_login: Callback<()>) -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);

    let form_valid =
        move || is_valid_email(&email.get()) && is_valid_password(&password.get());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !form_valid() {
            set_error_message.set(Some(
                "Enter a valid email and a password of at least 8 characters including a digit."
                    .to_string(),
            ));
            return;
        }
        set_error_message.set(None);
        on_login.run(());
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Restaurant Inventory Forecast"</h1>
                <h2>"Sign in"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="email">"Email"</label>
                        <input
                            type="email"
                            id="email"
                            placeholder="you@restaurant.example"
                            value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            required
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <input
                            type="password"
                            id="password"
                            value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            required
                        />
                    </div>

                    <button type="submit" class="btn-primary" disabled=move || !form_valid()>
                        "Sign in"
                    </button>
                </form>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_email_shapes() {
        assert!(is_valid_email("chef@restaurant.example"));
        assert!(!is_valid_email("chef"));
        assert!(!is_valid_email("@restaurant.example"));
        assert!(!is_valid_email("chef@restaurant"));
        assert!(!is_valid_email("chef@.example"));
        assert!(!is_valid_email("a@b@c.example"));
    }

    #[test]
    fn test_password_policy() {
        assert!(is_valid_password("kitchen42"));
        assert!(!is_valid_password("short1"));
        assert!(!is_valid_password("nodigitshere"));
    }
}
