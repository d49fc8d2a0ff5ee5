//! Login page

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;
use leptos_router::hooks::use_navigate;

use crate::api;
use crate::components::fields::{required, TextField};
use crate::state::AppState;
use crate::types::LoginPayload;

/// Login page; the only page that surfaces request failures to the user
#[component]
pub fn LoginPage() -> impl IntoView {
    let state = expect_context::<AppState>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let email_error = RwSignal::new(Option::<String>::None);
    let password_error = RwSignal::new(Option::<String>::None);
    let is_loading = RwSignal::new(false);
    let error = RwSignal::new(Option::<String>::None);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        email_error.set(required("Email", &email.get()));
        password_error.set(required("Password", &password.get()));
        if email_error.get().is_some() || password_error.get().is_some() {
            return;
        }

        let payload = LoginPayload {
            email: email.get().trim().to_string(),
            password: password.get(),
        };
        let state = state.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            is_loading.set(true);
            error.set(None);

            let base = state.api_base.get_untracked();
            let result = api::login(&base, &payload).await;
            is_loading.set(false);

            match result {
                Ok(auth) => {
                    let path = auth.role.dashboard_path();
                    state.login(&auth);
                    navigate(path, Default::default());
                }
                Err(e) => error.set(Some(e)),
            }
        });
    };

    view! {
        <Title text="Login - Strata Management Portal" />
        <div class="auth-page">
            <div class="card auth-card">
                <h1 class="page-title">"Login"</h1>

                <Show when=move || error.get().is_some()>
                    <div class="alert alert-error">{move || error.get().unwrap_or_default()}</div>
                </Show>

                <form on:submit=on_submit class="form">
                    <TextField label="Email" value=email error=email_error input_type="email" />
                    <TextField
                        label="Password"
                        value=password
                        error=password_error
                        input_type="password"
                    />
                    <button type="submit" disabled=move || is_loading.get() class="btn btn-primary">
                        "Login"
                    </button>
                </form>

                <p class="auth-footer">
                    "Don't have an account? " <a href="/register" class="auth-link">"Register here"</a>
                </p>
            </div>
        </div>
    }
}
