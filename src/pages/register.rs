//! Registration page

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;
use leptos_router::hooks::use_navigate;

use crate::api;
use crate::components::RegisterForm;
use crate::state::AppState;
use crate::types::RegisterPayload;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let state = expect_context::<AppState>();
    let navigate = use_navigate();

    let handle_submit = move |payload: RegisterPayload| {
        let state = state.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            let base = state.api_base.get_untracked();
            match api::register(&base, &payload).await {
                Ok(()) => navigate("/login", Default::default()),
                Err(e) => tracing::error!("Registration failed: {}", e),
            }
        });
    };

    view! {
        <Title text="Register - Strata Management Portal" />
        <div class="auth-page">
            <div class="card auth-card">
                <h1 class="page-title">"Register"</h1>
                <RegisterForm on_submit=handle_submit />
                <p class="auth-footer">
                    "Already have an account? " <a href="/login" class="auth-link">"Login here"</a>
                </p>
            </div>
        </div>
    }
}
