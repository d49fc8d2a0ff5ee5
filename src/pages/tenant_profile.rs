//! First-time tenant profile creation and updates

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;
use leptos_router::hooks::use_navigate;

use crate::api::{self, view_guard};
use crate::components::TenantForm;
use crate::state::AppState;
use crate::types::{Building, Tenant, TenantPayload};

#[component]
pub fn TenantProfilePage() -> impl IntoView {
    let state = expect_context::<AppState>();
    let navigate = use_navigate();
    let alive = view_guard();

    let buildings = RwSignal::new(Vec::<Building>::new());
    let profile = RwSignal::new(Option::<Tenant>::None);

    // Buildings and any existing profile load independently on mount; a
    // missing profile simply leaves the form empty for creation
    {
        let state = state.clone();
        let alive = alive.clone();
        Effect::new(move |_| {
            let list_state = state.clone();
            let list_alive = alive.clone();
            spawn_local(async move {
                let (base, token) = list_state.credentials();
                match api::fetch_buildings(&base, token).await {
                    Ok(list) if list_alive.mounted() => buildings.set(list),
                    Ok(_) => {}
                    Err(e) => tracing::error!("Failed to fetch buildings: {}", e),
                }
            });

            let profile_state = state.clone();
            let profile_alive = alive.clone();
            spawn_local(async move {
                let (base, token) = profile_state.credentials();
                let email = profile_state.email.get_untracked().unwrap_or_default();
                match api::tenant_by_email(&base, &email, token).await {
                    Ok(p) if profile_alive.mounted() => profile.set(Some(p)),
                    Ok(_) => {}
                    Err(e) => tracing::error!("Failed to fetch tenant profile: {}", e),
                }
            });
        });
    }

    let handle_submit = {
        let state = state.clone();
        let navigate = navigate.clone();
        move |payload: TenantPayload| {
            let state = state.clone();
            let navigate = navigate.clone();
            let existing = profile.get_untracked();
            spawn_local(async move {
                let (base, token) = state.credentials();
                let result = match &existing {
                    Some(p) => api::update_tenant(&base, &p.id, &payload, token).await,
                    None => api::create_tenant(&base, &payload, token).await,
                };
                match result {
                    Ok(()) => navigate("/tenant", Default::default()),
                    Err(e) => tracing::error!("Failed to save profile: {}", e),
                }
            });
        }
    };

    view! {
        <Title text="Tenant Profile - Strata Management Portal" />
        <div class="page page-narrow">
            <h1 class="page-title">
                {move || if profile.get().is_some() { "Update Profile" } else { "Create Profile" }}
            </h1>
            <TenantForm selected=profile buildings=buildings noun="Profile" on_submit=handle_submit />
        </div>
    }
}
