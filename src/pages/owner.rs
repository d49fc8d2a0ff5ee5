//! Owner dashboard: profile-gated maintenance request management

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;
use leptos_router::hooks::use_navigate;

use crate::api::{self, view_guard};
use crate::components::{Dialog, LoadingSpinner, MaintenanceForm, MaintenanceTable};
use crate::state::AppState;
use crate::types::{
    Building, MaintenancePayload, MaintenanceRequest, Owner, RequestScope, Role,
};

#[component]
pub fn OwnerDashboard() -> impl IntoView {
    let state = expect_context::<AppState>();
    let navigate = use_navigate();
    let alive = view_guard();

    let requests = RwSignal::new(Vec::<MaintenanceRequest>::new());
    let buildings = RwSignal::new(Vec::<Building>::new());
    let profile = RwSignal::new(Option::<Owner>::None);
    let has_profile = RwSignal::new(false);
    let selected_request = RwSignal::new(Option::<MaintenanceRequest>::None);
    let requests_loading = RwSignal::new(false);
    let profile_open = RwSignal::new(false);
    let request_form_open = RwSignal::new(false);

    let permissions = Role::Owner.permissions();

    // Profile gate: a missing profile routes to first-time creation. Buildings
    // load alongside; the scoped request fetch waits for the profile below.
    {
        let state = state.clone();
        let navigate = navigate.clone();
        let alive = alive.clone();
        Effect::new(move |_| {
            let check_state = state.clone();
            let check_alive = alive.clone();
            let navigate = navigate.clone();
            spawn_local(async move {
                let (base, token) = check_state.credentials();
                let email = check_state.email.get_untracked().unwrap_or_default();
                match api::owner_by_email(&base, &email, token).await {
                    Ok(p) if check_alive.mounted() => {
                        profile.set(Some(p));
                        has_profile.set(true);
                    }
                    Ok(_) => {}
                    Err(e) => {
                        tracing::error!("Failed to fetch owner profile: {}", e);
                        if check_alive.mounted() {
                            has_profile.set(false);
                            navigate("/owner/profile", Default::default());
                        }
                    }
                }
            });

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
        });
    }

    // Scoped request fetch, keyed on the resolved profile
    let load_requests = {
        let state = state.clone();
        let alive = alive.clone();
        move |p: Owner| {
            let state = state.clone();
            let alive = alive.clone();
            spawn_local(async move {
                requests_loading.set(true);
                let (base, token) = state.credentials();
                let scope = RequestScope {
                    role: Role::Owner,
                    building_id: Some(p.assigned_building_id),
                    unit_number: None,
                };
                match api::fetch_requests_scoped(&base, &scope, token).await {
                    Ok(list) if alive.mounted() => requests.set(list),
                    Ok(_) => {}
                    Err(e) => tracing::error!("Failed to fetch maintenance requests: {}", e),
                }
                if alive.mounted() {
                    requests_loading.set(false);
                }
            });
        }
    };

    {
        let load_requests = load_requests.clone();
        Effect::new(move |_| {
            if let Some(p) = profile.get() {
                load_requests(p);
            }
        });
    }

    let refresh_requests = {
        let load_requests = load_requests.clone();
        move || {
            if let Some(p) = profile.get_untracked() {
                load_requests(p);
            }
        }
    };

    let handle_submit_request = {
        let state = state.clone();
        let refresh = refresh_requests.clone();
        move |payload: MaintenancePayload| {
            let state = state.clone();
            let refresh = refresh.clone();
            let selected = selected_request.get_untracked();
            spawn_local(async move {
                let (base, token) = state.credentials();
                let result = match &selected {
                    Some(r) => api::update_request(&base, &r.id, &payload, token).await,
                    None => api::create_request(&base, &payload, token).await,
                };
                match result {
                    Ok(()) => {
                        request_form_open.set(false);
                        selected_request.set(None);
                        refresh();
                    }
                    Err(e) => tracing::error!("Failed to save maintenance request: {}", e),
                }
            });
        }
    };

    let handle_edit_request = Callback::new(move |r: MaintenanceRequest| {
        selected_request.set(Some(r));
        request_form_open.set(true);
    });

    let handle_delete_request = {
        let state = state.clone();
        let refresh = refresh_requests.clone();
        Callback::new(move |id: String| {
            let state = state.clone();
            let refresh = refresh.clone();
            spawn_local(async move {
                let (base, token) = state.credentials();
                match api::delete_request(&base, &id, token).await {
                    Ok(()) => refresh(),
                    Err(e) => tracing::error!("Failed to delete maintenance request: {}", e),
                }
            });
        })
    };

    let handle_logout = {
        let state = state.clone();
        move |_| state.logout()
    };

    let assigned_building_id =
        Signal::derive(move || profile.get().map(|p| p.assigned_building_id));
    let assigned_unit = Signal::derive(move || Option::<String>::None);

    let request_form_title = Signal::derive(move || {
        if selected_request.get().is_some() {
            "Edit Maintenance Request".to_string()
        } else {
            "Create Maintenance Request".to_string()
        }
    });

    view! {
        <Title text="Owner Dashboard - Strata Management Portal" />
        <Show when=move || has_profile.get()>
            <div class="page">
                <div class="page-header">
                    <h1 class="page-title">"Owner Dashboard"</h1>
                    <button class="btn btn-ghost avatar" on:click=move |_| profile_open.set(true)>
                        "👤"
                    </button>
                </div>

                <section>
                    <div class="section-header">
                        <h2 class="section-title">"Maintenance Requests"</h2>
                        <button
                            class="btn btn-primary"
                            on:click=move |_| {
                                selected_request.set(None);
                                request_form_open.set(true);
                            }
                        >
                            "New Request"
                        </button>
                    </div>
                    <Show when=move || requests_loading.get()>
                        <LoadingSpinner />
                    </Show>
                    <MaintenanceTable
                        requests=requests
                        permissions=permissions
                        on_edit=handle_edit_request
                        on_delete=handle_delete_request
                    />
                </section>

                <Dialog
                    open=profile_open
                    title=Signal::derive(|| "Profile Information".to_string())
                >
                    {move || {
                        profile
                            .get()
                            .map(|p| {
                                view! {
                                    <div class="profile-info">
                                        <h3>{p.name.clone()}</h3>
                                        <p class="muted">"Owner"</p>
                                        <p>
                                            <strong>"Contact: "</strong>
                                            {p.contact.clone()}
                                        </p>
                                        <p>
                                            <strong>"Building: "</strong>
                                            {format!(
                                                "{} ({})",
                                                p.assigned_building.name,
                                                p.assigned_building.address,
                                            )}
                                        </p>
                                        <p>
                                            <strong>"Units Owned: "</strong>
                                            {p.assigned_building.number_of_units}
                                        </p>
                                    </div>
                                }
                            })
                    }}
                    <div class="dialog-actions">
                        <button class="btn btn-ghost" on:click=move |_| profile_open.set(false)>
                            "Close"
                        </button>
                        <button class="btn btn-danger" on:click=handle_logout.clone()>
                            "Logout"
                        </button>
                    </div>
                </Dialog>

                <Dialog open=request_form_open title=request_form_title>
                    <MaintenanceForm
                        selected=selected_request
                        buildings=buildings
                        permissions=permissions
                        assigned_building_id=assigned_building_id
                        assigned_unit=assigned_unit
                        on_submit=handle_submit_request.clone()
                    />
                </Dialog>
            </div>
        </Show>
    }
}
