//! Admin dashboard: buildings, owners, tenants, and maintenance requests

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;

use crate::api::{self, view_guard};
use crate::components::{
    BuildingForm, BuildingTable, Dialog, LoadingSpinner, MaintenanceTable, OwnerForm, OwnerTable,
    TenantForm, TenantTable,
};
use crate::state::AppState;
use crate::types::{
    Building, BuildingPayload, MaintenanceRequest, MaintenanceStatus, Owner, OwnerPayload, Role,
    Tenant, TenantPayload,
};

#[derive(Clone, Copy, PartialEq, Eq)]
enum AdminTab {
    Buildings,
    Owners,
    Tenants,
    Requests,
}

impl AdminTab {
    const ALL: [AdminTab; 4] = [
        AdminTab::Buildings,
        AdminTab::Owners,
        AdminTab::Tenants,
        AdminTab::Requests,
    ];

    fn label(self) -> &'static str {
        match self {
            AdminTab::Buildings => "Buildings",
            AdminTab::Owners => "Owners",
            AdminTab::Tenants => "Tenants",
            AdminTab::Requests => "Maintenance Requests",
        }
    }
}

#[component]
pub fn AdminDashboard() -> impl IntoView {
    let state = expect_context::<AppState>();
    let alive = view_guard();

    let tab = RwSignal::new(AdminTab::Buildings);

    let buildings = RwSignal::new(Vec::<Building>::new());
    let owners = RwSignal::new(Vec::<Owner>::new());
    let tenants = RwSignal::new(Vec::<Tenant>::new());
    let requests = RwSignal::new(Vec::<MaintenanceRequest>::new());

    let buildings_loading = RwSignal::new(false);
    let owners_loading = RwSignal::new(false);
    let tenants_loading = RwSignal::new(false);
    let requests_loading = RwSignal::new(false);

    let selected_building = RwSignal::new(Option::<Building>::None);
    let selected_owner = RwSignal::new(Option::<Owner>::None);
    let selected_tenant = RwSignal::new(Option::<Tenant>::None);
    let building_form_open = RwSignal::new(false);

    let permissions = Role::Admin.permissions();

    // One loader per list; each re-runs after that list's mutations succeed
    let load_buildings = {
        let state = state.clone();
        let alive = alive.clone();
        move || {
            let state = state.clone();
            let alive = alive.clone();
            spawn_local(async move {
                buildings_loading.set(true);
                let (base, token) = state.credentials();
                match api::fetch_buildings(&base, token).await {
                    Ok(list) if alive.mounted() => buildings.set(list),
                    Ok(_) => {}
                    Err(e) => tracing::error!("Failed to fetch buildings: {}", e),
                }
                if alive.mounted() {
                    buildings_loading.set(false);
                }
            });
        }
    };

    let load_owners = {
        let state = state.clone();
        let alive = alive.clone();
        move || {
            let state = state.clone();
            let alive = alive.clone();
            spawn_local(async move {
                owners_loading.set(true);
                let (base, token) = state.credentials();
                match api::fetch_owners(&base, token).await {
                    Ok(list) if alive.mounted() => owners.set(list),
                    Ok(_) => {}
                    Err(e) => tracing::error!("Failed to fetch owners: {}", e),
                }
                if alive.mounted() {
                    owners_loading.set(false);
                }
            });
        }
    };

    let load_tenants = {
        let state = state.clone();
        let alive = alive.clone();
        move || {
            let state = state.clone();
            let alive = alive.clone();
            spawn_local(async move {
                tenants_loading.set(true);
                let (base, token) = state.credentials();
                match api::fetch_tenants(&base, token).await {
                    Ok(list) if alive.mounted() => tenants.set(list),
                    Ok(_) => {}
                    Err(e) => tracing::error!("Failed to fetch tenants: {}", e),
                }
                if alive.mounted() {
                    tenants_loading.set(false);
                }
            });
        }
    };

    let load_requests = {
        let state = state.clone();
        let alive = alive.clone();
        move || {
            let state = state.clone();
            let alive = alive.clone();
            spawn_local(async move {
                requests_loading.set(true);
                let (base, token) = state.credentials();
                match api::fetch_requests(&base, token).await {
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

    // Load all four lists concurrently on mount
    {
        let load_buildings = load_buildings.clone();
        let load_owners = load_owners.clone();
        let load_tenants = load_tenants.clone();
        let load_requests = load_requests.clone();
        Effect::new(move |_| {
            load_buildings();
            load_owners();
            load_tenants();
            load_requests();
        });
    }

    let handle_edit_building = Callback::new(move |b: Building| {
        selected_building.set(Some(b));
        building_form_open.set(true);
    });

    let handle_delete_building = {
        let state = state.clone();
        let load_buildings = load_buildings.clone();
        Callback::new(move |id: String| {
            let state = state.clone();
            let load_buildings = load_buildings.clone();
            spawn_local(async move {
                let (base, token) = state.credentials();
                match api::delete_building(&base, &id, token).await {
                    Ok(()) => load_buildings(),
                    Err(e) => tracing::error!("Failed to delete building: {}", e),
                }
            });
        })
    };

    let handle_submit_building = {
        let state = state.clone();
        let load_buildings = load_buildings.clone();
        move |payload: BuildingPayload| {
            let state = state.clone();
            let load_buildings = load_buildings.clone();
            let selected = selected_building.get_untracked();
            spawn_local(async move {
                let (base, token) = state.credentials();
                let result = match &selected {
                    Some(b) => api::update_building(&base, &b.id, &payload, token).await,
                    None => api::create_building(&base, &payload, token).await,
                };
                match result {
                    Ok(()) => {
                        selected_building.set(None);
                        building_form_open.set(false);
                        load_buildings();
                    }
                    Err(e) => tracing::error!("Failed to save building: {}", e),
                }
            });
        }
    };

    let handle_edit_owner = Callback::new(move |o: Owner| selected_owner.set(Some(o)));

    let handle_delete_owner = {
        let state = state.clone();
        let load_owners = load_owners.clone();
        Callback::new(move |id: String| {
            let state = state.clone();
            let load_owners = load_owners.clone();
            spawn_local(async move {
                let (base, token) = state.credentials();
                match api::delete_owner(&base, &id, token).await {
                    Ok(()) => load_owners(),
                    Err(e) => tracing::error!("Failed to delete owner: {}", e),
                }
            });
        })
    };

    let handle_submit_owner = {
        let state = state.clone();
        let load_owners = load_owners.clone();
        move |payload: OwnerPayload| {
            let state = state.clone();
            let load_owners = load_owners.clone();
            let selected = selected_owner.get_untracked();
            spawn_local(async move {
                let (base, token) = state.credentials();
                let result = match &selected {
                    Some(o) => api::update_owner(&base, &o.id, &payload, token).await,
                    None => api::create_owner(&base, &payload, token).await,
                };
                match result {
                    Ok(()) => {
                        selected_owner.set(None);
                        load_owners();
                    }
                    Err(e) => tracing::error!("Failed to save owner: {}", e),
                }
            });
        }
    };

    let handle_edit_tenant = Callback::new(move |t: Tenant| selected_tenant.set(Some(t)));

    let handle_delete_tenant = {
        let state = state.clone();
        let load_tenants = load_tenants.clone();
        Callback::new(move |id: String| {
            let state = state.clone();
            let load_tenants = load_tenants.clone();
            spawn_local(async move {
                let (base, token) = state.credentials();
                match api::delete_tenant(&base, &id, token).await {
                    Ok(()) => load_tenants(),
                    Err(e) => tracing::error!("Failed to delete tenant: {}", e),
                }
            });
        })
    };

    let handle_submit_tenant = {
        let state = state.clone();
        let load_tenants = load_tenants.clone();
        move |payload: TenantPayload| {
            let state = state.clone();
            let load_tenants = load_tenants.clone();
            let selected = selected_tenant.get_untracked();
            spawn_local(async move {
                let (base, token) = state.credentials();
                let result = match &selected {
                    Some(t) => api::update_tenant(&base, &t.id, &payload, token).await,
                    None => api::create_tenant(&base, &payload, token).await,
                };
                match result {
                    Ok(()) => {
                        selected_tenant.set(None);
                        load_tenants();
                    }
                    Err(e) => tracing::error!("Failed to save tenant: {}", e),
                }
            });
        }
    };

    let handle_status_change = {
        let state = state.clone();
        let load_requests = load_requests.clone();
        Callback::new(move |(id, status): (String, MaintenanceStatus)| {
            let state = state.clone();
            let load_requests = load_requests.clone();
            spawn_local(async move {
                let (base, token) = state.credentials();
                match api::update_request_status(&base, &id, status, token).await {
                    Ok(()) => load_requests(),
                    Err(e) => tracing::error!("Failed to update status: {}", e),
                }
            });
        })
    };

    let handle_logout = {
        let state = state.clone();
        move |_| state.logout()
    };

    let building_form_title = Signal::derive(move || {
        if selected_building.get().is_some() {
            "Edit Building".to_string()
        } else {
            "Create New Building".to_string()
        }
    });

    view! {
        <Title text="Admin Dashboard - Strata Management Portal" />
        <div class="page">
            <div class="page-header">
                <h1 class="page-title">"Admin Dashboard"</h1>
                <button class="btn btn-ghost" on:click=handle_logout>
                    "Logout"
                </button>
            </div>

            <div class="tabs">
                {AdminTab::ALL
                    .iter()
                    .map(|t| {
                        let t = *t;
                        view! {
                            <button
                                class=move || {
                                    format!("tab {}", if tab.get() == t { "tab-active" } else { "" })
                                }
                                on:click=move |_| tab.set(t)
                            >
                                {t.label()}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>

            <Show when=move || tab.get() == AdminTab::Buildings>
                <section>
                    <h2 class="section-title">"Buildings"</h2>
                    <Show when=move || buildings_loading.get()>
                        <LoadingSpinner />
                    </Show>
                    <BuildingTable
                        buildings=buildings
                        on_edit=handle_edit_building
                        on_delete=handle_delete_building
                    />
                    <button
                        class="btn btn-primary fab"
                        on:click=move |_| {
                            selected_building.set(None);
                            building_form_open.set(true);
                        }
                    >
                        "+"
                    </button>
                    <Dialog open=building_form_open title=building_form_title>
                        <BuildingForm
                            selected=selected_building
                            on_submit=handle_submit_building.clone()
                        />
                    </Dialog>
                </section>
            </Show>

            <Show when=move || tab.get() == AdminTab::Owners>
                <section>
                    <h2 class="section-title">"Owners"</h2>
                    <OwnerForm
                        selected=selected_owner
                        buildings=buildings
                        on_submit=handle_submit_owner.clone()
                    />
                    <Show when=move || owners_loading.get()>
                        <LoadingSpinner />
                    </Show>
                    <OwnerTable
                        owners=owners
                        on_edit=handle_edit_owner
                        on_delete=handle_delete_owner
                    />
                </section>
            </Show>

            <Show when=move || tab.get() == AdminTab::Tenants>
                <section>
                    <h2 class="section-title">"Tenants"</h2>
                    <TenantForm
                        selected=selected_tenant
                        buildings=buildings
                        on_submit=handle_submit_tenant.clone()
                    />
                    <Show when=move || tenants_loading.get()>
                        <LoadingSpinner />
                    </Show>
                    <TenantTable
                        tenants=tenants
                        on_edit=handle_edit_tenant
                        on_delete=handle_delete_tenant
                    />
                </section>
            </Show>

            <Show when=move || tab.get() == AdminTab::Requests>
                <section>
                    <h2 class="section-title">"Maintenance Requests"</h2>
                    <Show when=move || requests_loading.get()>
                        <LoadingSpinner />
                    </Show>
                    <MaintenanceTable
                        requests=requests
                        permissions=permissions
                        on_status_change=handle_status_change
                    />
                </section>
            </Show>
        </div>
    }
}
