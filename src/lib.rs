//! Strata Portal - Leptos frontend for the Strata property-management backend
//!
//! Role-based portal: administrators manage buildings, owners, and tenants;
//! owners and tenants manage their own profile and maintenance requests.

pub mod api;
pub mod components;
pub mod pages;
pub mod state;
pub mod types;

use leptos::prelude::*;
use leptos_meta::provide_meta_context;
use leptos_router::{
    components::{Redirect, Route, Router, Routes},
    hooks::use_navigate,
    path,
};

use pages::{
    admin::AdminDashboard, login::LoginPage, owner::OwnerDashboard,
    owner_profile::OwnerProfilePage, register::RegisterPage, tenant::TenantDashboard,
    tenant_profile::TenantProfilePage,
};
use state::AppState;
use types::Role;

/// Main application component
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Initialize session state, hydrated once from localStorage
    let app_state = AppState::new();
    provide_context(app_state);

    view! {
        <Router>
            <main class="app-shell">
                <Routes fallback=|| view! { <Redirect path="/login" /> }>
                    <Route path=path!("/login") view=LoginPage />
                    <Route path=path!("/register") view=RegisterPage />
                    <Route
                        path=path!("/admin")
                        view=|| {
                            view! {
                                <RequireRole role=Role::Admin>
                                    <AdminDashboard />
                                </RequireRole>
                            }
                        }
                    />
                    <Route
                        path=path!("/owner")
                        view=|| {
                            view! {
                                <RequireRole role=Role::Owner>
                                    <OwnerDashboard />
                                </RequireRole>
                            }
                        }
                    />
                    <Route
                        path=path!("/tenant")
                        view=|| {
                            view! {
                                <RequireRole role=Role::Tenant>
                                    <TenantDashboard />
                                </RequireRole>
                            }
                        }
                    />
                    <Route
                        path=path!("/owner/profile")
                        view=|| {
                            view! {
                                <RequireRole role=Role::Owner>
                                    <OwnerProfilePage />
                                </RequireRole>
                            }
                        }
                    />
                    <Route
                        path=path!("/tenant/profile")
                        view=|| {
                            view! {
                                <RequireRole role=Role::Tenant>
                                    <TenantProfilePage />
                                </RequireRole>
                            }
                        }
                    />
                </Routes>
            </main>
        </Router>
    }
}

/// Route gate: children render only for an authenticated session with the
/// exact role; anything else is sent back to the login page.
#[component]
fn RequireRole(role: Role, children: ChildrenFn) -> impl IntoView {
    let state = expect_context::<AppState>();
    let navigate = use_navigate();

    let allowed = {
        let state = state.clone();
        Signal::derive(move || state.is_authenticated() && state.role.get() == Some(role))
    };

    Effect::new(move |_| {
        if !allowed.get() {
            navigate("/login", Default::default());
        }
    });

    view! { <Show when=move || allowed.get()>{children()}</Show> }
}
