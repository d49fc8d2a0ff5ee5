//! Account registration form

use leptos::prelude::*;

use crate::components::fields::{required, SelectField, TextField};
use crate::types::{RegisterPayload, Role};

/// Registration form; accounts can sign up as owners or tenants only
#[component]
pub fn RegisterForm(on_submit: impl Fn(RegisterPayload) + Clone + 'static) -> impl IntoView {
    let email = RwSignal::new(String::new());
    let full_name = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let role = RwSignal::new(String::new());

    let email_error = RwSignal::new(Option::<String>::None);
    let full_name_error = RwSignal::new(Option::<String>::None);
    let password_error = RwSignal::new(Option::<String>::None);
    let role_error = RwSignal::new(Option::<String>::None);

    let role_options = Signal::derive(|| {
        vec![
            (Role::Owner.as_str().to_string(), Role::Owner.to_string()),
            (Role::Tenant.as_str().to_string(), Role::Tenant.to_string()),
        ]
    });

    let handle_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        email_error.set(required("Email", &email.get()));
        full_name_error.set(required("Full Name", &full_name.get()));
        password_error.set(required("Password", &password.get()));
        role_error.set(required("Role", &role.get()));

        if email_error.get().is_some()
            || full_name_error.get().is_some()
            || password_error.get().is_some()
            || role_error.get().is_some()
        {
            return;
        }

        let Some(role) = Role::parse(&role.get()) else {
            role_error.set(Some("Role is required".to_string()));
            return;
        };

        on_submit(RegisterPayload {
            email: email.get().trim().to_string(),
            full_name: full_name.get().trim().to_string(),
            password: password.get(),
            role,
        });
    };

    view! {
        <form on:submit=handle_submit class="form">
            <TextField label="Email" value=email error=email_error input_type="email" />
            <TextField label="Full Name" value=full_name error=full_name_error />
            <TextField label="Password" value=password error=password_error input_type="password" />
            <SelectField label="Role" value=role error=role_error options=role_options />
            <button type="submit" class="btn btn-primary">
                "Register"
            </button>
        </form>
    }
}
