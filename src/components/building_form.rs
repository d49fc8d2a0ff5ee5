//! Building create/edit form (admin)

use leptos::prelude::*;

use crate::components::fields::{required, TextField};
use crate::types::{Building, BuildingPayload};

/// Dialog-hosted form for creating or editing a building. Packages validated
/// input and delegates; the parent performs the API call.
#[component]
pub fn BuildingForm(
    #[prop(into)] selected: Signal<Option<Building>>,
    on_submit: impl Fn(BuildingPayload) + Clone + 'static,
) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let address = RwSignal::new(String::new());
    let units = RwSignal::new(String::new());

    let name_error = RwSignal::new(Option::<String>::None);
    let address_error = RwSignal::new(Option::<String>::None);
    let units_error = RwSignal::new(Option::<String>::None);

    // Pre-fill when a row is selected for editing, reset when creating
    Effect::new(move |_| {
        match selected.get() {
            Some(b) => {
                name.set(b.name);
                address.set(b.address);
                units.set(b.number_of_units.to_string());
            }
            None => {
                name.set(String::new());
                address.set(String::new());
                units.set(String::new());
            }
        }
        name_error.set(None);
        address_error.set(None);
        units_error.set(None);
    });

    let handle_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        name_error.set(required("Name", &name.get()));
        address_error.set(required("Address", &address.get()));

        let parsed_units = units.get().trim().parse::<u32>();
        units_error.set(match (required("Number of Units", &units.get()), &parsed_units) {
            (Some(e), _) => Some(e),
            (None, Err(_)) => Some("Number of Units must be a non-negative number".to_string()),
            (None, Ok(_)) => None,
        });

        if name_error.get().is_some()
            || address_error.get().is_some()
            || units_error.get().is_some()
        {
            return;
        }

        on_submit(BuildingPayload {
            name: name.get().trim().to_string(),
            address: address.get().trim().to_string(),
            number_of_units: parsed_units.unwrap_or_default(),
        });
    };

    view! {
        <form on:submit=handle_submit class="form">
            <TextField label="Name" value=name error=name_error />
            <TextField label="Address" value=address error=address_error />
            <TextField label="Number of Units" value=units error=units_error input_type="number" />
            <button type="submit" class="btn btn-primary">
                {move || if selected.get().is_some() { "Update" } else { "Create" }}
            </button>
        </form>
    }
}
