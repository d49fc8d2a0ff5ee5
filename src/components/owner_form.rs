//! Owner create/edit form, shared by the admin Owners tab and the owner
//! profile page

use leptos::prelude::*;

use crate::components::fields::{required, SelectField, TextField};
use crate::types::{Building, Owner, OwnerPayload};

#[component]
pub fn OwnerForm(
    #[prop(into)] selected: Signal<Option<Owner>>,
    #[prop(into)] buildings: Signal<Vec<Building>>,
    /// Noun for the submit label: "Owner" on the admin tab, "Profile" on the
    /// profile page
    #[prop(default = "Owner")] noun: &'static str,
    on_submit: impl Fn(OwnerPayload) + Clone + 'static,
) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let contact = RwSignal::new(String::new());
    let building_id = RwSignal::new(String::new());

    let name_error = RwSignal::new(Option::<String>::None);
    let contact_error = RwSignal::new(Option::<String>::None);
    let building_error = RwSignal::new(Option::<String>::None);

    Effect::new(move |_| {
        match selected.get() {
            Some(o) => {
                name.set(o.name);
                contact.set(o.contact);
                building_id.set(o.assigned_building_id);
            }
            None => {
                name.set(String::new());
                contact.set(String::new());
                building_id.set(String::new());
            }
        }
        name_error.set(None);
        contact_error.set(None);
        building_error.set(None);
    });

    let building_options = Signal::derive(move || {
        buildings
            .get()
            .into_iter()
            .map(|b| (b.id, b.name))
            .collect::<Vec<_>>()
    });

    let handle_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        name_error.set(required("Name", &name.get()));
        contact_error.set(required("Contact", &contact.get()));
        building_error.set(required("Assigned Building", &building_id.get()));

        if name_error.get().is_some()
            || contact_error.get().is_some()
            || building_error.get().is_some()
        {
            return;
        }

        on_submit(OwnerPayload {
            name: name.get().trim().to_string(),
            contact: contact.get().trim().to_string(),
            assigned_building_id: building_id.get(),
        });
    };

    view! {
        <form on:submit=handle_submit class="form">
            <TextField label="Name" value=name error=name_error />
            <TextField label="Contact" value=contact error=contact_error />
            <SelectField
                label="Assigned Building"
                value=building_id
                error=building_error
                options=building_options
            />
            <button type="submit" class="btn btn-primary">
                {move || {
                    if selected.get().is_some() {
                        format!("Update {}", noun)
                    } else {
                        format!("Create {}", noun)
                    }
                }}
            </button>
        </form>
    }
}
