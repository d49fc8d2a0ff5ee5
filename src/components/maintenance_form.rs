//! Maintenance request create/edit form

use leptos::prelude::*;

use crate::components::fields::{min_len, required, SelectField, TextField};
use crate::types::{
    Building, MaintenancePayload, MaintenanceRequest, MaintenanceStatus, Permissions,
};

const TITLE_MIN: usize = 5;
const DESCRIPTION_MIN: usize = 10;

/// Submission policy: a new request is always Pending, and when building
/// editing is not granted the caller's pinned building/unit win over any
/// user input.
#[allow(clippy::too_many_arguments)]
fn resolve_payload(
    editing: bool,
    can_edit_building: bool,
    title: String,
    description: String,
    status: MaintenanceStatus,
    building_id: String,
    unit_number: Option<String>,
    assigned_building_id: Option<String>,
    assigned_unit: Option<String>,
) -> MaintenancePayload {
    let status = if editing {
        status
    } else {
        MaintenanceStatus::Pending
    };
    let (building_id, unit_number) = if can_edit_building {
        (building_id, unit_number)
    } else {
        (
            assigned_building_id.unwrap_or(building_id),
            assigned_unit.or(unit_number),
        )
    };
    MaintenancePayload {
        title,
        description,
        status,
        building_id,
        unit_number,
    }
}

/// Form for filing or editing a maintenance request. Building/unit are
/// editable only when the caller's permissions grant it; otherwise they are
/// displayed read-only from the assigned values and pinned into the payload.
#[component]
pub fn MaintenanceForm(
    #[prop(into)] selected: Signal<Option<MaintenanceRequest>>,
    #[prop(into)] buildings: Signal<Vec<Building>>,
    permissions: Permissions,
    #[prop(into)] assigned_building_id: Signal<Option<String>>,
    #[prop(into)] assigned_unit: Signal<Option<String>>,
    on_submit: impl Fn(MaintenancePayload) + Clone + 'static,
) -> impl IntoView {
    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let status = RwSignal::new(MaintenanceStatus::Pending);
    let building_id = RwSignal::new(String::new());
    let unit_number = RwSignal::new(String::new());

    let title_error = RwSignal::new(Option::<String>::None);
    let description_error = RwSignal::new(Option::<String>::None);
    let building_error = RwSignal::new(Option::<String>::None);
    let unit_error = RwSignal::new(Option::<String>::None);

    let can_edit_building = permissions.can_edit_building;
    let editing = Signal::derive(move || selected.get().is_some());

    // Pre-fill for edit, reset for create
    Effect::new(move |_| {
        match selected.get() {
            Some(r) => {
                title.set(r.title);
                description.set(r.description);
                status.set(r.status);
                building_id.set(r.building_id);
                unit_number.set(r.unit_number.unwrap_or_default());
            }
            None => {
                title.set(String::new());
                description.set(String::new());
                status.set(MaintenanceStatus::Pending);
                building_id.set(String::new());
                unit_number.set(String::new());
            }
        }
        title_error.set(None);
        description_error.set(None);
        building_error.set(None);
        unit_error.set(None);
    });

    // Keep the pinned building/unit synchronized into the form state, so the
    // read-only display always matches what gets submitted
    Effect::new(move |_| {
        if can_edit_building {
            return;
        }
        if let Some(id) = assigned_building_id.get() {
            building_id.set(id);
        }
        if let Some(u) = assigned_unit.get() {
            unit_number.set(u);
        }
    });

    let handle_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        title_error.set(min_len("Title", &title.get(), TITLE_MIN));
        description_error.set(min_len("Description", &description.get(), DESCRIPTION_MIN));
        if can_edit_building {
            building_error.set(required("Building", &building_id.get()));
        }

        if title_error.get().is_some()
            || description_error.get().is_some()
            || building_error.get().is_some()
        {
            return;
        }

        let unit = {
            let u = unit_number.get().trim().to_string();
            if u.is_empty() {
                None
            } else {
                Some(u)
            }
        };

        on_submit(resolve_payload(
            editing.get(),
            can_edit_building,
            title.get().trim().to_string(),
            description.get().trim().to_string(),
            status.get(),
            building_id.get(),
            unit,
            assigned_building_id.get_untracked(),
            assigned_unit.get_untracked(),
        ));
    };

    let building_options = Signal::derive(move || {
        buildings
            .get()
            .into_iter()
            .map(|b| (b.id, b.name))
            .collect::<Vec<_>>()
    });

    // Name of the pinned building for the read-only display
    let assigned_building_name = Signal::derive(move || {
        assigned_building_id
            .get()
            .and_then(|id| buildings.get().into_iter().find(|b| b.id == id))
            .map(|b| b.name)
            .unwrap_or_default()
    });

    view! {
        <form on:submit=handle_submit class="form">
            <TextField label="Title" value=title error=title_error />
            <TextField label="Description" value=description error=description_error multiline=true />

            <div class="field">
                <label class="field-label">"Status"</label>
                <select
                    class="input"
                    disabled=move || !editing.get()
                    on:change=move |ev| {
                        if let Some(s) = MaintenanceStatus::parse(&event_target_value(&ev)) {
                            status.set(s);
                        }
                    }
                >
                    {move || {
                        let current = status.get();
                        let options: &[MaintenanceStatus] = if editing.get() {
                            &MaintenanceStatus::ALL
                        } else {
                            &[MaintenanceStatus::Pending]
                        };
                        options
                            .iter()
                            .map(|s| {
                                view! {
                                    <option value=s.as_str() selected=*s == current>
                                        {s.label()}
                                    </option>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </select>
            </div>

            {if can_edit_building {
                view! {
                    <SelectField
                        label="Building"
                        value=building_id
                        error=building_error
                        options=building_options
                    />
                    <TextField label="Unit Number" value=unit_number error=unit_error />
                }
                .into_any()
            } else {
                view! {
                    <Show when=move || assigned_building_id.get().is_some()>
                        <div class="field">
                            <label class="field-label">"Building"</label>
                            <input
                                class="input"
                                prop:value=move || assigned_building_name.get()
                                readonly=true
                            />
                        </div>
                    </Show>
                    <Show when=move || assigned_unit.get().is_some()>
                        <div class="field">
                            <label class="field-label">"Unit Number"</label>
                            <input
                                class="input"
                                prop:value=move || assigned_unit.get().unwrap_or_default()
                                readonly=true
                            />
                        </div>
                    </Show>
                }
                .into_any()
            }}

            <button type="submit" class="btn btn-primary">
                {move || if editing.get() { "Update Request" } else { "Create Request" }}
            </button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creating_always_submits_pending() {
        let payload = resolve_payload(
            false,
            true,
            "Leaky tap".to_string(),
            "Water pooling under the sink".to_string(),
            MaintenanceStatus::Completed,
            "b1".to_string(),
            None,
            None,
            None,
        );
        assert_eq!(payload.status, MaintenanceStatus::Pending);
    }

    #[test]
    fn editing_keeps_the_chosen_status() {
        let payload = resolve_payload(
            true,
            true,
            "Leaky tap".to_string(),
            "Water pooling under the sink".to_string(),
            MaintenanceStatus::InProgress,
            "b1".to_string(),
            None,
            None,
            None,
        );
        assert_eq!(payload.status, MaintenanceStatus::InProgress);
    }

    #[test]
    fn pinned_building_and_unit_win_when_not_editable() {
        let payload = resolve_payload(
            false,
            false,
            "Leaky tap".to_string(),
            "Water pooling under the sink".to_string(),
            MaintenanceStatus::Pending,
            "typed".to_string(),
            Some("9".to_string()),
            Some("b42".to_string()),
            Some("12".to_string()),
        );
        assert_eq!(payload.building_id, "b42");
        assert_eq!(payload.unit_number.as_deref(), Some("12"));
    }

    #[test]
    fn user_input_kept_when_building_is_editable() {
        let payload = resolve_payload(
            false,
            true,
            "Leaky tap".to_string(),
            "Water pooling under the sink".to_string(),
            MaintenanceStatus::Pending,
            "typed".to_string(),
            Some("9".to_string()),
            Some("b42".to_string()),
            Some("12".to_string()),
        );
        assert_eq!(payload.building_id, "typed");
        assert_eq!(payload.unit_number.as_deref(), Some("9"));
    }
}
