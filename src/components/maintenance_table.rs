//! Maintenance request listing with role-dependent status affordances

use leptos::prelude::*;

use crate::types::{MaintenanceRequest, MaintenanceStatus, Permissions};

/// One row per request. The status column is an inline selector when the
/// caller's permissions grant status editing and a change callback is wired;
/// otherwise it renders as a read-only colored badge. Edit/delete buttons
/// appear only for callers that supply the matching callbacks.
#[component]
pub fn MaintenanceTable(
    #[prop(into)] requests: Signal<Vec<MaintenanceRequest>>,
    permissions: Permissions,
    #[prop(optional, into)] on_status_change: Option<Callback<(String, MaintenanceStatus)>>,
    #[prop(optional, into)] on_edit: Option<Callback<MaintenanceRequest>>,
    #[prop(optional, into)] on_delete: Option<Callback<String>>,
) -> impl IntoView {
    let has_actions = on_edit.is_some() || on_delete.is_some();
    let editable_status = permissions.can_edit_status && on_status_change.is_some();

    view! {
        <table class="table">
            <thead>
                <tr>
                    <th>"Title"</th>
                    <th>"Description"</th>
                    <th>"Status"</th>
                    <th>"Building"</th>
                    <th>"Unit Number"</th>
                    <th>"Last Changed"</th>
                    {has_actions.then(|| view! { <th>"Actions"</th> })}
                </tr>
            </thead>
            <tbody>
                {move || {
                    requests
                        .get()
                        .into_iter()
                        .map(|request| {
                            let status_cell = if editable_status {
                                let row_id = request.id.clone();
                                let current = request.status;
                                view! {
                                    <select
                                        class="input status-select"
                                        on:change=move |ev| {
                                            if let Some(status) = MaintenanceStatus::parse(
                                                &event_target_value(&ev),
                                            ) {
                                                if let Some(cb) = on_status_change {
                                                    cb.run((row_id.clone(), status));
                                                }
                                            }
                                        }
                                    >
                                        {MaintenanceStatus::ALL
                                            .iter()
                                            .map(|s| {
                                                view! {
                                                    <option value=s.as_str() selected=*s == current>
                                                        {s.label()}
                                                    </option>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </select>
                                }
                                .into_any()
                            } else {
                                view! {
                                    <span class=format!("badge {}", request.status.badge_class())>
                                        {request.status.label()}
                                    </span>
                                }
                                .into_any()
                            };

                            let edit_target = request.clone();
                            let delete_id = request.id.clone();
                            view! {
                                <tr>
                                    <td>{request.title.clone()}</td>
                                    <td>{request.description.clone()}</td>
                                    <td>{status_cell}</td>
                                    <td>{request.building_name.clone()}</td>
                                    <td>{request.unit_number.clone().unwrap_or_default()}</td>
                                    <td>
                                        {request.last_changed_time.format("%Y-%m-%d %H:%M").to_string()}
                                    </td>
                                    {has_actions
                                        .then(|| {
                                            view! {
                                                <td>
                                                    {on_edit
                                                        .map(|cb| {
                                                            let target = edit_target.clone();
                                                            view! {
                                                                <button
                                                                    class="btn btn-ghost"
                                                                    on:click=move |_| cb.run(target.clone())
                                                                >
                                                                    "Edit"
                                                                </button>
                                                            }
                                                        })}
                                                    {on_delete
                                                        .map(|cb| {
                                                            let id = delete_id.clone();
                                                            view! {
                                                                <button
                                                                    class="btn btn-danger"
                                                                    on:click=move |_| cb.run(id.clone())
                                                                >
                                                                    "Delete"
                                                                </button>
                                                            }
                                                        })}
                                                </td>
                                            }
                                        })}
                                </tr>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </tbody>
        </table>
    }
}
