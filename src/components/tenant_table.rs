//! Tenant listing with edit/delete actions

use leptos::prelude::*;

use crate::types::Tenant;

#[component]
pub fn TenantTable(
    #[prop(into)] tenants: Signal<Vec<Tenant>>,
    on_edit: Callback<Tenant>,
    on_delete: Callback<String>,
) -> impl IntoView {
    view! {
        <table class="table">
            <thead>
                <tr>
                    <th>"Name"</th>
                    <th>"Contact"</th>
                    <th>"Building"</th>
                    <th>"Unit"</th>
                    <th>"Actions"</th>
                </tr>
            </thead>
            <tbody>
                {move || {
                    tenants
                        .get()
                        .into_iter()
                        .map(|tenant| {
                            let edit_target = tenant.clone();
                            let delete_id = tenant.id.clone();
                            view! {
                                <tr>
                                    <td>{tenant.name.clone()}</td>
                                    <td>{tenant.contact.clone()}</td>
                                    <td>{tenant.building.name.clone()}</td>
                                    <td>{tenant.assigned_unit.clone()}</td>
                                    <td>
                                        <button
                                            class="btn btn-ghost"
                                            on:click=move |_| on_edit.run(edit_target.clone())
                                        >
                                            "Edit"
                                        </button>
                                        <button
                                            class="btn btn-danger"
                                            on:click=move |_| on_delete.run(delete_id.clone())
                                        >
                                            "Delete"
                                        </button>
                                    </td>
                                </tr>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </tbody>
        </table>
    }
}
