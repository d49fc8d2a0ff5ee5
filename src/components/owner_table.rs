//! Owner listing with edit/delete actions

use leptos::prelude::*;

use crate::types::Owner;

#[component]
pub fn OwnerTable(
    #[prop(into)] owners: Signal<Vec<Owner>>,
    on_edit: Callback<Owner>,
    on_delete: Callback<String>,
) -> impl IntoView {
    view! {
        <table class="table">
            <thead>
                <tr>
                    <th>"Name"</th>
                    <th>"Contact"</th>
                    <th>"Assigned Building"</th>
                    <th>"Actions"</th>
                </tr>
            </thead>
            <tbody>
                {move || {
                    owners
                        .get()
                        .into_iter()
                        .map(|owner| {
                            let edit_target = owner.clone();
                            let delete_id = owner.id.clone();
                            view! {
                                <tr>
                                    <td>{owner.name.clone()}</td>
                                    <td>{owner.contact.clone()}</td>
                                    <td>{owner.assigned_building.name.clone()}</td>
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
