//! Building listing with edit/delete actions

use leptos::prelude::*;

use crate::types::Building;

#[component]
pub fn BuildingTable(
    #[prop(into)] buildings: Signal<Vec<Building>>,
    on_edit: Callback<Building>,
    on_delete: Callback<String>,
) -> impl IntoView {
    view! {
        <table class="table">
            <thead>
                <tr>
                    <th>"Name"</th>
                    <th>"Address"</th>
                    <th>"Number of Units"</th>
                    <th>"Actions"</th>
                </tr>
            </thead>
            <tbody>
                {move || {
                    buildings
                        .get()
                        .into_iter()
                        .map(|building| {
                            let edit_target = building.clone();
                            let delete_id = building.id.clone();
                            view! {
                                <tr>
                                    <td>{building.name.clone()}</td>
                                    <td>{building.address.clone()}</td>
                                    <td>{building.number_of_units}</td>
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
