//! Modal dialog shell

use leptos::prelude::*;

/// Centered modal with a backdrop; clicking the backdrop or the close button
/// flips `open` back to false.
#[component]
pub fn Dialog(
    open: RwSignal<bool>,
    #[prop(into)] title: Signal<String>,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <Show when=move || open.get()>
            <div class="dialog-backdrop" on:click=move |_| open.set(false)></div>
            <div class="dialog" role="dialog">
                <div class="dialog-header">
                    <h2 class="dialog-title">{move || title.get()}</h2>
                    <button class="btn btn-ghost" on:click=move |_| open.set(false)>
                        "✕"
                    </button>
                </div>
                <div class="dialog-body">{children()}</div>
            </div>
        </Show>
    }
}
