use leptos::prelude::*;

/// Overlay dialog shell. A click on the backdrop closes it; clicks
/// inside the content box do not propagate.
#[component]
pub fn Modal(#[prop(into)] on_close: Callback<()>, children: ChildrenFn) -> impl IntoView {
    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="modal-content" on:click=|e| e.stop_propagation()>
                <button
                    class="modal-close"
                    aria-label="Cerrar"
                    on:click=move |_| on_close.run(())
                >
                    "✕"
                </button>
                {children()}
            </div>
        </div>
    }
}
