use leptos::prelude::*;
use thaw::*;

use crate::checker::view_model::{CheckerVm, RemoveRequest};
use crate::shared::components::Modal;

/// Shown after a successful submission; the form is already reset, so
/// the addressee comes from the captured `submitted_email`.
#[component]
pub fn SuccessModal(vm: CheckerVm) -> impl IntoView {
    let success_open = vm.success_open;
    let submitted_email = vm.submitted_email;

    let on_close = Callback::new(move |_: ()| vm.close_success());

    view! {
        <Show when=move || success_open.get()>
            <Modal on_close=on_close>
                <h2>"¡Listo!"</h2>
                <p>
                    "Recibimos tu solicitud. En breve te llegará el resultado a "
                    {move || {
                        let email = submitted_email.get();
                        if email.is_empty() {
                            view! { <span>"tu correo"</span> }.into_any()
                        } else {
                            view! {
                                <a class="modal__mail" href=format!("mailto:{email}")>{email}</a>
                            }
                            .into_any()
                        }
                    }}
                    "."
                </p>
                <p class="modal__hint">"Podés cargar otro si querés."</p>
                <div class="modal__actions">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| on_close.run(())
                    >
                        "Validar otro producto"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| on_close.run(())
                    >
                        "Cerrar"
                    </Button>
                </div>
            </Modal>
        </Show>
    }
}

/// Asks before removing one row or the whole list.
#[component]
pub fn ConfirmRemoveModal(vm: CheckerVm) -> impl IntoView {
    let confirm = vm.confirm;

    let on_cancel = Callback::new(move |_: ()| vm.cancel_remove());

    let title = move || match confirm.get() {
        Some(RemoveRequest::All) => "¿Eliminar todos los productos?".to_string(),
        Some(RemoveRequest::One(idx)) => format!("¿Eliminar producto {}?", idx + 1),
        None => String::new(),
    };

    view! {
        <Show when=move || confirm.get().is_some()>
            <Modal on_close=on_cancel>
                <h2>{title}</h2>
                <p class="modal__hint">
                    "Esta acción es permanente y no vas a poder recuperar la información de este producto."
                </p>
                <div class="modal__actions">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| on_cancel.run(())
                    >
                        "Cancelar"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| vm.confirm_remove()
                    >
                        "Eliminar"
                    </Button>
                </div>
            </Modal>
        </Show>
    }
}
