use leptos::prelude::*;
use thaw::*;

use crate::checker::view_model::CheckerVm;

/// Contact data: all three fields are required.
#[component]
pub fn ContactSection(vm: CheckerVm) -> impl IntoView {
    view! {
        <section class="card form-section">
            <h2>"Datos de contacto"</h2>
            <div class="form-grid form-grid--3col">
                <div class="form__group" id="contacto-nombre">
                    <label class="form__label">"Nombre completo *"</label>
                    <Input value=vm.nombre placeholder="Ej: Ana Pérez" />
                </div>
                <div class="form__group" id="contacto-email">
                    <label class="form__label">"Correo electrónico *"</label>
                    <Input value=vm.email placeholder="nombre@correo.com" />
                </div>
                <div class="form__group" id="contacto-telefono">
                    <label class="form__label">"Teléfono *"</label>
                    <Input value=vm.telefono placeholder="+54 9 ..." />
                </div>
            </div>
        </section>
    }
}
