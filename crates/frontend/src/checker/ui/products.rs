use leptos::prelude::*;
use thaw::*;

use crate::checker::view_model::{CheckerVm, ProductRow};

/// Product rows: description + link, add/remove controls.
#[component]
pub fn ProductsSection(vm: CheckerVm) -> impl IntoView {
    let productos = vm.productos;

    view! {
        <section class="card form-section" id="productos">
            <h2>"Productos"</h2>
            <p class="form-section__hint">
                "Cargá descripción y link del/los producto(s). Podés agregar varios."
            </p>

            <div class="product-rows">
                {move || {
                    productos
                        .get()
                        .into_iter()
                        .enumerate()
                        .map(|(idx, row)| view! { <ProductRowView vm=vm idx=idx row=row /> })
                        .collect_view()
                }}
            </div>

            <div class="product-actions">
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| vm.add_product()
                >
                    "Agregar producto"
                </Button>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| vm.request_remove_all()
                >
                    "Eliminar todos"
                </Button>
            </div>
        </section>
    }
}

#[component]
fn ProductRowView(vm: CheckerVm, idx: usize, row: ProductRow) -> impl IntoView {
    let is_last_row = vm.is_last_row();

    view! {
        <div class="product-row">
            <div class="product-row__title">{format!("Producto {}", idx + 1)}</div>
            <div class="product-row__fields">
                <div class="form__group" id=format!("producto-{idx}-descripcion")>
                    <label class="form__label">"Descripción *"</label>
                    <Textarea
                        value=row.descripcion
                        placeholder="Ej: Reloj inteligente con Bluetooth"
                        attr:rows=3
                    />
                </div>
                <div class="form__group" id=format!("producto-{idx}-link")>
                    <label class="form__label">"Link *"</label>
                    <Input value=row.link placeholder="https://..." />
                </div>
            </div>
            <Button
                appearance=ButtonAppearance::Transparent
                disabled=is_last_row
                on_click=move |_| vm.request_remove(idx)
            >
                "Eliminar"
            </Button>
        </div>
    }
}
