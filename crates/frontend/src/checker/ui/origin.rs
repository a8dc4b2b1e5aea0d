use contracts::checker::DESTINATION_COUNTRY;
use leptos::prelude::*;
use thaw::*;

use crate::checker::form::Origin;
use crate::checker::view_model::CheckerVm;

/// Origin country selector; the destination is fixed.
#[component]
pub fn OriginSection(vm: CheckerVm) -> impl IntoView {
    let origen = vm.origen;
    let otro_pais = vm.otro_pais;

    // Radio group value (for thaw RadioGroup API)
    let radio_value = RwSignal::new(origen.get_untracked().label().to_string());

    // Sync radio_value changes to the typed origin signal
    Effect::new(move |prev: Option<String>| {
        let current = radio_value.get();
        if prev.is_some() {
            origen.set(Origin::from_label(&current));
        }
        current
    });

    // Keep the radio in step when the origin changes programmatically,
    // e.g. the reset after a successful submission
    Effect::new(move || {
        let label = origen.get().label();
        if radio_value.get_untracked() != label {
            radio_value.set(label.to_string());
        }
    });

    view! {
        <section class="card form-section">
            <h2>"País de origen de los productos a validar"</h2>
            <p class="form-section__hint">
                {format!("Se validan para importar a {}. Seleccioná el país de origen:", DESTINATION_COUNTRY)}
            </p>
            <RadioGroup value=radio_value>
                <Radio value="China" label="China" />
                <Radio value="Otro" label="Otro" />
            </RadioGroup>

            <Show when=move || origen.get() == Origin::Otro>
                <div class="form__group" id="origen-otro-pais">
                    <label class="form__label">"¿De qué país? *"</label>
                    <Input value=otro_pais placeholder="Especificá el país" />
                </div>
            </Show>
        </section>
    }
}
