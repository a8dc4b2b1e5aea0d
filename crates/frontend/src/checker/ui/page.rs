//! Page composition for the checker form.
//!
//! Thin wrapper that creates the ViewModel, renders the header and
//! banners, and routes to the form sections and dialogs.

use leptos::prelude::*;

use super::contact::ContactSection;
use super::modals::{ConfirmRemoveModal, SuccessModal};
use super::origin::OriginSection;
use super::products::ProductsSection;
use crate::checker::view_model::CheckerVm;

/// Single page of the app: the courier import checker form.
#[component]
pub fn CheckerPage() -> impl IntoView {
    let vm = CheckerVm::new();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    };

    view! {
        <main class="checker-page">
            <PageHeader />
            <CourierRulesNote />
            <Banners vm=vm />

            <form on:submit=on_submit>
                <ContactSection vm=vm />
                <OriginSection vm=vm />
                <ProductsSection vm=vm />
                <SubmitBar vm=vm />
            </form>

            <SuccessModal vm=vm />
            <ConfirmRemoveModal vm=vm />
        </main>
    }
}

#[component]
fn PageHeader() -> impl IntoView {
    view! {
        <header class="card page-header">
            <img src="/logo.png" alt="GlobalTrip" class="page-header__logo" />
            <div>
                <h1>"Chequeá tu importación antes de comprar"</h1>
                <p class="page-header__subtitle">
                    "Ingresá la info del producto y validá si cumple con las reglas de courier."
                </p>
            </div>
        </header>
    }
}

/// Courier caps are informational only; nothing in the form enforces
/// them.
#[component]
fn CourierRulesNote() -> impl IntoView {
    view! {
        <section class="card courier-note">
            <p class="courier-note__title">"Recordá las reglas del courier:"</p>
            <p>
                "El valor total de la compra no puede superar los "
                <strong>"3000 dólares"</strong>
                " y el peso de cada bulto no puede superar los "
                <strong>"50 kilogramos brutos"</strong>
                "."
            </p>
        </section>
    }
}

/// Submission error banner plus the violation list.
#[component]
fn Banners(vm: CheckerVm) -> impl IntoView {
    let notice = vm.notice;
    let violations = vm.violations;

    view! {
        <Show when=move || notice.get().is_some()>
            <div class="banner banner--error">
                {move || notice.get().unwrap_or_default()}
            </div>
        </Show>

        <Show when=move || !violations.get().is_empty()>
            <div class="banner banner--warning">
                <p>"Revisá estos campos antes de enviar:"</p>
                <ul>
                    {move || {
                        violations
                            .get()
                            .into_iter()
                            .map(|v| view! { <li>{v.message}</li> })
                            .collect_view()
                    }}
                </ul>
            </div>
        </Show>
    }
}

/// Sticky call-to-action. Disabled only while a request is in flight;
/// everything else is handled by validation on submit.
#[component]
fn SubmitBar(vm: CheckerVm) -> impl IntoView {
    let sending = vm.sending;

    view! {
        <div class="submit-bar">
            <button
                type="submit"
                class="btn-primary"
                disabled=move || sending.get()
            >
                {move || if sending.get() { "Enviando..." } else { "Validar productos" }}
            </button>
        </div>
    }
}
