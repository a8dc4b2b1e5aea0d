//! ViewModel for the checker form.
//!
//! Individual RwSignals per field for two-way binding, product rows
//! with their own signals, and UI state for the banners and dialogs.

use chrono::{SecondsFormat, Utc};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;
use super::form::{FormData, Origin, ProductDraft};
use super::validation::{self, Violation};
use crate::shared::dom_utils;

/// Which removal the confirmation dialog is asking about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveRequest {
    One(usize),
    All,
}

/// One editable product row.
#[derive(Clone, Copy)]
pub struct ProductRow {
    pub descripcion: RwSignal<String>,
    pub link: RwSignal<String>,
}

impl ProductRow {
    fn blank() -> Self {
        Self {
            descripcion: RwSignal::new(String::new()),
            link: RwSignal::new(String::new()),
        }
    }
}

/// ViewModel for the checker page
#[derive(Clone, Copy)]
pub struct CheckerVm {
    // === Form fields ===
    pub nombre: RwSignal<String>,
    pub email: RwSignal<String>,
    pub telefono: RwSignal<String>,
    pub origen: RwSignal<Origin>,
    pub otro_pais: RwSignal<String>,
    pub productos: RwSignal<Vec<ProductRow>>,

    // === UI state ===
    pub sending: RwSignal<bool>,
    pub notice: RwSignal<Option<String>>,
    pub violations: RwSignal<Vec<Violation>>,
    pub confirm: RwSignal<Option<RemoveRequest>>,
    pub success_open: RwSignal<bool>,
    pub submitted_email: RwSignal<String>,
}

impl CheckerVm {
    pub fn new() -> Self {
        Self {
            nombre: RwSignal::new(String::new()),
            email: RwSignal::new(String::new()),
            telefono: RwSignal::new(String::new()),
            origen: RwSignal::new(Origin::China),
            otro_pais: RwSignal::new(String::new()),
            productos: RwSignal::new(vec![ProductRow::blank()]),

            sending: RwSignal::new(false),
            notice: RwSignal::new(None),
            violations: RwSignal::new(Vec::new()),
            confirm: RwSignal::new(None),
            success_open: RwSignal::new(false),
            submitted_email: RwSignal::new(String::new()),
        }
    }

    // === Derived signals ===

    /// Delete is disabled on the last remaining row.
    pub fn is_last_row(&self) -> Signal<bool> {
        let productos = self.productos;
        Signal::derive(move || productos.get().len() == 1)
    }

    // === Product list commands ===

    pub fn add_product(&self) {
        self.productos.update(|rows| rows.push(ProductRow::blank()));
    }

    /// Ask to remove one row. The last remaining row cannot be removed.
    pub fn request_remove(&self, idx: usize) {
        if self.productos.with_untracked(|rows| rows.len()) > 1 {
            self.confirm.set(Some(RemoveRequest::One(idx)));
        }
    }

    pub fn request_remove_all(&self) {
        self.confirm.set(Some(RemoveRequest::All));
    }

    pub fn cancel_remove(&self) {
        self.confirm.set(None);
    }

    /// Execute the removal the dialog was asking about. The list never
    /// drops below one row; "remove all" re-seeds a single blank one.
    pub fn confirm_remove(&self) {
        match self.confirm.get_untracked() {
            Some(RemoveRequest::One(idx)) => {
                self.productos.update(|rows| {
                    if rows.len() > 1 && idx < rows.len() {
                        rows.remove(idx);
                    }
                });
            }
            Some(RemoveRequest::All) => {
                self.productos.set(vec![ProductRow::blank()]);
            }
            None => {}
        }
        self.confirm.set(None);
    }

    // === Snapshot ===

    /// Plain-data copy of the current form for validation and payload
    /// building.
    pub fn snapshot(&self) -> FormData {
        FormData {
            nombre: self.nombre.get_untracked(),
            email: self.email.get_untracked(),
            telefono: self.telefono.get_untracked(),
            origen: self.origen.get_untracked(),
            otro_pais: self.otro_pais.get_untracked(),
            productos: self
                .productos
                .get_untracked()
                .iter()
                .map(|row| ProductDraft {
                    descripcion: row.descripcion.get_untracked(),
                    link: row.link.get_untracked(),
                })
                .collect(),
        }
    }

    // === Commands ===

    /// Validate and, if clean, send. One in-flight request at a time.
    pub fn submit(&self) {
        if self.sending.get_untracked() {
            return;
        }

        let form = self.snapshot();
        self.notice.set(None);

        let violations = validation::validate(&form);
        if let Some(first) = violations.first() {
            let target = first.field.dom_id();
            self.violations.set(violations);
            dom_utils::focus_field_group(&target);
            return;
        }

        self.violations.set(Vec::new());
        self.sending.set(true);

        let this = *self;
        spawn_local(async move {
            let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
            let payload = form.to_payload(timestamp);

            match api::submit(&payload).await {
                Ok(()) => {
                    this.submitted_email.set(payload.contacto.email.clone());
                    this.reset();
                    this.success_open.set(true);
                }
                Err(message) => {
                    log::error!("webhook submission failed: {message}");
                    this.notice.set(Some(message));
                }
            }
            this.sending.set(false);
        });
    }

    /// Clear the whole form back to its initial state.
    pub fn reset(&self) {
        self.nombre.set(String::new());
        self.email.set(String::new());
        self.telefono.set(String::new());
        self.origen.set(Origin::China);
        self.otro_pais.set(String::new());
        self.productos.set(vec![ProductRow::blank()]);
        self.violations.set(Vec::new());
        self.notice.set(None);
    }

    pub fn close_success(&self) {
        self.success_open.set(false);
    }
}

impl Default for CheckerVm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill_row(row: &ProductRow, descripcion: &str, link: &str) {
        row.descripcion.set(descripcion.to_string());
        row.link.set(link.to_string());
    }

    #[test]
    fn starts_with_one_blank_row() {
        let vm = CheckerVm::new();
        let snapshot = vm.snapshot();
        assert_eq!(snapshot.productos.len(), 1);
        assert!(snapshot.productos[0].is_blank());
    }

    #[test]
    fn removing_the_last_row_is_rejected() {
        let vm = CheckerVm::new();
        vm.request_remove(0);
        assert_eq!(vm.confirm.get_untracked(), None);
        assert_eq!(vm.productos.with_untracked(Vec::len), 1);
    }

    #[test]
    fn confirmed_remove_keeps_at_least_one_row() {
        let vm = CheckerVm::new();
        vm.add_product();
        vm.add_product();

        vm.request_remove(1);
        assert_eq!(
            vm.confirm.get_untracked(),
            Some(RemoveRequest::One(1))
        );
        vm.confirm_remove();

        assert_eq!(vm.productos.with_untracked(Vec::len), 2);
        assert_eq!(vm.confirm.get_untracked(), None);
    }

    #[test]
    fn remove_all_reseeds_a_single_blank_row() {
        let vm = CheckerVm::new();
        vm.productos.with_untracked(|rows| fill_row(&rows[0], "Reloj", "https://x"));
        vm.add_product();

        vm.request_remove_all();
        vm.confirm_remove();

        let snapshot = vm.snapshot();
        assert_eq!(snapshot.productos.len(), 1);
        assert!(snapshot.productos[0].is_blank());
    }

    #[test]
    fn cancel_leaves_the_list_untouched() {
        let vm = CheckerVm::new();
        vm.add_product();

        vm.request_remove(0);
        vm.cancel_remove();

        assert_eq!(vm.confirm.get_untracked(), None);
        assert_eq!(vm.productos.with_untracked(Vec::len), 2);
    }

    #[test]
    fn reset_clears_contact_and_products() {
        let vm = CheckerVm::new();
        vm.nombre.set("Ana".to_string());
        vm.email.set("ana@correo.com".to_string());
        vm.telefono.set("123".to_string());
        vm.origen.set(Origin::Otro);
        vm.otro_pais.set("Vietnam".to_string());
        vm.add_product();
        vm.productos.with_untracked(|rows| fill_row(&rows[1], "Reloj", "https://x"));
        vm.notice.set(Some("algo falló".to_string()));

        vm.reset();

        let snapshot = vm.snapshot();
        assert_eq!(snapshot.nombre, "");
        assert_eq!(snapshot.email, "");
        assert_eq!(snapshot.telefono, "");
        assert_eq!(snapshot.origen, Origin::China);
        assert_eq!(snapshot.otro_pais, "");
        assert_eq!(snapshot.productos.len(), 1);
        assert!(snapshot.productos[0].is_blank());
        assert_eq!(vm.notice.get_untracked(), None);
    }

    #[test]
    fn snapshot_copies_every_field() {
        let vm = CheckerVm::new();
        vm.nombre.set("Ana".to_string());
        vm.origen.set(Origin::Otro);
        vm.otro_pais.set("Vietnam".to_string());
        vm.productos.with_untracked(|rows| fill_row(&rows[0], "Reloj", "https://x"));

        let snapshot = vm.snapshot();
        assert_eq!(snapshot.nombre, "Ana");
        assert_eq!(snapshot.origen, Origin::Otro);
        assert_eq!(snapshot.otro_pais, "Vietnam");
        assert!(snapshot.productos[0].is_complete());
    }
}
