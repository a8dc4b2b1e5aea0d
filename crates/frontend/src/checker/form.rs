//! Plain-data snapshot of the form and payload derivation.
//!
//! The view model owns reactive signals; everything that must be
//! validated or serialized works on this snapshot instead, so the rules
//! stay pure and testable.

use contracts::checker::{ContactDto, ProductDto, SubmissionPayload, SUBMISSION_SOURCE};

use crate::shared::text_utils::strip_row_label;

/// Origin country selector. `Otro` pairs with a free-text country.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Origin {
    #[default]
    China,
    Otro,
}

impl Origin {
    pub fn label(self) -> &'static str {
        match self {
            Origin::China => "China",
            Origin::Otro => "Otro",
        }
    }

    pub fn from_label(label: &str) -> Self {
        if label == "Otro" {
            Origin::Otro
        } else {
            Origin::China
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductDraft {
    pub descripcion: String,
    pub link: String,
}

impl ProductDraft {
    /// Both fields filled after trimming.
    pub fn is_complete(&self) -> bool {
        !self.descripcion.trim().is_empty() && !self.link.trim().is_empty()
    }

    /// Nothing filled at all.
    pub fn is_blank(&self) -> bool {
        self.descripcion.trim().is_empty() && self.link.trim().is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    pub nombre: String,
    pub email: String,
    pub telefono: String,
    pub origen: Origin,
    pub otro_pais: String,
    pub productos: Vec<ProductDraft>,
}

impl FormData {
    pub fn has_complete_product(&self) -> bool {
        self.productos.iter().any(ProductDraft::is_complete)
    }

    /// Country that goes out on the wire: the custom one when `Otro` is
    /// selected and filled, the selector label otherwise.
    pub fn resolved_origin(&self) -> String {
        match self.origen {
            Origin::Otro if !self.otro_pais.trim().is_empty() => {
                self.otro_pais.trim().to_string()
            }
            other => other.label().to_string(),
        }
    }

    /// Build the wire payload: trimmed contact fields, resolved origin,
    /// complete products only, row labels stripped from descriptions.
    pub fn to_payload(&self, timestamp: String) -> SubmissionPayload {
        SubmissionPayload {
            timestamp,
            origen: SUBMISSION_SOURCE.to_string(),
            contacto: ContactDto {
                nombre: self.nombre.trim().to_string(),
                email: self.email.trim().to_string(),
                telefono: self.telefono.trim().to_string(),
            },
            pais_origen: self.resolved_origin(),
            productos: self
                .productos
                .iter()
                .filter(|p| p.is_complete())
                .map(|p| ProductDto {
                    descripcion: strip_row_label(p.descripcion.trim()).to_string(),
                    link: p.link.trim().to_string(),
                })
                .collect(),
        }
    }
}
