//! Submit-time validation.
//!
//! Pure over the form snapshot; reports every violation at once and
//! points each one at a focusable field group.

use super::form::{FormData, Origin};

/// Identifies the offending field and maps it to the DOM id of its
/// form group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Nombre,
    Email,
    Telefono,
    OtroPais,
    ProductoDescripcion(usize),
    ProductoLink(usize),
    Productos,
}

impl Field {
    pub fn dom_id(&self) -> String {
        match self {
            Field::Nombre => "contacto-nombre".to_string(),
            Field::Email => "contacto-email".to_string(),
            Field::Telefono => "contacto-telefono".to_string(),
            Field::OtroPais => "origen-otro-pais".to_string(),
            Field::ProductoDescripcion(idx) => format!("producto-{idx}-descripcion"),
            Field::ProductoLink(idx) => format!("producto-{idx}-link"),
            Field::Productos => "productos".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub field: Field,
    pub message: String,
}

impl Violation {
    fn new(field: Field, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Collect every violation in display order. An empty result means the
/// form may be submitted.
pub fn validate(form: &FormData) -> Vec<Violation> {
    let mut violations = Vec::new();

    if form.nombre.trim().is_empty() {
        violations.push(Violation::new(Field::Nombre, "Ingresá tu nombre completo."));
    }
    if form.email.trim().is_empty() {
        violations.push(Violation::new(Field::Email, "Ingresá tu correo electrónico."));
    }
    if form.telefono.trim().is_empty() {
        violations.push(Violation::new(Field::Telefono, "Ingresá tu teléfono."));
    }
    if form.origen == Origin::Otro && form.otro_pais.trim().is_empty() {
        violations.push(Violation::new(Field::OtroPais, "Especificá el país de origen."));
    }

    // Partially filled rows name the missing half; blank rows are
    // covered by the generic check below.
    for (idx, producto) in form.productos.iter().enumerate() {
        if producto.is_blank() {
            continue;
        }
        let numero = idx + 1;
        if producto.descripcion.trim().is_empty() {
            violations.push(Violation::new(
                Field::ProductoDescripcion(idx),
                format!("Producto {numero}: falta la descripción."),
            ));
        }
        if producto.link.trim().is_empty() {
            violations.push(Violation::new(
                Field::ProductoLink(idx),
                format!("Producto {numero}: falta el link."),
            ));
        }
    }

    if violations.is_empty() && !form.has_complete_product() {
        violations.push(Violation::new(
            Field::Productos,
            "Cargá al menos un producto completo (descripción y link).",
        ));
    }

    violations
}
