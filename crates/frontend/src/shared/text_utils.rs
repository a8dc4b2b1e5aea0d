//! Small text helpers for payload building.

/// Strip a leading `Producto N:` label from a product description.
///
/// Users sometimes copy the row heading into the description field; the
/// downstream automation wants the bare description.
/// Example: "Producto 2: Reloj inteligente" -> "Reloj inteligente"
pub fn strip_row_label(descripcion: &str) -> &str {
    let Some(rest) = descripcion.strip_prefix("Producto ") else {
        return descripcion;
    };
    let digits = rest.chars().take_while(char::is_ascii_digit).count();
    if digits == 0 {
        return descripcion;
    }
    match rest[digits..].strip_prefix(':') {
        Some(after) => after.trim_start(),
        None => descripcion,
    }
}
