use serde::{Deserialize, Serialize};

/// Fixed destination market for every submission.
pub const DESTINATION_COUNTRY: &str = "Argentina";

/// Provenance tag stamped into every payload so the automation can tell
/// which client produced it.
pub const SUBMISSION_SOURCE: &str = "leptos-courier-checker";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDto {
    pub nombre: String,
    pub email: String,
    pub telefono: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDto {
    pub descripcion: String,
    pub link: String,
}

/// JSON body of the webhook POST. Field names are part of the wire
/// contract consumed by the downstream automation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionPayload {
    pub timestamp: String,
    pub origen: String,
    pub contacto: ContactDto,
    pub pais_origen: String,
    pub productos: Vec<ProductDto>,
}

/// Response envelope of the webhook. The endpoint is free-form: both
/// fields are optional and unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct WebhookAck {
    #[serde(default)]
    pub ok: Option<bool>,
    #[serde(default)]
    pub error: Option<String>,
}

impl WebhookAck {
    /// Parse a response body, tolerating anything that is not a JSON
    /// object by falling back to the empty envelope.
    pub fn from_body(body: &str) -> Self {
        serde_json::from_str(body).unwrap_or_default()
    }

    /// Whether the submission went through. The explicit `ok` flag wins;
    /// without one the HTTP-level outcome decides.
    pub fn accepted(&self, http_ok: bool) -> bool {
        self.ok.unwrap_or(http_ok)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_payload() -> SubmissionPayload {
        SubmissionPayload {
            timestamp: "2026-08-05T12:00:00.000Z".to_string(),
            origen: SUBMISSION_SOURCE.to_string(),
            contacto: ContactDto {
                nombre: "Ana Pérez".to_string(),
                email: "ana@correo.com".to_string(),
                telefono: "+54 9 11 5555-5555".to_string(),
            },
            pais_origen: "China".to_string(),
            productos: vec![ProductDto {
                descripcion: "Reloj inteligente".to_string(),
                link: "https://example.com/reloj".to_string(),
            }],
        }
    }

    #[test]
    fn payload_serializes_with_contract_field_names() {
        let value = serde_json::to_value(sample_payload()).unwrap();
        let object = value.as_object().unwrap();

        let mut keys: Vec<_> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            ["contacto", "origen", "pais_origen", "productos", "timestamp"]
        );

        let contacto = object["contacto"].as_object().unwrap();
        let mut contacto_keys: Vec<_> = contacto.keys().map(String::as_str).collect();
        contacto_keys.sort_unstable();
        assert_eq!(contacto_keys, ["email", "nombre", "telefono"]);

        let producto = value["productos"][0].as_object().unwrap();
        let mut producto_keys: Vec<_> = producto.keys().map(String::as_str).collect();
        producto_keys.sort_unstable();
        assert_eq!(producto_keys, ["descripcion", "link"]);
    }

    #[test]
    fn ack_parses_explicit_flags() {
        let ack = WebhookAck::from_body(r#"{"ok": false, "error": "cupo lleno"}"#);
        assert_eq!(ack.ok, Some(false));
        assert_eq!(ack.error.as_deref(), Some("cupo lleno"));
    }

    #[test]
    fn ack_ignores_unknown_fields() {
        let ack = WebhookAck::from_body(r#"{"ok": true, "jobId": 42, "queued": []}"#);
        assert_eq!(ack.ok, Some(true));
        assert_eq!(ack.error, None);
    }

    #[test]
    fn ack_tolerates_non_json_bodies() {
        assert_eq!(WebhookAck::from_body(""), WebhookAck::default());
        assert_eq!(WebhookAck::from_body("Accepted"), WebhookAck::default());
        assert_eq!(WebhookAck::from_body("[1, 2, 3]"), WebhookAck::default());
    }

    #[test]
    fn explicit_flag_overrides_http_status() {
        let rejected = WebhookAck {
            ok: Some(false),
            error: None,
        };
        assert!(!rejected.accepted(true));

        let accepted = WebhookAck {
            ok: Some(true),
            error: None,
        };
        assert!(accepted.accepted(false));
    }

    #[test]
    fn missing_flag_falls_back_to_http_status() {
        assert!(WebhookAck::default().accepted(true));
        assert!(!WebhookAck::default().accepted(false));
    }
}
