//! Webhook submission.

use contracts::checker::{SubmissionPayload, WebhookAck};
use gloo_net::http::Request;

use crate::shared::config;

const SUBMIT_FAILED: &str = "No pudimos enviar el formulario.";

/// POST the payload to the configured webhook.
///
/// `Err` carries the user-facing message: missing configuration,
/// transport failure, or the endpoint's own error text. The response
/// body is interpreted leniently (see [`WebhookAck`]). Single
/// best-effort attempt, no retry.
pub async fn submit(payload: &SubmissionPayload) -> Result<(), String> {
    let url = config::webhook_url().ok_or("Falta configurar la URL del webhook")?;

    let response = Request::post(&url)
        .json(payload)
        .map_err(|e| format!("No se pudo armar el pedido: {e}"))?
        .send()
        .await
        .map_err(|e| format!("Error de red: {e}"))?;

    let http_ok = response.ok();
    let ack = match response.text().await {
        Ok(body) => WebhookAck::from_body(&body),
        Err(_) => WebhookAck::default(),
    };

    if ack.accepted(http_ok) {
        Ok(())
    } else {
        Err(ack.error.unwrap_or_else(|| SUBMIT_FAILED.to_string()))
    }
}
