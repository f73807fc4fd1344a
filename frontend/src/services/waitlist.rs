//! HTTP submission of waitlist signups.

use collabhub::WaitlistPayload;
use gloo_net::http::Request;

use crate::config::WAITLIST_PATH;
use crate::{AppError, AppResult};

/// Full endpoint URL for a given API base.
pub fn waitlist_url(api_url: &str) -> String {
    format!("{}{}", api_url.trim_end_matches('/'), WAITLIST_PATH)
}

/// POST the payload as JSON. Any 2xx is success.
pub async fn submit_waitlist(payload: &WaitlistPayload, api_url: &str) -> AppResult<()> {
    let url = waitlist_url(api_url);

    let request = Request::post(&url)
        .json(payload)
        .map_err(|e| AppError::Network(format!("não foi possível montar a requisição: {}", e)))?;

    let response = request
        .send()
        .await
        .map_err(|e| AppError::Network(format!("requisição HTTP falhou: {}", e)))?;

    if !response.ok() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "erro desconhecido".to_string());
        return Err(AppError::Submission {
            status: response.status(),
            body,
        });
    }

    log::info!("📨 Waitlist signup accepted for {}", payload.email);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use collabhub::SubmissionGate;

    fn payload() -> WaitlistPayload {
        WaitlistPayload {
            name: "Maria".into(),
            email: "maria@example.com".into(),
            instagram: "maria".into(),
            followers: Some(1200),
            other_networks: vec!["tiktok".into()],
        }
    }

    #[test]
    fn test_waitlist_url() {
        assert_eq!(waitlist_url("http://localhost:3000"), "http://localhost:3000/api/waitlist");
        assert_eq!(waitlist_url("https://api.example.com/"), "https://api.example.com/api/waitlist");
    }

    #[test]
    fn test_payload_serialization() {
        let json: serde_json::Value = serde_json::to_value(payload()).unwrap();
        assert_eq!(json["instagram"], "maria");
        assert_eq!(json["followers"], 1200);
        assert_eq!(json["otherNetworks"][0], "tiktok");
    }

    #[test]
    fn test_gated_submission_refuses_double_submit() {
        let gate = SubmissionGate::new();
        let payload = payload();

        // Futures are never polled here, so no request leaves the test
        let first = gate.submit(submit_waitlist(&payload, "http://localhost:3000"));
        assert!(first.is_some());
        assert!(gate.is_busy());
        assert!(gate
            .submit(submit_waitlist(&payload, "http://localhost:3000"))
            .is_none());

        drop(first);
        assert!(!gate.is_busy());
        assert!(gate
            .submit(submit_waitlist(&payload, "http://localhost:3000"))
            .is_some());
    }
}
