//! Request and response shapes for intent classification.

use serde::{Deserialize, Serialize};

/// Inbound request body for `POST /api/find-service`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FindServiceRequest {
    /// Free-text customer message.
    #[serde(default)]
    pub intent: String,
}

/// Classification produced by the external model.
///
/// Not validated against the registry: the model may return any id/name pair.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceData {
    #[serde(default)]
    pub service_id: i32,
    #[serde(default)]
    pub service_name: String,
}

impl ServiceData {
    pub fn new(service_id: i32, service_name: impl Into<String>) -> Self {
        Self {
            service_id,
            service_name: service_name.into(),
        }
    }
}

/// Wire-level result envelope.
///
/// `success` is true iff no error occurred and no coherence diagnostics were
/// raised.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FindServiceResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<ServiceData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub diagnostics: Vec<String>,
}

impl FindServiceResponse {
    /// Envelope for a completed classification.
    pub fn classified(data: ServiceData, diagnostics: Vec<String>) -> Self {
        Self {
            success: diagnostics.is_empty(),
            data: Some(data),
            error: None,
            diagnostics,
        }
    }

    /// Envelope for a failed request.
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
            diagnostics: Vec::new(),
        }
    }
}

/// Body of `GET /api/health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classified_without_diagnostics_omits_optional_fields() {
        let response =
            FindServiceResponse::classified(ServiceData::new(9, "Desbloqueio de Cartão"), vec![]);
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(
            json,
            r#"{"success":true,"data":{"service_id":9,"service_name":"Desbloqueio de Cartão"}}"#
        );
    }

    #[test]
    fn test_classified_with_diagnostics_is_unsuccessful() {
        let response = FindServiceResponse::classified(
            ServiceData::new(0, "não mapeado"),
            vec!["response.service_id must be > 0".to_string()],
        );
        assert!(!response.success);

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["diagnostics"][0], "response.service_id must be > 0");
    }

    #[test]
    fn test_failure_shape() {
        let json = serde_json::to_string(&FindServiceResponse::failure("invalid request: x"))
            .unwrap();
        assert_eq!(json, r#"{"success":false,"error":"invalid request: x"}"#);
    }

    #[test]
    fn test_request_missing_intent_defaults_to_empty() {
        let request: FindServiceRequest = serde_json::from_str("{}").unwrap();
        assert!(request.intent.is_empty());
    }
}
