//! Lightweight sanity checks between a request and its classification.
//!
//! Findings are reported to the caller and never block the response.

use crate::domain::{FindServiceRequest, ServiceData};

/// Stem shared by "seguro", "seguradora", "segurança"...
const INSURANCE_STEM: &str = "segur";

/// Check a `(request, data)` pair and return every diagnostic found.
///
/// A missing request or missing data ends the checks early; every other
/// finding is cumulative.
pub fn analyze_coherence(
    request: Option<&FindServiceRequest>,
    data: Option<&ServiceData>,
) -> Vec<String> {
    let mut issues = Vec::with_capacity(4);

    let Some(request) = request else {
        issues.push("request is nil".to_string());
        return issues;
    };

    if request.intent.is_empty() {
        issues.push("request.intent is empty".to_string());
    }

    let Some(data) = data else {
        issues.push("response data is nil".to_string());
        return issues;
    };

    if data.service_id <= 0 {
        issues.push("response.service_id must be > 0".to_string());
    }

    if data.service_name.is_empty() {
        issues.push("response.service_name is empty".to_string());
    }

    // Naive topic check, intentionally narrow.
    if !request.intent.is_empty() && !data.service_name.is_empty() {
        let intent = request.intent.to_lowercase();
        let name = data.service_name.to_lowercase();
        if !intent.contains(INSURANCE_STEM) && name.contains(INSURANCE_STEM) {
            issues.push(
                "potential mismatch: intent may not relate to returned service name".to_string(),
            );
        }
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(intent: &str) -> FindServiceRequest {
        FindServiceRequest {
            intent: intent.to_string(),
        }
    }

    #[test]
    fn test_coherent_pair_has_no_diagnostics() {
        let issues = analyze_coherence(
            Some(&request("quero desbloquear meu cartao")),
            Some(&ServiceData::new(9, "Desbloqueio de Cartão")),
        );
        assert!(issues.is_empty());
    }

    #[test]
    fn test_missing_request_is_terminal() {
        let issues = analyze_coherence(None, Some(&ServiceData::new(0, "")));
        assert_eq!(issues, vec!["request is nil"]);
    }

    #[test]
    fn test_empty_intent_only() {
        let issues = analyze_coherence(Some(&request("")), Some(&ServiceData::new(1, "X")));
        assert_eq!(issues, vec!["request.intent is empty"]);
    }

    #[test]
    fn test_missing_data_is_terminal_but_keeps_earlier_findings() {
        let issues = analyze_coherence(Some(&request("")), None);
        assert_eq!(issues, vec!["request.intent is empty", "response data is nil"]);

        let issues = analyze_coherence(Some(&request("oi")), None);
        assert_eq!(issues, vec!["response data is nil"]);
    }

    #[test]
    fn test_non_positive_id() {
        let issues = analyze_coherence(
            Some(&request("hello world")),
            Some(&ServiceData::new(0, "não mapeado")),
        );
        assert_eq!(issues, vec!["response.service_id must be > 0"]);

        let issues = analyze_coherence(Some(&request("x")), Some(&ServiceData::new(-3, "X")));
        assert!(issues.contains(&"response.service_id must be > 0".to_string()));
    }

    #[test]
    fn test_empty_service_name() {
        let issues = analyze_coherence(Some(&request("ajuda")), Some(&ServiceData::new(15, "")));
        assert_eq!(issues, vec!["response.service_name is empty"]);
    }

    #[test]
    fn test_insurance_mismatch() {
        let issues = analyze_coherence(
            Some(&request("preciso de ajuda")),
            Some(&ServiceData::new(8, "Telefones de seguradoras")),
        );
        assert_eq!(issues.len(), 1);
        assert!(issues[0].starts_with("potential mismatch"));
    }

    #[test]
    fn test_insurance_match_is_case_insensitive() {
        let issues = analyze_coherence(
            Some(&request("Quero o telefone do SEGURO")),
            Some(&ServiceData::new(8, "Telefones de seguradoras")),
        );
        assert!(issues.is_empty());
    }
}
