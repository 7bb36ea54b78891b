use crate::error::{A11yError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Findings returned by one successful scan.
///
/// Individual records are kept exactly as the engine produced them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScanResult {
    violations: Vec<Value>,
    passes: Vec<Value>,
}

impl ScanResult {
    pub(crate) fn new(violations: Vec<Value>, passes: Vec<Value>) -> Self {
        Self { violations, passes }
    }

    /// Rules the page failed
    pub fn violations(&self) -> &[Value] {
        &self.violations
    }

    /// Rules the page passed
    pub fn passes(&self) -> &[Value] {
        &self.passes
    }

    /// Check if the engine reported any violation
    pub fn has_violations(&self) -> bool {
        !self.violations.is_empty()
    }

    /// Consume the result, returning `(violations, passes)`
    pub fn into_parts(self) -> (Vec<Value>, Vec<Value>) {
        (self.violations, self.passes)
    }

    /// Convert the result to pretty JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Build a ScanResult from a response whose `violations` and `passes` fields
/// are already known to be present
pub fn extract(response: &Value) -> Result<ScanResult> {
    let violations = findings(response, "violations")?;
    let passes = findings(response, "passes")?;
    Ok(ScanResult::new(violations, passes))
}

fn findings(response: &Value, field: &str) -> Result<Vec<Value>> {
    match response.get(field) {
        Some(Value::Array(items)) => Ok(items.clone()),
        Some(other) => Err(A11yError::InvalidResponse(format!(
            "Expected '{}' to be a list of findings, got {}",
            field, other
        ))),
        None => Err(A11yError::invalid_response()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_empty_lists() {
        let result = extract(&json!({"violations": [], "passes": []})).unwrap();
        assert!(result.violations().is_empty());
        assert!(result.passes().is_empty());
        assert!(!result.has_violations());
    }

    #[test]
    fn test_extract_keeps_records_unmodified() {
        let violation = json!({"id": "image-alt", "impact": "critical", "nodes": [{"target": ["img"]}]});
        let pass = json!({"id": "html-has-lang", "nodes": []});
        let response = json!({
            "violations": [violation.clone(), violation.clone()],
            "passes": [pass.clone()],
            "url": "https://example.com"
        });

        let result = extract(&response).unwrap();
        assert_eq!(result.violations(), [violation.clone(), violation]);
        assert_eq!(result.passes(), [pass]);
        assert!(result.has_violations());
    }

    #[test]
    fn test_extract_rejects_non_list() {
        let err = extract(&json!({"violations": {}, "passes": []})).unwrap_err();
        assert!(matches!(err, A11yError::InvalidResponse(_)));
    }

    #[test]
    fn test_into_parts_and_json() {
        let result = ScanResult::new(vec![json!({"id": "label"})], vec![]);
        let json = result.to_json().unwrap();
        assert!(json.contains("\"violations\""));
        assert!(json.contains("\"label\""));

        let (violations, passes) = result.into_parts();
        assert_eq!(violations.len(), 1);
        assert!(passes.is_empty());
    }
}
