use crate::driver::ScriptExecutor;
use crate::error::{A11yError, Result};
use crate::scan::options::ScanOptions;
use crate::scan::result::{self, ScanResult};
use crate::scan::scope::{ScanContext, ScopeManager};
use serde_json::Value;
use std::time::Duration;

/// Function called in the page for every scan. Arguments: context, options, engine global.
pub const A11Y_CHECK_JS: &str = include_str!("a11y_check.js");

/// Bound on a single scan
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Global under which the scan engine registers itself
pub const DEFAULT_ENGINE_GLOBAL: &str = "axe";

/// Submits scans to an executor and validates what comes back
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanInvoker {
    timeout: Duration,
    engine_global: String,
}

impl Default for ScanInvoker {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            engine_global: DEFAULT_ENGINE_GLOBAL.to_string(),
        }
    }
}

impl ScanInvoker {
    /// Create an invoker with the default 30 second bound and the `axe` global
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set the execution bound
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Builder method: set the engine global
    pub fn engine_global(mut self, engine_global: impl Into<String>) -> Self {
        self.engine_global = engine_global.into();
        self
    }

    /// The execution bound applied to each call
    pub fn execution_timeout(&self) -> Duration {
        self.timeout
    }

    /// Arguments for a document scan over the configured scope
    pub fn document_arguments(&self, scope: &ScopeManager, options: &ScanOptions) -> Vec<Value> {
        let context = scope.resolve();
        log::debug!("Resolved scan context: {}", context.kind());
        self.arguments(&context, options)
    }

    /// Arguments for a scan of the element the function is bound to
    pub fn element_arguments(&self, options: &ScanOptions) -> Vec<Value> {
        vec![Value::Null, options.to_argument(), Value::from(self.engine_global.as_str())]
    }

    fn arguments(&self, context: &ScanContext, options: &ScanOptions) -> Vec<Value> {
        vec![context.to_argument(), options.to_argument(), Value::from(self.engine_global.as_str())]
    }

    /// Scan the page, scoped by the configured selectors
    pub fn analyze_document<E>(&self, page: &E, scope: &ScopeManager, options: &ScanOptions) -> Result<ScanResult>
    where
        E: ScriptExecutor + ?Sized,
    {
        let args = self.document_arguments(scope, options);
        self.execute(page, args)
    }

    /// Scan a single element. Configured selectors do not apply.
    pub fn analyze_element<E>(&self, element: &E, options: &ScanOptions) -> Result<ScanResult>
    where
        E: ScriptExecutor + ?Sized,
    {
        log::debug!("Scanning bound element, selector scope ignored");
        let args = self.element_arguments(options);
        self.execute(element, args)
    }

    fn execute<E>(&self, executor: &E, args: Vec<Value>) -> Result<ScanResult>
    where
        E: ScriptExecutor + ?Sized,
    {
        let response = executor.call_function(A11Y_CHECK_JS, args, self.timeout)?;
        validate(&response)?;
        result::extract(&response)
    }
}

/// Check that a raw response carries both `violations` and `passes`
pub fn validate(response: &Value) -> Result<()> {
    let missing_violations = response.get("violations").is_none();
    let missing_passes = response.get("passes").is_none();

    if missing_violations || missing_passes {
        return Err(A11yError::invalid_response());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::cell::RefCell;

    /// Records each call and answers with a canned response
    struct RecordingExecutor {
        response: Result<Value>,
        calls: RefCell<Vec<(String, Vec<Value>, Duration)>>,
    }

    impl RecordingExecutor {
        fn returning(response: Value) -> Self {
            Self { response: Ok(response), calls: RefCell::new(Vec::new()) }
        }
    }

    impl ScriptExecutor for RecordingExecutor {
        fn call_function(&self, declaration: &str, args: Vec<Value>, timeout: Duration) -> Result<Value> {
            self.calls.borrow_mut().push((declaration.to_string(), args, timeout));
            match &self.response {
                Ok(value) => Ok(value.clone()),
                Err(_) => Err(A11yError::ExecutionTimeout(timeout)),
            }
        }
    }

    fn empty_response() -> Value {
        json!({"violations": [], "passes": []})
    }

    #[test]
    fn test_validate_accepts_well_formed() {
        assert!(validate(&empty_response()).is_ok());
    }

    #[test]
    fn test_validate_missing_fields_share_one_error() {
        let no_violations = validate(&json!({"passes": []})).unwrap_err();
        let no_passes = validate(&json!({"violations": []})).unwrap_err();
        let neither = validate(&json!(null)).unwrap_err();

        assert_eq!(no_violations.to_string(), no_passes.to_string());
        assert_eq!(no_passes.to_string(), neither.to_string());
        assert!(matches!(no_violations, A11yError::InvalidResponse(_)));
    }

    #[test]
    fn test_document_scan_with_default_settings() {
        let executor = RecordingExecutor::returning(empty_response());
        let invoker = ScanInvoker::new();

        let result = invoker
            .analyze_document(&executor, &ScopeManager::new(), &ScanOptions::default())
            .unwrap();
        assert!(result.violations().is_empty());
        assert!(result.passes().is_empty());

        let calls = executor.calls.borrow();
        assert_eq!(calls.len(), 1);
        let (declaration, args, timeout) = &calls[0];
        assert_eq!(declaration, A11Y_CHECK_JS);
        assert_eq!(args, &vec![Value::Null, Value::Null, json!("axe")]);
        assert_eq!(*timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_document_scan_passes_options_verbatim() {
        let executor = RecordingExecutor::returning(empty_response());
        let invoker = ScanInvoker::new().engine_global("axeEngine").timeout(Duration::from_secs(5));
        let options = ScanOptions::from(json!({"runOnly": {"type": "tag", "values": ["wcag2aa"]}}));

        let mut scope = ScopeManager::new();
        scope.include(["#main"]);
        invoker.analyze_document(&executor, &scope, &options).unwrap();

        let calls = executor.calls.borrow();
        let (_, args, timeout) = &calls[0];
        assert_eq!(
            args,
            &vec![
                json!("#main"),
                json!({"runOnly": {"type": "tag", "values": ["wcag2aa"]}}),
                json!("axeEngine")
            ]
        );
        assert_eq!(*timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_element_scan_ignores_scope() {
        let invoker = ScanInvoker::new();
        let args = invoker.element_arguments(&ScanOptions::default());
        assert_eq!(args[0], Value::Null);
        assert_eq!(args[2], json!("axe"));
    }

    #[test]
    fn test_missing_passes_returns_no_result() {
        let executor = RecordingExecutor::returning(json!({"violations": [{"id": "label"}]}));
        let err = ScanInvoker::new()
            .analyze_document(&executor, &ScopeManager::new(), &ScanOptions::default())
            .unwrap_err();
        assert!(matches!(err, A11yError::InvalidResponse(_)));
    }

    #[test]
    fn test_timeout_propagates() {
        let executor = RecordingExecutor {
            response: Err(A11yError::ScriptFailed("unused".to_string())),
            calls: RefCell::new(Vec::new()),
        };
        let err = ScanInvoker::new()
            .analyze_element(&executor, &ScanOptions::default())
            .unwrap_err();
        assert!(matches!(err, A11yError::ExecutionTimeout(_)));
    }
}
