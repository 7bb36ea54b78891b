//! `headless_chrome` implementations of the execution contract

use crate::driver::{decode_envelope, envelope, with_timeout_arg, PageContext, ScriptExecutor};
use crate::error::{A11yError, Result};
use headless_chrome::{protocol::cdp::Runtime, Element, Tab};
use serde_json::Value;
use std::time::Duration;

impl ScriptExecutor for Tab {
    fn call_function(&self, declaration: &str, args: Vec<Value>, timeout: Duration) -> Result<Value> {
        // Runtime.evaluate has no argument list, so the arguments travel as one JSON array
        let args = serde_json::to_string(&with_timeout_arg(args, timeout))?;
        let expression = format!("({}).apply(globalThis, {})", envelope(declaration), args);

        let result = self
            .evaluate(&expression, true)
            .map_err(|e| A11yError::ScriptFailed(format!("Failed to evaluate script: {}", e)))?;

        decode_envelope(result.value, timeout)
    }
}

impl PageContext for Tab {
    fn inject_script(&self, source: &str) -> Result<()> {
        // Tab::evaluate drops exceptionDetails, so the call is made directly
        let evaluated = self
            .call_method(Runtime::Evaluate {
                expression: source.to_string(),
                return_by_value: Some(false),
                generate_preview: Some(false),
                silent: Some(false),
                await_promise: Some(false),
                include_command_line_api: Some(false),
                user_gesture: Some(false),
                object_group: None,
                context_id: None,
                throw_on_side_effect: None,
                timeout: None,
                disable_breaks: None,
                repl_mode: None,
                allow_unsafe_eval_blocked_by_csp: None,
                unique_context_id: None,
                serialization_options: None,
            })
            .map_err(|e| A11yError::ScriptFailed(format!("Failed to inject script: {}", e)))?;

        if let Some(details) = &evaluated.exception_details {
            return Err(A11yError::ScriptFailed(injection_failure(details)));
        }

        log::debug!("Injected scan script ({} bytes)", source.len());
        Ok(())
    }
}

/// Describe an exception thrown while the scan script was loading
fn injection_failure(details: &Runtime::ExceptionDetails) -> String {
    let thrown = details
        .exception
        .as_ref()
        .and_then(|e| e.description.clone())
        .unwrap_or_else(|| details.text.clone());

    format!(
        "Scan script threw while loading at {}:{}: {}",
        details.line_number + 1,
        details.column_number + 1,
        thrown
    )
}

impl<'a> ScriptExecutor for Element<'a> {
    fn call_function(&self, declaration: &str, args: Vec<Value>, timeout: Duration) -> Result<Value> {
        let result = self
            .call_js_fn(&envelope(declaration), with_timeout_arg(args, timeout), true)
            .map_err(|e| A11yError::ScriptFailed(format!("Failed to call function on element: {}", e)))?;

        decode_envelope(result.value, timeout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_injection_failure_uses_exception_description() {
        let details: Runtime::ExceptionDetails = serde_json::from_value(json!({
            "exceptionId": 1,
            "text": "Uncaught",
            "lineNumber": 0,
            "columnNumber": 6,
            "exception": {
                "type": "object",
                "subtype": "error",
                "className": "SyntaxError",
                "description": "SyntaxError: Unexpected token '}'"
            }
        }))
        .unwrap();

        assert_eq!(
            injection_failure(&details),
            "Scan script threw while loading at 1:7: SyntaxError: Unexpected token '}'"
        );
    }

    #[test]
    fn test_injection_failure_falls_back_to_text() {
        let details: Runtime::ExceptionDetails = serde_json::from_value(json!({
            "exceptionId": 2,
            "text": "Uncaught ReferenceError: define is not defined",
            "lineNumber": 11,
            "columnNumber": 0
        }))
        .unwrap();

        assert_eq!(
            injection_failure(&details),
            "Scan script threw while loading at 12:1: Uncaught ReferenceError: define is not defined"
        );
    }
}
