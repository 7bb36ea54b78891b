//! Script execution contract between the scanner and a live page
//!
//! The scanner never builds executable text out of its payloads. It hands a fixed
//! function declaration plus JSON arguments to a [`ScriptExecutor`], together with
//! an explicit timeout for that single call. Implementations exist for
//! `headless_chrome` tabs and elements in [`chrome`].

pub mod chrome;

use crate::error::{A11yError, Result};
use serde::Deserialize;
use serde_json::Value;
use std::{sync::Arc, time::Duration};

/// Wrapper that races the called function against the deadline and serializes
/// the outcome to a JSON string
const ENVELOPE_JS: &str = include_str!("envelope.js");

/// Something that can call a JavaScript function with arguments and await its result
pub trait ScriptExecutor {
    /// Call `declaration` (a JavaScript function expression) with `args`, awaiting
    /// the returned value or promise for at most `timeout`
    fn call_function(&self, declaration: &str, args: Vec<Value>, timeout: Duration) -> Result<Value>;
}

/// A page-level executor that can also evaluate a whole script in the page
pub trait PageContext: ScriptExecutor {
    /// Evaluate `source` in the page's global scope
    fn inject_script(&self, source: &str) -> Result<()>;
}

impl<T: ScriptExecutor + ?Sized> ScriptExecutor for &T {
    fn call_function(&self, declaration: &str, args: Vec<Value>, timeout: Duration) -> Result<Value> {
        (**self).call_function(declaration, args, timeout)
    }
}

impl<T: PageContext + ?Sized> PageContext for &T {
    fn inject_script(&self, source: &str) -> Result<()> {
        (**self).inject_script(source)
    }
}

impl<T: ScriptExecutor + ?Sized> ScriptExecutor for Arc<T> {
    fn call_function(&self, declaration: &str, args: Vec<Value>, timeout: Duration) -> Result<Value> {
        (**self).call_function(declaration, args, timeout)
    }
}

impl<T: PageContext + ?Sized> PageContext for Arc<T> {
    fn inject_script(&self, source: &str) -> Result<()> {
        (**self).inject_script(source)
    }
}

/// Outcome of an enveloped call as serialized inside the page
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Envelope {
    ok: bool,
    #[serde(default)]
    value: Value,
    #[serde(default)]
    timed_out: bool,
    #[serde(default)]
    message: Option<String>,
}

/// Wrap a function declaration so that its outcome comes back as a JSON string.
/// The wrapped function expects the timeout in milliseconds as its last argument.
pub(crate) fn envelope(declaration: &str) -> String {
    ENVELOPE_JS.replace("__SCRIPT__", declaration.trim())
}

/// Append the timeout argument consumed by [`envelope`]
pub(crate) fn with_timeout_arg(mut args: Vec<Value>, timeout: Duration) -> Vec<Value> {
    let millis = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
    args.push(Value::from(millis));
    args
}

/// Decode the JSON string produced by an enveloped call
pub(crate) fn decode_envelope(raw: Option<Value>, timeout: Duration) -> Result<Value> {
    let raw = raw.ok_or_else(|| A11yError::ScriptFailed("No value returned from script".to_string()))?;

    let json_str = raw
        .as_str()
        .ok_or_else(|| A11yError::ScriptFailed(format!("Unexpected script return value: {}", raw)))?;

    let envelope: Envelope = serde_json::from_str(json_str)
        .map_err(|e| A11yError::ScriptFailed(format!("Failed to parse script result: {}", e)))?;

    if envelope.ok {
        return Ok(envelope.value);
    }

    if envelope.timed_out {
        return Err(A11yError::ExecutionTimeout(timeout));
    }

    Err(A11yError::ScriptFailed(envelope.message.unwrap_or_else(|| "Unknown error".to_string())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_envelope_embeds_declaration() {
        let wrapped = envelope("  function (a) { return a; }\n");
        assert!(wrapped.contains("const script = function (a) { return a; };"));
        assert!(!wrapped.contains("__SCRIPT__"));
        assert!(wrapped.trim_start().starts_with("function (...args)"));
    }

    #[test]
    fn test_with_timeout_arg_appends_millis() {
        let args = with_timeout_arg(vec![json!("#main")], Duration::from_secs(30));
        assert_eq!(args, vec![json!("#main"), json!(30_000)]);
    }

    #[test]
    fn test_decode_ok() {
        let raw = json!(r#"{"ok":true,"value":{"violations":[],"passes":[]}}"#);
        let value = decode_envelope(Some(raw), Duration::from_secs(1)).unwrap();
        assert_eq!(value, json!({"violations": [], "passes": []}));
    }

    #[test]
    fn test_decode_timeout() {
        let raw = json!(r#"{"ok":false,"timedOut":true,"message":"[object Object]"}"#);
        let err = decode_envelope(Some(raw), Duration::from_secs(30)).unwrap_err();
        assert!(matches!(err, A11yError::ExecutionTimeout(d) if d == Duration::from_secs(30)));
    }

    #[test]
    fn test_decode_thrown_error() {
        let raw = json!(r#"{"ok":false,"timedOut":false,"message":"axe is not defined"}"#);
        let err = decode_envelope(Some(raw), Duration::from_secs(1)).unwrap_err();
        match err {
            A11yError::ScriptFailed(msg) => assert_eq!(msg, "axe is not defined"),
            other => panic!("Expected ScriptFailed, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_missing_value() {
        let err = decode_envelope(None, Duration::from_secs(1)).unwrap_err();
        assert!(matches!(err, A11yError::ScriptFailed(_)));
    }

    #[test]
    fn test_decode_non_string() {
        let err = decode_envelope(Some(json!(42)), Duration::from_secs(1)).unwrap_err();
        assert!(matches!(err, A11yError::ScriptFailed(_)));
    }
}
