//! Scan scoping, invocation and result extraction
//!
//! This module provides the pieces between a configured scanner and the engine
//! running in the page:
//! - SelectorSet: ordered include and exclude selectors
//! - ScopeManager: chooses the whole document, the single-selector shorthand or
//!   the structured include/exclude form
//! - ScanInvoker: calls the engine with a bounded timeout and validates the response
//! - ScanResult: the violations and passes of one scan
//! - A11yScanner: the fluent builder tying these together

pub mod analyzer;
pub mod invoker;
pub mod options;
pub mod result;
pub mod scope;
pub mod selectors;

pub use analyzer::A11yScanner;
pub use invoker::{ScanInvoker, DEFAULT_ENGINE_GLOBAL, DEFAULT_TIMEOUT};
pub use options::ScanOptions;
pub use result::ScanResult;
pub use scope::{ScanContext, ScopeManager};
pub use selectors::SelectorSet;
