use crate::scan::selectors::SelectorSet;
use serde_json::{json, Value};

/// The scan target passed to the engine, derived from the configured selectors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanContext {
    /// No selectors configured: scan the whole document
    Unscoped,

    /// Exactly one include and no excludes: the engine's bare-selector shorthand
    SingleInclude(String),

    /// Several includes or any exclude. Each selector is wrapped as its own
    /// single-element frame path.
    Structured {
        include: Vec<Vec<String>>,
        exclude: Vec<Vec<String>>,
    },
}

impl ScanContext {
    /// Short name used in logs
    pub fn kind(&self) -> &'static str {
        match self {
            ScanContext::Unscoped => "unscoped",
            ScanContext::SingleInclude(_) => "single-include",
            ScanContext::Structured { .. } => "structured",
        }
    }

    /// JSON argument for the scan function. `null` selects the document.
    pub fn to_argument(&self) -> Value {
        match self {
            ScanContext::Unscoped => Value::Null,
            ScanContext::SingleInclude(selector) => Value::String(selector.clone()),
            ScanContext::Structured { include, exclude } => json!({
                "include": include,
                "exclude": exclude,
            }),
        }
    }
}

/// Decides how the configured selectors are submitted to the scan engine.
///
/// Resolution order is fixed: more than one include or any exclude gives the
/// structured form, exactly one include gives the shorthand, otherwise the
/// whole document is scanned.
///
/// Known limitation: the shorthand removes every `'` from its selector and
/// performs no other escaping. Selectors that rely on single quotes, such as
/// `[data-x='y']`, change meaning in that form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScopeManager {
    selectors: SelectorSet,
}

impl ScopeManager {
    /// Create a ScopeManager with no selectors
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a ScopeManager over an existing SelectorSet
    pub fn with_selectors(selectors: SelectorSet) -> Self {
        Self { selectors }
    }

    /// Append include selectors
    pub fn include<I, S>(&mut self, selectors: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selectors.include(selectors);
    }

    /// Append exclude selectors
    pub fn exclude<I, S>(&mut self, selectors: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selectors.exclude(selectors);
    }

    /// The underlying selectors
    pub fn selectors(&self) -> &SelectorSet {
        &self.selectors
    }

    /// True when more than one include or any exclude is configured
    pub fn has_structured_scope(&self) -> bool {
        self.selectors.includes().len() > 1 || !self.selectors.excludes().is_empty()
    }

    /// True when exactly one include and no exclude is configured
    pub fn has_single_include(&self) -> bool {
        self.selectors.includes().len() == 1 && self.selectors.excludes().is_empty()
    }

    /// The first include selector, if any
    pub fn first_include(&self) -> Option<&str> {
        self.selectors.includes().first().map(String::as_str)
    }

    /// Structured `{include: [[s1], ...], exclude: [[e1], ...]}` payload
    pub fn to_scope_payload(&self) -> Value {
        json!({
            "include": wrap_frames(self.selectors.includes()),
            "exclude": wrap_frames(self.selectors.excludes()),
        })
    }

    /// Resolve the configured selectors to one of the three scan contexts
    pub fn resolve(&self) -> ScanContext {
        if self.has_structured_scope() {
            return ScanContext::Structured {
                include: wrap_frames(self.selectors.includes()),
                exclude: wrap_frames(self.selectors.excludes()),
            };
        }

        match self.first_include() {
            Some(selector) if self.has_single_include() => ScanContext::SingleInclude(strip_quotes(selector)),
            _ => ScanContext::Unscoped,
        }
    }
}

/// Wrap each selector as a single-element frame path
fn wrap_frames(selectors: &[String]) -> Vec<Vec<String>> {
    selectors.iter().map(|s| vec![s.clone()]).collect()
}

/// Remove single quotes from a shorthand selector
fn strip_quotes(selector: &str) -> String {
    selector.replace('\'', "")
}
