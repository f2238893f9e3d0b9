//! Compiled regex cache
//!
//! Patterns are checked against many paths; each one is compiled once and
//! shared. Matching works on bytes so sources produced by [`super::Glob`]
//! compile unchanged.

use std::sync::Arc;

use dashmap::DashMap;
use imi_domain::error::Result;
use regex::bytes::Regex;

use crate::error_ext::ErrorContext;

/// Concurrent cache of compiled patterns
#[derive(Debug, Default)]
pub struct MatcherUtil {
    compiled: DashMap<String, Arc<Regex>>,
}

impl MatcherUtil {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compile `source`, reusing a cached regex when available
    pub fn compile(&self, source: &str) -> Result<Arc<Regex>> {
        if let Some(regex) = self.compiled.get(source) {
            return Ok(Arc::clone(regex.value()));
        }
        let regex = Arc::new(
            Regex::new(source).with_context(|| format!("Invalid pattern `{source}`"))?,
        );
        Ok(Arc::clone(
            self.compiled
                .entry(source.to_string())
                .or_insert(regex)
                .value(),
        ))
    }

    /// Whether `text` matches `source`
    pub fn matches(&self, source: &str, text: &str) -> Result<bool> {
        Ok(self.compile(source)?.is_match(text.as_bytes()))
    }

    /// Number of cached patterns
    pub fn cached_patterns(&self) -> usize {
        self.compiled.len()
    }
}
