//! Glob translation
//!
//! Converts shell globs into regular expressions matched against
//! `/`-separated relative paths. `*` and `?` never cross a `/`; `**`
//! spans directories.

use globset::GlobBuilder;
use imi_domain::error::Result;

use crate::error_ext::ErrorContext;

/// Glob to regex translator
#[derive(Debug, Default, Clone, Copy)]
pub struct Glob;

impl Glob {
    pub fn new() -> Self {
        Self
    }

    /// Translate `glob` into an anchored regex source
    pub fn to_regex(&self, glob: &str) -> Result<String> {
        let compiled = GlobBuilder::new(glob)
            .literal_separator(true)
            .backslash_escape(true)
            .build()
            .with_context(|| format!("Invalid glob `{glob}`"))?;
        Ok(compiled.regex().to_string())
    }

    /// Whether `text` contains glob metacharacters
    pub fn is_glob(&self, text: &str) -> bool {
        text.contains(['*', '?', '[', '{'])
    }
}
