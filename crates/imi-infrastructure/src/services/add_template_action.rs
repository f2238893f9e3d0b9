//! Add Template Action
//!
//! Merges a named template into ignore-file content. A new action is built
//! for every lookup; it is only enabled inside a project.

use std::collections::HashSet;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::sync::Arc;

use imi_domain::constants::{DEFAULT_IGNORE_FILE, TEMPLATE_HEADER_PREFIX};
use imi_domain::error::Result;
use imi_domain::ports::VirtualFileManager;
use imi_domain::value_objects::IgnoreSettings;
use imi_domain::Scope;
use tracing::debug;

use crate::di::{Injectable, Resolver};
use crate::error_ext::ErrorContext;

/// Action adding a template to the project's ignore file
pub struct AddTemplateAction {
    scope: Arc<Scope>,
    settings: Arc<IgnoreSettings>,
    virtual_file_manager: Arc<dyn VirtualFileManager>,
}

impl Injectable for AddTemplateAction {
    fn inject(resolver: &mut Resolver<'_>) -> Result<Self> {
        Ok(Self {
            scope: resolver.get()?,
            settings: resolver.get()?,
            virtual_file_manager: resolver.get()?,
        })
    }
}

impl AddTemplateAction {
    /// Whether the action can run (a project is open)
    pub fn is_enabled(&self) -> bool {
        self.scope.project().is_some()
    }

    /// Ignore file the action writes to
    pub fn target_file(&self) -> &'static str {
        DEFAULT_IGNORE_FILE
    }

    /// Merge `template` into `existing`
    ///
    /// Lines already present in `existing` are skipped; if nothing is left
    /// the content is returned unchanged. The block goes at `cursor` when
    /// insert-at-cursor is enabled and the cursor is a valid position,
    /// otherwise it is appended.
    pub fn apply(&self, name: &str, template: &str, existing: &str, cursor: Option<usize>) -> String {
        let present: HashSet<&str> = existing
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        let mut seen = HashSet::new();
        let additions: Vec<&str> = template
            .lines()
            .map(str::trim_end)
            .filter(|&line| {
                let key = line.trim();
                key.is_empty() || key.starts_with('#') || !present.contains(key)
            })
            .filter(|&line| line.trim().is_empty() || seen.insert(line.trim()))
            .collect();

        if !additions.iter().any(|line| {
            let key = line.trim();
            !key.is_empty() && !key.starts_with('#')
        }) {
            return existing.to_string();
        }

        let mut block = format!("{TEMPLATE_HEADER_PREFIX}{name}\n");
        for line in additions {
            block.push_str(line);
            block.push('\n');
        }

        let insert_at = cursor
            .filter(|_| self.settings.insert_at_cursor())
            .filter(|&pos| pos <= existing.len() && existing.is_char_boundary(pos));

        match insert_at {
            Some(pos) => {
                let (head, tail) = existing.split_at(pos);
                let mut merged = String::with_capacity(existing.len() + block.len() + 1);
                merged.push_str(head);
                if !head.is_empty() && !head.ends_with('\n') {
                    merged.push('\n');
                }
                merged.push_str(&block);
                merged.push_str(tail);
                merged
            }
            None => {
                let mut merged = existing.to_string();
                if !merged.is_empty() {
                    if !merged.ends_with('\n') {
                        merged.push('\n');
                    }
                    merged.push('\n');
                }
                merged.push_str(&block);
                merged
            }
        }
    }

    /// Merge `template` into the ignore file in `dir` and save it
    ///
    /// A missing file counts as empty. The file is only written, and the
    /// virtual file system only refreshed, when the merge changes it.
    /// Returns whether the file changed; a disabled action changes nothing.
    pub fn apply_to_file(&self, dir: &Path, name: &str, template: &str) -> Result<bool> {
        if !self.is_enabled() {
            return Ok(false);
        }

        let path = dir.join(self.target_file());
        let existing = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => String::new(),
            Err(err) => {
                return Err(err).io_context(format!("Failed to read {}", path.display()));
            }
        };

        let merged = self.apply(name, template, &existing, None);
        if merged == existing {
            return Ok(false);
        }

        fs::write(&path, merged).io_context(format!("Failed to write {}", path.display()))?;
        self.virtual_file_manager.refresh();
        debug!(file = %path.display(), template = name, "Applied ignore template");
        Ok(true)
    }
}
