//! Ignore Manager
//!
//! Per-project service that owns the active ignore rules. Built by the
//! project graph as a singleton; it cannot be built without a project since
//! every platform facade it needs is project-level.

use std::path::{Component, Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};

use ignore::gitignore::{Gitignore, GitignoreBuilder};
use imi_domain::error::{Error, Result};
use imi_domain::ports::{FileStatusManager, OuterIgnoreLoader, PsiManager, VcsManager};
use imi_domain::value_objects::IgnoreSettings;
use imi_domain::{ProjectRef, Scope};
use tracing::debug;

use crate::di::{Injectable, Resolver};
use crate::error_ext::ErrorContext;
use crate::utils::{Glob, MatcherUtil};

/// Rules are matched relative to the ignore file's directory
const RULES_ROOT: &str = ".";

/// Rule lines and the matcher compiled from them
struct RuleSet {
    lines: Vec<String>,
    matcher: Gitignore,
}

impl RuleSet {
    fn empty() -> Self {
        Self {
            lines: Vec::new(),
            matcher: Gitignore::empty(),
        }
    }

    fn compile(lines: Vec<String>) -> Result<Self> {
        let mut builder = GitignoreBuilder::new(RULES_ROOT);
        for line in &lines {
            builder
                .add_line(None, line)
                .with_context(|| format!("Invalid ignore pattern `{line}`"))?;
        }
        let matcher = builder.build().context("Failed to compile ignore rules")?;
        Ok(Self { lines, matcher })
    }
}

/// Project-level ignore rule manager
pub struct IgnoreManager {
    project: ProjectRef,
    settings: Arc<IgnoreSettings>,
    file_status_manager: Arc<dyn FileStatusManager>,
    psi_manager: Arc<dyn PsiManager>,
    vcs_manager: Arc<dyn VcsManager>,
    outer_ignore_loader: Arc<dyn OuterIgnoreLoader>,
    glob: Arc<Glob>,
    matcher: Arc<MatcherUtil>,
    rules: RwLock<RuleSet>,
}

impl Injectable for IgnoreManager {
    fn inject(resolver: &mut Resolver<'_>) -> Result<Self> {
        let scope = resolver.get::<Scope>()?;
        let project = scope
            .project()
            .cloned()
            .ok_or_else(|| Error::unresolved_type::<ProjectRef, _>(scope.label()))?;

        Ok(Self {
            project,
            settings: resolver.get()?,
            file_status_manager: resolver.get()?,
            psi_manager: resolver.get()?,
            vcs_manager: resolver.get()?,
            outer_ignore_loader: resolver.get()?,
            glob: resolver.get()?,
            matcher: resolver.get()?,
            rules: RwLock::new(RuleSet::empty()),
        })
    }
}

impl IgnoreManager {
    /// Project this manager belongs to
    pub fn project(&self) -> &ProjectRef {
        &self.project
    }

    /// Add rules from ignore-file lines
    ///
    /// Lines follow gitignore syntax: blank lines and `#` comments are
    /// skipped, `!` re-includes, `\` escapes, a trailing `/` only matches
    /// directories. Either every line is added or none is. Returns the
    /// number of rules added.
    pub fn add_rules<I, S>(&self, lines: I) -> Result<usize>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let added: Vec<String> = lines
            .into_iter()
            .map(|line| line.as_ref().to_string())
            .filter(|line| is_rule(line))
            .collect();
        if added.is_empty() {
            return Ok(0);
        }

        {
            let mut rules = self.rules.write().unwrap_or_else(PoisonError::into_inner);
            let mut lines = rules.lines.clone();
            lines.extend(added.iter().cloned());
            *rules = RuleSet::compile(lines)?;
        }

        debug!(project = %self.project.label(), added = added.len(), "Added ignore rules");
        self.notify_rules_changed();
        Ok(added.len())
    }

    /// Drop every rule
    pub fn clear_rules(&self) {
        *self.rules.write().unwrap_or_else(PoisonError::into_inner) = RuleSet::empty();
        self.notify_rules_changed();
    }

    /// Number of active rules
    pub fn rule_count(&self) -> usize {
        self.rules
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .lines
            .len()
    }

    /// Whether `path`, relative to the ignore file's directory, is ignored
    ///
    /// The last matching rule wins, except that nothing below an ignored
    /// directory can be re-included.
    pub fn is_ignored(&self, path: &Path, is_dir: bool) -> bool {
        let path = relative(path);
        let rules = self.rules.read().unwrap_or_else(PoisonError::into_inner);
        let parent_ignored = path
            .ancestors()
            .skip(1)
            .filter(|dir| !dir.as_os_str().is_empty())
            .any(|dir| rules.matcher.matched(dir, true).is_ignore());
        parent_ignored || rules.matcher.matched(&path, is_dir).is_ignore()
    }

    /// Paths matched by the shell glob `pattern`
    ///
    /// Used to preview what a single entry covers before it becomes a rule.
    pub fn matching_paths<'a, I>(&self, pattern: &str, paths: I) -> Result<Vec<PathBuf>>
    where
        I: IntoIterator<Item = &'a Path>,
    {
        let source = self.glob.to_regex(pattern)?;
        let regex = self.matcher.compile(&source)?;
        Ok(paths
            .into_iter()
            .map(relative)
            .filter(|path| regex.is_match(path.to_string_lossy().as_bytes()))
            .collect())
    }

    /// Whether `path` is under version control
    pub fn is_tracked(&self, path: &Path) -> bool {
        self.vcs_manager.is_file_under_vcs(path)
    }

    /// Ignored files that are nevertheless tracked by the VCS
    pub fn tracked_ignored<'a, I>(&self, paths: I) -> Vec<PathBuf>
    where
        I: IntoIterator<Item = &'a Path>,
    {
        if !self.vcs_manager.has_active_vcss() {
            return Vec::new();
        }
        paths
            .into_iter()
            .filter(|path| self.is_ignored(path, false) && self.is_tracked(path))
            .map(Path::to_path_buf)
            .collect()
    }

    /// Ignore files outside the project for `language`, empty when outer
    /// rules are disabled in the settings
    pub fn outer_ignore_files(&self, language: &str) -> Vec<PathBuf> {
        if !self.settings.outer_ignore_rules() {
            return Vec::new();
        }
        self.outer_ignore_loader.outer_files(language)
    }

    fn notify_rules_changed(&self) {
        self.psi_manager.drop_resolve_caches();
        if self.settings.ignored_file_status() {
            self.file_status_manager.file_statuses_changed();
        }
    }
}

fn is_rule(line: &str) -> bool {
    let trimmed = line.trim();
    !trimmed.is_empty() && !line.starts_with('#')
}

/// `path` reduced to its normal components, joined with `/`
fn relative(path: &Path) -> PathBuf {
    path.components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part),
            _ => None,
        })
        .collect()
}
