//! Project handles and scopes
//!
//! A [`Scope`] is either a live project or the scope-free context. The
//! variant decides which bindings a graph may contain, so code that needs a
//! project matches on it instead of checking for null.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Deref;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::UNSCOPED_LABEL;
use crate::ports::Project;

/// Host-assigned project identity, used as the cache key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProjectId(Uuid);

impl ProjectId {
    /// Generate a fresh random identifier
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ProjectId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for ProjectId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Shared handle to a host project
///
/// Two handles are equal when the host reports the same [`ProjectId`],
/// regardless of which `Arc` they wrap.
#[derive(Clone)]
pub struct ProjectRef(Arc<dyn Project>);

impl ProjectRef {
    /// Wrap a host project
    pub fn new(project: Arc<dyn Project>) -> Self {
        Self(project)
    }

    /// Human readable label, `name (id)`
    pub fn label(&self) -> String {
        format!("{} ({})", self.0.name(), self.0.id())
    }
}

impl Deref for ProjectRef {
    type Target = dyn Project;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

impl PartialEq for ProjectRef {
    fn eq(&self, other: &Self) -> bool {
        self.0.id() == other.0.id()
    }
}

impl Eq for ProjectRef {}

impl Hash for ProjectRef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.id().hash(state);
    }
}

impl fmt::Debug for ProjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProjectRef")
            .field("id", &self.0.id())
            .field("name", &self.0.name())
            .finish()
    }
}

/// Scope a graph is built for
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Scope {
    /// A live project; project-level bindings are available
    Project(ProjectRef),
    /// No project; only scope-independent bindings are available
    #[default]
    Unscoped,
}

impl Scope {
    /// The project, if any
    pub fn project(&self) -> Option<&ProjectRef> {
        match self {
            Self::Project(project) => Some(project),
            Self::Unscoped => None,
        }
    }

    /// Whether this is the scope-free context
    pub fn is_unscoped(&self) -> bool {
        matches!(self, Self::Unscoped)
    }

    /// Label used in logs and error messages
    pub fn label(&self) -> String {
        match self {
            Self::Project(project) => project.label(),
            Self::Unscoped => UNSCOPED_LABEL.to_string(),
        }
    }
}

impl From<ProjectRef> for Scope {
    fn from(project: ProjectRef) -> Self {
        Self::Project(project)
    }
}

impl From<Option<ProjectRef>> for Scope {
    fn from(project: Option<ProjectRef>) -> Self {
        project.map_or(Self::Unscoped, Self::Project)
    }
}
