//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the Ignore Module Injector
#[derive(Error, Debug)]
pub enum Error {
    /// A graph could not be built for a scope
    ///
    /// Raised when a required host collaborator is absent, the project has
    /// been disposed, or the declared bindings are inconsistent.
    #[error("Graph construction failed: {message}")]
    GraphConstruction {
        /// Description of the construction failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The requested type has no binding in the graph
    #[error("No binding for {type_name} in scope {scope}")]
    UnresolvedType {
        /// Fully qualified name of the requested type
        type_name: String,
        /// Label of the scope the graph was built for
        scope: String,
    },

    /// Constructible bindings depend on each other
    #[error("Dependency cycle detected: {}", .path.join(" -> "))]
    Cycle {
        /// Type names along the resolution path, first entry repeated last
        path: Vec<String>,
    },

    /// I/O operation error
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Infrastructure operation error
    #[error("Infrastructure error: {message}")]
    Infrastructure {
        /// Description of the infrastructure error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal system error
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },
}

// Resolution error creation methods
impl Error {
    /// Create a graph construction error
    pub fn graph_construction<S: Into<String>>(message: S) -> Self {
        Self::GraphConstruction {
            message: message.into(),
            source: None,
        }
    }

    /// Create a graph construction error with source
    pub fn graph_construction_with_source<S: Into<String>>(message: S, source: Error) -> Self {
        Self::GraphConstruction {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an error for a host collaborator that could not be obtained
    pub fn collaborator_unavailable<S: Into<String>>(collaborator: &str, scope: S) -> Self {
        Self::graph_construction(format!(
            "{collaborator} is not available for {}",
            scope.into()
        ))
    }

    /// Create an unresolved type error from a type name
    pub fn unresolved<T: Into<String>, S: Into<String>>(type_name: T, scope: S) -> Self {
        Self::UnresolvedType {
            type_name: type_name.into(),
            scope: scope.into(),
        }
    }

    /// Create an unresolved type error for `T`
    pub fn unresolved_type<T: ?Sized + 'static, S: Into<String>>(scope: S) -> Self {
        Self::unresolved(std::any::type_name::<T>(), scope)
    }

    /// Create a dependency cycle error
    pub fn cycle<I, S>(path: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Cycle {
            path: path.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether this error is one of the resolution failures
    /// (`GraphConstruction`, `UnresolvedType`, `Cycle`)
    pub fn is_resolution_failure(&self) -> bool {
        matches!(
            self,
            Self::GraphConstruction { .. } | Self::UnresolvedType { .. } | Self::Cycle { .. }
        )
    }
}

// Configuration error creation methods
impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }
}

// Internal error creation methods
impl Error {
    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}
