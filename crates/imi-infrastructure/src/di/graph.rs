//! Object Graph
//!
//! An immutable set of bindings keyed by [`TypeId`], built once by a
//! [`GraphBinder`](super::binder::GraphBinder) and then only read.
//!
//! ## Bindings
//!
//! | Kind | Declared with | Lifetime |
//! |------|---------------|----------|
//! | Instance | `bind_instance` | The given `Arc<T>` |
//! | Constructible | `bind_constructor` / `bind_injectable` | [`Lifetime`] |
//!
//! Every binding stores an `Arc<T>` behind `dyn Any`, so trait objects
//! (`dyn VcsManager`) and concrete types (`IgnoreSettings`) are looked up the
//! same way:
//!
//! ```ignore
//! let vcs: Arc<dyn VcsManager> = graph.get::<dyn VcsManager>()?;
//! let settings: Arc<IgnoreSettings> = graph.get::<IgnoreSettings>()?;
//! ```

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use imi_domain::error::{Error, Result};
use imi_domain::Scope;
use once_cell::sync::OnceCell;

/// Type-erased `Arc<T>`
pub(crate) type ErasedArc = Arc<dyn Any + Send + Sync>;

/// Type-erased factory for a constructible binding
pub(crate) type Factory = Box<dyn Fn(&mut Resolver<'_>) -> Result<ErasedArc> + Send + Sync>;

/// How often a constructible binding is instantiated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifetime {
    /// One instance per graph, created on first lookup
    Singleton,
    /// A new instance for every lookup
    Transient,
}

/// A type the graph can build from other bindings
///
/// The constructor pulls each dependency from the resolver, so a missing
/// binding surfaces as `UnresolvedType` for that dependency.
pub trait Injectable: Sized + Send + Sync + 'static {
    /// Build an instance from the graph
    fn inject(resolver: &mut Resolver<'_>) -> Result<Self>;
}

pub(crate) enum Provider {
    Instance(ErasedArc),
    Constructible {
        factory: Factory,
        lifetime: Lifetime,
        instance: OnceCell<ErasedArc>,
    },
}

pub(crate) struct Binding {
    pub(crate) type_name: &'static str,
    pub(crate) provider: Provider,
}

impl Binding {
    pub(crate) fn is_singleton_constructor(&self) -> bool {
        matches!(
            self.provider,
            Provider::Constructible {
                lifetime: Lifetime::Singleton,
                ..
            }
        )
    }
}

/// Immutable, fully declared set of bindings for one scope
pub struct ObjectGraph {
    scope: Scope,
    bindings: HashMap<TypeId, Binding>,
}

impl ObjectGraph {
    pub(crate) fn new(scope: Scope, bindings: HashMap<TypeId, Binding>) -> Self {
        Self { scope, bindings }
    }

    /// Resolve an instance of `T`
    pub fn get<T>(&self) -> Result<Arc<T>>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        Resolver::new(self).get::<T>()
    }

    /// Whether `T` has a binding
    pub fn contains<T: ?Sized + 'static>(&self) -> bool {
        self.bindings.contains_key(&TypeId::of::<T>())
    }

    /// Scope this graph was built for
    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    /// Number of declared bindings
    pub fn binding_count(&self) -> usize {
        self.bindings.len()
    }

    /// Names of all bound types, sorted
    pub fn bound_types(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.bindings.values().map(|b| b.type_name).collect();
        names.sort_unstable();
        names
    }

    /// Instantiate every singleton constructor now instead of on first lookup
    pub(crate) fn instantiate_singletons(&self) -> Result<()> {
        let mut resolver = Resolver::new(self);
        for (type_id, binding) in &self.bindings {
            if binding.is_singleton_constructor() {
                resolver.provide(*type_id, binding)?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for ObjectGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectGraph")
            .field("scope", &self.scope.label())
            .field("bindings", &self.bound_types())
            .finish()
    }
}

/// Resolution context handed to factories
///
/// Tracks the chain of constructible types being built so a dependency
/// cycle is reported instead of recursing forever.
pub struct Resolver<'g> {
    graph: &'g ObjectGraph,
    path: Vec<(TypeId, &'static str)>,
}

impl<'g> Resolver<'g> {
    fn new(graph: &'g ObjectGraph) -> Self {
        Self {
            graph,
            path: Vec::new(),
        }
    }

    /// Scope of the graph being resolved
    pub fn scope(&self) -> &'g Scope {
        &self.graph.scope
    }

    /// Resolve a dependency
    pub fn get<T>(&mut self) -> Result<Arc<T>>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        let graph = self.graph;
        let type_id = TypeId::of::<T>();
        let binding = graph
            .bindings
            .get(&type_id)
            .ok_or_else(|| Error::unresolved_type::<T, _>(graph.scope.label()))?;

        let erased = self.provide(type_id, binding)?;
        erased.downcast_ref::<Arc<T>>().cloned().ok_or_else(|| {
            Error::internal(format!(
                "binding for {} holds a value of another type",
                binding.type_name
            ))
        })
    }

    fn provide(&mut self, type_id: TypeId, binding: &Binding) -> Result<ErasedArc> {
        let (factory, lifetime, instance) = match &binding.provider {
            Provider::Instance(value) => return Ok(Arc::clone(value)),
            Provider::Constructible {
                factory,
                lifetime,
                instance,
            } => (factory, *lifetime, instance),
        };

        if let Some(value) = instance.get() {
            return Ok(Arc::clone(value));
        }

        if self.path.iter().any(|(id, _)| *id == type_id) {
            let path = self
                .path
                .iter()
                .map(|(_, name)| *name)
                .skip_while(|name| *name != binding.type_name)
                .chain(std::iter::once(binding.type_name));
            return Err(Error::cycle(path));
        }

        self.path.push((type_id, binding.type_name));
        let built = factory(self);
        self.path.pop();
        let value = built?;

        match lifetime {
            Lifetime::Transient => Ok(value),
            // A racing thread may have published first; the first published
            // instance is the only one ever handed out.
            Lifetime::Singleton => Ok(Arc::clone(instance.get_or_init(|| value))),
        }
    }
}
