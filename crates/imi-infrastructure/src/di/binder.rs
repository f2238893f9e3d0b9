//! Graph Binder
//!
//! Collects binding declarations from [`Module`]s and produces an
//! [`ObjectGraph`]. Declaration problems (a type bound twice) are collected
//! and reported together when the graph is built.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;

use imi_domain::error::{Error, Result};
use imi_domain::Scope;
use once_cell::sync::OnceCell;
use tracing::debug;

use super::graph::{Binding, ErasedArc, Factory, Injectable, Lifetime, ObjectGraph, Provider, Resolver};

/// A unit of binding declarations
pub trait Module: Send + Sync {
    /// Name used to skip repeated installs and in logs
    fn name(&self) -> &'static str;

    /// Declare bindings
    fn configure(&self, binder: &mut GraphBinder) -> Result<()>;
}

/// Declaration surface for one graph construction
pub struct GraphBinder {
    scope: Scope,
    bindings: HashMap<TypeId, Binding>,
    installed: Vec<&'static str>,
    errors: Vec<String>,
    log_bindings: bool,
}

impl GraphBinder {
    /// Start declaring bindings for `scope`
    pub fn new(scope: Scope) -> Self {
        Self {
            scope,
            bindings: HashMap::new(),
            installed: Vec::new(),
            errors: Vec::new(),
            log_bindings: false,
        }
    }

    /// Log each declaration at debug level
    pub fn with_binding_logs(mut self, enabled: bool) -> Self {
        self.log_bindings = enabled;
        self
    }

    /// Scope the graph is being built for
    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    /// Install a module; a module with the same name is installed once
    pub fn install(&mut self, module: &dyn Module) -> Result<()> {
        let name = module.name();
        if self.installed.contains(&name) {
            return Ok(());
        }
        self.installed.push(name);
        module.configure(self)
    }

    /// Bind a pre-built instance
    pub fn bind_instance<T>(&mut self, instance: Arc<T>) -> &mut Self
    where
        T: ?Sized + Send + Sync + 'static,
    {
        self.declare::<T>(Provider::Instance(Arc::new(instance)))
    }

    /// Bind a type built by `factory`
    pub fn bind_constructor<T, F>(&mut self, lifetime: Lifetime, factory: F) -> &mut Self
    where
        T: ?Sized + Send + Sync + 'static,
        F: Fn(&mut Resolver<'_>) -> Result<Arc<T>> + Send + Sync + 'static,
    {
        let factory: Factory =
            Box::new(move |resolver| factory(resolver).map(|value| Arc::new(value) as ErasedArc));
        self.declare::<T>(Provider::Constructible {
            factory,
            lifetime,
            instance: OnceCell::new(),
        })
    }

    /// Bind a type that knows how to build itself from the graph
    pub fn bind_injectable<T: Injectable>(&mut self, lifetime: Lifetime) -> &mut Self {
        self.bind_constructor::<T, _>(lifetime, |resolver| T::inject(resolver).map(Arc::new))
    }

    /// Whether `T` has already been declared
    pub fn is_bound<T: ?Sized + 'static>(&self) -> bool {
        self.bindings.contains_key(&TypeId::of::<T>())
    }

    /// Finish declaration
    pub fn build(self) -> Result<ObjectGraph> {
        if !self.errors.is_empty() {
            return Err(Error::graph_construction(format!(
                "invalid bindings for {}: {}",
                self.scope.label(),
                self.errors.join("; ")
            )));
        }
        Ok(ObjectGraph::new(self.scope, self.bindings))
    }

    fn declare<T: ?Sized + Any>(&mut self, provider: Provider) -> &mut Self {
        let type_name = std::any::type_name::<T>();
        match self.bindings.entry(TypeId::of::<T>()) {
            Entry::Occupied(_) => {
                self.errors.push(format!("{type_name} is bound more than once"));
            }
            Entry::Vacant(slot) => {
                if self.log_bindings {
                    debug!(scope = %self.scope.label(), binding = type_name, "Declared binding");
                }
                slot.insert(Binding {
                    type_name,
                    provider,
                });
            }
        }
        self
    }
}
