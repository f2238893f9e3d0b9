//! Utilities Module
//!
//! Binds general-purpose helpers that never depend on a project.

use std::sync::Arc;

use imi_domain::error::Result;

use crate::di::binder::{GraphBinder, Module};
use crate::di::graph::Lifetime;
use crate::utils::{Glob, MatcherUtil};

/// Scope-independent utility bindings
#[derive(Debug, Default, Clone, Copy)]
pub struct UtilsModule;

impl Module for UtilsModule {
    fn name(&self) -> &'static str {
        "utils"
    }

    fn configure(&self, binder: &mut GraphBinder) -> Result<()> {
        binder
            .bind_constructor::<Glob, _>(Lifetime::Singleton, |_| Ok(Arc::new(Glob::new())))
            .bind_constructor::<MatcherUtil, _>(Lifetime::Singleton, |_| {
                Ok(Arc::new(MatcherUtil::new()))
            });
        Ok(())
    }
}
