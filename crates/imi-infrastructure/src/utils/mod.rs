//! Scope-independent utilities
//!
//! Bound into every graph by `UtilsModule`.

mod glob;
mod matcher;

pub use glob::Glob;
pub use matcher::MatcherUtil;
