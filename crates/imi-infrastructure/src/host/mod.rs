//! In-memory host
//!
//! Implementations of the domain host ports that need no IDE. Used by the
//! facade crate's embedding API and throughout the tests.

pub mod memory;
pub mod platform;

pub use memory::{InMemoryApplication, InMemoryProject};
pub use platform::{
    InMemoryFileStatusManager, InMemoryOuterIgnoreLoader, InMemoryPsiManager, InMemoryVcsManager,
    InMemoryVirtualFileManager,
};
