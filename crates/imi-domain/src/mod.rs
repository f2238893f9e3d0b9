//! # Domain Layer
//!
//! Core types for the Ignore Module Injector. This crate knows nothing about
//! how graphs are built or cached; it defines what a scope is, what the host
//! must provide, and how failures are reported.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`error`] | Error taxonomy and `Result` alias |
//! | [`ports`] | Host and platform facade traits |
//! | [`value_objects`] | Project handles, scopes, settings |
//! | [`constants`] | Domain defaults |

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{Error, Result};
pub use value_objects::{ProjectId, ProjectRef, Scope};
