//! # lnfarm-core
//!
//! Core library for mirroring one or more source trees into a single target
//! tree made of symbolic links.
//!
//! A run has two phases:
//! - [`linkset`] walks the source roots and computes an ordered [`LinkSet`]
//!   of target-relative paths mapped to absolute source paths.
//! - [`reconcile`] applies that link set to the live filesystem in one of
//!   three [`Mode`]s: create links, clean them up again, or show the plan.
//!
//! [`LinkEngine`] ties both phases together behind the target-root check.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod fsops;
pub mod linkset;
pub mod reconcile;

pub use config::{Config, ConfigManager};
pub use error::{Error, Result};
pub use linkset::{LinkDescriptor, LinkSet, LinkSetBuilder};
pub use reconcile::{
    EntryReport, LinkEngine, LinkOutcome, Mode, ReconcileReporter, ReconcileResult, Reconciler,
};
