//! `studio-core` -- project status derivation for the dashboard project cards.
//!
//! Everything in this crate is pure: callers pass in the project's lifecycle
//! status and the resource warnings reported for it, and get back a single
//! [`status_resolver::DisplayDecision`] describing what the card should show.

pub mod config;
pub mod error;
pub mod project_status;
pub mod resource_warnings;
pub mod status_resolver;
pub mod warning_catalog;

pub use config::ResolverConfig;
pub use error::CoreError;
pub use project_status::{LifecycleStatus, StatusMessage};
pub use resource_warnings::{NormalizedWarnings, ResourceWarningSet, WarningLevel};
pub use status_resolver::{resolve, AlertVariant, DisplayDecision, StatusResolver};
pub use warning_catalog::{
    DisplayContext, StaticWarningCatalog, WarningCatalog, WarningContent, WarningEntry,
};
