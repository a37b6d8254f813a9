//! Hook dispatch for Froxlor panel modules.
//!
//! The panel's extension points ("hooks") are named events. A module opts
//! into a hook by declaring a binding for that name; there is no central
//! wiring beyond dropping a `module.<Name>.<ext>` file into the module
//! directory.
//!
//! The original mechanism probed every module with reflection on every
//! call. This crate replaces that with an explicit [`HookRegistry`] built
//! once at startup: the module directory is scanned a single time, each
//! conventionally named file is resolved against a [`ModuleCatalog`] of
//! constructors, and the public hook bindings are recorded per hook name in
//! discovery order.
//!
//! Dispatch threads an owned [`serde_json::Value`] payload through every
//! subscriber in registration order; each callback returns the (possibly
//! modified) payload, which is handed to the next one. Modules that cannot
//! be resolved, and bindings declared private, are recorded as explicit
//! [`Skip`] entries and logged, never surfaced as errors.
//!
//! # Example
//!
//! ```rust,no_run
//! use froxlor_hooks::{HookRegistry, ModuleCatalog};
//! use std::path::Path;
//!
//! let catalog = ModuleCatalog::new();
//! let mut registry = HookRegistry::scan(Path::new("/var/www/froxlor/api/modules"), &catalog);
//! let payload = registry.dispatch("DomainsAdded", serde_json::json!({"domain": "example.org"}));
//! drop(payload);
//! ```

pub mod catalog;
pub mod error;
pub mod manifest;
pub mod module;
pub mod registry;

pub use self::catalog::ModuleCatalog;
pub use self::error::HookError;
pub use self::manifest::ModuleName;
pub use self::module::{HookBinding, HookModule, HookVisibility};
pub use self::registry::{HookRegistry, Skip};
