//! The hook registry: one-time module discovery plus ordered dispatch.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, trace, warn};

use crate::catalog::ModuleCatalog;
use crate::manifest::ModuleName;
use crate::module::{HookModule, HookVisibility};

/// A module or binding skipped during the startup scan.
///
/// Skips are informational: the original dispatcher swallowed them inside a
/// broad catch, and callers must never see them as errors. Keeping the
/// reason explicit makes the behaviour observable in logs and tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Skip {
    /// A file matched the naming convention but no constructor for the
    /// module is catalogued.
    UnknownModule {
        /// Module name taken from the file name.
        module: String,
        /// File that declared the module.
        path: PathBuf,
    },
    /// The module declared the hook but marked it private.
    PrivateHook {
        /// Module that declared the binding.
        module: String,
        /// Hook name of the binding.
        hook: String,
    },
}

struct RegisteredModule {
    name: ModuleName,
    module: Box<dyn HookModule>,
}

/// Hook subscriptions recorded from a single scan of the module directory.
#[derive(Default)]
pub struct HookRegistry {
    modules: Vec<RegisteredModule>,
    subscriptions: HashMap<String, Vec<usize>>,
    skipped: Vec<Skip>,
}

impl HookRegistry {
    /// Creates an empty registry with no subscriptions.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Scans `base_dir` recursively and records every catalogued module.
    ///
    /// Files are visited in the order the directory iterator yields them,
    /// recursing depth-first; callers must not rely on a specific module
    /// running first. A missing base directory yields an empty registry.
    /// Unreadable directories and unresolvable modules are skipped, never
    /// raised.
    #[must_use]
    pub fn scan(base_dir: &Path, catalog: &ModuleCatalog) -> Self {
        let mut registry = Self::new();
        if !base_dir.is_dir() {
            debug!(path = %base_dir.display(), "module directory missing, no hooks registered");
            return registry;
        }
        registry.scan_directory(base_dir, catalog);
        registry
    }

    fn scan_directory(&mut self, dir: &Path, catalog: &ModuleCatalog) {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(error) => {
                warn!(path = %dir.display(), %error, "skipping unreadable module directory");
                return;
            }
        };
        for entry in entries {
            let Ok(entry) = entry else {
                continue;
            };
            let path = entry.path();
            if path.is_dir() {
                self.scan_directory(&path, catalog);
                continue;
            }
            let Some(file_name) = path.file_name().and_then(|name| name.to_str()) else {
                continue;
            };
            let Some(module_name) = ModuleName::from_file_name(file_name) else {
                continue;
            };
            self.register_module(module_name, &path, catalog);
        }
    }

    fn register_module(&mut self, name: ModuleName, path: &Path, catalog: &ModuleCatalog) {
        let Some(module) = catalog.instantiate(name.as_str()) else {
            debug!(module = %name, path = %path.display(), "module file has no catalogued constructor");
            self.skipped.push(Skip::UnknownModule {
                module: name.to_string(),
                path: path.to_path_buf(),
            });
            return;
        };

        let index = self.modules.len();
        for binding in module.bindings() {
            match binding.visibility {
                HookVisibility::Public => {
                    self.subscriptions
                        .entry(binding.hook)
                        .or_default()
                        .push(index);
                }
                HookVisibility::Private => {
                    debug!(module = %name, hook = %binding.hook, "binding is private, skipping");
                    self.skipped.push(Skip::PrivateHook {
                        module: name.to_string(),
                        hook: binding.hook,
                    });
                }
            }
        }
        self.modules.push(RegisteredModule { name, module });
    }

    /// Fires a hook, threading the payload through every subscriber.
    ///
    /// Subscribers run in registration order; each receives the payload
    /// returned by its predecessor. A hook nobody subscribed to returns the
    /// payload unchanged.
    #[must_use]
    pub fn dispatch(&mut self, hook: &str, payload: Value) -> Value {
        let Some(indices) = self.subscriptions.get(hook).cloned() else {
            trace!(hook, "no subscribers");
            return payload;
        };
        let mut current = payload;
        for index in indices {
            let Some(entry) = self.modules.get_mut(index) else {
                continue;
            };
            trace!(hook, module = %entry.name, "invoking hook");
            current = entry.module.call(hook, current);
        }
        current
    }

    /// Returns the number of subscribers recorded for a hook.
    #[must_use]
    pub fn subscriber_count(&self, hook: &str) -> usize {
        self.subscriptions.get(hook).map_or(0, Vec::len)
    }

    /// Returns the modules and bindings skipped during the scan.
    #[must_use]
    pub fn skipped(&self) -> &[Skip] {
        self.skipped.as_slice()
    }

    /// Returns the number of instantiated modules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    /// Returns `true` when no modules were instantiated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

impl std::fmt::Debug for HookRegistry {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("HookRegistry")
            .field(
                "modules",
                &self
                    .modules
                    .iter()
                    .map(|entry| entry.name.as_str())
                    .collect::<Vec<_>>(),
            )
            .field("hooks", &self.subscriptions.keys().collect::<Vec<_>>())
            .field("skipped", &self.skipped)
            .finish()
    }
}

#[cfg(test)]
mod tests;
