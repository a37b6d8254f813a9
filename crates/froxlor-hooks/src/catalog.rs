//! Catalog of module constructors.
//!
//! The catalog is the Rust stand-in for "a type named `<ModuleName>`
//! constructible with no arguments": it maps module names to factories the
//! registry invokes for every conventionally named file it discovers.

use std::collections::BTreeMap;

use crate::error::HookError;
use crate::module::HookModule;

/// No-argument constructor for a module implementation.
pub type ModuleFactory = Box<dyn Fn() -> Box<dyn HookModule>>;

/// Registry of module constructors keyed by module name.
#[derive(Default)]
pub struct ModuleCatalog {
    factories: BTreeMap<String, ModuleFactory>,
}

impl ModuleCatalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a module constructor under a name.
    ///
    /// # Errors
    ///
    /// Returns [`HookError::DuplicateModule`] when the name is already
    /// taken.
    pub fn register<F, M>(&mut self, name: impl Into<String>, factory: F) -> Result<(), HookError>
    where
        F: Fn() -> M + 'static,
        M: HookModule + 'static,
    {
        let name = name.into();
        if self.factories.contains_key(&name) {
            return Err(HookError::DuplicateModule { name });
        }
        self.factories
            .insert(name, Box::new(move || Box::new(factory())));
        Ok(())
    }

    /// Instantiates the module registered under `name`, when present.
    #[must_use]
    pub fn instantiate(&self, name: &str) -> Option<Box<dyn HookModule>> {
        self.factories.get(name).map(|factory| factory())
    }

    /// Returns the number of catalogued modules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    /// Returns `true` when no modules are catalogued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

impl std::fmt::Debug for ModuleCatalog {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ModuleCatalog")
            .field("modules", &self.factories.keys().collect::<Vec<_>>())
            .finish()
    }
}
