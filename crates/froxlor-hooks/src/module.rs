//! The module trait and hook binding declarations.

use serde_json::Value;

/// Visibility of a hook binding.
///
/// The original convention located hooks by reflecting over module methods
/// and skipped non-public ones. Declaring the visibility keeps that case
/// distinguishable instead of burying it in a caught exception.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookVisibility {
    /// The binding is callable through the registry.
    Public,
    /// The binding exists but is not exposed; it is recorded as a skip.
    Private,
}

/// A hook a module declares interest in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HookBinding {
    /// Exact hook name the module subscribes to. Convention is to embed the
    /// module name (e.g. `Dns_zoneAdded`) to avoid collisions.
    pub hook: String,
    /// Whether the binding is callable.
    pub visibility: HookVisibility,
}

impl HookBinding {
    /// Declares a public (callable) binding.
    #[must_use]
    pub fn public(hook: impl Into<String>) -> Self {
        Self {
            hook: hook.into(),
            visibility: HookVisibility::Public,
        }
    }

    /// Declares a private (skipped) binding.
    #[must_use]
    pub fn private(hook: impl Into<String>) -> Self {
        Self {
            hook: hook.into(),
            visibility: HookVisibility::Private,
        }
    }
}

/// A self-contained extension unit discovered by file-naming convention.
///
/// Implementations are constructed by the factory registered in the
/// [`ModuleCatalog`](crate::catalog::ModuleCatalog) and live for the
/// lifetime of the registry.
pub trait HookModule {
    /// Lists the hooks this module binds, with their visibility.
    fn bindings(&self) -> Vec<HookBinding>;

    /// Handles one hook invocation.
    ///
    /// The payload is received by value and the (possibly modified) payload
    /// is returned; the registry threads it to the next subscriber. `hook`
    /// is always one of the public bindings this module declared.
    fn call(&mut self, hook: &str, payload: Value) -> Value;
}
