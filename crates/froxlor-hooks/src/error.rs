//! Domain errors raised by hook operations.

use thiserror::Error;

/// Errors arising from catalog management.
///
/// Discovery and dispatch never fail; lookup misses are recorded as
/// [`Skip`](crate::registry::Skip) entries instead.
#[derive(Debug, Error)]
pub enum HookError {
    /// A module constructor was registered twice under the same name.
    #[error("module '{name}' is already registered in the catalog")]
    DuplicateModule {
        /// Name of the offending module.
        name: String,
    },
}
