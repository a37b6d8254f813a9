//! Module file naming convention.
//!
//! A file named `module.<ModuleName>.<ext>` under the module base directory
//! signals the presence of module `<ModuleName>`. The `module.` prefix is
//! matched case-insensitively; both the name and the extension must be
//! non-empty. The name itself may contain dots, so the extension is split
//! off at the last dot.

use std::fmt;

/// A module name extracted from a conventionally named file.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ModuleName(String);

/// Prefix marking a file as a module declaration.
const MODULE_PREFIX: &str = "module.";

impl ModuleName {
    /// Parses a file name against the `module.<Name>.<ext>` convention.
    ///
    /// Returns `None` for file names that do not match, including names with
    /// an empty module component (`module..php`) or without an extension
    /// (`module.Foo`).
    #[must_use]
    pub fn from_file_name(file_name: &str) -> Option<Self> {
        if file_name.len() < MODULE_PREFIX.len() {
            return None;
        }
        let (prefix, rest) = file_name.split_at_checked(MODULE_PREFIX.len())?;
        if !prefix.eq_ignore_ascii_case(MODULE_PREFIX) {
            return None;
        }
        let (name, extension) = rest.rsplit_once('.')?;
        if name.is_empty() || extension.is_empty() {
            return None;
        }
        Some(Self(name.to_owned()))
    }

    /// Returns the module name as text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for ModuleName {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl From<ModuleName> for String {
    fn from(name: ModuleName) -> Self {
        name.0
    }
}
