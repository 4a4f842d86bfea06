//! The module catalog.
//!
//! A module is a named feature area of the dashboard that an account may be
//! granted. The set of valid module identifiers is fixed at build time: adding
//! or removing one is a deployment, never a data mutation.
//!
//! Every write of an account's `modules` is checked against the catalog, so
//! the granted modules of any stored account are always a subset of
//! [`ModuleCatalog::all`].
//!
//! # Example
//!
//! ```ignore
//! use securedash_core::catalog::ModuleCatalog;
//!
//! let catalog = ModuleCatalog::standard();
//!
//! assert!(catalog.is_valid_module("inventory"));
//! assert!(!catalog.is_valid_module("payroll"));
//!
//! // Unknown entries are reported back verbatim
//! let requested = vec!["reports".to_string(), "bogus".to_string()];
//! assert_eq!(catalog.normalize(&requested), Err(vec!["bogus".to_string()]));
//! ```

/// Inventory management screens
pub const INVENTORY: &str = "inventory";
/// Reporting and exports
pub const REPORTS: &str = "reports";
/// The landing dashboard
pub const DASHBOARD: &str = "dashboard";
/// Tenant settings
pub const SETTINGS: &str = "settings";
/// Analytics views
pub const ANALYTICS: &str = "analytics";

/// Every module identifier the system knows about, in display order.
pub const AVAILABLE_MODULES: [&str; 5] = [INVENTORY, REPORTS, DASHBOARD, SETTINGS, ANALYTICS];

/// Read-only view over the set of valid module identifiers.
///
/// The catalog is `Copy` and holds only a `'static` slice, so it can be
/// shared freely through application state without any synchronisation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModuleCatalog {
    modules: &'static [&'static str],
}

impl ModuleCatalog {
    /// Builds a catalog over an arbitrary static list.
    pub const fn new(modules: &'static [&'static str]) -> Self {
        Self { modules }
    }

    /// The catalog shipped with this build.
    pub const fn standard() -> Self {
        Self::new(&AVAILABLE_MODULES)
    }

    pub fn is_valid_module(&self, id: &str) -> bool {
        self.modules.contains(&id)
    }

    pub fn all(&self) -> &'static [&'static str] {
        self.modules
    }

    /// The full catalog as owned strings, used for accounts that get
    /// unrestricted access.
    pub fn all_owned(&self) -> Vec<String> {
        self.modules.iter().map(|m| (*m).to_string()).collect()
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Returns the requested entries that are not in the catalog.
    ///
    /// Order of first appearance is kept and duplicates are reported once.
    pub fn invalid_entries(&self, requested: &[String]) -> Vec<String> {
        let mut invalid: Vec<String> = Vec::new();
        for entry in requested {
            if !self.is_valid_module(entry) && !invalid.contains(entry) {
                invalid.push(entry.clone());
            }
        }
        invalid
    }

    /// Validates a requested grant and turns it into a set.
    ///
    /// On success the result contains each granted module once, in catalog
    /// order. On failure the offending entries are returned and nothing is
    /// normalised.
    pub fn normalize(&self, requested: &[String]) -> Result<Vec<String>, Vec<String>> {
        let invalid = self.invalid_entries(requested);
        if !invalid.is_empty() {
            return Err(invalid);
        }

        Ok(self
            .modules
            .iter()
            .filter(|m| requested.iter().any(|r| r == *m))
            .map(|m| (*m).to_string())
            .collect())
    }

    /// Whether every entry of `modules` is in the catalog.
    pub fn contains_all(&self, modules: &[String]) -> bool {
        modules.iter().all(|m| self.is_valid_module(m))
    }
}

impl Default for ModuleCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
