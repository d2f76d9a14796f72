//! Per-unit import and symbol-reference tracking.
//!
//! Every generation unit owns its own freshly constructed [`ImportTracker`].
//! Trackers are never shared between units: two planned files must not
//! influence each other's aliasing decisions, or one file's import set could
//! silently rename a symbol in another.

use std::collections::BTreeMap;

/// Records the packages a single planned file references and assigns each a
/// stable, collision-free local alias.
///
/// Aliases default to the last path segment (sanitized to identifier
/// characters); when two packages would claim the same alias, later ones
/// get a numeric suffix.
///
/// ## Examples
///
/// ```
/// use fakegen::ImportTracker;
///
/// let mut imports = ImportTracker::new();
/// let v1 = imports.add("example.com/api/apps/v1");
/// assert_eq!(v1, "v1");
///
/// // A second package ending in "v1" gets a disambiguated alias.
/// let other = imports.add("example.com/api/batch/v1");
/// assert_eq!(other, "v1_2");
///
/// // Re-adding returns the alias already assigned.
/// assert_eq!(imports.add("example.com/api/apps/v1"), "v1");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportTracker {
    /// Package path -> assigned alias.
    by_path: BTreeMap<String, String>,
    /// Alias -> package path, for collision detection.
    by_alias: BTreeMap<String, String>,
}

impl ImportTracker {
    /// Creates an empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a package import and returns its local alias.
    ///
    /// Idempotent per path: registering the same package twice returns the
    /// same alias.
    pub fn add(&mut self, package: &str) -> String {
        if let Some(alias) = self.by_path.get(package) {
            return alias.clone();
        }

        let base = Self::default_alias(package);
        let mut alias = base.clone();
        let mut n = 1usize;
        while self.by_alias.contains_key(&alias) {
            n += 1;
            alias = format!("{}_{}", base, n);
        }

        self.by_path.insert(package.to_string(), alias.clone());
        self.by_alias.insert(alias.clone(), package.to_string());
        alias
    }

    /// Returns the alias assigned to a package, if it was registered.
    pub fn alias_of(&self, package: &str) -> Option<&str> {
        self.by_path.get(package).map(String::as_str)
    }

    /// Iterates `(package, alias)` pairs in deterministic (path) order.
    pub fn imports(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.by_path
            .iter()
            .map(|(path, alias)| (path.as_str(), alias.as_str()))
    }

    /// Number of distinct packages registered.
    pub fn len(&self) -> usize {
        self.by_path.len()
    }

    /// True if no packages have been registered.
    pub fn is_empty(&self) -> bool {
        self.by_path.is_empty()
    }

    /// Derives the default alias for a package: its last path segment with
    /// non-identifier characters replaced by underscores.
    fn default_alias(package: &str) -> String {
        let last = package.rsplit('/').next().unwrap_or(package);
        let mut alias: String = last
            .chars()
            .map(|c| if c.is_alphanumeric() { c } else { '_' })
            .collect();
        if alias.is_empty() || alias.chars().next().is_some_and(|c| c.is_ascii_digit()) {
            alias.insert(0, '_');
        }
        alias
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alias_is_last_segment() {
        let mut imports = ImportTracker::new();
        assert_eq!(imports.add("example.com/api/apps/v1"), "v1");
        assert_eq!(imports.add("example.com/client/testing"), "testing");
    }

    #[test]
    fn colliding_aliases_get_numeric_suffixes() {
        let mut imports = ImportTracker::new();
        assert_eq!(imports.add("example.com/api/apps/v1"), "v1");
        assert_eq!(imports.add("example.com/api/batch/v1"), "v1_2");
        assert_eq!(imports.add("example.com/api/core/v1"), "v1_3");
    }

    #[test]
    fn re_adding_is_idempotent() {
        let mut imports = ImportTracker::new();
        let first = imports.add("example.com/api/apps/v1");
        let second = imports.add("example.com/api/apps/v1");
        assert_eq!(first, second);
        assert_eq!(imports.len(), 1);
    }

    #[test]
    fn non_identifier_characters_are_sanitized() {
        let mut imports = ImportTracker::new();
        assert_eq!(imports.add("example.com/client-go"), "client_go");
    }

    #[test]
    fn leading_digit_gets_underscore_prefix() {
        let mut imports = ImportTracker::new();
        assert_eq!(imports.add("example.com/api/2beta"), "_2beta");
    }

    #[test]
    fn imports_iterate_in_path_order() {
        let mut imports = ImportTracker::new();
        imports.add("example.com/b");
        imports.add("example.com/a");

        let paths: Vec<_> = imports.imports().map(|(p, _)| p).collect();
        assert_eq!(paths, vec!["example.com/a", "example.com/b"]);
    }
}
