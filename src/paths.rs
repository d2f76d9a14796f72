//! Output path resolution for generated packages.
//!
//! Every generated package has two identities that must never drift apart:
//! a filesystem output directory and an import path. [`PackagePath`] makes
//! that pairing structural: both strings are derived from one root plus one
//! shared segment list, so toggling the `fake` suffix or changing the
//! group/version can never move only one of the two.

use serde::{Deserialize, Serialize};

use crate::model::Version;

/// Trailing path segment that marks a fake (test-double) package.
const FAKE_SEGMENT: &str = "fake";

/// A package identity as a root plus ordered path segments.
///
/// Used for both import paths and output directories so the two are always
/// derived by the same joins. Rendering joins everything with `/`.
///
/// ## Examples
///
/// ```
/// use fakegen::paths::PackagePath;
///
/// let path = PackagePath::new("example.com/client/clientset")
///     .join("typed")
///     .join("apps")
///     .join("v1");
/// assert_eq!(path.to_string(), "example.com/client/clientset/typed/apps/v1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackagePath {
    root: String,
    segments: Vec<String>,
}

impl PackagePath {
    /// Creates a path with no segments beyond the root.
    pub fn new(root: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            segments: Vec::new(),
        }
    }

    /// Returns a new path with one more segment appended.
    pub fn join(mut self, segment: impl Into<String>) -> Self {
        self.segments.push(segment.into());
        self
    }

    /// Returns a new path with all given segments appended, in order.
    pub fn join_all<I, S>(mut self, segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.segments.extend(segments.into_iter().map(Into::into));
        self
    }
}

impl std::fmt::Display for PackagePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.root)?;
        for segment in &self.segments {
            write!(f, "/{}", segment)?;
        }
        Ok(())
    }
}

/// Resolved output identities for one group/version's fake package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupVersionPaths {
    /// Filesystem directory the fake package is written to.
    pub output_dir: String,
    /// Import path of the fake package.
    pub output_package: String,
    /// Import path of the real (non-fake) client package for the same
    /// group/version, used by fake units to reference the real client's
    /// exported interface types.
    pub real_client_package: String,
}

/// Resolves output paths for one group/version's fake client package.
///
/// The shared subdirectory is `typed/<lower(group)>/<lower(version)>`; the
/// fake variant appends a literal `fake` segment to both the directory and
/// the import path. Pure string composition: no I/O, no error cases, and
/// identical inputs always produce identical outputs.
///
/// ## Examples
///
/// ```
/// use fakegen::Version;
/// use fakegen::paths::group_version_paths;
///
/// let paths = group_version_paths(
///     "pkg/client/clientset",
///     "example.com/client/clientset",
///     "apps",
///     &Version::new("v1"),
/// );
/// assert_eq!(paths.output_dir, "pkg/client/clientset/typed/apps/v1/fake");
/// assert_eq!(paths.output_package, "example.com/client/clientset/typed/apps/v1/fake");
/// assert_eq!(paths.real_client_package, "example.com/client/clientset/typed/apps/v1");
/// ```
pub fn group_version_paths(
    clientset_dir: &str,
    clientset_package: &str,
    group_package_name: &str,
    version: &Version,
) -> GroupVersionPaths {
    let subdir = [
        "typed".to_string(),
        group_package_name.to_lowercase(),
        version.non_empty().to_lowercase(),
    ];

    let real_client = PackagePath::new(clientset_package).join_all(subdir.clone());
    let output = real_client.clone().join(FAKE_SEGMENT);
    let output_dir = PackagePath::new(clientset_dir)
        .join_all(subdir)
        .join(FAKE_SEGMENT);

    GroupVersionPaths {
        output_dir: output_dir.to_string(),
        output_package: output.to_string(),
        real_client_package: real_client.to_string(),
    }
}

/// Resolves the output directory and import path of the aggregate fake
/// clientset package: `<root>/fake` with no group/version nesting.
pub fn clientset_fake_paths(clientset_dir: &str, clientset_package: &str) -> (String, String) {
    let dir = PackagePath::new(clientset_dir).join(FAKE_SEGMENT);
    let package = PackagePath::new(clientset_package).join(FAKE_SEGMENT);
    (dir.to_string(), package.to_string())
}
