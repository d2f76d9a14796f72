//! Core types describing the resource-type catalog.
//!
//! This module provides the input side of the planner's data model:
//!
//! - [`ResourceType`] - A named API type a client may be generated for
//! - [`Group`] / [`Version`] - The two halves of an API namespace
//! - [`GroupVersion`] - The (group, version) identity pair
//! - [`GroupVersions`] - A group together with all of its requested versions
//!
//! These values are supplied once per planning invocation by an external
//! type-introspection catalog and are never mutated by the planner.

use serde::{Deserialize, Serialize};

/// A resource type for which a fake client may be generated.
///
/// Referenced, never mutated: the planner treats the catalog as read-only
/// input and copies what it needs into generation units.
///
/// ## Examples
///
/// ```
/// use fakegen::ResourceType;
///
/// let t = ResourceType::new("Deployment", "example.com/api/apps/v1")
///     .with_comments(vec!["+genclient".to_string()]);
/// assert_eq!(t.name, "Deployment");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceType {
    /// Canonical short name of the type (e.g., "Deployment").
    pub name: String,
    /// Import path of the package the type is defined in.
    pub package: String,
    /// Combined annotation/comment lines attached to the type.
    ///
    /// Generation-intent tags (`+genclient` and friends) are parsed out of
    /// these lines; see [`crate::tags::ClientGenTags`].
    pub comments: Vec<String>,
}

impl ResourceType {
    /// Creates a resource type with no attached comments.
    pub fn new(name: impl Into<String>, package: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            package: package.into(),
            comments: Vec::new(),
        }
    }

    /// Replaces the attached comment lines.
    pub fn with_comments(mut self, comments: Vec<String>) -> Self {
        self.comments = comments;
        self
    }
}

/// An API group name.
///
/// The empty group is legal and denotes the legacy "core" group;
/// [`Group::non_empty`] substitutes the spelled-out form where a
/// non-empty identifier is required.
///
/// ## Examples
///
/// ```
/// use fakegen::Group;
///
/// assert_eq!(Group::new("apps").non_empty(), "apps");
/// assert_eq!(Group::new("").non_empty(), "core");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Group(pub String);

impl Group {
    /// Creates a group from a name; empty means the core group.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the group name, substituting `"core"` for the empty group.
    pub fn non_empty(&self) -> &str {
        if self.0.is_empty() { "core" } else { &self.0 }
    }
}

impl std::fmt::Display for Group {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// An API version name.
///
/// The empty version denotes the unversioned internal API; as with
/// [`Group`], [`Version::non_empty`] supplies a printable substitute.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Version(pub String);

impl Version {
    /// Creates a version from a name; empty means the internal version.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the version name, substituting `"internalversion"` when empty.
    pub fn non_empty(&self) -> &str {
        if self.0.is_empty() {
            "internalversion"
        } else {
            &self.0
        }
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// The (group, version) pair under which resource types are organized.
///
/// ## Examples
///
/// ```
/// use fakegen::GroupVersion;
///
/// let gv = GroupVersion::new("apps", "v1");
/// assert_eq!(gv.group.non_empty(), "apps");
/// assert_eq!(gv.version.non_empty(), "v1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GroupVersion {
    /// The API group (may be empty for the core group).
    pub group: Group,
    /// The API version within the group.
    pub version: Version,
}

impl GroupVersion {
    /// Creates a group/version pair from plain names.
    pub fn new(group: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            group: Group::new(group),
            version: Version::new(version),
        }
    }
}

/// One requested version of a group, together with the input package its
/// type definitions come from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageVersion {
    /// The version name.
    pub version: Version,
    /// Import path of the package holding this version's type definitions.
    pub package: String,
}

/// A group and every version of it requested for generation.
///
/// This is the clientset-level view of the catalog: the aggregate target
/// iterates these to wire each group/version's fake package into the
/// client-set facade and the scheme registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupVersions {
    /// Directory/package segment used for this group in output paths.
    pub package_name: String,
    /// The group identity.
    pub group: Group,
    /// All requested versions, in catalog order.
    pub versions: Vec<PackageVersion>,
}

impl GroupVersions {
    /// Iterates the (group, version) pairs this entry covers.
    pub fn group_versions(&self) -> impl Iterator<Item = GroupVersion> + '_ {
        self.versions.iter().map(|v| GroupVersion {
            group: self.group.clone(),
            version: v.version.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_group_reads_as_core() {
        assert_eq!(Group::new("").non_empty(), "core");
        assert_eq!(Group::new("apps").non_empty(), "apps");
    }

    #[test]
    fn empty_version_reads_as_internal() {
        assert_eq!(Version::new("").non_empty(), "internalversion");
        assert_eq!(Version::new("v1beta2").non_empty(), "v1beta2");
    }

    #[test]
    fn group_version_ordering_is_stable() {
        let a = GroupVersion::new("apps", "v1");
        let b = GroupVersion::new("batch", "v1");
        assert!(a < b);
    }

    #[test]
    fn group_versions_expand_to_pairs() {
        let gvs = GroupVersions {
            package_name: "apps".to_string(),
            group: Group::new("apps"),
            versions: vec![
                PackageVersion {
                    version: Version::new("v1"),
                    package: "example.com/api/apps/v1".to_string(),
                },
                PackageVersion {
                    version: Version::new("v1beta1"),
                    package: "example.com/api/apps/v1beta1".to_string(),
                },
            ],
        };

        let pairs: Vec<_> = gvs.group_versions().collect();
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0], GroupVersion::new("apps", "v1"));
        assert_eq!(pairs[1], GroupVersion::new("apps", "v1beta1"));
    }

    #[test]
    fn resource_type_serde_roundtrip() {
        let t = ResourceType::new("Deployment", "example.com/api/apps/v1")
            .with_comments(vec!["+genclient".to_string()]);

        let json = serde_json::to_string(&t).unwrap();
        let back: ResourceType = serde_json::from_str(&json).unwrap();
        assert_eq!(back, t);
    }
}
