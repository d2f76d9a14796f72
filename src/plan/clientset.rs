//! Aggregate clientset target assembly.
//!
//! Plans the single top-level fake client-set package: the facade unit
//! aggregating every group/version's fake package, plus the scheme
//! registration unit wiring all requested input packages into one
//! (private) type registry.

use std::collections::BTreeMap;

use tracing::debug;

use crate::imports::ImportTracker;
use crate::model::{GroupVersion, GroupVersions};
use crate::paths::clientset_fake_paths;

use super::{GenerationTarget, GenerationUnit, UnitKind};

/// Unit name of the client-set facade unit.
pub const CLIENTSET_UNIT_NAME: &str = "clientset_generated";

/// Unit name of the scheme registration unit.
pub const SCHEME_UNIT_NAME: &str = "register";

/// Inputs for planning the aggregate fake clientset package.
#[derive(Debug, Clone)]
pub struct ClientsetTargetSpec {
    /// Every requested group with its versions, in request order.
    pub groups: Vec<GroupVersions>,
    /// Human-facing display name per group/version.
    pub group_display_names: BTreeMap<GroupVersion, String>,
    /// Root output directory of the clientset tree.
    pub clientset_dir: String,
    /// Root import path of the clientset tree.
    pub clientset_package: String,
    /// Boilerplate header bytes for every rendered file.
    pub header: Vec<u8>,
}

impl ClientsetTargetSpec {
    /// The input package for every requested (group, version), keyed for
    /// deterministic iteration by the scheme unit.
    fn input_packages(&self) -> BTreeMap<GroupVersion, String> {
        let mut packages = BTreeMap::new();
        for group in &self.groups {
            for version in &group.versions {
                packages.insert(
                    GroupVersion {
                        group: group.group.clone(),
                        version: version.version.clone(),
                    },
                    version.package.clone(),
                );
            }
        }
        packages
    }
}

/// Plans the aggregate fake clientset target.
///
/// Output identities are `<clientset_dir>/fake` and
/// `<clientset_package>/fake` with no group/version nesting. The unit list
/// is always [documentation, clientset facade, scheme registration]; an
/// empty group list still yields all three units, and whether an empty
/// aggregate is worth emitting is the rendering stage's decision.
///
/// This target is unconditional: no eligibility filter is attached.
///
/// ## Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use fakegen::{ClientsetTargetSpec, target_for_clientset};
///
/// let target = target_for_clientset(ClientsetTargetSpec {
///     groups: Vec::new(),
///     group_display_names: BTreeMap::new(),
///     clientset_dir: "pkg/client/clientset".to_string(),
///     clientset_package: "example.com/client/clientset".to_string(),
///     header: Vec::new(),
/// });
///
/// assert_eq!(target.package_path, "example.com/client/clientset/fake");
/// let names: Vec<_> = target.units().unwrap().into_iter().map(|u| u.name).collect();
/// assert_eq!(names, vec!["doc", "clientset_generated", "register"]);
/// ```
pub fn target_for_clientset(spec: ClientsetTargetSpec) -> GenerationTarget {
    let (output_dir, output_package) =
        clientset_fake_paths(&spec.clientset_dir, &spec.clientset_package);

    debug!(
        groups = spec.groups.len(),
        output = %output_package,
        "planned fake clientset target"
    );

    GenerationTarget::new_clientset(output_package, output_dir, spec.header.clone(), spec)
}

/// Materializes the unit list for the clientset target.
pub(super) fn build_units(spec: &ClientsetTargetSpec) -> Vec<GenerationUnit> {
    let (_, fake_package) = clientset_fake_paths(&spec.clientset_dir, &spec.clientset_package);

    vec![
        GenerationUnit::doc(),
        GenerationUnit {
            name: CLIENTSET_UNIT_NAME.to_string(),
            kind: UnitKind::FakeClientset {
                groups: spec.groups.clone(),
                group_display_names: spec.group_display_names.clone(),
                fake_clientset_package: fake_package.clone(),
                real_clientset_package: spec.clientset_package.clone(),
                imports: ImportTracker::new(),
            },
        },
        GenerationUnit {
            name: SCHEME_UNIT_NAME.to_string(),
            kind: UnitKind::SchemeRegistration {
                input_packages: spec.input_packages(),
                output_package: fake_package,
                groups: spec.groups.clone(),
                group_display_names: spec.group_display_names.clone(),
                private_scheme: true,
                imports: ImportTracker::new(),
            },
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Group, PackageVersion, Version};

    fn apps_and_batch() -> Vec<GroupVersions> {
        vec![
            GroupVersions {
                package_name: "apps".to_string(),
                group: Group::new("apps"),
                versions: vec![PackageVersion {
                    version: Version::new("v1"),
                    package: "example.com/api/apps/v1".to_string(),
                }],
            },
            GroupVersions {
                package_name: "batch".to_string(),
                group: Group::new("batch"),
                versions: vec![
                    PackageVersion {
                        version: Version::new("v1"),
                        package: "example.com/api/batch/v1".to_string(),
                    },
                    PackageVersion {
                        version: Version::new("v2alpha1"),
                        package: "example.com/api/batch/v2alpha1".to_string(),
                    },
                ],
            },
        ]
    }

    fn display_names() -> BTreeMap<GroupVersion, String> {
        let mut names = BTreeMap::new();
        names.insert(GroupVersion::new("apps", "v1"), "Apps".to_string());
        names.insert(GroupVersion::new("batch", "v1"), "Batch".to_string());
        names.insert(GroupVersion::new("batch", "v2alpha1"), "Batch".to_string());
        names
    }

    fn spec() -> ClientsetTargetSpec {
        ClientsetTargetSpec {
            groups: apps_and_batch(),
            group_display_names: display_names(),
            clientset_dir: "pkg/client/clientset".to_string(),
            clientset_package: "example.com/client/clientset".to_string(),
            header: Vec::new(),
        }
    }

    #[test]
    fn target_has_no_eligibility_filter() {
        let target = target_for_clientset(spec());
        assert!(target.filter().is_none());
    }

    #[test]
    fn scheme_unit_maps_every_requested_version_to_its_package() {
        let target = target_for_clientset(spec());
        let units = target.units().unwrap();

        match &units[2].kind {
            UnitKind::SchemeRegistration {
                input_packages,
                private_scheme,
                output_package,
                ..
            } => {
                assert!(private_scheme);
                assert_eq!(output_package, "example.com/client/clientset/fake");
                assert_eq!(input_packages.len(), 3);
                assert_eq!(
                    input_packages[&GroupVersion::new("batch", "v2alpha1")],
                    "example.com/api/batch/v2alpha1"
                );
            }
            other => panic!("Expected SchemeRegistration, got: {}", other),
        }
    }

    #[test]
    fn clientset_unit_carries_fake_and_real_import_paths() {
        let target = target_for_clientset(spec());
        let units = target.units().unwrap();

        match &units[1].kind {
            UnitKind::FakeClientset {
                fake_clientset_package,
                real_clientset_package,
                groups,
                ..
            } => {
                assert_eq!(fake_clientset_package, "example.com/client/clientset/fake");
                assert_eq!(real_clientset_package, "example.com/client/clientset");
                assert_eq!(groups.len(), 2);
            }
            other => panic!("Expected FakeClientset, got: {}", other),
        }
    }

    #[test]
    fn empty_group_list_still_plans_all_three_units() {
        let target = target_for_clientset(ClientsetTargetSpec {
            groups: Vec::new(),
            group_display_names: BTreeMap::new(),
            clientset_dir: "out".to_string(),
            clientset_package: "example.com/cs".to_string(),
            header: Vec::new(),
        });

        let names: Vec<_> = target.units().unwrap().into_iter().map(|u| u.name).collect();
        assert_eq!(names, vec!["doc", "clientset_generated", "register"]);
    }
}
