//! Per-group target assembly.
//!
//! Plans the fake-client package for a single (group, version): one unit
//! per eligible resource type, bracketed by the documentation unit and the
//! trailing group-client unit.

use tracing::debug;

use crate::imports::ImportTracker;
use crate::model::{GroupVersion, ResourceType};
use crate::naming::fake_type_unit_name;
use crate::paths::{GroupVersionPaths, group_version_paths};

use super::{GenerationTarget, GenerationUnit, UnitKind};

/// Inputs for planning one group/version's fake package.
///
/// `types` is expected to be pre-filtered to the eligible resource types,
/// in catalog order; the returned target additionally carries the
/// eligibility filter so the rendering stage can verify that expectation.
#[derive(Debug, Clone)]
pub struct GroupTargetSpec {
    /// The group/version this package covers.
    pub group_version: GroupVersion,
    /// Eligible resource types, in catalog order.
    pub types: Vec<ResourceType>,
    /// Root output directory of the clientset tree.
    pub clientset_dir: String,
    /// Root import path of the clientset tree.
    pub clientset_package: String,
    /// Directory/package segment used for this group in output paths.
    pub group_package_name: String,
    /// Human-facing group identifier.
    pub group_display_name: String,
    /// Import path of the package the types are defined in.
    pub input_package: String,
    /// Import path of the apply-configuration builder package; `None`
    /// disables builder-based mutation helpers.
    pub apply_config_package: Option<String>,
    /// Boilerplate header bytes for every rendered file.
    pub header: Vec<u8>,
}

impl GroupTargetSpec {
    fn paths(&self) -> GroupVersionPaths {
        group_version_paths(
            &self.clientset_dir,
            &self.clientset_package,
            &self.group_package_name,
            &self.group_version.version,
        )
    }
}

/// Plans the fake-client generation target for one (group, version).
///
/// The returned target has package name `fake`, output identities derived
/// by [`group_version_paths`], and a lazily materialized unit list of
/// `|types| + 2` units: documentation first, one fake client per type in
/// catalog order, and the group-client unit last.
///
/// ## Examples
///
/// ```
/// use fakegen::{GroupTargetSpec, GroupVersion, ResourceType, target_for_group};
///
/// let target = target_for_group(GroupTargetSpec {
///     group_version: GroupVersion::new("apps", "v1"),
///     types: vec![
///         ResourceType::new("Deployment", "example.com/api/apps/v1")
///             .with_comments(vec!["+genclient".to_string()]),
///     ],
///     clientset_dir: "pkg/client/clientset".to_string(),
///     clientset_package: "example.com/client/clientset".to_string(),
///     group_package_name: "apps".to_string(),
///     group_display_name: "Apps".to_string(),
///     input_package: "example.com/api/apps/v1".to_string(),
///     apply_config_package: None,
///     header: Vec::new(),
/// });
///
/// assert_eq!(target.package_name, "fake");
/// assert_eq!(
///     target.package_path,
///     "example.com/client/clientset/typed/apps/v1/fake"
/// );
/// let names: Vec<_> = target.units().unwrap().into_iter().map(|u| u.name).collect();
/// assert_eq!(names, vec!["doc", "fake_deployment", "fake_apps_client"]);
/// ```
pub fn target_for_group(spec: GroupTargetSpec) -> GenerationTarget {
    let paths = spec.paths();

    debug!(
        group = spec.group_version.group.non_empty(),
        version = spec.group_version.version.non_empty(),
        types = spec.types.len(),
        output = %paths.output_package,
        "planned fake group target"
    );

    GenerationTarget::new_group(paths.output_package, paths.output_dir, spec.header.clone(), spec)
}

/// Materializes the unit list for a group target.
pub(super) fn build_units(spec: &GroupTargetSpec) -> Vec<GenerationUnit> {
    let paths = spec.paths();

    let mut units = Vec::with_capacity(spec.types.len() + 2);
    units.push(GenerationUnit::doc());

    for subject in &spec.types {
        units.push(fake_type_unit(spec, &paths, subject));
    }

    units.push(group_client_unit(spec, &paths));
    units
}

/// Builds the fake-client unit for one resource type.
fn fake_type_unit(
    spec: &GroupTargetSpec,
    paths: &GroupVersionPaths,
    subject: &ResourceType,
) -> GenerationUnit {
    GenerationUnit {
        name: fake_type_unit_name(&subject.name),
        kind: UnitKind::FakeType {
            output_package: paths.output_package.clone(),
            input_package: spec.input_package.clone(),
            group: spec.group_version.group.non_empty().to_string(),
            version: spec.group_version.version.to_string(),
            group_display_name: spec.group_display_name.clone(),
            subject: subject.clone(),
            apply_config_package: spec.apply_config_package.clone(),
            imports: ImportTracker::new(),
        },
    }
}

/// Builds the trailing group-client unit summarizing every eligible type.
fn group_client_unit(spec: &GroupTargetSpec, paths: &GroupVersionPaths) -> GenerationUnit {
    GenerationUnit {
        name: format!("fake_{}_client", spec.group_package_name),
        kind: UnitKind::FakeGroupClient {
            output_package: paths.output_package.clone(),
            real_client_package: paths.real_client_package.clone(),
            group: spec.group_version.group.non_empty().to_string(),
            version: spec.group_version.version.to_string(),
            group_display_name: spec.group_display_name.clone(),
            types: spec.types.clone(),
            imports: ImportTracker::new(),
        },
    }
}
