//! Planning output: generation units and generation targets.
//!
//! This module defines what the planner hands to the (external) rendering
//! stage. Each submodule assembles one flavor of target:
//!
//! - [`group`] - One fake-client package per (group, version)
//! - [`clientset`] - The single aggregate fake client-set package
//!
//! ## Unit Ordering
//!
//! Unit order within a target is an invariant, not an accident of append
//! order: the documentation unit is always first, and a group target's
//! group-client unit is always last. Unit names within a target are
//! pairwise distinct; a collision is a fatal planning defect.
//!
//! ## Laziness
//!
//! Targets capture their immutable inputs and materialize units on demand
//! via [`GenerationTarget::units`]. Every materialization builds fresh
//! [`ImportTracker`]s, so two renders of the same target can never leak
//! aliasing decisions into each other.

pub mod clientset;
pub mod group;

use std::collections::{BTreeMap, BTreeSet};

use strum::Display;

use crate::errors::GeneratorError;
use crate::imports::ImportTracker;
use crate::model::{GroupVersion, GroupVersions, ResourceType};
use crate::tags::EligibilityFilter;

pub use clientset::{ClientsetTargetSpec, target_for_clientset};
pub use group::{GroupTargetSpec, target_for_group};

/// Unit name of the always-first documentation unit.
pub const DOC_UNIT_NAME: &str = "doc";

/// One planned output file: a name plus the context a renderer needs to
/// produce that file without consulting the assembler again.
#[derive(Debug, Clone)]
pub struct GenerationUnit {
    /// File-style identifier, unique within the owning target.
    pub name: String,
    /// What the unit renders and the context it carries.
    pub kind: UnitKind,
}

impl GenerationUnit {
    /// The package documentation unit every target starts with.
    fn doc() -> Self {
        Self {
            name: DOC_UNIT_NAME.to_string(),
            kind: UnitKind::Doc,
        }
    }
}

/// The closed set of unit kinds, each carrying only the fields it needs.
#[derive(Debug, Clone, Display)]
#[strum(serialize_all = "snake_case")]
pub enum UnitKind {
    /// Package-level documentation file.
    Doc,
    /// Fake client implementation for a single resource type.
    FakeType {
        /// Import path of the fake package being generated.
        output_package: String,
        /// Import path of the package the subject type is defined in.
        input_package: String,
        /// Group name (non-empty form).
        group: String,
        /// Version name as written in the catalog.
        version: String,
        /// Human-facing group identifier.
        group_display_name: String,
        /// The resource type this unit generates a fake client for.
        subject: ResourceType,
        /// Import path of the apply-configuration builder package;
        /// `None` disables builder-based mutation helpers for this type.
        apply_config_package: Option<String>,
        /// This unit's own import tracker, never shared.
        imports: ImportTracker,
    },
    /// Fake group client tying together all of a group/version's fakes.
    FakeGroupClient {
        /// Import path of the fake package being generated.
        output_package: String,
        /// Import path of the real (non-fake) client package, so the fake
        /// group client can expose the real interface types.
        real_client_package: String,
        /// Group name (non-empty form).
        group: String,
        /// Version name as written in the catalog.
        version: String,
        /// Human-facing group identifier.
        group_display_name: String,
        /// Every eligible type in this group/version, in catalog order.
        types: Vec<ResourceType>,
        /// This unit's own import tracker, never shared.
        imports: ImportTracker,
    },
    /// The aggregate fake client-set facade.
    FakeClientset {
        /// Every requested group with its versions.
        groups: Vec<GroupVersions>,
        /// Display name per group/version.
        group_display_names: BTreeMap<GroupVersion, String>,
        /// Import path of the fake clientset package.
        fake_clientset_package: String,
        /// Import path of the real clientset package the fake mirrors.
        real_clientset_package: String,
        /// This unit's own import tracker, never shared.
        imports: ImportTracker,
    },
    /// Scheme/registration file wiring every group/version into the
    /// fake clientset's type registry.
    SchemeRegistration {
        /// Input package per requested group/version.
        input_packages: BTreeMap<GroupVersion, String>,
        /// Import path of the package the registry is generated into.
        output_package: String,
        /// Every requested group with its versions.
        groups: Vec<GroupVersions>,
        /// Display name per group/version.
        group_display_names: BTreeMap<GroupVersion, String>,
        /// Generated registry is private to the fake package.
        private_scheme: bool,
        /// This unit's own import tracker, never shared.
        imports: ImportTracker,
    },
}

/// Captured inputs a target materializes its units from.
#[derive(Debug, Clone)]
enum TargetPlan {
    Group(GroupTargetSpec),
    Clientset(ClientsetTargetSpec),
}

/// The planning result for one output package.
///
/// Carries the package identity (name, import path, output directory),
/// the boilerplate header and package doc comment, and everything needed
/// to materialize the ordered unit list on demand. Group targets also
/// carry the eligibility filter so the rendering stage can re-check
/// eligibility independently of the caller's upstream filtering.
#[derive(Debug, Clone)]
pub struct GenerationTarget {
    /// Short package name; always `fake` for the targets planned here.
    pub package_name: String,
    /// Import path of the output package.
    pub package_path: String,
    /// Filesystem directory the package is written to.
    pub package_dir: String,
    /// Boilerplate header bytes prepended to every rendered file.
    pub header: Vec<u8>,
    /// Package-level doc comment.
    pub doc_comment: String,
    plan: TargetPlan,
    filter: Option<EligibilityFilter>,
}

impl GenerationTarget {
    /// Materializes the ordered unit list for this target.
    ///
    /// Rebuilt fresh on every call from the captured immutable inputs:
    /// identical calls yield identical names and contexts, but each unit
    /// gets a newly constructed [`ImportTracker`].
    ///
    /// ## Errors
    ///
    /// Returns [`GeneratorError::IdentifierCollision`] when two units
    /// compute the same name, which would make two planned files
    /// overwrite each other.
    pub fn units(&self) -> Result<Vec<GenerationUnit>, GeneratorError> {
        let units = match &self.plan {
            TargetPlan::Group(spec) => group::build_units(spec),
            TargetPlan::Clientset(spec) => clientset::build_units(spec),
        };

        let mut seen = BTreeSet::new();
        for unit in &units {
            if !seen.insert(unit.name.as_str()) {
                return Err(GeneratorError::IdentifierCollision {
                    name: unit.name.clone(),
                    package: self.package_path.clone(),
                });
            }
        }

        Ok(units)
    }

    /// The eligibility filter attached to group targets; `None` for the
    /// unconditional clientset target.
    pub fn filter(&self) -> Option<&EligibilityFilter> {
        self.filter.as_ref()
    }

    fn new_group(
        package_path: String,
        package_dir: String,
        header: Vec<u8>,
        spec: GroupTargetSpec,
    ) -> Self {
        Self {
            package_name: "fake".to_string(),
            package_path,
            package_dir,
            header,
            doc_comment: "Package fake has the automatically generated clients.".to_string(),
            plan: TargetPlan::Group(spec),
            filter: Some(EligibilityFilter),
        }
    }

    fn new_clientset(
        package_path: String,
        package_dir: String,
        header: Vec<u8>,
        spec: ClientsetTargetSpec,
    ) -> Self {
        Self {
            package_name: "fake".to_string(),
            package_path,
            package_dir,
            header,
            doc_comment: "This package has the automatically generated fake clientset."
                .to_string(),
            plan: TargetPlan::Clientset(spec),
            filter: None,
        }
    }
}
