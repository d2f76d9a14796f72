//! Fakegen: planning layer for fake client-set generation.
//!
//! This crate plans the generation of test-double ("fake") API clients
//! from a declarative resource-type catalog. Given types grouped by
//! (group, version), it decides which output artifacts must exist, names
//! them, computes their package identities, and packages everything the
//! downstream renderer needs into deterministic [`GenerationTarget`]s.
//! Rendering file bodies and writing files are out of scope: targets are
//! handed to an external execution stage.
//!
//! ## Core Types
//!
//! - [`ResourceType`] - A catalog entry a fake client may be generated for
//! - [`GroupVersion`] / [`GroupVersions`] - The API namespace identities
//! - [`ClientGenTags`] / [`EligibilityFilter`] - The `+genclient` opt-in grammar
//! - [`GenerationTarget`] - One planned output package with its ordered units
//! - [`GenerationUnit`] / [`UnitKind`] - One planned output file's context
//! - [`ImportTracker`] - Per-unit symbol/import-reference tracking
//!
//! ## Modules
//!
//! - [`model`] - Resource-type and group/version data model
//! - [`tags`] - Generation-intent tag parsing and eligibility
//! - [`paths`] - Output directory / import-path resolution
//! - [`naming`] - Unit identifier naming
//! - [`imports`] - Per-unit import tracking
//! - [`plan`] - Target assembly for groups and the aggregate clientset
//! - [`errors`] - Error types for the planner
//!
//! ## Example
//!
//! Plan the fake package for `apps/v1`:
//!
//! ```
//! use fakegen::{
//!     EligibilityFilter, GroupTargetSpec, GroupVersion, ResourceType, target_for_group,
//! };
//!
//! let catalog = vec![
//!     ResourceType::new("Deployment", "example.com/api/apps/v1")
//!         .with_comments(vec!["+genclient".to_string()]),
//!     ResourceType::new("DeploymentSpec", "example.com/api/apps/v1"),
//! ];
//! let eligible = EligibilityFilter.eligible_types(&catalog).unwrap();
//!
//! let target = target_for_group(GroupTargetSpec {
//!     group_version: GroupVersion::new("apps", "v1"),
//!     types: eligible,
//!     clientset_dir: "pkg/client/clientset".to_string(),
//!     clientset_package: "example.com/client/clientset".to_string(),
//!     group_package_name: "apps".to_string(),
//!     group_display_name: "Apps".to_string(),
//!     input_package: "example.com/api/apps/v1".to_string(),
//!     apply_config_package: None,
//!     header: b"// Generated file. Do not edit.\n".to_vec(),
//! });
//!
//! let names: Vec<_> = target.units().unwrap().into_iter().map(|u| u.name).collect();
//! assert_eq!(names, vec!["doc", "fake_deployment", "fake_apps_client"]);
//! ```
//!
//! ## Determinism
//!
//! Planning is purely functional: no I/O, no shared mutable state, and
//! identical inputs always yield identical targets. Independent
//! invocations for different group/versions may run concurrently with no
//! synchronization, since each unit owns a freshly constructed
//! [`ImportTracker`].

pub mod errors;
pub mod imports;
pub mod model;
pub mod naming;
pub mod paths;
pub mod plan;
pub mod tags;

// Re-export main types at crate root
pub use errors::GeneratorError;
pub use imports::ImportTracker;
pub use model::{Group, GroupVersion, GroupVersions, PackageVersion, ResourceType, Version};
pub use plan::{
    ClientsetTargetSpec, GenerationTarget, GenerationUnit, GroupTargetSpec, UnitKind,
    target_for_clientset, target_for_group,
};
pub use tags::{ClientGenTags, EligibilityFilter};
