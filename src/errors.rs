//! Error types for the fake client-set planner.

use thiserror::Error;

/// Errors that can occur while planning generation targets.
///
/// There are no retryable conditions here: the planner performs no I/O,
/// so every failure is a data or logic defect in the inputs and carries
/// enough context to locate the offending type.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// A resource type's generation tag could not be parsed.
    ///
    /// A malformed tag almost always means a typo in the type catalog
    /// that the author must fix, so planning aborts rather than silently
    /// skipping the type.
    #[error("Malformed generation tag on type '{type_name}': {tag}: {reason}")]
    MalformedTag {
        /// Name of the resource type carrying the bad tag.
        type_name: String,
        /// The offending tag text as written.
        tag: String,
        /// Explanation of what made the tag unparseable.
        reason: String,
    },

    /// Two generation units within one target computed the same name.
    ///
    /// Unit names become output file names, so a collision would make two
    /// planned files overwrite each other. This is an invariant violation
    /// in the plan, not a recoverable runtime condition.
    #[error("Duplicate generation unit name '{name}' in target package '{package}'")]
    IdentifierCollision {
        /// The colliding unit name.
        name: String,
        /// Import path of the target package containing the collision.
        package: String,
    },
}
