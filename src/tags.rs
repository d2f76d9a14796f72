//! Generation-intent tags and the eligibility filter.
//!
//! Resource types opt into client generation with `+genclient` directives
//! embedded in their comment lines. This module parses that grammar into
//! [`ClientGenTags`] and exposes [`EligibilityFilter`], the predicate that
//! decides whether a type receives a fake client.
//!
//! ## Tag Grammar
//!
//! ```text
//! +genclient                      request client generation
//! +genclient:nonNamespaced        type is cluster-scoped
//! +genclient:noStatus             skip status subresource helpers
//! +genclient:noVerbs              generate no verbs at all
//! +genclient:readonly             generate read verbs only
//! +genclient:onlyVerbs=get,list   generate exactly these verbs
//! +genclient:skipVerbs=watch      generate all but these verbs
//! ```
//!
//! Malformed tags are a hard failure: a bad tag almost always means a typo
//! in the type catalog, and silently skipping the type would hide it.

use crate::errors::GeneratorError;
use crate::model::ResourceType;

/// Leading marker for all generation-intent tags.
const TAG_PREFIX: &str = "+genclient";

/// Verbs that may appear in `onlyVerbs`/`skipVerbs` lists.
const KNOWN_VERBS: &[&str] = &[
    "create",
    "update",
    "updateStatus",
    "delete",
    "deleteCollection",
    "get",
    "list",
    "watch",
    "patch",
    "apply",
];

/// Parsed generation-intent tags for one resource type.
///
/// ## Examples
///
/// ```
/// use fakegen::tags::ClientGenTags;
///
/// let tags = ClientGenTags::parse(
///     "Deployment",
///     &["+genclient".to_string(), "+genclient:readonly".to_string()],
/// )
/// .unwrap();
/// assert!(tags.generate_client);
/// assert!(tags.readonly);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientGenTags {
    /// True when the type requested client generation (`+genclient`).
    pub generate_client: bool,
    /// Type is cluster-scoped rather than namespaced.
    pub non_namespaced: bool,
    /// Skip status-subresource helpers.
    pub no_status: bool,
    /// Generate no verbs at all.
    pub no_verbs: bool,
    /// Generate only the read verbs.
    pub readonly: bool,
    /// Explicit verb allow-list; empty means "all verbs".
    pub only_verbs: Vec<String>,
    /// Verbs to omit from the generated client.
    pub skip_verbs: Vec<String>,
}

impl ClientGenTags {
    /// Parses generation tags out of a type's combined comment lines.
    ///
    /// Lines that do not start with `+genclient` (after stripping comment
    /// markers) are ignored. Unknown sub-tags, unknown verbs, values on
    /// value-less tags, and contradictory combinations are all
    /// [`GeneratorError::MalformedTag`] errors; `type_name` is carried into
    /// the error so the offending catalog entry can be located.
    pub fn parse(type_name: &str, lines: &[String]) -> Result<Self, GeneratorError> {
        let mut tags = Self::default();

        for line in lines {
            let Some(tag) = extract_tag(line) else {
                continue;
            };
            tags.apply(type_name, tag)?;
        }

        tags.validate(type_name)?;
        Ok(tags)
    }

    /// Applies a single `+genclient...` directive.
    fn apply(&mut self, type_name: &str, tag: &str) -> Result<(), GeneratorError> {
        let rest = &tag[TAG_PREFIX.len()..];

        if rest.is_empty() {
            self.generate_client = true;
            return Ok(());
        }

        let Some(sub) = rest.strip_prefix(':') else {
            return Err(malformed(type_name, tag, "expected ':' after +genclient"));
        };

        let (name, value) = match sub.split_once('=') {
            Some((name, value)) => (name, Some(value)),
            None => (sub, None),
        };

        match (name, value) {
            ("nonNamespaced", None) => self.non_namespaced = true,
            ("noStatus", None) => self.no_status = true,
            ("noVerbs", None) => self.no_verbs = true,
            ("readonly", None) => self.readonly = true,
            ("nonNamespaced" | "noStatus" | "noVerbs" | "readonly", Some(_)) => {
                return Err(malformed(type_name, tag, "tag does not take a value"));
            }
            ("onlyVerbs", Some(verbs)) => self.only_verbs = parse_verbs(type_name, tag, verbs)?,
            ("skipVerbs", Some(verbs)) => self.skip_verbs = parse_verbs(type_name, tag, verbs)?,
            ("onlyVerbs" | "skipVerbs", None) => {
                return Err(malformed(type_name, tag, "tag requires a verb list value"));
            }
            _ => return Err(malformed(type_name, tag, "unknown tag")),
        }

        Ok(())
    }

    /// Rejects contradictory tag combinations.
    fn validate(&self, type_name: &str) -> Result<(), GeneratorError> {
        if self.no_verbs && (!self.only_verbs.is_empty() || !self.skip_verbs.is_empty()) {
            return Err(malformed(
                type_name,
                "+genclient:noVerbs",
                "cannot combine noVerbs with onlyVerbs or skipVerbs",
            ));
        }
        if !self.only_verbs.is_empty() && !self.skip_verbs.is_empty() {
            return Err(malformed(
                type_name,
                "+genclient:onlyVerbs",
                "cannot combine onlyVerbs with skipVerbs",
            ));
        }
        Ok(())
    }
}

/// Extracts the tag text from a comment line, stripping comment markers and
/// surrounding whitespace. Returns `None` for non-tag lines.
fn extract_tag(line: &str) -> Option<&str> {
    let trimmed = line
        .trim_start()
        .trim_start_matches("//")
        .trim();
    trimmed.starts_with(TAG_PREFIX).then_some(trimmed)
}

/// Parses and validates a comma-separated verb list.
fn parse_verbs(type_name: &str, tag: &str, verbs: &str) -> Result<Vec<String>, GeneratorError> {
    if verbs.is_empty() {
        return Err(malformed(type_name, tag, "empty verb list"));
    }

    let mut out = Vec::new();
    for verb in verbs.split(',') {
        let verb = verb.trim();
        if !KNOWN_VERBS.contains(&verb) {
            return Err(malformed(
                type_name,
                tag,
                &format!("unknown verb '{}'", verb),
            ));
        }
        out.push(verb.to_string());
    }
    Ok(out)
}

fn malformed(type_name: &str, tag: &str, reason: &str) -> GeneratorError {
    GeneratorError::MalformedTag {
        type_name: type_name.to_string(),
        tag: tag.to_string(),
        reason: reason.to_string(),
    }
}

/// The eligibility predicate: does this resource type get a fake client?
///
/// Attached to every group target so the execution stage can re-derive
/// eligibility independently of the caller's upstream filtering. Both
/// layers delegate to [`ClientGenTags::parse`], so they cannot diverge.
///
/// ## Examples
///
/// ```
/// use fakegen::{EligibilityFilter, ResourceType};
///
/// let opted_in = ResourceType::new("Deployment", "example.com/api/apps/v1")
///     .with_comments(vec!["+genclient".to_string()]);
/// let opted_out = ResourceType::new("DeploymentSpec", "example.com/api/apps/v1");
///
/// let filter = EligibilityFilter;
/// assert!(filter.eligible(&opted_in).unwrap());
/// assert!(!filter.eligible(&opted_out).unwrap());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EligibilityFilter;

impl EligibilityFilter {
    /// Returns whether client generation was requested for the type.
    ///
    /// ## Errors
    ///
    /// Propagates [`GeneratorError::MalformedTag`] instead of treating an
    /// unparseable tag as "not eligible".
    pub fn eligible(&self, resource: &ResourceType) -> Result<bool, GeneratorError> {
        Ok(ClientGenTags::parse(&resource.name, &resource.comments)?.generate_client)
    }

    /// Filters a catalog slice down to the eligible types, preserving order.
    pub fn eligible_types(
        &self,
        resources: &[ResourceType],
    ) -> Result<Vec<ResourceType>, GeneratorError> {
        let mut out = Vec::new();
        for resource in resources {
            if self.eligible(resource)? {
                out.push(resource.clone());
            }
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn bare_genclient_requests_generation() {
        let tags = ClientGenTags::parse("Deployment", &lines(&["+genclient"])).unwrap();
        assert!(tags.generate_client);
        assert!(!tags.non_namespaced);
    }

    #[test]
    fn comment_markers_and_whitespace_are_stripped() {
        let tags =
            ClientGenTags::parse("Node", &lines(&["  // +genclient:nonNamespaced", "// +genclient"]))
                .unwrap();
        assert!(tags.generate_client);
        assert!(tags.non_namespaced);
    }

    #[test]
    fn unrelated_comment_lines_are_ignored() {
        let tags = ClientGenTags::parse(
            "Deployment",
            &lines(&["Deployment enables declarative updates.", "+genclient"]),
        )
        .unwrap();
        assert!(tags.generate_client);
    }

    #[test]
    fn no_tags_means_no_client() {
        let tags = ClientGenTags::parse("DeploymentSpec", &[]).unwrap();
        assert!(!tags.generate_client);
    }

    #[test]
    fn verb_lists_are_parsed() {
        let tags =
            ClientGenTags::parse("Job", &lines(&["+genclient", "+genclient:onlyVerbs=get,list"]))
                .unwrap();
        assert_eq!(tags.only_verbs, vec!["get", "list"]);
    }

    #[test]
    fn unknown_sub_tag_is_malformed() {
        let err =
            ClientGenTags::parse("Job", &lines(&["+genclient:frobnicate"])).unwrap_err();
        match err {
            GeneratorError::MalformedTag { type_name, tag, .. } => {
                assert_eq!(type_name, "Job");
                assert_eq!(tag, "+genclient:frobnicate");
            }
            other => panic!("Expected MalformedTag, got: {:?}", other),
        }
    }

    #[test]
    fn unknown_verb_is_malformed() {
        let err = ClientGenTags::parse("Job", &lines(&["+genclient:onlyVerbs=get,frob"]))
            .unwrap_err();
        match err {
            GeneratorError::MalformedTag { reason, .. } => {
                assert!(reason.contains("frob"));
            }
            other => panic!("Expected MalformedTag, got: {:?}", other),
        }
    }

    #[test]
    fn value_on_boolean_tag_is_malformed() {
        assert!(ClientGenTags::parse("Job", &lines(&["+genclient:readonly=true"])).is_err());
    }

    #[test]
    fn missing_verb_list_is_malformed() {
        assert!(ClientGenTags::parse("Job", &lines(&["+genclient:skipVerbs"])).is_err());
        assert!(ClientGenTags::parse("Job", &lines(&["+genclient:skipVerbs="])).is_err());
    }

    #[test]
    fn no_verbs_conflicts_with_verb_lists() {
        let err = ClientGenTags::parse(
            "Job",
            &lines(&["+genclient:noVerbs", "+genclient:onlyVerbs=get"]),
        )
        .unwrap_err();
        assert!(err.to_string().contains("noVerbs"));
    }

    #[test]
    fn only_verbs_conflicts_with_skip_verbs() {
        assert!(
            ClientGenTags::parse(
                "Job",
                &lines(&["+genclient:onlyVerbs=get", "+genclient:skipVerbs=watch"]),
            )
            .is_err()
        );
    }

    #[test]
    fn filter_preserves_catalog_order() {
        let filter = EligibilityFilter;
        let catalog = vec![
            ResourceType::new("Deployment", "pkg").with_comments(lines(&["+genclient"])),
            ResourceType::new("DeploymentSpec", "pkg"),
            ResourceType::new("StatefulSet", "pkg").with_comments(lines(&["+genclient"])),
        ];

        let eligible = filter.eligible_types(&catalog).unwrap();
        let names: Vec<_> = eligible.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Deployment", "StatefulSet"]);
    }

    #[test]
    fn filter_propagates_malformed_tags() {
        let filter = EligibilityFilter;
        let catalog = vec![
            ResourceType::new("Deployment", "pkg").with_comments(lines(&["+genclient"])),
            ResourceType::new("Broken", "pkg").with_comments(lines(&["+genclient:bogus"])),
        ];

        assert!(filter.eligible_types(&catalog).is_err());
    }
}
