//! Scene-wide validation and canonicalization.
//!
//! [`validate`] runs the per-bag [`schema::lint`] on every object and adds
//! the checks that need the hierarchy. [`fix`] rewrites every bag into
//! canonical form through the host, so edits are tracked the same way panel
//! clicks are.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use addon::Host;
use addon::panel::is_lod_child;
use schema::{NodeProps, NodeType, Props, Severity, keys};
use serde::Serialize;
use serde_json::Value;

use crate::scene::Scene;

/// One finding attached to an object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    pub object: String,
    pub key: &'static str,
    pub severity: Severity,
    pub message: String,
}

/// Error and warning totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub errors: usize,
    pub warnings: usize,
}

impl Summary {
    #[must_use]
    pub fn of(issues: &[Issue]) -> Self {
        issues.iter().fold(Self::default(), |mut summary, issue| {
            match issue.severity {
                Severity::Error => summary.errors += 1,
                Severity::Warning => summary.warnings += 1,
            }
            summary
        })
    }
}

/// Check every object. Issues are grouped by object in file order.
#[must_use]
pub fn validate(scene: &Scene) -> Vec<Issue> {
    let mut issues = Vec::new();
    for obj in scene.objects() {
        let issue = |key, severity, message: String| Issue {
            object: obj.name.clone(),
            key,
            severity,
            message,
        };

        for finding in schema::lint(&obj.props) {
            issues.push(issue(finding.key, finding.severity, finding.message));
        }

        let lod_child = is_lod_child(scene, obj.id);
        if Props::new(&obj.props).node_type() == NodeType::Lod && lod_child {
            issues.push(issue(
                keys::NODE,
                Severity::Warning,
                "LOD groups do not nest; the parent group wins".to_owned(),
            ));
        }
        if obj.props.contains_key(keys::MAX_DISTANCE) && !lod_child {
            issues.push(issue(
                keys::MAX_DISTANCE,
                Severity::Warning,
                "ignored: parent is not an LOD group".to_owned(),
            ));
        }
        if !obj.kind.is_mesh() {
            for key in [keys::CAST_SHADOW, keys::RECEIVE_SHADOW] {
                if obj.props.contains_key(key) {
                    issues.push(issue(key, Severity::Warning, format!("ignored on {} objects", obj.kind)));
                }
            }
        }
    }
    issues
}

/// Rewrite every bag into canonical form. Returns the names of the objects
/// that changed. Values a strict reader would reject are replaced by what
/// the lenient reader makes of them; keys outside the schema are kept.
pub fn fix(scene: &mut Scene) -> Vec<String> {
    let mut changed = Vec::new();
    for id in scene.ids() {
        let Some(bag) = scene.props_mut(id) else {
            continue;
        };
        let before: Vec<(&str, Option<Value>)> =
            keys::ALL.iter().map(|&key| (key, bag.get(key).cloned())).collect();
        NodeProps::from_bag(&*bag).write_to(bag);
        let modified = before.iter().any(|(key, value)| bag.get(key) != value.as_ref());
        if modified {
            scene.tag_update(id);
            if let Some(obj) = scene.get(id) {
                changed.push(obj.name.clone());
            }
        }
    }
    if !changed.is_empty() {
        scene.request_redraw();
        tracing::info!(objects = changed.len(), "canonicalized property bags");
    }
    changed
}
