//! Canonical-form findings for a single property bag.
//!
//! `NodeProps::parse` stops at the first problem; [`lint`] reports every
//! schema key that is either invalid (an importer would reject it) or merely
//! non-canonical (it would be read correctly but wastes storage or disagrees
//! with what the mutators would have written).

#[cfg(test)]
#[path = "lint_test.rs"]
mod lint_test;

use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::bag::{PropertyBag, as_flag};
use crate::keys;
use crate::props::Props;
use crate::types::{NodeType, RigidbodyType};

/// How bad a finding is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Readable, but not what the mutators would have stored.
    Warning,
    /// Rejected by a strict reader.
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Warning => f.write_str("warning"),
            Self::Error => f.write_str("error"),
        }
    }
}

/// One problem with one key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub key: &'static str,
    pub severity: Severity,
    pub message: String,
}

impl Finding {
    fn error(key: &'static str, message: impl Into<String>) -> Self {
        Self { key, severity: Severity::Error, message: message.into() }
    }

    fn warning(key: &'static str, message: impl Into<String>) -> Self {
        Self { key, severity: Severity::Warning, message: message.into() }
    }
}

/// Check every schema key in `bag`. An empty result means the bag is in
/// canonical form.
#[must_use]
pub fn lint<B: PropertyBag + ?Sized>(bag: &B) -> Vec<Finding> {
    let mut findings = Vec::new();
    let node = Props::new(bag).node_type();

    if let Some(value) = bag.get(keys::NODE) {
        lint_enum::<NodeType>(&mut findings, keys::NODE, value, NodeType::None.as_str());
    }

    for key in keys::NODE_SCOPED {
        if bag.contains(key) && !node.owns(key) {
            findings.push(Finding::error(key, format!("not allowed when node is {node}")));
        }
    }

    if node == NodeType::Rigidbody {
        if let Some(value) = bag.get(keys::TYPE) {
            lint_enum::<RigidbodyType>(&mut findings, keys::TYPE, value, RigidbodyType::Static.as_str());
        }
    }

    if node == NodeType::Collider {
        lint_flag(&mut findings, bag, keys::CONVEX, false);
        lint_flag(&mut findings, bag, keys::TRIGGER, false);
    }

    lint_flag(&mut findings, bag, keys::CAST_SHADOW, true);
    lint_flag(&mut findings, bag, keys::RECEIVE_SHADOW, true);

    if let Some(value) = bag.get(keys::MAX_DISTANCE) {
        match value.as_u64() {
            None => findings.push(Finding::error(keys::MAX_DISTANCE, "expected a non-negative integer")),
            Some(0) => findings.push(Finding::warning(keys::MAX_DISTANCE, "0 is the default and should be absent")),
            Some(_) => {}
        }
    }

    findings
}

fn lint_enum<T: std::str::FromStr>(
    findings: &mut Vec<Finding>,
    key: &'static str,
    value: &Value,
    default: &str,
) {
    let Some(s) = value.as_str() else {
        findings.push(Finding::error(key, "expected a string"));
        return;
    };
    if s.parse::<T>().is_err() {
        findings.push(Finding::error(key, format!("unknown value `{s}`")));
    } else if s == default {
        findings.push(Finding::warning(key, format!("`{s}` is the default and should be absent")));
    }
}

fn lint_flag<B: PropertyBag + ?Sized>(
    findings: &mut Vec<Finding>,
    bag: &B,
    key: &'static str,
    default: bool,
) {
    let Some(value) = bag.get(key) else {
        return;
    };
    match as_flag(value) {
        None => findings.push(Finding::error(key, "expected a boolean")),
        Some(flag) if flag == default => {
            findings.push(Finding::warning(key, format!("`{flag}` is the default and should be absent")));
        }
        Some(_) if !value.is_boolean() => {
            findings.push(Finding::warning(key, "stored as a number instead of a boolean"));
        }
        Some(_) => {}
    }
}
