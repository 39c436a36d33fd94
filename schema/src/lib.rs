//! Property schema for node-tagged scene objects.
//!
//! Artists tag plain scene objects with a handful of custom properties so an
//! engine import pipeline can treat them as rigidbodies, colliders or LOD
//! groups. This crate owns that data contract: the recognized keys, their
//! value domains and defaults, and the mutations that keep a property bag in
//! canonical form. It knows nothing about any particular host application;
//! anything implementing [`PropertyBag`] can be edited.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`keys`] | Recognized property keys |
//! | [`types`] | Node, rigidbody and flag enums |
//! | [`bag`] | The [`PropertyBag`] trait and value coercion helpers |
//! | [`props`] | Tolerant accessor ([`Props`]) and typed view ([`NodeProps`]) |
//! | [`mutate`] | The node, rigidbody, collider, mesh and max-distance mutators |
//! | [`lint`] | Canonical-form findings for a single bag |

pub mod bag;
pub mod keys;
pub mod lint;
pub mod mutate;
pub mod props;
pub mod types;

pub use bag::PropertyBag;
pub use lint::{Finding, Severity, lint};
pub use props::{NodeProps, NodeRole, Props};
pub use types::{ColliderFlag, MeshFlag, NodeType, RigidbodyType};

/// Error returned when a stored or requested value does not fit the schema.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    /// The `node` value is not one of `none`, `rigidbody`, `collider`, `lod`.
    #[error("unknown node type: {0}")]
    UnknownNodeType(String),
    /// The `type` value is not one of `static`, `kinematic`, `dynamic`.
    #[error("unknown rigidbody type: {0}")]
    UnknownRigidbodyType(String),
    /// A flag name outside the collider or mesh flag sets.
    #[error("unknown flag: {0}")]
    UnknownFlag(String),
    /// A key holds a value of the wrong JSON type.
    #[error("invalid value for `{key}`: expected {expected}")]
    InvalidValue { key: &'static str, expected: &'static str },
    /// A node-scoped key is stored on an object with a different node type.
    #[error("`{key}` is not allowed when node is {node}")]
    MisplacedKey { key: &'static str, node: NodeType },
}
