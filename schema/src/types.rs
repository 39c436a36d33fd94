//! Enumerated value domains for schema keys.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{SchemaError, keys};

/// Role a scene object plays in the downstream engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeType {
    /// Plain object. Stored as key absence.
    #[default]
    None,
    /// Physics body; may carry a [`RigidbodyType`].
    Rigidbody,
    /// Collision shape; may carry the convex and trigger flags.
    Collider,
    /// Level-of-detail group; direct children may carry `maxDistance`.
    Lod,
}

impl NodeType {
    /// All node types in display order.
    pub const ALL: [Self; 4] = [Self::None, Self::Rigidbody, Self::Collider, Self::Lod];

    /// Stored string value.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Rigidbody => "rigidbody",
            Self::Collider => "collider",
            Self::Lod => "lod",
        }
    }

    /// Returns `true` if a node-scoped `key` may be stored under this node type.
    #[must_use]
    pub fn owns(self, key: &str) -> bool {
        match self {
            Self::Rigidbody => key == keys::TYPE,
            Self::Collider => key == keys::CONVEX || key == keys::TRIGGER,
            Self::None | Self::Lod => false,
        }
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NodeType {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|node| node.as_str() == s)
            .ok_or_else(|| SchemaError::UnknownNodeType(s.to_owned()))
    }
}

/// Physics body type of a rigidbody node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RigidbodyType {
    /// Immovable body. Stored as key absence.
    #[default]
    Static,
    /// Moved by animation or script, not by the simulation.
    Kinematic,
    /// Fully simulated.
    Dynamic,
}

impl RigidbodyType {
    /// All rigidbody types in display order.
    pub const ALL: [Self; 3] = [Self::Static, Self::Kinematic, Self::Dynamic];

    /// Stored string value.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Static => "static",
            Self::Kinematic => "kinematic",
            Self::Dynamic => "dynamic",
        }
    }
}

impl fmt::Display for RigidbodyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RigidbodyType {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| SchemaError::UnknownRigidbodyType(s.to_owned()))
    }
}

/// Collider flags. Both default to false.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColliderFlag {
    Convex,
    Trigger,
}

impl ColliderFlag {
    pub const ALL: [Self; 2] = [Self::Convex, Self::Trigger];

    /// Property key backing this flag.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Convex => keys::CONVEX,
            Self::Trigger => keys::TRIGGER,
        }
    }
}

impl fmt::Display for ColliderFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ColliderFlag {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|flag| flag.key() == s)
            .ok_or_else(|| SchemaError::UnknownFlag(s.to_owned()))
    }
}

/// Mesh shadow flags. Both default to true.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MeshFlag {
    CastShadow,
    ReceiveShadow,
}

impl MeshFlag {
    pub const ALL: [Self; 2] = [Self::CastShadow, Self::ReceiveShadow];

    /// Property key backing this flag.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::CastShadow => keys::CAST_SHADOW,
            Self::ReceiveShadow => keys::RECEIVE_SHADOW,
        }
    }
}

impl fmt::Display for MeshFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for MeshFlag {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|flag| flag.key() == s)
            .ok_or_else(|| SchemaError::UnknownFlag(s.to_owned()))
    }
}
