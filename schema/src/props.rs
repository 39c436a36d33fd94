//! Typed views over a property bag.
//!
//! DESIGN
//! ======
//! Two readers share one schema. [`Props`] is the tolerant accessor the
//! inspector uses: it applies defaults and never fails, so a hand-edited or
//! half-migrated bag still renders. [`NodeProps`] is the typed value of a
//! whole bag, with node-scoped fields carried inside [`NodeRole`] so a
//! `type` on a collider cannot be represented. `NodeProps::parse` is the
//! strict reader an importer uses; `NodeProps::write_to` is the only writer
//! and always emits canonical form (default values omitted).

#[cfg(test)]
#[path = "props_test.rs"]
mod props_test;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::bag::{PropertyBag, as_flag, is_explicit_false, is_truthy};
use crate::types::{NodeType, RigidbodyType};
use crate::{SchemaError, keys};

// =============================================================================
// TOLERANT ACCESSOR
// =============================================================================

/// Typed, default-applying read access to a property bag.
pub struct Props<'a, B: PropertyBag + ?Sized> {
    bag: &'a B,
}

impl<'a, B: PropertyBag + ?Sized> Props<'a, B> {
    /// Wrap a bag for typed access.
    #[must_use]
    pub fn new(bag: &'a B) -> Self {
        Self { bag }
    }

    /// Node type. Absent or unrecognized values read as `none`.
    #[must_use]
    pub fn node_type(&self) -> NodeType {
        self.bag
            .get(keys::NODE)
            .and_then(Value::as_str)
            .map(|s| s.parse().unwrap_or_default())
            .unwrap_or_default()
    }

    /// Rigidbody type. Absent or unrecognized values read as `static`.
    #[must_use]
    pub fn rigidbody_type(&self) -> RigidbodyType {
        self.bag
            .get(keys::TYPE)
            .and_then(Value::as_str)
            .map(|s| s.parse().unwrap_or_default())
            .unwrap_or_default()
    }

    /// Convex collider flag. Defaults to `false`.
    #[must_use]
    pub fn convex(&self) -> bool {
        self.bag.get(keys::CONVEX).is_some_and(is_truthy)
    }

    /// Trigger collider flag. Defaults to `false`.
    #[must_use]
    pub fn trigger(&self) -> bool {
        self.bag.get(keys::TRIGGER).is_some_and(is_truthy)
    }

    /// Shadow casting. `true` unless explicitly stored as false.
    #[must_use]
    pub fn cast_shadow(&self) -> bool {
        !self.bag.get(keys::CAST_SHADOW).is_some_and(is_explicit_false)
    }

    /// Shadow receiving. `true` unless explicitly stored as false.
    #[must_use]
    pub fn receive_shadow(&self) -> bool {
        !self.bag.get(keys::RECEIVE_SHADOW).is_some_and(is_explicit_false)
    }

    /// LOD max distance. Absent, negative or non-integer values read as 0.
    #[must_use]
    pub fn max_distance(&self) -> u64 {
        self.bag
            .get(keys::MAX_DISTANCE)
            .and_then(Value::as_u64)
            .unwrap_or(0)
    }
}

// =============================================================================
// TYPED VIEW
// =============================================================================

/// Node role together with the fields only that role may carry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NodeRole {
    #[default]
    None,
    Rigidbody {
        kind: RigidbodyType,
    },
    Collider {
        convex: bool,
        trigger: bool,
    },
    Lod,
}

impl NodeRole {
    /// Untagged node type of this role.
    #[must_use]
    pub fn node_type(self) -> NodeType {
        match self {
            Self::None => NodeType::None,
            Self::Rigidbody { .. } => NodeType::Rigidbody,
            Self::Collider { .. } => NodeType::Collider,
            Self::Lod => NodeType::Lod,
        }
    }
}

impl From<NodeType> for NodeRole {
    /// Role with every node-scoped field at its default.
    fn from(node: NodeType) -> Self {
        match node {
            NodeType::None => Self::None,
            NodeType::Rigidbody => Self::Rigidbody { kind: RigidbodyType::Static },
            NodeType::Collider => Self::Collider { convex: false, trigger: false },
            NodeType::Lod => Self::Lod,
        }
    }
}

/// Effective schema state of one object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeProps {
    pub role: NodeRole,
    pub cast_shadow: bool,
    pub receive_shadow: bool,
    pub max_distance: u64,
}

impl Default for NodeProps {
    fn default() -> Self {
        Self {
            role: NodeRole::None,
            cast_shadow: true,
            receive_shadow: true,
            max_distance: 0,
        }
    }
}

impl NodeProps {
    /// Read a bag leniently. Defaults fill every gap and node-scoped keys
    /// under the wrong node are ignored. Never fails.
    #[must_use]
    pub fn from_bag<B: PropertyBag + ?Sized>(bag: &B) -> Self {
        let props = Props::new(bag);
        let role = match props.node_type() {
            NodeType::None => NodeRole::None,
            NodeType::Rigidbody => NodeRole::Rigidbody { kind: props.rigidbody_type() },
            NodeType::Collider => NodeRole::Collider {
                convex: props.convex(),
                trigger: props.trigger(),
            },
            NodeType::Lod => NodeRole::Lod,
        };
        Self {
            role,
            cast_shadow: props.cast_shadow(),
            receive_shadow: props.receive_shadow(),
            max_distance: props.max_distance(),
        }
    }

    /// Read a bag strictly, as an importer would.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::UnknownNodeType`] or
    /// [`SchemaError::UnknownRigidbodyType`] for unrecognized enum strings,
    /// [`SchemaError::InvalidValue`] for a wrongly typed value, and
    /// [`SchemaError::MisplacedKey`] for a node-scoped key stored under a
    /// different node type.
    pub fn parse<B: PropertyBag + ?Sized>(bag: &B) -> Result<Self, SchemaError> {
        let node = match bag.get(keys::NODE) {
            None => NodeType::None,
            Some(Value::String(s)) => s.parse()?,
            Some(_) => {
                return Err(SchemaError::InvalidValue { key: keys::NODE, expected: "string" });
            }
        };

        for key in keys::NODE_SCOPED {
            if bag.contains(key) && !node.owns(key) {
                return Err(SchemaError::MisplacedKey { key, node });
            }
        }

        let role = match node {
            NodeType::None => NodeRole::None,
            NodeType::Rigidbody => {
                let kind = match bag.get(keys::TYPE) {
                    None => RigidbodyType::Static,
                    Some(Value::String(s)) => s.parse()?,
                    Some(_) => {
                        return Err(SchemaError::InvalidValue { key: keys::TYPE, expected: "string" });
                    }
                };
                NodeRole::Rigidbody { kind }
            }
            NodeType::Collider => NodeRole::Collider {
                convex: strict_flag(bag, keys::CONVEX, false)?,
                trigger: strict_flag(bag, keys::TRIGGER, false)?,
            },
            NodeType::Lod => NodeRole::Lod,
        };

        let max_distance = match bag.get(keys::MAX_DISTANCE) {
            None => 0,
            Some(value) => value.as_u64().ok_or(SchemaError::InvalidValue {
                key: keys::MAX_DISTANCE,
                expected: "non-negative integer",
            })?,
        };

        Ok(Self {
            role,
            cast_shadow: strict_flag(bag, keys::CAST_SHADOW, true)?,
            receive_shadow: strict_flag(bag, keys::RECEIVE_SHADOW, true)?,
            max_distance,
        })
    }

    /// Node type of this state.
    #[must_use]
    pub fn node_type(&self) -> NodeType {
        self.role.node_type()
    }

    /// Canonical stored form: only non-default values, in key order.
    #[must_use]
    pub fn to_map(&self) -> Map<String, Value> {
        let mut map = Map::new();
        match self.role {
            NodeRole::None => {}
            NodeRole::Rigidbody { kind } => {
                map.insert(keys::NODE.to_owned(), NodeType::Rigidbody.as_str().into());
                if kind != RigidbodyType::Static {
                    map.insert(keys::TYPE.to_owned(), kind.as_str().into());
                }
            }
            NodeRole::Collider { convex, trigger } => {
                map.insert(keys::NODE.to_owned(), NodeType::Collider.as_str().into());
                if convex {
                    map.insert(keys::CONVEX.to_owned(), Value::Bool(true));
                }
                if trigger {
                    map.insert(keys::TRIGGER.to_owned(), Value::Bool(true));
                }
            }
            NodeRole::Lod => {
                map.insert(keys::NODE.to_owned(), NodeType::Lod.as_str().into());
            }
        }
        if !self.cast_shadow {
            map.insert(keys::CAST_SHADOW.to_owned(), Value::Bool(false));
        }
        if !self.receive_shadow {
            map.insert(keys::RECEIVE_SHADOW.to_owned(), Value::Bool(false));
        }
        if self.max_distance != 0 {
            map.insert(keys::MAX_DISTANCE.to_owned(), self.max_distance.into());
        }
        map
    }

    /// Write canonical form into `bag`. Schema keys not in the canonical form
    /// are removed; keys outside the schema are left untouched.
    pub fn write_to<B: PropertyBag + ?Sized>(&self, bag: &mut B) {
        let canonical = self.to_map();
        for key in keys::ALL {
            match canonical.get(key) {
                Some(value) => {
                    if bag.get(key) != Some(value) {
                        bag.set(key, value.clone());
                    }
                }
                None => {
                    bag.remove(key);
                }
            }
        }
    }
}

fn strict_flag<B: PropertyBag + ?Sized>(
    bag: &B,
    key: &'static str,
    default: bool,
) -> Result<bool, SchemaError> {
    match bag.get(key) {
        None => Ok(default),
        Some(value) => as_flag(value).ok_or(SchemaError::InvalidValue { key, expected: "boolean" }),
    }
}

impl Serialize for NodeProps {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_map().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for NodeProps {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let map: Map<String, Value> = Map::deserialize(deserializer)?;
        Self::parse(&map).map_err(serde::de::Error::custom)
    }
}
