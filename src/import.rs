//! What a downstream importer sees for each object.
//!
//! The property bag stores tags; the importer resolves them against the
//! object's kind and hierarchy. Shadow flags only mean something on meshes
//! and `maxDistance` only under an LOD group, so [`interpret`] drops them
//! elsewhere instead of reporting values nobody reads.

#[cfg(test)]
#[path = "import_test.rs"]
mod import_test;

use std::fmt;

use addon::ObjectKind;
use addon::panel::is_lod_child;
use schema::{NodeProps, NodeRole, RigidbodyType, SchemaError};
use serde::Serialize;

use crate::scene::{Scene, SceneObject};

#[derive(Debug, thiserror::Error)]
#[error("object '{object}': {source}")]
pub struct ImportError {
    pub object: String,
    #[source]
    pub source: SchemaError,
}

/// Resolved node role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "node", rename_all = "lowercase")]
pub enum ImportedRole {
    None,
    Rigidbody {
        #[serde(rename = "type")]
        kind: RigidbodyType,
    },
    Collider {
        convex: bool,
        trigger: bool,
    },
    Lod,
}

impl From<NodeRole> for ImportedRole {
    fn from(role: NodeRole) -> Self {
        match role {
            NodeRole::None => Self::None,
            NodeRole::Rigidbody { kind } => Self::Rigidbody { kind },
            NodeRole::Collider { convex, trigger } => Self::Collider { convex, trigger },
            NodeRole::Lod => Self::Lod,
        }
    }
}

impl fmt::Display for ImportedRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("-"),
            Self::Rigidbody { kind } => write!(f, "rigidbody ({kind})"),
            Self::Collider { convex, trigger } => {
                let flags: Vec<&str> = [(*convex, "convex"), (*trigger, "trigger")]
                    .into_iter()
                    .filter_map(|(on, name)| on.then_some(name))
                    .collect();
                if flags.is_empty() {
                    f.write_str("collider")
                } else {
                    write!(f, "collider ({})", flags.join(", "))
                }
            }
            Self::Lod => f.write_str("lod"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Shadows {
    pub cast: bool,
    pub receive: bool,
}

/// One object as an importer would build it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportedNode {
    pub name: String,
    pub kind: ObjectKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    #[serde(flatten)]
    pub role: ImportedRole,
    /// Present for meshes only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadows: Option<Shadows>,
    /// Present for direct children of an LOD group. Zero means no limit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_distance: Option<u64>,
}

/// Resolve one object. In strict mode any malformed schema key is an
/// error; otherwise the lenient reader fills gaps with defaults.
///
/// # Errors
///
/// Returns [`ImportError`] in strict mode when the bag fails
/// [`NodeProps::parse`].
pub fn interpret(scene: &Scene, obj: &SceneObject, strict: bool) -> Result<ImportedNode, ImportError> {
    let props = if strict {
        NodeProps::parse(&obj.props).map_err(|source| ImportError {
            object: obj.name.clone(),
            source,
        })?
    } else {
        NodeProps::from_bag(&obj.props)
    };

    let shadows = obj.kind.is_mesh().then_some(Shadows {
        cast: props.cast_shadow,
        receive: props.receive_shadow,
    });
    let max_distance = is_lod_child(scene, obj.id).then_some(props.max_distance);

    Ok(ImportedNode {
        name: obj.name.clone(),
        kind: obj.kind,
        parent: obj.parent.and_then(|id| scene.get(id)).map(|parent| parent.name.clone()),
        role: props.role.into(),
        shadows,
        max_distance,
    })
}

/// Resolve every object in file order.
///
/// # Errors
///
/// Returns the first [`ImportError`] in strict mode.
pub fn interpret_all(scene: &Scene, strict: bool) -> Result<Vec<ImportedNode>, ImportError> {
    scene.objects().iter().map(|obj| interpret(scene, obj, strict)).collect()
}
