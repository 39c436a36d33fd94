//! Property keys recognized by the schema.
//!
//! Keys are camelCase because the downstream importer reads them verbatim from
//! exported node extras.

/// Node role: `none`, `rigidbody`, `collider` or `lod`.
pub const NODE: &str = "node";
/// Rigidbody body type. Only valid when `node = rigidbody`.
pub const TYPE: &str = "type";
/// Convex collider flag. Only valid when `node = collider`.
pub const CONVEX: &str = "convex";
/// Trigger collider flag. Only valid when `node = collider`.
pub const TRIGGER: &str = "trigger";
/// Mesh shadow casting. Absent means true.
pub const CAST_SHADOW: &str = "castShadow";
/// Mesh shadow receiving. Absent means true.
pub const RECEIVE_SHADOW: &str = "receiveShadow";
/// LOD switch distance for a direct child of an LOD group. Absent means 0.
pub const MAX_DISTANCE: &str = "maxDistance";

/// Every key the schema owns, in canonical order.
pub const ALL: [&str; 7] = [
    NODE,
    TYPE,
    CONVEX,
    TRIGGER,
    CAST_SHADOW,
    RECEIVE_SHADOW,
    MAX_DISTANCE,
];

/// Keys whose presence depends on the node type.
pub const NODE_SCOPED: [&str; 3] = [TYPE, CONVEX, TRIGGER];
