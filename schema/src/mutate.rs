//! Stateless mutations of a single property bag.
//!
//! Every function here edits only schema keys and leaves the bag in canonical
//! form for the keys it touches: a value equal to its default is stored as
//! key absence.

#[cfg(test)]
#[path = "mutate_test.rs"]
mod mutate_test;

use serde_json::Value;

use crate::bag::{PropertyBag, is_explicit_false, is_truthy};
use crate::keys;
use crate::props::Props;
use crate::types::{ColliderFlag, MeshFlag, NodeType, RigidbodyType};

/// Set the node type, deleting `node` for [`NodeType::None`], then remove
/// every node-scoped key the new node type does not own. Idempotent.
pub fn set_node_type<B: PropertyBag + ?Sized>(bag: &mut B, node: NodeType) {
    if node == NodeType::None {
        bag.remove(keys::NODE);
    } else {
        bag.set(keys::NODE, Value::from(node.as_str()));
    }

    for key in keys::NODE_SCOPED {
        if !node.owns(key) {
            bag.remove(key);
        }
    }
}

/// Set the rigidbody body type. `static` is the default and is stored as
/// key absence. Idempotent.
pub fn set_rigidbody_type<B: PropertyBag + ?Sized>(bag: &mut B, kind: RigidbodyType) {
    if kind == RigidbodyType::Static {
        bag.remove(keys::TYPE);
    } else {
        bag.set(keys::TYPE, Value::from(kind.as_str()));
    }
}

/// Flip a collider flag. A truthy value is deleted (back to the `false`
/// default); anything else becomes `true`. Returns the new effective value.
pub fn toggle_collider_flag<B: PropertyBag + ?Sized>(bag: &mut B, flag: ColliderFlag) -> bool {
    let key = flag.key();
    if bag.get(key).is_some_and(is_truthy) {
        bag.remove(key);
        false
    } else {
        bag.set(key, Value::Bool(true));
        true
    }
}

/// Flip a mesh flag. An explicit `false` is deleted (back to the `true`
/// default); anything else becomes `false`. Returns the new effective value.
pub fn toggle_mesh_flag<B: PropertyBag + ?Sized>(bag: &mut B, flag: MeshFlag) -> bool {
    let key = flag.key();
    if bag.get(key).is_some_and(is_explicit_false) {
        bag.remove(key);
        true
    } else {
        bag.set(key, Value::Bool(false));
        false
    }
}

/// Read the LOD max distance, 0 when absent.
#[must_use]
pub fn max_distance<B: PropertyBag + ?Sized>(bag: &B) -> u64 {
    Props::new(bag).max_distance()
}

/// Write the LOD max distance. Writing 0 deletes the key.
pub fn set_max_distance<B: PropertyBag + ?Sized>(bag: &mut B, value: u64) {
    if value == 0 {
        bag.remove(keys::MAX_DISTANCE);
    } else {
        bag.set(keys::MAX_DISTANCE, Value::from(value));
    }
}
