use serde_json::{Map, json};

use super::*;

fn empty() -> Map<String, Value> {
    Map::new()
}

fn bag(value: Value) -> Map<String, Value> {
    value.as_object().cloned().unwrap_or_default()
}

/// A bag carrying every node-scoped key, whatever its node.
fn loaded(node: NodeType) -> Map<String, Value> {
    let mut props = bag(json!({
        "type": "dynamic",
        "convex": true,
        "trigger": true,
        "castShadow": false,
    }));
    if node != NodeType::None {
        props.insert("node".to_owned(), json!(node.as_str()));
    }
    props
}

// =============================================================
// set_node_type
// =============================================================

#[test]
fn node_transitions_keep_only_owned_keys() {
    for from in NodeType::ALL {
        for to in NodeType::ALL {
            let mut props = loaded(from);
            set_node_type(&mut props, to);

            assert_eq!(props.contains("type"), to == NodeType::Rigidbody, "{from} -> {to}");
            assert_eq!(props.contains("convex"), to == NodeType::Collider, "{from} -> {to}");
            assert_eq!(props.contains("trigger"), to == NodeType::Collider, "{from} -> {to}");
            assert_eq!(Props::new(&props).node_type(), to, "{from} -> {to}");
        }
    }
}

#[test]
fn node_none_is_stored_as_absence() {
    let mut props = bag(json!({"node": "lod"}));
    set_node_type(&mut props, NodeType::None);
    assert!(!props.contains("node"));
}

#[test]
fn node_change_leaves_mesh_and_lod_keys() {
    let mut props = bag(json!({"node": "collider", "castShadow": false, "maxDistance": 12}));
    set_node_type(&mut props, NodeType::None);
    assert_eq!(Value::Object(props), json!({"castShadow": false, "maxDistance": 12}));
}

#[test]
fn node_set_is_idempotent() {
    for node in NodeType::ALL {
        let mut once = loaded(NodeType::Collider);
        set_node_type(&mut once, node);
        let mut twice = once.clone();
        set_node_type(&mut twice, node);
        assert_eq!(once, twice, "{node}");
    }
}

#[test]
fn node_set_same_type_keeps_owned_keys() {
    let mut props = bag(json!({"node": "collider", "convex": true}));
    set_node_type(&mut props, NodeType::Collider);
    assert_eq!(Value::Object(props), json!({"node": "collider", "convex": true}));
}

// =============================================================
// set_rigidbody_type
// =============================================================

#[test]
fn rigidbody_static_is_stored_as_absence() {
    let mut props = bag(json!({"node": "rigidbody", "type": "dynamic"}));
    set_rigidbody_type(&mut props, RigidbodyType::Static);
    assert!(!props.contains("type"));
}

#[test]
fn rigidbody_non_static_types_are_stored() {
    for kind in [RigidbodyType::Kinematic, RigidbodyType::Dynamic] {
        let mut props = bag(json!({"node": "rigidbody"}));
        set_rigidbody_type(&mut props, kind);
        assert_eq!(props.get("type"), Some(&json!(kind.as_str())));
        set_rigidbody_type(&mut props, kind);
        assert_eq!(props.get("type"), Some(&json!(kind.as_str())));
    }
}

// =============================================================
// toggle_collider_flag
// =============================================================

#[test]
fn convex_double_toggle_returns_to_absent() {
    let mut props = bag(json!({"node": "collider"}));
    assert!(toggle_collider_flag(&mut props, ColliderFlag::Convex));
    assert_eq!(props.get("convex"), Some(&json!(true)));
    assert!(!toggle_collider_flag(&mut props, ColliderFlag::Convex));
    assert!(!props.contains("convex"));
}

#[test]
fn collider_toggle_parity() {
    let mut props = bag(json!({"node": "collider"}));
    for n in 1..=5 {
        toggle_collider_flag(&mut props, ColliderFlag::Trigger);
        assert_eq!(props.contains("trigger"), n % 2 == 1, "after {n} toggles");
    }
}

#[test]
fn collider_toggle_treats_stored_false_as_off() {
    let mut props = bag(json!({"node": "collider", "trigger": false}));
    assert!(toggle_collider_flag(&mut props, ColliderFlag::Trigger));
    assert_eq!(props.get("trigger"), Some(&json!(true)));
}

#[test]
fn collider_toggle_treats_integer_one_as_on() {
    let mut props = bag(json!({"node": "collider", "convex": 1}));
    assert!(!toggle_collider_flag(&mut props, ColliderFlag::Convex));
    assert!(!props.contains("convex"));
}

// =============================================================
// toggle_mesh_flag
// =============================================================

#[test]
fn mesh_toggle_treats_float_zero_as_off() {
    let mut props = bag(json!({"castShadow": 0.0}));
    assert!(toggle_mesh_flag(&mut props, MeshFlag::CastShadow));
    assert!(!props.contains("castShadow"));
}

#[test]
fn cast_shadow_toggle_stores_false_then_clears() {
    let mut props = empty();
    assert!(!toggle_mesh_flag(&mut props, MeshFlag::CastShadow));
    assert_eq!(props.get("castShadow"), Some(&json!(false)));
    assert!(toggle_mesh_flag(&mut props, MeshFlag::CastShadow));
    assert!(!props.contains("castShadow"));
}

#[test]
fn receive_shadow_toggle_stores_false_then_clears() {
    let mut props = empty();
    toggle_mesh_flag(&mut props, MeshFlag::ReceiveShadow);
    assert_eq!(Value::Object(props.clone()), json!({"receiveShadow": false}));
    toggle_mesh_flag(&mut props, MeshFlag::ReceiveShadow);
    assert!(props.is_empty());
}

#[test]
fn mesh_toggle_treats_stored_true_as_on() {
    let mut props = bag(json!({"castShadow": true}));
    assert!(!toggle_mesh_flag(&mut props, MeshFlag::CastShadow));
    assert_eq!(props.get("castShadow"), Some(&json!(false)));
}

#[test]
fn mesh_toggle_ignores_node_type() {
    let mut props = bag(json!({"node": "rigidbody", "type": "dynamic"}));
    toggle_mesh_flag(&mut props, MeshFlag::CastShadow);
    assert_eq!(
        Value::Object(props),
        json!({"node": "rigidbody", "type": "dynamic", "castShadow": false})
    );
}

// =============================================================
// max distance
// =============================================================

#[test]
fn max_distance_reads_zero_when_absent() {
    assert_eq!(max_distance(&empty()), 0);
}

#[test]
fn max_distance_zero_write_removes_key() {
    let mut props = empty();
    set_max_distance(&mut props, 150);
    assert_eq!(props.get("maxDistance"), Some(&json!(150)));
    assert_eq!(max_distance(&props), 150);

    set_max_distance(&mut props, 0);
    assert!(!props.contains("maxDistance"));
    assert_eq!(max_distance(&props), 0);
}

// =============================================================
// Scenarios
// =============================================================

#[test]
fn rigidbody_scenario_ends_with_empty_bag() {
    let mut props = empty();
    set_node_type(&mut props, NodeType::Rigidbody);
    set_rigidbody_type(&mut props, RigidbodyType::Dynamic);
    assert_eq!(
        Value::Object(props.clone()),
        json!({"node": "rigidbody", "type": "dynamic"})
    );

    set_node_type(&mut props, NodeType::None);
    assert!(props.is_empty());
}
