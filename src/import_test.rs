use serde_json::json;

use super::*;

fn scene(objects: serde_json::Value) -> Scene {
    Scene::from_json(&json!({ "objects": objects }).to_string()).expect("scene")
}

const A: &str = "00000000-0000-4000-8000-00000000000a";
const B: &str = "00000000-0000-4000-8000-00000000000b";

#[test]
fn lenient_fills_defaults() {
    let scene = scene(json!([{ "id": A, "name": "Crate", "kind": "mesh", "props": {"node": "rigidbody"} }]));
    let node = interpret(&scene, &scene.objects()[0], false).expect("interpret");

    assert_eq!(node.role, ImportedRole::Rigidbody { kind: RigidbodyType::Static });
    assert_eq!(node.shadows, Some(Shadows { cast: true, receive: true }));
    assert_eq!(node.max_distance, None);
    assert_eq!(node.parent, None);
}

#[test]
fn shadows_only_for_meshes() {
    let scene = scene(json!([{ "id": A, "name": "Sun", "kind": "light", "props": {"castShadow": false} }]));
    let node = interpret(&scene, &scene.objects()[0], false).expect("interpret");
    assert_eq!(node.shadows, None);
}

#[test]
fn max_distance_only_under_lod_group() {
    let scene = scene(json!([
        { "id": A, "name": "Tree", "props": {"node": "lod"} },
        { "id": B, "name": "Tree_LOD1", "kind": "mesh", "parent": A, "props": {"maxDistance": 80} }
    ]));
    let nodes = interpret_all(&scene, false).expect("interpret");

    assert_eq!(nodes[0].role, ImportedRole::Lod);
    assert_eq!(nodes[0].max_distance, None);
    assert_eq!(nodes[1].max_distance, Some(80));
    assert_eq!(nodes[1].parent.as_deref(), Some("Tree"));
}

#[test]
fn strict_rejects_misplaced_keys() {
    let scene = scene(json!([{ "id": A, "name": "Wall", "props": {"node": "lod", "convex": true} }]));
    let err = interpret_all(&scene, true).expect_err("strict");
    assert_eq!(err.object, "Wall");
    assert!(matches!(err.source, SchemaError::MisplacedKey { key: "convex", .. }));

    let lenient = interpret_all(&scene, false).expect("lenient");
    assert_eq!(lenient[0].role, ImportedRole::Lod);
}

#[test]
fn role_display_summarizes_flags() {
    assert_eq!(ImportedRole::None.to_string(), "-");
    assert_eq!(
        ImportedRole::Rigidbody { kind: RigidbodyType::Dynamic }.to_string(),
        "rigidbody (dynamic)"
    );
    assert_eq!(ImportedRole::Collider { convex: false, trigger: false }.to_string(), "collider");
    assert_eq!(
        ImportedRole::Collider { convex: true, trigger: true }.to_string(),
        "collider (convex, trigger)"
    );
}

#[test]
fn serializes_flat_with_node_tag() {
    let scene = scene(json!([{ "id": A, "name": "Box", "kind": "mesh",
        "props": {"node": "collider", "trigger": 1, "receiveShadow": false} }]));
    let node = interpret(&scene, &scene.objects()[0], false).expect("interpret");
    assert_eq!(
        serde_json::to_value(&node).expect("serialize"),
        json!({
            "name": "Box",
            "kind": "mesh",
            "node": "collider",
            "convex": false,
            "trigger": true,
            "shadows": {"cast": true, "receive": false}
        })
    );
}
