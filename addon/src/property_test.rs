use serde_json::json;
use uuid::Uuid;

use super::*;
use crate::host::ObjectKind;
use crate::support_test::MockHost;

#[test]
fn get_reads_zero_when_absent() {
    let (host, id) = MockHost::with_active_mesh();
    assert_eq!(MaxDistanceProperty::get(&host, id), Ok(0));
}

#[test]
fn set_then_zero_removes_key() {
    let (mut host, id) = MockHost::with_active_mesh();

    MaxDistanceProperty::set(&mut host, id, 120).expect("set 120");
    assert_eq!(host.bag(id), json!({"maxDistance": 120}));
    assert_eq!(MaxDistanceProperty::get(&host, id), Ok(120));

    MaxDistanceProperty::set(&mut host, id, 0).expect("set 0");
    assert_eq!(host.bag(id), json!({}));
    assert_eq!(MaxDistanceProperty::get(&host, id), Ok(0));
}

#[test]
fn set_notifies_host() {
    let mut host = MockHost::new();
    let id = host.add(ObjectKind::Mesh, None, json!({}));
    MaxDistanceProperty::set(&mut host, id, 5).expect("set");
    assert_eq!(host.updates, vec![id]);
    assert_eq!(host.redraws, 1);
}

#[test]
fn unknown_object_is_an_error() {
    let mut host = MockHost::new();
    let id = Uuid::new_v4();
    assert_eq!(MaxDistanceProperty::get(&host, id), Err(OperatorError::MissingObject(id)));
    assert_eq!(
        MaxDistanceProperty::set(&mut host, id, 3),
        Err(OperatorError::MissingObject(id))
    );
    assert_eq!(host.redraws, 0);
}

#[test]
fn get_ignores_invalid_stored_values() {
    let mut host = MockHost::new();
    let id = host.add(ObjectKind::Mesh, None, json!({"maxDistance": "far"}));
    assert_eq!(MaxDistanceProperty::get(&host, id), Ok(0));
}
