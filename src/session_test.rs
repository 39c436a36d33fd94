use std::fs;
use std::path::{Path, PathBuf};

use addon::{Invocation, dispatch};
use schema::NodeType;
use serde_json::json;
use uuid::Uuid;

use super::*;
use crate::config::OutputFormat;

fn write_scene() -> PathBuf {
    let path = std::env::temp_dir().join(format!("nodetag-session-{}.json", Uuid::new_v4()));
    let scene = json!({
        "exporter": "blender-4.1",
        "objects": [
            { "id": "00000000-0000-4000-8000-00000000000a", "name": "Crate", "kind": "mesh",
              "props": { "custom": 1 } }
        ]
    });
    fs::write(&path, scene.to_string()).expect("write scene");
    path
}

fn config(path: &Path, dry_run: bool) -> Config {
    Config {
        scene_path: path.to_path_buf(),
        dry_run,
        output: OutputFormat::Text,
        log_level: tracing::Level::WARN,
    }
}

#[test]
fn select_alone_does_not_write() {
    let path = write_scene();
    let before = fs::read(&path).expect("read");

    let mut session = Session::open(config(&path, false)).expect("open");
    session.select("Crate").expect("select");
    let written = session.commit().expect("commit");

    let after = fs::read(&path).expect("read");
    fs::remove_file(&path).expect("cleanup");
    assert!(!written);
    assert_eq!(before, after);
}

#[test]
fn dry_run_leaves_file_byte_identical() {
    let path = write_scene();
    let before = fs::read(&path).expect("read");

    let mut session = Session::open(config(&path, true)).expect("open");
    session.select("Crate").expect("select");
    dispatch(&mut session.scene, Invocation::node_type(NodeType::Collider)).expect("dispatch");
    assert!(session.scene.is_dirty());
    let written = session.commit().expect("commit");

    let after = fs::read(&path).expect("read");
    fs::remove_file(&path).expect("cleanup");
    assert!(!written);
    assert_eq!(before, after);
}

#[test]
fn edits_are_written_with_unknown_fields_intact() {
    let path = write_scene();

    let mut session = Session::open(config(&path, false)).expect("open");
    session.select("Crate").expect("select");
    dispatch(&mut session.scene, Invocation::node_type(NodeType::Collider)).expect("dispatch");
    assert!(session.commit().expect("commit"));

    let saved: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).expect("read")).expect("json");
    fs::remove_file(&path).expect("cleanup");
    assert_eq!(saved["exporter"], json!("blender-4.1"));
    assert_eq!(saved["active"], json!("Crate"));
    assert_eq!(saved["objects"][0]["props"], json!({"custom": 1, "node": "collider"}));
}

#[test]
fn open_reports_missing_scene() {
    let path = std::env::temp_dir().join(format!("nodetag-session-{}.json", Uuid::new_v4()));
    assert!(matches!(Session::open(config(&path, false)), Err(SceneError::Read { .. })));
}
