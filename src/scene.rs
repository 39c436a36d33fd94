//! File-backed scene: the reference [`Host`] used by the CLI.
//!
//! A scene file is a JSON document listing objects with their kind, optional
//! parent and free-form property bag, plus the name of the active object:
//!
//! ```json
//! {
//!   "active": "Crate",
//!   "objects": [
//!     { "id": "…", "name": "Crate", "kind": "mesh", "props": { "node": "rigidbody" } }
//!   ]
//! }
//! ```
//!
//! Objects keep their file order. Fields outside this layout, on the file or
//! on an object, are carried through a load/save cycle untouched, as is the
//! key order of every property bag. Loading rejects duplicate ids or names,
//! dangling parents and parent cycles, so every [`Host`] query afterwards
//! answers from a well-formed hierarchy.

#[cfg(test)]
#[path = "scene_test.rs"]
mod scene_test;

use std::collections::{HashMap, HashSet};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use addon::{Host, ObjectId, ObjectKind};
use schema::PropertyBag;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    #[error("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
    #[error("invalid scene JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("duplicate object id {0}")]
    DuplicateId(ObjectId),
    #[error("duplicate object name '{0}'")]
    DuplicateName(String),
    #[error("object '{object}' has unknown parent {parent}")]
    UnknownParent { object: String, parent: ObjectId },
    #[error("parent cycle through object '{0}'")]
    ParentCycle(String),
    #[error("no object named '{0}'")]
    UnknownObject(String),
}

/// One object as stored in the scene file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneObject {
    pub id: ObjectId,
    pub name: String,
    #[serde(default)]
    pub kind: ObjectKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<ObjectId>,
    #[serde(default)]
    pub props: Map<String, Value>,
    /// Fields this tool does not model, written back unchanged.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct SceneFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    active: Option<String>,
    #[serde(default)]
    objects: Vec<SceneObject>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

/// In-memory scene with change tracking.
#[derive(Debug, Default)]
pub struct Scene {
    objects: Vec<SceneObject>,
    index: HashMap<ObjectId, usize>,
    active: Option<ObjectId>,
    extra: Map<String, Value>,
    dirty: HashSet<ObjectId>,
    redraws: usize,
}

impl Scene {
    /// Read and validate a scene file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid scene JSON,
    /// or describes a malformed hierarchy.
    pub fn load(path: &Path) -> Result<Self, SceneError> {
        let text = fs::read_to_string(path).map_err(|source| SceneError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let scene = Self::from_json(&text)?;
        tracing::debug!(path = %path.display(), objects = scene.objects.len(), "scene loaded");
        Ok(scene)
    }

    /// Write the scene back as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn save(&self, path: &Path) -> Result<(), SceneError> {
        let mut text = self.to_json()?;
        text.push('\n');
        fs::write(path, text).map_err(|source| SceneError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(path = %path.display(), changed = self.dirty.len(), "scene saved");
        Ok(())
    }

    /// Parse and validate scene JSON.
    ///
    /// # Errors
    ///
    /// Returns an error for invalid JSON, duplicate ids or names, unknown
    /// parents, parent cycles, or an active name that matches no object.
    pub fn from_json(text: &str) -> Result<Self, SceneError> {
        let file: SceneFile = serde_json::from_str(text)?;
        Self::from_file(file)
    }

    /// Serialize the scene in file order.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, SceneError> {
        let file = SceneFile {
            active: self.active.and_then(|id| self.get(id)).map(|obj| obj.name.clone()),
            objects: self.objects.clone(),
            extra: self.extra.clone(),
        };
        Ok(serde_json::to_string_pretty(&file)?)
    }

    fn from_file(file: SceneFile) -> Result<Self, SceneError> {
        let mut index = HashMap::with_capacity(file.objects.len());
        let mut names = HashSet::with_capacity(file.objects.len());
        for (position, obj) in file.objects.iter().enumerate() {
            if index.insert(obj.id, position).is_some() {
                return Err(SceneError::DuplicateId(obj.id));
            }
            if !names.insert(obj.name.as_str()) {
                return Err(SceneError::DuplicateName(obj.name.clone()));
            }
        }

        for obj in &file.objects {
            if let Some(parent) = obj.parent {
                if !index.contains_key(&parent) {
                    return Err(SceneError::UnknownParent { object: obj.name.clone(), parent });
                }
            }
        }

        let mut scene = Self {
            objects: file.objects,
            index,
            active: None,
            extra: file.extra,
            dirty: HashSet::new(),
            redraws: 0,
        };
        scene.check_cycles()?;
        if let Some(name) = file.active {
            scene.select(&name)?;
        }
        Ok(scene)
    }

    fn check_cycles(&self) -> Result<(), SceneError> {
        for obj in &self.objects {
            let mut cursor = obj.parent;
            let mut steps = 0;
            while let Some(id) = cursor {
                steps += 1;
                if id == obj.id || steps > self.objects.len() {
                    return Err(SceneError::ParentCycle(obj.name.clone()));
                }
                cursor = self.get(id).and_then(|parent| parent.parent);
            }
        }
        Ok(())
    }

    /// All objects in file order.
    #[must_use]
    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    #[must_use]
    pub fn get(&self, id: ObjectId) -> Option<&SceneObject> {
        self.index.get(&id).map(|&position| &self.objects[position])
    }

    /// Look up an object by name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&SceneObject> {
        self.objects.iter().find(|obj| obj.name == name)
    }

    /// Make the named object active and return its id.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::UnknownObject`] if no object has that name.
    pub fn select(&mut self, name: &str) -> Result<ObjectId, SceneError> {
        let id = self
            .find(name)
            .map(|obj| obj.id)
            .ok_or_else(|| SceneError::UnknownObject(name.to_owned()))?;
        self.active = Some(id);
        Ok(id)
    }

    /// Ids of all objects in file order.
    #[must_use]
    pub fn ids(&self) -> Vec<ObjectId> {
        self.objects.iter().map(|obj| obj.id).collect()
    }

    /// Whether any object was tagged as updated since loading.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        !self.dirty.is_empty()
    }

    /// Names of updated objects in file order.
    #[must_use]
    pub fn dirty_names(&self) -> Vec<&str> {
        self.objects
            .iter()
            .filter(|obj| self.dirty.contains(&obj.id))
            .map(|obj| obj.name.as_str())
            .collect()
    }

    /// Number of redraw requests received.
    #[must_use]
    pub fn redraws(&self) -> usize {
        self.redraws
    }

    fn object_mut(&mut self, id: ObjectId) -> Option<&mut SceneObject> {
        let position = *self.index.get(&id)?;
        self.objects.get_mut(position)
    }
}

impl Host for Scene {
    fn active_object(&self) -> Option<ObjectId> {
        self.active
    }

    fn object_kind(&self, id: ObjectId) -> Option<ObjectKind> {
        self.get(id).map(|obj| obj.kind)
    }

    fn parent(&self, id: ObjectId) -> Option<ObjectId> {
        self.get(id).and_then(|obj| obj.parent)
    }

    fn props(&self, id: ObjectId) -> Option<&dyn PropertyBag> {
        self.get(id).map(|obj| &obj.props as &dyn PropertyBag)
    }

    fn props_mut(&mut self, id: ObjectId) -> Option<&mut dyn PropertyBag> {
        self.object_mut(id).map(|obj| &mut obj.props as &mut dyn PropertyBag)
    }

    fn tag_update(&mut self, id: ObjectId) {
        tracing::trace!(%id, "object updated");
        self.dirty.insert(id);
    }

    fn request_redraw(&mut self) {
        self.redraws += 1;
    }
}
