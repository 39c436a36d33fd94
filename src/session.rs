//! One CLI run against a scene file: load, edit, and write back on demand.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use addon::ObjectId;

use crate::config::Config;
use crate::scene::{Scene, SceneError};

pub struct Session {
    pub config: Config,
    pub scene: Scene,
}

impl Session {
    /// Load the configured scene file.
    ///
    /// # Errors
    ///
    /// Propagates [`Scene::load`] failures.
    pub fn open(config: Config) -> Result<Self, SceneError> {
        let scene = Scene::load(&config.scene_path)?;
        Ok(Self { config, scene })
    }

    /// Make the named object active.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::UnknownObject`] if no object has that name.
    pub fn select(&mut self, object: &str) -> Result<ObjectId, SceneError> {
        self.scene.select(object)
    }

    /// Persist edits unless this is a dry run. Returns `true` if the scene
    /// file was written. Selection changes alone are never written.
    ///
    /// # Errors
    ///
    /// Propagates [`Scene::save`] failures.
    pub fn commit(&self) -> Result<bool, SceneError> {
        if !self.scene.is_dirty() {
            return Ok(false);
        }
        tracing::debug!(redraws = self.scene.redraws(), "edits applied");
        if self.config.dry_run {
            tracing::info!(changed = ?self.scene.dirty_names(), "dry run, scene not written");
            return Ok(false);
        }
        self.scene.save(&self.config.scene_path)?;
        Ok(true)
    }
}
