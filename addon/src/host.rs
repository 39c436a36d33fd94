//! The host application surface the add-on consumes.
//!
//! The add-on never owns storage. It reads and writes property bags through
//! the host, asks the host who the active object is and what kind of object
//! it is, and notifies the host after every edit so the UI can refresh.

use std::fmt;

use schema::PropertyBag;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a host object.
pub type ObjectId = Uuid;

/// Host object type. Only `Mesh` changes what the add-on offers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectKind {
    Mesh,
    #[default]
    Empty,
    Curve,
    Light,
    Camera,
    Armature,
}

impl ObjectKind {
    #[must_use]
    pub fn is_mesh(self) -> bool {
        self == Self::Mesh
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Mesh => "mesh",
            Self::Empty => "empty",
            Self::Curve => "curve",
            Self::Light => "light",
            Self::Camera => "camera",
            Self::Armature => "armature",
        };
        f.write_str(s)
    }
}

/// Scene access implemented by the embedding application.
///
/// Every method taking an [`ObjectId`] returns `None` for ids the host does
/// not know.
pub trait Host {
    /// The object the user is currently editing, if any.
    fn active_object(&self) -> Option<ObjectId>;

    /// Type of the object.
    fn object_kind(&self, id: ObjectId) -> Option<ObjectKind>;

    /// Direct parent of the object.
    fn parent(&self, id: ObjectId) -> Option<ObjectId>;

    /// Property bag of the object.
    fn props(&self, id: ObjectId) -> Option<&dyn PropertyBag>;

    /// Mutable property bag of the object.
    fn props_mut(&mut self, id: ObjectId) -> Option<&mut dyn PropertyBag>;

    /// Mark the object as changed so dependent data is refreshed.
    fn tag_update(&mut self, id: ObjectId);

    /// Ask every UI area to redraw.
    fn request_redraw(&mut self);
}
