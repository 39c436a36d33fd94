//! Add-on registration lifecycle.
//!
//! Registration installs the max-distance proxy property first and then the
//! operator and panel classes in declaration order. Unregistration removes the
//! classes in reverse order and tears the proxy property down last. Both
//! steps validate the whole transition before touching anything, so a failed
//! call leaves the registry as it was.

#[cfg(test)]
#[path = "registry_test.rs"]
mod registry_test;

use serde::Serialize;

use crate::info::ADDON_INFO;
use crate::operator::{ColliderPropertyToggle, MeshPropertyToggle, NodeTypeSet, RigidbodyTypeSet};
use crate::panel::PANEL;
use crate::property::MaxDistanceProperty;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassKind {
    Operator,
    Panel,
}

/// A host class the add-on installs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ClassInfo {
    pub id: &'static str,
    pub kind: ClassKind,
}

/// Classes in registration order.
pub const CLASSES: [ClassInfo; 5] = [
    ClassInfo { id: NodeTypeSet::ID, kind: ClassKind::Operator },
    ClassInfo { id: RigidbodyTypeSet::ID, kind: ClassKind::Operator },
    ClassInfo { id: ColliderPropertyToggle::ID, kind: ClassKind::Operator },
    ClassInfo { id: MeshPropertyToggle::ID, kind: ClassKind::Operator },
    ClassInfo { id: PANEL.id, kind: ClassKind::Panel },
];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("already registered: {0}")]
    AlreadyRegistered(&'static str),
    #[error("not registered: {0}")]
    NotRegistered(&'static str),
}

/// Tracks what the add-on currently has installed in the host.
#[derive(Debug, Default)]
pub struct Registry {
    classes: Vec<ClassInfo>,
    proxy_property: bool,
}

impl Registry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the proxy property and every class.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::AlreadyRegistered`] naming the first item
    /// that is already installed.
    pub fn register(&mut self) -> Result<(), RegistryError> {
        if self.proxy_property {
            return Err(RegistryError::AlreadyRegistered(MaxDistanceProperty::IDENT));
        }
        if let Some(class) = CLASSES.iter().find(|class| self.is_registered(class.id)) {
            return Err(RegistryError::AlreadyRegistered(class.id));
        }

        self.proxy_property = true;
        tracing::debug!(property = MaxDistanceProperty::IDENT, "proxy property registered");
        for class in CLASSES {
            self.classes.push(class);
            tracing::debug!(class = class.id, kind = ?class.kind, "class registered");
        }
        tracing::info!(addon = ADDON_INFO.name, version = %ADDON_INFO.version_string(), "add-on registered");
        Ok(())
    }

    /// Remove every class in reverse order, then the proxy property.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotRegistered`] naming the first item that is
    /// missing.
    pub fn unregister(&mut self) -> Result<(), RegistryError> {
        if let Some(class) = CLASSES.iter().rev().find(|class| !self.is_registered(class.id)) {
            return Err(RegistryError::NotRegistered(class.id));
        }
        if !self.proxy_property {
            return Err(RegistryError::NotRegistered(MaxDistanceProperty::IDENT));
        }

        for class in CLASSES.iter().rev() {
            self.classes.retain(|registered| registered.id != class.id);
            tracing::debug!(class = class.id, "class unregistered");
        }
        self.proxy_property = false;
        tracing::debug!(property = MaxDistanceProperty::IDENT, "proxy property removed");
        tracing::info!(addon = ADDON_INFO.name, "add-on unregistered");
        Ok(())
    }

    #[must_use]
    pub fn is_registered(&self, id: &str) -> bool {
        self.classes.iter().any(|class| class.id == id)
    }

    /// Installed class ids, in registration order.
    #[must_use]
    pub fn registered_ids(&self) -> Vec<&'static str> {
        self.classes.iter().map(|class| class.id).collect()
    }

    #[must_use]
    pub fn has_proxy_property(&self) -> bool {
        self.proxy_property
    }
}
