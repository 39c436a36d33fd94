//! The LOD max-distance proxy property.
//!
//! Hosts expose a numeric field for `maxDistance` without giving it storage
//! of its own: reads and writes go straight through to the property bag.

#[cfg(test)]
#[path = "property_test.rs"]
mod property_test;

use schema::mutate;

use crate::host::{Host, ObjectId};
use crate::operator::{OperatorError, notify};

/// Getter/setter pair backing the host's "Max Distance" field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaxDistanceProperty;

impl MaxDistanceProperty {
    /// Attribute name the proxy is registered under on host objects.
    pub const IDENT: &'static str = "hyperfy_max_distance";
    pub const NAME: &'static str = "Max Distance";
    pub const DESCRIPTION: &'static str = "Maximum LOD distance (0 = no limit)";

    /// Stored distance, or 0 when absent.
    ///
    /// # Errors
    ///
    /// Returns [`OperatorError::MissingObject`] for an unknown object.
    pub fn get(host: &dyn Host, id: ObjectId) -> Result<u64, OperatorError> {
        let bag = host.props(id).ok_or(OperatorError::MissingObject(id))?;
        Ok(mutate::max_distance(bag))
    }

    /// Store the distance; 0 removes the key. The host is notified even when
    /// the value did not change, matching a field edit in the UI.
    ///
    /// # Errors
    ///
    /// Returns [`OperatorError::MissingObject`] for an unknown object.
    pub fn set(host: &mut dyn Host, id: ObjectId, value: u64) -> Result<(), OperatorError> {
        let bag = host.props_mut(id).ok_or(OperatorError::MissingObject(id))?;
        mutate::set_max_distance(bag, value);
        notify(host, id);
        tracing::debug!(object = %id, value, "max distance set");
        Ok(())
    }
}
