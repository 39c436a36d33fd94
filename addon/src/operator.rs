//! Operators: named, pollable, undoable edits of the active object.
//!
//! DESIGN
//! ======
//! Each operator is a small parameter struct implementing [`Operator`]. The
//! host only ever reaches an operator's mutation through
//! [`Operator::execute`], which re-checks [`Operator::poll`] first, so an
//! operator whose preconditions do not hold cannot change anything even if a
//! stale UI button dispatches it. After a successful edit the host is told to
//! refresh the object and redraw.

#[cfg(test)]
#[path = "operator_test.rs"]
mod operator_test;

use schema::mutate;
use schema::{ColliderFlag, MeshFlag, NodeType, PropertyBag, Props, RigidbodyType};
use serde::{Deserialize, Serialize};

use crate::host::{Host, ObjectId};

// =============================================================================
// TYPES
// =============================================================================

/// Host behavior flags for an operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OperatorOptions {
    /// Shown in the host's operator history and repeatable.
    pub register: bool,
    /// Recorded as a single undo step.
    pub undo: bool,
}

impl OperatorOptions {
    pub const REGISTER_UNDO: Self = Self { register: true, undo: true };
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OperatorError {
    #[error("{0} cannot run in the current context")]
    Unavailable(&'static str),
    #[error("object not found: {0}")]
    MissingObject(ObjectId),
}

/// An action the host can poll and invoke against its active object.
pub trait Operator {
    /// Stable identifier, e.g. `object.node_type_set`.
    fn id(&self) -> &'static str;

    /// Human-readable name.
    fn label(&self) -> &'static str;

    /// Tooltip text.
    fn description(&self) -> &'static str;

    fn options(&self) -> OperatorOptions {
        OperatorOptions::REGISTER_UNDO
    }

    /// Whether the operator may run right now.
    fn poll(&self, host: &dyn Host) -> bool;

    /// The mutation itself. Only called by [`Operator::execute`].
    fn apply(&self, bag: &mut dyn PropertyBag);

    /// Run the operator against the active object.
    ///
    /// # Errors
    ///
    /// Returns [`OperatorError::Unavailable`] when [`Operator::poll`] fails
    /// and [`OperatorError::MissingObject`] if the host cannot produce the
    /// active object's property bag.
    fn execute(&self, host: &mut dyn Host) -> Result<(), OperatorError> {
        if !self.poll(host) {
            tracing::debug!(operator = self.id(), "poll failed; operator not run");
            return Err(OperatorError::Unavailable(self.id()));
        }
        let id = host.active_object().ok_or(OperatorError::Unavailable(self.id()))?;
        let bag = host.props_mut(id).ok_or(OperatorError::MissingObject(id))?;
        self.apply(bag);
        notify(host, id);
        tracing::debug!(operator = self.id(), object = %id, "operator finished");
        Ok(())
    }
}

/// Tell the host an object's properties changed.
pub(crate) fn notify(host: &mut dyn Host, id: ObjectId) {
    host.tag_update(id);
    host.request_redraw();
}

fn active_node_type(host: &dyn Host) -> Option<NodeType> {
    let id = host.active_object()?;
    host.props(id).map(|bag| Props::new(bag).node_type())
}

// =============================================================================
// OPERATORS
// =============================================================================

/// Set the node type of the active object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeTypeSet {
    pub node_type: NodeType,
}

impl NodeTypeSet {
    pub const ID: &'static str = "object.node_type_set";
}

impl Operator for NodeTypeSet {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn label(&self) -> &'static str {
        "Set Node Type Property"
    }

    fn description(&self) -> &'static str {
        "Set the node type of the active object"
    }

    fn poll(&self, host: &dyn Host) -> bool {
        host.active_object().is_some()
    }

    fn apply(&self, bag: &mut dyn PropertyBag) {
        mutate::set_node_type(bag, self.node_type);
    }
}

/// Set the body type of the active rigidbody.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RigidbodyTypeSet {
    pub rb_type: RigidbodyType,
}

impl RigidbodyTypeSet {
    pub const ID: &'static str = "object.rigidbody_type_set";
}

impl Operator for RigidbodyTypeSet {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn label(&self) -> &'static str {
        "Set Rigidbody Type Property"
    }

    fn description(&self) -> &'static str {
        "Set the rigidbody type of the active object"
    }

    fn poll(&self, host: &dyn Host) -> bool {
        active_node_type(host) == Some(NodeType::Rigidbody)
    }

    fn apply(&self, bag: &mut dyn PropertyBag) {
        mutate::set_rigidbody_type(bag, self.rb_type);
    }
}

/// Flip a collider flag on the active collider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColliderPropertyToggle {
    pub flag: ColliderFlag,
}

impl ColliderPropertyToggle {
    pub const ID: &'static str = "object.collider_property_toggle";
}

impl Operator for ColliderPropertyToggle {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn label(&self) -> &'static str {
        "Toggle Collider Property"
    }

    fn description(&self) -> &'static str {
        "Toggle a collider property on the active object"
    }

    fn poll(&self, host: &dyn Host) -> bool {
        active_node_type(host) == Some(NodeType::Collider)
    }

    fn apply(&self, bag: &mut dyn PropertyBag) {
        let enabled = mutate::toggle_collider_flag(bag, self.flag);
        tracing::trace!(flag = %self.flag, enabled, "collider flag toggled");
    }
}

/// Flip a shadow flag on the active mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MeshPropertyToggle {
    pub flag: MeshFlag,
}

impl MeshPropertyToggle {
    pub const ID: &'static str = "object.mesh_property_toggle";
}

impl Operator for MeshPropertyToggle {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn label(&self) -> &'static str {
        "Toggle Mesh Property"
    }

    fn description(&self) -> &'static str {
        "Toggle a mesh property on the active object"
    }

    fn poll(&self, host: &dyn Host) -> bool {
        host.active_object()
            .and_then(|id| host.object_kind(id))
            .is_some_and(|kind| kind.is_mesh())
    }

    fn apply(&self, bag: &mut dyn PropertyBag) {
        let enabled = mutate::toggle_mesh_flag(bag, self.flag);
        tracing::trace!(flag = %self.flag, enabled, "mesh flag toggled");
    }
}

// =============================================================================
// INVOCATION
// =============================================================================

/// A parameterized operator call, as carried by a panel button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "operator", content = "value", rename_all = "snake_case")]
pub enum Invocation {
    NodeTypeSet(NodeTypeSet),
    RigidbodyTypeSet(RigidbodyTypeSet),
    ColliderPropertyToggle(ColliderPropertyToggle),
    MeshPropertyToggle(MeshPropertyToggle),
}

impl Invocation {
    #[must_use]
    pub fn node_type(node_type: NodeType) -> Self {
        Self::NodeTypeSet(NodeTypeSet { node_type })
    }

    #[must_use]
    pub fn rigidbody_type(rb_type: RigidbodyType) -> Self {
        Self::RigidbodyTypeSet(RigidbodyTypeSet { rb_type })
    }

    #[must_use]
    pub fn collider_toggle(flag: ColliderFlag) -> Self {
        Self::ColliderPropertyToggle(ColliderPropertyToggle { flag })
    }

    #[must_use]
    pub fn mesh_toggle(flag: MeshFlag) -> Self {
        Self::MeshPropertyToggle(MeshPropertyToggle { flag })
    }

    /// The operator this invocation runs.
    #[must_use]
    pub fn operator(&self) -> &dyn Operator {
        match self {
            Self::NodeTypeSet(op) => op,
            Self::RigidbodyTypeSet(op) => op,
            Self::ColliderPropertyToggle(op) => op,
            Self::MeshPropertyToggle(op) => op,
        }
    }
}
