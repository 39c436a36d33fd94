//! Inspector panel: a pure view of the active object's effective state.
//!
//! [`draw`] turns host state into a [`PanelView`], an ordered list of rows a
//! host toolkit can lay out one-to-one. Buttons and checkboxes carry the
//! [`Invocation`] they fire; [`dispatch`] runs it. The panel keeps no state
//! between draws.

#[cfg(test)]
#[path = "panel_test.rs"]
mod panel_test;

use schema::{ColliderFlag, MeshFlag, NodeType, Props, RigidbodyType};
use serde::Serialize;

use crate::host::{Host, ObjectId};
use crate::operator::{Invocation, OperatorError};
use crate::property::MaxDistanceProperty;

/// Message shown instead of the controls when nothing is active.
pub const NO_SELECTION: &str = "No object selected";

/// Where and how the host places the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PanelDescriptor {
    pub id: &'static str,
    pub label: &'static str,
    pub space: &'static str,
    pub region: &'static str,
    /// Sidebar tab name.
    pub category: &'static str,
}

pub const PANEL: PanelDescriptor = PanelDescriptor {
    id: "VIEW3D_PT_hyperfy_panel",
    label: "Hyperfy",
    space: "VIEW_3D",
    region: "UI",
    category: "Hyperfy",
};

/// One widget row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "widget", rename_all = "snake_case")]
pub enum Row {
    Label { text: &'static str },
    Separator,
    /// One option of a single-choice group.
    Radio { text: &'static str, selected: bool, invoke: Invocation },
    Checkbox { text: &'static str, checked: bool, invoke: Invocation },
    /// Numeric field bound to a proxy property.
    IntField { property: &'static str, text: &'static str, value: u64 },
}

impl Row {
    /// Host icon name for stateful rows.
    #[must_use]
    pub fn icon(&self) -> Option<&'static str> {
        match self {
            Self::Radio { selected: true, .. } => Some("RADIOBUT_ON"),
            Self::Radio { selected: false, .. } => Some("RADIOBUT_OFF"),
            Self::Checkbox { checked: true, .. } => Some("CHECKBOX_HLT"),
            Self::Checkbox { checked: false, .. } => Some("CHECKBOX_DEHLT"),
            Self::Label { .. } | Self::Separator | Self::IntField { .. } => None,
        }
    }

    /// Visible text, if the row has any.
    #[must_use]
    pub fn text(&self) -> Option<&'static str> {
        match self {
            Self::Label { text }
            | Self::Radio { text, .. }
            | Self::Checkbox { text, .. }
            | Self::IntField { text, .. } => Some(*text),
            Self::Separator => None,
        }
    }

    /// Operator call fired when the row is clicked.
    #[must_use]
    pub fn invocation(&self) -> Option<Invocation> {
        match self {
            Self::Radio { invoke, .. } | Self::Checkbox { invoke, .. } => Some(*invoke),
            Self::Label { .. } | Self::Separator | Self::IntField { .. } => None,
        }
    }
}

/// Rendered panel contents, top to bottom.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PanelView {
    pub rows: Vec<Row>,
}

impl PanelView {
    fn message(text: &'static str) -> Self {
        Self { rows: vec![Row::Label { text }] }
    }

    /// First stateful row whose text is `text`.
    #[must_use]
    pub fn find(&self, text: &str) -> Option<&Row> {
        self.rows
            .iter()
            .find(|row| !matches!(row, Row::Label { .. }) && row.text() == Some(text))
    }

    /// Section headings, in order.
    #[must_use]
    pub fn sections(&self) -> Vec<&'static str> {
        self.rows
            .iter()
            .filter_map(|row| match row {
                Row::Label { text } => Some(*text),
                _ => None,
            })
            .collect()
    }
}

/// Button text for a node type.
#[must_use]
pub fn node_label(node: NodeType) -> &'static str {
    match node {
        NodeType::None => "None",
        NodeType::Rigidbody => "Rigidbody",
        NodeType::Collider => "Collider",
        NodeType::Lod => "LOD Group",
    }
}

#[must_use]
pub fn rigidbody_label(kind: RigidbodyType) -> &'static str {
    match kind {
        RigidbodyType::Static => "Static",
        RigidbodyType::Kinematic => "Kinematic",
        RigidbodyType::Dynamic => "Dynamic",
    }
}

#[must_use]
pub fn collider_label(flag: ColliderFlag) -> &'static str {
    match flag {
        ColliderFlag::Convex => "Convex",
        ColliderFlag::Trigger => "Trigger",
    }
}

#[must_use]
pub fn mesh_label(flag: MeshFlag) -> &'static str {
    match flag {
        MeshFlag::CastShadow => "Cast Shadow",
        MeshFlag::ReceiveShadow => "Receive Shadow",
    }
}

/// Returns `true` if the object's direct parent is an LOD group.
#[must_use]
pub fn is_lod_child(host: &dyn Host, id: ObjectId) -> bool {
    host.parent(id)
        .and_then(|parent| host.props(parent))
        .is_some_and(|bag| Props::new(bag).node_type() == NodeType::Lod)
}

/// Build the panel for the host's active object.
#[must_use]
pub fn draw(host: &dyn Host) -> PanelView {
    let Some(id) = host.active_object() else {
        return PanelView::message(NO_SELECTION);
    };
    let Some(bag) = host.props(id) else {
        return PanelView::message(NO_SELECTION);
    };
    let props = Props::new(bag);
    let node = props.node_type();
    let lod_child = is_lod_child(host, id);

    let mut rows = vec![Row::Label { text: "Node" }];
    for option in NodeType::ALL {
        // LOD groups do not nest; keep the option visible only to switch away.
        if option == NodeType::Lod && lod_child && node != NodeType::Lod {
            continue;
        }
        rows.push(Row::Radio {
            text: node_label(option),
            selected: node == option,
            invoke: Invocation::node_type(option),
        });
    }

    match node {
        NodeType::Rigidbody => {
            let current = props.rigidbody_type();
            rows.push(Row::Separator);
            rows.push(Row::Label { text: "Rigidbody Type" });
            for kind in RigidbodyType::ALL {
                rows.push(Row::Radio {
                    text: rigidbody_label(kind),
                    selected: current == kind,
                    invoke: Invocation::rigidbody_type(kind),
                });
            }
        }
        NodeType::Collider => {
            rows.push(Row::Separator);
            rows.push(Row::Label { text: "Collider Options" });
            for flag in ColliderFlag::ALL {
                let checked = match flag {
                    ColliderFlag::Convex => props.convex(),
                    ColliderFlag::Trigger => props.trigger(),
                };
                rows.push(Row::Checkbox {
                    text: collider_label(flag),
                    checked,
                    invoke: Invocation::collider_toggle(flag),
                });
            }
        }
        NodeType::None | NodeType::Lod => {}
    }

    if lod_child {
        rows.push(Row::Separator);
        rows.push(Row::Label { text: "LOD" });
        rows.push(Row::IntField {
            property: MaxDistanceProperty::IDENT,
            text: MaxDistanceProperty::NAME,
            value: props.max_distance(),
        });
    }

    if host.object_kind(id).is_some_and(|kind| kind.is_mesh()) {
        rows.push(Row::Separator);
        rows.push(Row::Label { text: "Mesh" });
        for flag in MeshFlag::ALL {
            let checked = match flag {
                MeshFlag::CastShadow => props.cast_shadow(),
                MeshFlag::ReceiveShadow => props.receive_shadow(),
            };
            rows.push(Row::Checkbox {
                text: mesh_label(flag),
                checked,
                invoke: Invocation::mesh_toggle(flag),
            });
        }
    }

    PanelView { rows }
}

/// Run a row's invocation against the active object, as a click would.
///
/// # Errors
///
/// Propagates the operator's [`OperatorError`].
pub fn dispatch(host: &mut dyn Host, invocation: Invocation) -> Result<(), OperatorError> {
    let operator = invocation.operator();
    tracing::info!(operator = operator.id(), "panel dispatch");
    operator.execute(host)
}
