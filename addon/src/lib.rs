//! Host-facing add-on layer for node property tagging.
//!
//! This crate turns the [`schema`] mutators into what a 3D host needs: an
//! abstract [`Host`] to read and write objects through, operators guarded by
//! availability predicates, an inspector panel rendered as plain data, and a
//! register/unregister lifecycle. It has no dependency on any real host; an
//! embedding application implements [`Host`] and maps [`PanelView`] rows to
//! its own widgets.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`host`] | The [`Host`] trait and object kinds |
//! | [`operator`] | The four operators and [`Invocation`] |
//! | [`property`] | The max-distance proxy property |
//! | [`panel`] | Inspector view model and dispatch |
//! | [`registry`] | Registration lifecycle |
//! | [`info`] | Add-on metadata |

pub mod host;
pub mod info;
pub mod operator;
pub mod panel;
pub mod property;
pub mod registry;


pub use host::{Host, ObjectId, ObjectKind};
pub use info::{ADDON_INFO, AddonInfo};
pub use operator::{Invocation, Operator, OperatorError, OperatorOptions};
pub use panel::{PANEL, PanelView, Row, dispatch, draw};
pub use property::MaxDistanceProperty;
pub use registry::{Registry, RegistryError};
