//! Add-on metadata shown in the host's add-on preferences.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AddonInfo {
    pub name: &'static str,
    pub author: &'static str,
    pub version: (u32, u32),
    /// Oldest host version the add-on supports.
    pub host_version: (u32, u32, u32),
    pub location: &'static str,
    pub description: &'static str,
    pub category: &'static str,
}

pub const ADDON_INFO: AddonInfo = AddonInfo {
    name: "Hyperfy",
    author: "Ashxn",
    version: (1, 0),
    host_version: (2, 80, 0),
    location: "View3D > Sidebar > Hyperfy Tab",
    description: "A tool for quickly managing custom properties specific to Hyperfy assets.",
    category: "3D View",
};

impl AddonInfo {
    /// Version as `major.minor`.
    #[must_use]
    pub fn version_string(&self) -> String {
        format!("{}.{}", self.version.0, self.version.1)
    }
}
