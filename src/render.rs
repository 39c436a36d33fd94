//! Plain-text rendering of the inspector panel for terminals.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use addon::{PANEL, PanelView, Row};

const RULE_WIDTH: usize = 24;

/// Render `view` under a title bar naming the panel and, when known, the
/// active object.
#[must_use]
pub fn render_panel(view: &PanelView, object: Option<&str>) -> String {
    let mut out = match object {
        Some(name) => format!("[{}] {name}\n", PANEL.label),
        None => format!("[{}]\n", PANEL.label),
    };
    for row in &view.rows {
        match row {
            Row::Label { text } => {
                out.push_str(&format!("{text}\n"));
            }
            Row::Separator => {
                out.push_str(&"-".repeat(RULE_WIDTH));
                out.push('\n');
            }
            Row::Radio { text, selected, .. } => {
                let mark = if *selected { "(*)" } else { "( )" };
                out.push_str(&format!("  {mark} {text}\n"));
            }
            Row::Checkbox { text, checked, .. } => {
                let mark = if *checked { "[x]" } else { "[ ]" };
                out.push_str(&format!("  {mark} {text}\n"));
            }
            Row::IntField { text, value, .. } => {
                out.push_str(&format!("  {text}: {value}\n"));
            }
        }
    }
    out
}
