//! Rich menu definition data model
//!
//! Mirrors the rich menu object accepted by the LINE Messaging API
//! (`POST /v2/bot/richmenu`). The generator writes it next to the image so the
//! menu can be registered with whatever upload tooling is in use; uploading is
//! not done here.

use crate::layout::{Bounds, Grid};
use crate::menu::{MenuCell, CHAT_BAR_TEXT, MENU_NAME};
use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;

/// Root rich menu object
///
/// Holds the canvas size, display metadata and one tap area per cell.
#[derive(Serialize, Debug, Clone)]
pub struct RichMenu {
    /// Canvas size, must match the uploaded image
    pub size: Size,

    /// Whether the menu is expanded when the chat opens
    pub selected: bool,

    /// Internal name shown in the admin console
    pub name: String,

    /// Text on the chat bar button that toggles the menu
    #[serde(rename = "chatBarText")]
    pub chat_bar_text: String,

    /// Tappable regions and their actions
    pub areas: Vec<Area>,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

/// A tappable region of the menu image
#[derive(Serialize, Debug, Clone)]
pub struct Area {
    pub bounds: Bounds,
    pub action: Action,
}

/// What happens when an area is tapped
#[derive(Serialize, Debug, Clone)]
pub struct Action {
    /// Action type, always "uri" here
    #[serde(rename = "type")]
    pub kind: String,

    /// Accessibility label, at most 20 characters
    pub label: String,

    /// Target opened in the in-app browser
    pub uri: String,
}

impl RichMenu {
    /// Creates an empty rich menu for a canvas of the given size
    pub fn new(name: String, chat_bar_text: String, width: u32, height: u32) -> Self {
        Self {
            size: Size { width, height },
            selected: true,
            name,
            chat_bar_text,
            areas: Vec::new(),
        }
    }

    pub fn add_area(&mut self, area: Area) {
        self.areas.push(area);
    }

    /// Menu for `cells` laid out on `grid`, each area opening
    /// `base_url` + the cell's action path
    pub fn from_cells(grid: &Grid, cells: &[MenuCell], base_url: &str) -> Self {
        let mut menu = RichMenu::new(
            MENU_NAME.to_string(),
            CHAT_BAR_TEXT.to_string(),
            grid.width,
            grid.height,
        );
        for (i, cell) in cells.iter().enumerate().take(grid.cell_count()) {
            let uri = join_url(base_url, cell.action_path);
            menu.add_area(Area::uri(grid.tap_area(i), cell.label, &uri));
        }
        menu
    }
}

impl Area {
    /// Area opening `uri` when tapped
    pub fn uri(bounds: Bounds, label: &str, uri: &str) -> Self {
        Self {
            bounds,
            action: Action {
                kind: "uri".to_string(),
                label: label.to_string(),
                uri: uri.to_string(),
            },
        }
    }
}

fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Writes the rich menu definition as pretty-printed JSON
///
/// # Errors
/// Returns an error if serialization fails or the file cannot be written
/// (including when its directory does not exist).
pub fn write_menu_json(path: &Path, menu: &RichMenu) -> Result<()> {
    let json = serde_json::to_string_pretty(menu).context("Failed to serialize rich menu")?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write rich menu JSON to {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::CELLS;

    #[test]
    fn test_rich_menu_creation() {
        let menu = RichMenu::new("menu".to_string(), "open".to_string(), 2500, 1686);
        assert_eq!(menu.size, Size { width: 2500, height: 1686 });
        assert!(menu.selected);
        assert!(menu.areas.is_empty());
    }

    #[test]
    fn test_join_url_trims_slashes() {
        assert_eq!(join_url("https://a.test/", "/repair"), "https://a.test/repair");
        assert_eq!(join_url("https://a.test", "track"), "https://a.test/track");
    }

    #[test]
    fn test_serialization_field_names() {
        let menu = RichMenu::from_cells(&Grid::default(), &CELLS, "https://a.test");
        let json = serde_json::to_string_pretty(&menu).unwrap();

        let expected_fields = [
            "\"chatBarText\": \"選單\"",
            "\"type\": \"uri\"",
            "\"uri\": \"https://a.test/repair\"",
            "\"label\": \"費用參考\"",
            "\"selected\": true",
        ];
        for field in expected_fields {
            assert!(
                json.contains(field),
                "JSON missing expected field: {}\nActual JSON:\n{}",
                field,
                json
            );
        }
        assert!(!json.contains("chat_bar_text"));
        assert!(!json.contains("\"kind\""));
    }

    #[test]
    fn test_areas_follow_tap_layout() {
        let menu = RichMenu::from_cells(&Grid::default(), &CELLS, "https://a.test");
        let parsed: serde_json::Value = serde_json::to_value(&menu).unwrap();

        let areas = parsed["areas"].as_array().unwrap();
        assert_eq!(areas.len(), 6);
        assert_eq!(areas[1]["bounds"]["x"], 833);
        assert_eq!(areas[1]["bounds"]["width"], 834);
        assert_eq!(areas[5]["bounds"]["x"], 1667);
        assert_eq!(areas[5]["bounds"]["y"], 843);
        assert_eq!(areas[5]["bounds"]["height"], 843);
    }
}
