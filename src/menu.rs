//! The six menu cells and the visual styles they can be drawn in

use clap::ValueEnum;
use image::Rgba;
use std::fmt;
use std::str::FromStr;

/// Hand-drawn vector icons, one per cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    Wrench,
    Clipboard,
    Phone,
    Person,
    Gear,
    Coin,
}

/// One tappable cell of the rich menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuCell {
    /// Text shown under the icon, also the action label
    pub label: &'static str,
    /// Label used by the line-icon style
    pub glyph_label: &'static str,
    /// One or two characters drawn inside the badge circle
    pub abbreviation: Option<&'static str>,
    /// Secondary line under the label (badge style only)
    pub description: Option<&'static str>,
    /// CSS hex color of the badge circle
    pub color: Option<&'static str>,
    pub icon: IconKind,
    /// Symbol drawn by the emoji style when the symbol font has it
    pub emoji: char,
    /// Path appended to the frontend base URL for the tap action
    pub action_path: &'static str,
}

impl MenuCell {
    /// Badge circle color, falling back to white when missing or unparsable
    pub fn badge_color(&self) -> Rgba<u8> {
        self.color
            .and_then(|c| css_color::Srgb::from_str(c).ok())
            .map(|color| {
                Rgba([
                    (color.red * 255.).round() as u8,
                    (color.green * 255.).round() as u8,
                    (color.blue * 255.).round() as u8,
                    255,
                ])
            })
            .unwrap_or(Rgba([255, 255, 255, 255]))
    }

    /// Text drawn under the icon in `style`
    pub fn label_for(&self, style: Style) -> &'static str {
        match style {
            Style::Glyph => self.glyph_label,
            Style::Badge | Style::Emoji => self.label,
        }
    }
}

/// Display name of the whole menu in the chat platform's admin console
pub const MENU_NAME: &str = "全方位水電維修";
/// Text on the chat bar that toggles the menu
pub const CHAT_BAR_TEXT: &str = "選單";

pub const CELLS: [MenuCell; 6] = [
    MenuCell {
        label: "用戶報修",
        glyph_label: "我要報修",
        abbreviation: Some("我"),
        description: Some("線上填寫維修需求"),
        color: Some("#ef4444"),
        icon: IconKind::Wrench,
        emoji: '🔧',
        action_path: "/repair",
    },
    MenuCell {
        label: "維修進度",
        glyph_label: "查詢進度",
        abbreviation: Some("查"),
        description: Some("查詢工單處理狀態"),
        color: Some("#3b82f6"),
        icon: IconKind::Clipboard,
        emoji: '📋',
        action_path: "/track",
    },
    MenuCell {
        label: "聯絡我們",
        glyph_label: "聯絡客服",
        abbreviation: Some("聯"),
        description: Some("電話·地址·營業時間"),
        color: Some("#10b981"),
        icon: IconKind::Phone,
        emoji: '📞',
        action_path: "/contact",
    },
    MenuCell {
        label: "內部登入",
        glyph_label: "管理後台",
        abbreviation: Some("管"),
        description: Some("員工管理系統入口"),
        color: Some("#8b5cf6"),
        icon: IconKind::Person,
        emoji: '👤',
        action_path: "/login",
    },
    MenuCell {
        label: "服務項目",
        glyph_label: "服務介紹",
        abbreviation: Some("服"),
        description: Some("專業維修服務一覽"),
        color: Some("#f59e0b"),
        icon: IconKind::Gear,
        emoji: '⚙',
        action_path: "/services",
    },
    MenuCell {
        label: "費用參考",
        glyph_label: "收費標準",
        abbreviation: Some("收"),
        description: Some("檢測費·維修行情"),
        color: Some("#6366f1"),
        icon: IconKind::Coin,
        emoji: '💰',
        action_path: "/pricing",
    },
];

/// Visual treatment of the cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Style {
    /// Colored circle with an abbreviation, label and description
    #[default]
    Badge,
    /// Hand-drawn white line icons above the label
    Glyph,
    /// Symbol-font glyphs above the label
    Emoji,
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Style::Badge => "badge",
            Style::Glyph => "glyph",
            Style::Emoji => "emoji",
        };
        f.write_str(name)
    }
}

/// Per-style layout and palette constants
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub gradient_top: [u8; 3],
    pub gradient_bottom: [u8; 3],
    /// Inset from the cell edge to the card
    pub padding: u32,
    pub radius: f32,
    pub card_fill: Rgba<u8>,
    pub card_outline: Rgba<u8>,
    pub card_outline_width: f32,
}

impl Style {
    pub fn theme(&self) -> Theme {
        match self {
            Style::Badge => Theme {
                gradient_top: [26, 26, 46],
                gradient_bottom: [15, 33, 62],
                padding: 20,
                radius: 40.0,
                card_fill: Rgba([255, 255, 255, 18]),
                card_outline: Rgba([255, 255, 255, 30]),
                card_outline_width: 2.0,
            },
            Style::Glyph => Theme {
                gradient_top: [18, 30, 60],
                gradient_bottom: [26, 42, 85],
                padding: 16,
                radius: 28.0,
                card_fill: Rgba([255, 255, 255, 25]),
                card_outline: Rgba([255, 255, 255, 45]),
                card_outline_width: 2.0,
            },
            Style::Emoji => Theme {
                gradient_top: [24, 24, 40],
                gradient_bottom: [12, 40, 70],
                padding: 16,
                radius: 28.0,
                card_fill: Rgba([255, 255, 255, 25]),
                card_outline: Rgba([255, 255, 255, 45]),
                card_outline_width: 2.0,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyph_style_uses_its_own_labels() {
        let glyph: Vec<&str> = CELLS.iter().map(|c| c.label_for(Style::Glyph)).collect();
        assert_eq!(
            glyph,
            ["我要報修", "查詢進度", "聯絡客服", "管理後台", "服務介紹", "收費標準"]
        );
        for cell in &CELLS {
            assert_eq!(cell.label_for(Style::Badge), cell.label);
            assert_eq!(cell.label_for(Style::Emoji), cell.label);
        }
    }

    #[test]
    fn test_badge_color_falls_back_to_white() {
        let cell = MenuCell {
            color: Some("not a color"),
            ..CELLS[0]
        };
        assert_eq!(cell.badge_color(), Rgba([255, 255, 255, 255]));
        assert_eq!(CELLS[1].badge_color(), Rgba([59, 130, 246, 255]));
    }
}
