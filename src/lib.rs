//! Rich menu image generator
//!
//! Renders the 2500x1686, 3x2 grid background image of a chat-app rich menu
//! and, optionally, the matching menu definition JSON.

pub mod draw;
pub mod font;
pub mod icons;
pub mod inspect;
pub mod layout;
pub mod menu;
pub mod menu_json;
pub mod rich_menu;
