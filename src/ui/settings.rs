//! Hardcoded UI strings and colors for the terminal interface.

use crossterm::style::Color;

// ---------------------------------------------------------------------------
// Prompt strings / labels
// ---------------------------------------------------------------------------

pub const PROMPT_PRIMARY: &str = "You> ";
pub const LABEL_USER: &str = "User: ";
pub const LABEL_BOT: &str = "Bot: ";
pub const LABEL_ERROR: &str = "error:";

pub const STARTUP_HINT: &str = "Chat started (press Ctrl+C to exit)";
pub const CONNECTED_INDICATOR: &str = "Connected ✅";
pub const TURN_END_MARKER: &str = "[conversation ended]";

// ---------------------------------------------------------------------------
// Colors
// ---------------------------------------------------------------------------

pub const COLOR_PROMPT: Color = Color::Green;
pub const COLOR_USER: Color = Color::Yellow;
pub const COLOR_BOT: Color = Color::Cyan;
pub const COLOR_STATUS: Color = Color::DarkGrey;
pub const COLOR_ERROR: Color = Color::Red;
