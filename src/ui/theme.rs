use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0xf5, 0x9e, 0x0b);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const FOCUS_BORDER: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const PLACEHOLDER_FILL: Color = Color::Rgb(0x3f, 0x3f, 0x46);
pub const PLACEHOLDER_TEXT: Color = Color::Rgb(0xa1, 0xa1, 0xaa);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);
