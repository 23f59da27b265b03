use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0x00, 0xe5, 0xff);
pub const URGENT: Color = Color::Rgb(0xff, 0x3d, 0x00);
pub const COMPLETE: Color = Color::Rgb(0x4c, 0xaf, 0x50);
pub const MUTED: Color = Color::Rgb(0x88, 0x88, 0x88);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);
