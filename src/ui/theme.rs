use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0x25, 0x63, 0xeb);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const MUTED: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const FIELD_ERROR: Color = Color::Rgb(0xdc, 0x26, 0x26);
pub const BANNER_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const STATUS_OK: Color = Color::Rgb(0x22, 0xc5, 0x5e);
