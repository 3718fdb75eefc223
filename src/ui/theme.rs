use ratatui::style::Color;

pub const MALT_BROWN: Color = Color::Rgb(0x8b, 0x5a, 0x2b);
pub const AMBER: Color = Color::Rgb(0xf9, 0xc7, 0x84);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const MUTED_TEXT: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const ROW_STRIPE: Color = Color::Rgb(0x26, 0x26, 0x26);
