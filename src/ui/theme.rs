use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0xda, 0x77, 0x56);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const POPUP_BORDER: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const CARD_BACK: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const CARD_FACE: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const CARD_MATCHED: Color = Color::Rgb(0x3b, 0x82, 0xf6);
pub const CURSOR_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);
