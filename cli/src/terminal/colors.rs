use colored::Color;

pub const PRIMARY: Color = Color::TrueColor { r: 130, g: 200, b: 255 };
pub const ACCENT: Color = Color::TrueColor { r: 255, g: 200, b: 90 };
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;

pub const IPV4_ADDR: Color = Color::TrueColor { r: 110, g: 220, b: 160 };
pub const IPV6_ADDR: Color = Color::TrueColor { r: 90, g: 180, b: 230 };
pub const MAC_ADDR: Color = Color::TrueColor { r: 230, g: 150, b: 230 };

pub const STATE_GOOD: Color = Color::Green;
pub const STATE_BAD: Color = Color::Red;
pub const STATE_UNSURE: Color = Color::Yellow;
