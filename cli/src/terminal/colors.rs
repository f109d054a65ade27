use colored::Color;

pub const PRIMARY: Color = Color::BrightGreen;
pub const ACCENT: Color = Color::Cyan;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;

pub const IPV4_ADDR: Color = Color::BrightCyan;
pub const INTEGER: Color = Color::Yellow;

pub const VALID: Color = Color::Green;
pub const INVALID: Color = Color::Red;
pub const PRIVATE: Color = Color::Magenta;
pub const PUBLIC: Color = Color::Blue;
