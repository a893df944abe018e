use ratatui::style::{Color, Modifier, Style};

use crate::projection::Tone;

pub const OCTO_BLUE: Color = Color::Rgb(0x58, 0xa6, 0xff);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const POPUP_BORDER: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const MUTED_TEXT: Color = Color::Rgb(0x9c, 0xa3, 0xaf);
pub const STATUS_OK: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const STATUS_WARN: Color = Color::Rgb(0xea, 0xb3, 0x08);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const INFO_TEXT: Color = Color::Rgb(0x38, 0xbd, 0xf8);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);

pub fn tone_style(tone: Tone) -> Style {
    let base = Style::default();
    match tone {
        Tone::Plain => base.fg(HEADER_TEXT),
        Tone::Strong => base.fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        Tone::Muted => base.fg(MUTED_TEXT),
        Tone::Accent => base.fg(OCTO_BLUE),
        Tone::Info => base.fg(INFO_TEXT),
        Tone::Success => base.fg(STATUS_OK),
        Tone::Warning => base.fg(STATUS_WARN),
        Tone::Danger => base.fg(STATUS_ERROR),
    }
}
