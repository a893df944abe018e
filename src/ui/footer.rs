use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

const HINTS: &str = " 1-5/Tab: View │ ↑↓: Select │ Enter: Team Details │ r: Reload │ q: Quit";
const POPUP_HINTS: &str = " Esc: Close │ q: Quit";

/// Key hints on the left, crate version on the right.
pub struct Footer {
    popup_open: bool,
}

impl Footer {
    pub fn new(popup_open: bool) -> Self {
        Self { popup_open }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let hints = if self.popup_open { POPUP_HINTS } else { HINTS };
        let version = format!("v{} ", VERSION);

        // Char counts, not bytes: the hints contain arrows and box drawing.
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(hints.chars().count())
            .saturating_sub(version.chars().count());

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line).style(text_style).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
