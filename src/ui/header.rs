use crate::resource::ResourceKind;
use crate::ui::theme::{
    ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, MUTED_TEXT, OCTO_BLUE,
};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Brand plus one tab per collection.
pub struct Header<'a> {
    active: ResourceKind,
    origin: &'a str,
}

impl<'a> Header<'a> {
    pub fn new(active: ResourceKind, origin: &'a str) -> Self {
        Self { active, origin }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);

        let mut spans = vec![
            Span::styled("  ", text_style),
            Span::styled(
                "OctoFit Tracker",
                Style::default().fg(OCTO_BLUE).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │ ", separator_style),
        ];
        for (position, kind) in ResourceKind::ALL.into_iter().enumerate() {
            let label = format!(" {} {} {} ", position + 1, kind.icon(), kind.title());
            let style = if kind == self.active {
                Style::default()
                    .fg(OCTO_BLUE)
                    .bg(ACTIVE_HIGHLIGHT)
                    .add_modifier(Modifier::BOLD)
            } else {
                text_style
            };
            spans.push(Span::styled(label, style));
        }
        spans.push(Span::styled(" │  ", separator_style));
        spans.push(Span::styled(
            self.origin.to_string(),
            Style::default().fg(MUTED_TEXT),
        ));

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
