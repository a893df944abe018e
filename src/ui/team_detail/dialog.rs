use crate::projection::{team_detail, DateStyle, Tone};
use crate::ui::layout::centered_rect_by_size;
use crate::ui::team_detail::state::TeamDetailState;
use crate::ui::theme::{tone_style, OCTO_BLUE, POPUP_BORDER};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

const DIALOG_WIDTH: u16 = 60;

pub fn render_team_detail(frame: &mut Frame, area: Rect, state: &TeamDetailState, style: &DateStyle) {
    let TeamDetailState::Visible { team } = state else {
        return;
    };
    let detail = team_detail(team, style);

    let mut lines = Vec::new();
    if !detail.description.is_empty() {
        lines.push(Line::from(Span::styled(
            detail.description.clone(),
            tone_style(Tone::Muted),
        )));
        lines.push(Line::from(""));
    }
    for fact in &detail.facts {
        lines.push(Line::from(vec![
            Span::styled(format!(" {}: ", fact.label), tone_style(Tone::Strong)),
            Span::styled(fact.value.text.clone(), tone_style(fact.value.tone)),
        ]));
    }
    if let Some(members) = &detail.members {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(" Roster", tone_style(Tone::Strong))));
        if members.is_empty() {
            lines.push(Line::from(Span::styled("   (none)", tone_style(Tone::Muted))));
        }
        for member in members {
            lines.push(Line::from(format!("   • {member}")));
        }
    }

    let height = (lines.len() as u16).saturating_add(2);
    let popup = centered_rect_by_size(area, DIALOG_WIDTH, height);
    let title = Span::styled(
        format!(" 👥 {} ", detail.title),
        Style::default().fg(OCTO_BLUE).add_modifier(Modifier::BOLD),
    );

    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }).block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(POPUP_BORDER)),
        ),
        popup,
    );
}
