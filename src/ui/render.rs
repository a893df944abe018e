use crate::projection::{Card, Cell as ViewCell, TableView, Tone, ViewModel};
use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::team_detail::render_team_detail;
use crate::ui::theme::{tone_style, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, OCTO_BLUE, STATUS_ERROR};
use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{
    Block, Borders, Cell, Clear, List, ListItem, ListState, Paragraph, Row, Table, TableState,
    Wrap,
};
use ratatui::Frame;

const SPINNER: [&str; 8] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧"];

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let (header, body, footer) = layout_regions(frame.area());
    let view = app.view();

    frame.render_widget(Header::new(view.kind(), app.origin()).widget(), header);
    frame.render_widget(Clear, body);

    let kind = view.kind();
    let block = Block::default()
        .title(Span::styled(
            format!(" {} {} ", kind.icon(), kind.title()),
            Style::default().fg(OCTO_BLUE).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));

    match app.view_model() {
        ViewModel::Loading { message } => {
            let spinner = SPINNER[app.spinner_frame() % SPINNER.len()];
            let text = Line::from(vec![
                Span::styled(format!("{spinner} "), tone_style(Tone::Accent)),
                Span::styled(message, tone_style(Tone::Muted)),
            ]);
            render_centered(frame, body, block, Text::from(text));
        }
        ViewModel::Failed { title, message } => {
            let text = Text::from(vec![
                Line::from(Span::styled(
                    title,
                    Style::default().fg(STATUS_ERROR).add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                Line::from(Span::styled(message, tone_style(Tone::Plain))),
                Line::from(""),
                Line::from(Span::styled("Press r to retry", tone_style(Tone::Muted))),
            ]);
            let block = block.border_style(Style::default().fg(STATUS_ERROR));
            render_centered(frame, body, block, text);
        }
        ViewModel::Empty { heading, detail } => {
            let text = Text::from(vec![
                Line::from(Span::styled(heading, tone_style(Tone::Strong))),
                Line::from(Span::styled(detail, tone_style(Tone::Muted))),
            ]);
            render_centered(frame, body, block, text);
        }
        ViewModel::Table(table) => render_table(frame, body, block, &table, view.selected),
        ViewModel::Cards(cards) => render_cards(frame, body, block, &cards, view.selected),
    }

    let popup_open = app.team_detail().is_visible();
    frame.render_widget(Footer::new(popup_open).widget(footer), footer);

    render_team_detail(frame, body, app.team_detail(), app.date_style());
}

fn render_centered(frame: &mut Frame<'_>, area: Rect, block: Block<'_>, text: Text<'_>) {
    let inner = block.inner(area);
    frame.render_widget(block, area);
    let height = (text.lines.len() as u16).min(inner.height);
    let top = Rect {
        y: inner.y + (inner.height - height) / 2,
        height,
        ..inner
    };
    frame.render_widget(
        Paragraph::new(text)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        top,
    );
}

fn styled_cell(cell: &ViewCell) -> Cell<'static> {
    Cell::from(Span::styled(cell.text.clone(), tone_style(cell.tone)))
}

/// Each column is as wide as its widest cell; the last one takes the rest.
fn column_widths(table: &TableView) -> Vec<Constraint> {
    let columns = table.headers.len();
    (0..columns)
        .map(|column| {
            let widest = table
                .rows
                .iter()
                .filter_map(|row| row.get(column))
                .map(|cell| Span::raw(cell.text.as_str()).width())
                .chain(std::iter::once(table.headers[column].len()))
                .max()
                .unwrap_or(0);
            if column + 1 == columns {
                Constraint::Min(widest as u16)
            } else {
                Constraint::Length(widest as u16)
            }
        })
        .collect()
}

fn render_table(
    frame: &mut Frame<'_>,
    area: Rect,
    block: Block<'_>,
    table: &TableView,
    selected: usize,
) {
    let block = match &table.summary {
        Some(summary) => block.title_top(
            Line::from(Span::styled(format!(" {summary} "), tone_style(Tone::Accent)))
                .right_aligned(),
        ),
        None => block,
    };

    let header = Row::new(
        table
            .headers
            .iter()
            .map(|title| Cell::from(Span::styled(*title, tone_style(Tone::Strong)))),
    )
    .bottom_margin(1);
    let rows = table
        .rows
        .iter()
        .map(|row| Row::new(row.iter().map(styled_cell)));

    let widget = Table::new(rows, column_widths(table))
        .header(header)
        .block(block)
        .column_spacing(2)
        .row_highlight_style(Style::default().bg(ACTIVE_HIGHLIGHT))
        .highlight_symbol("▶ ");

    let mut state = TableState::default().with_selected(Some(selected));
    frame.render_stateful_widget(widget, area, &mut state);
}

fn card_item(card: &Card) -> ListItem<'static> {
    let mut lines = vec![Line::from(Span::styled(
        card.title.clone(),
        tone_style(Tone::Strong),
    ))];
    if !card.body.is_empty() {
        lines.push(Line::from(Span::styled(
            card.body.clone(),
            tone_style(Tone::Muted),
        )));
    }
    let mut facts = Vec::new();
    for fact in &card.facts {
        facts.push(Span::styled(format!("{}: ", fact.label), tone_style(Tone::Muted)));
        facts.push(Span::styled(fact.value.text.clone(), tone_style(fact.value.tone)));
        facts.push(Span::raw("   "));
    }
    lines.push(Line::from(facts));
    lines.push(Line::from(""));
    ListItem::new(Text::from(lines))
}

fn render_cards(
    frame: &mut Frame<'_>,
    area: Rect,
    block: Block<'_>,
    cards: &[Card],
    selected: usize,
) {
    let widget = List::new(cards.iter().map(card_item))
        .block(block)
        .highlight_style(Style::default().bg(ACTIVE_HIGHLIGHT))
        .highlight_symbol("▶ ");

    let mut state = ListState::default().with_selected(Some(selected));
    frame.render_stateful_widget(widget, area, &mut state);
}
