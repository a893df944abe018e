use crate::resource::ResourceKind;
use crate::ui::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') || is_ctrl_char(key, 'q') {
        app.request_quit();
        return;
    }

    if app.team_detail().is_visible() {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => app.close_team_detail(),
            KeyCode::Char('q') => app.request_quit(),
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.request_quit(),
        KeyCode::Char('r') => app.reload(),
        KeyCode::Char(ch) if ch.is_ascii_digit() => {
            let number = ch.to_digit(10).unwrap_or(0) as usize;
            if let Some(kind) = ResourceKind::from_number(number) {
                app.switch_to(kind);
            }
        }
        KeyCode::Tab | KeyCode::Right => app.next_view(),
        KeyCode::BackTab | KeyCode::Left => app.previous_view(),
        KeyCode::Up | KeyCode::Char('k') => app.move_selection(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection(1),
        KeyCode::Enter => app.open_team_detail(),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
