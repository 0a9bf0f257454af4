use crate::ui::app::{App, Route};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') {
        app.request_quit();
        return;
    }

    // Alt+1..9: pinned profile shortcuts from the navigation header
    if key.modifiers.contains(KeyModifiers::ALT) {
        if let KeyCode::Char(ch) = key.code {
            if let Some(digit) = ch.to_digit(10) {
                if digit > 0 {
                    app.open_pinned(digit as usize - 1);
                }
            }
            return;
        }
    }

    if matches!(key.code, KeyCode::Esc) {
        app.navigate_back_or_quit();
        return;
    }

    match app.current_route().clone() {
        Route::Search => match key.code {
            KeyCode::Enter => app.submit_search(),
            KeyCode::Backspace => app.search_backspace(),
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                app.search_input(ch);
            }
            _ => {}
        },
        Route::Profile { .. } => match key.code {
            // The error panel's "go back" affordance; also works from
            // a loaded profile.
            KeyCode::Enter | KeyCode::Backspace => {
                app.navigate_back_or_quit();
            }
            KeyCode::Char('/') => app.navigate(Route::Search),
            _ => {}
        },
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
