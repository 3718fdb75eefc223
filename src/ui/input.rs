use crate::brewery::SortKey;
use crate::ui::app::App;
use crate::ui::listing::ListingIntent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || key.code == KeyCode::Esc {
        app.request_quit();
        return;
    }

    if let Some(intent) = key_to_intent(key) {
        app.dispatch(intent);
    }
}

/// Map a key press to a listing intent. Quit keys are handled by the caller.
pub fn key_to_intent(key: KeyEvent) -> Option<ListingIntent> {
    if is_ctrl_char(key, 'n') {
        return Some(ListingIntent::SortColumn(SortKey::Name));
    }
    if is_ctrl_char(key, 's') {
        return Some(ListingIntent::SortColumn(SortKey::State));
    }
    if is_ctrl_char(key, 'u') {
        return Some(ListingIntent::SearchChanged {
            term: String::new(),
        });
    }

    match key.code {
        KeyCode::Left | KeyCode::PageUp => Some(ListingIntent::PreviousPage),
        KeyCode::Right | KeyCode::PageDown => Some(ListingIntent::NextPage),
        KeyCode::Home => Some(ListingIntent::FirstPage),
        KeyCode::End => Some(ListingIntent::LastPage),
        KeyCode::Backspace => Some(ListingIntent::SearchBackspace),
        KeyCode::Char(ch)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            Some(ListingIntent::SearchAppend(ch))
        }
        _ => None,
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}
