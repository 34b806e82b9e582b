use crate::routes::Route;
use crate::ui::app::App;
use crate::ui::form::FormIntent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') {
        app.request_quit();
        return;
    }

    if app.route() == Route::Dashboard {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
            app.request_quit();
        }
        return;
    }

    if is_ctrl_char(key, 't') {
        app.toggle_mode();
        return;
    }

    match key.code {
        KeyCode::Esc => app.request_quit(),
        KeyCode::Enter => app.submit(),
        KeyCode::Tab | KeyCode::Down => app.dispatch_form(FormIntent::FocusNext),
        KeyCode::BackTab | KeyCode::Up => app.dispatch_form(FormIntent::FocusPrev),
        KeyCode::Backspace => app.dispatch_form(FormIntent::DeleteChar),
        KeyCode::Char(ch) => {
            if key.modifiers.contains(KeyModifiers::CONTROL)
                || key.modifiers.contains(KeyModifiers::ALT)
            {
                return;
            }
            app.dispatch_form(FormIntent::TypeChar(ch));
        }
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, ConfigStore};
    use crate::ui::form::FormField;
    use crossterm::event::KeyEventState;
    use std::path::PathBuf;

    fn make_app() -> App {
        let config = ConfigStore::new(Config::default(), PathBuf::from("/tmp/test.toml"));
        App::new(config, Route::Login)
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }
    }

    fn ctrl(ch: char) -> KeyEvent {
        KeyEvent {
            code: KeyCode::Char(ch),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }
    }

    #[test]
    fn typing_edits_the_focused_field() {
        let mut app = make_app();
        for ch in "a@b.co".chars() {
            handle_key(&mut app, press(KeyCode::Char(ch)));
        }
        assert_eq!(app.form().email, "a@b.co");
    }

    #[test]
    fn tab_moves_focus_and_typing_follows() {
        let mut app = make_app();
        handle_key(&mut app, press(KeyCode::Tab));
        assert_eq!(app.form().focused, FormField::Password);
        handle_key(&mut app, press(KeyCode::Char('x')));
        assert_eq!(app.form().password, "x");
        assert!(app.form().email.is_empty());
    }

    #[test]
    fn backspace_removes_from_focused_field() {
        let mut app = make_app();
        handle_key(&mut app, press(KeyCode::Char('a')));
        handle_key(&mut app, press(KeyCode::Char('b')));
        handle_key(&mut app, press(KeyCode::Backspace));
        assert_eq!(app.form().email, "a");
    }

    #[test]
    fn ctrl_t_switches_mode() {
        let mut app = make_app();
        handle_key(&mut app, ctrl('t'));
        assert_eq!(app.route(), Route::Register);
    }

    #[test]
    fn ctrl_q_quits() {
        let mut app = make_app();
        handle_key(&mut app, ctrl('q'));
        assert!(app.should_quit());
    }

    #[test]
    fn ctrl_chars_do_not_edit_fields() {
        let mut app = make_app();
        handle_key(&mut app, ctrl('a'));
        assert!(app.form().email.is_empty());
    }

    #[test]
    fn release_events_are_ignored() {
        let mut app = make_app();
        let key = KeyEvent {
            code: KeyCode::Char('a'),
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Release,
            state: KeyEventState::empty(),
        };
        handle_key(&mut app, key);
        assert!(app.form().email.is_empty());
    }
}
