use crate::api::AnimalType;
use crate::ui::app::{App, Focus};
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind,
};

/// Rows moved per wheel notch or arrow press in the grid.
const SCROLL_STEP: i32 = 3;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') || is_ctrl_char(key, 'q') {
        app.request_quit();
        return;
    }

    match key.code {
        KeyCode::Tab => {
            app.focus_next();
            return;
        }
        KeyCode::BackTab => {
            app.focus_prev();
            return;
        }
        _ => {}
    }

    match app.focus() {
        Focus::Search => handle_search_key(app, key),
        focus => {
            if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
                app.request_quit();
                return;
            }
            match focus {
                Focus::AnimalType => handle_animal_key(app, key),
                Focus::Breed => handle_breed_key(app, key),
                _ => handle_grid_key(app, key),
            }
        }
    }
}

fn handle_animal_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Left => {
            app.select_animal_type(AnimalType::Cat);
        }
        KeyCode::Right => {
            app.select_animal_type(AnimalType::Dog);
        }
        KeyCode::Enter | KeyCode::Char(' ') => app.toggle_animal_type(),
        _ => {}
    }
}

fn handle_breed_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up => app.move_breed_selection(-1),
        KeyCode::Down => app.move_breed_selection(1),
        _ => {}
    }
}

fn handle_search_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.set_focus(Focus::Grid),
        KeyCode::Enter => app.submit_search(),
        KeyCode::Backspace => app.pop_search_char(),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.push_search_char(ch);
        }
        _ => {}
    }
}

fn handle_grid_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up => app.scroll_by(-SCROLL_STEP),
        KeyCode::Down => app.scroll_by(SCROLL_STEP),
        KeyCode::PageUp => app.scroll_page(-1),
        KeyCode::PageDown => app.scroll_page(1),
        KeyCode::Home => app.scroll_to_top(),
        KeyCode::End => app.scroll_to_bottom(),
        _ => {}
    }
}

pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::ScrollUp => app.scroll_by(-SCROLL_STEP),
        MouseEventKind::ScrollDown => app.scroll_by(SCROLL_STEP),
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
    use crate::config::GalleryConfig;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app() -> App {
        App::new(&GalleryConfig::default(), AnimalType::Cat)
    }

    #[test]
    fn ctrl_c_quits_from_search() {
        let mut app = app();
        app.set_focus(Focus::Search);
        handle_key(&mut app, KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit());
    }

    #[test]
    fn q_is_text_while_searching() {
        let mut app = app();
        app.set_focus(Focus::Search);
        handle_key(&mut app, press(KeyCode::Char('q')));
        assert!(!app.should_quit());
        assert_eq!(app.gallery().search_term(), "q");

        handle_key(&mut app, press(KeyCode::Esc));
        assert_eq!(app.focus(), Focus::Grid);
        handle_key(&mut app, press(KeyCode::Char('q')));
        assert!(app.should_quit());
    }

    #[test]
    fn tab_cycles_focus() {
        let mut app = app();
        handle_key(&mut app, press(KeyCode::Tab));
        assert_eq!(app.focus(), Focus::AnimalType);
        handle_key(&mut app, press(KeyCode::BackTab));
        assert_eq!(app.focus(), Focus::Grid);
    }

    #[test]
    fn animal_control_switches_type() {
        let mut app = app();
        app.set_focus(Focus::AnimalType);
        handle_key(&mut app, press(KeyCode::Right));
        assert_eq!(app.gallery().animal_type, AnimalType::Dog);
        handle_key(&mut app, press(KeyCode::Enter));
        assert_eq!(app.gallery().animal_type, AnimalType::Cat);
    }

    #[test]
    fn release_events_are_ignored() {
        let mut app = app();
        let mut key = press(KeyCode::Char('q'));
        key.kind = KeyEventKind::Release;
        handle_key(&mut app, key);
        assert!(!app.should_quit());
    }
}
