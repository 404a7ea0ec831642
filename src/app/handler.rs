use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::*;
use crate::form::Submission;
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => handle_terminal(state, cevent),
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) => handle_key(state, key),
        CEvent::Resize(_, _) => {
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    if key.kind != KeyEventKind::Press {
        return vec![];
    }
    state.dirty = true;

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('c') if ctrl => vec![Action::Quit],
        KeyCode::Esc => vec![Action::Quit],
        KeyCode::Enter => submit(state),
        KeyCode::Tab | KeyCode::Down => {
            state.form.focus_next();
            vec![]
        }
        KeyCode::BackTab | KeyCode::Up => {
            state.form.focus_prev();
            vec![]
        }
        KeyCode::Char('w') if ctrl => {
            state.form.focused_mut().delete_word_back();
            vec![]
        }
        KeyCode::Char('u') if ctrl => {
            state.form.focused_mut().clear();
            vec![]
        }
        KeyCode::Char(c) if !ctrl => {
            state.form.focused_mut().insert_char(c);
            vec![]
        }
        KeyCode::Backspace => {
            state.form.focused_mut().delete_back();
            vec![]
        }
        KeyCode::Delete => {
            state.form.focused_mut().delete_forward();
            vec![]
        }
        KeyCode::Left => {
            state.form.focused_mut().move_left();
            vec![]
        }
        KeyCode::Right => {
            state.form.focused_mut().move_right();
            vec![]
        }
        KeyCode::Home => {
            state.form.focused_mut().move_home();
            vec![]
        }
        KeyCode::End => {
            state.form.focused_mut().move_end();
            vec![]
        }
        _ => vec![],
    }
}

/// Enter submits the form. Its default action, moving to the next field,
/// only runs when no listener cancelled it.
fn submit(state: &mut AppState) -> Vec<Action> {
    let (event, submission) = state.dispatch_submit();
    if !event.default_prevented() {
        state.form.focus_next();
    }

    match submission {
        Some(Submission::Rejected(_)) if state.config.ui.bell_on_error => vec![Action::Bell],
        _ => vec![],
    }
}
