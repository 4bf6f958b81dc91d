use crate::state::{State, View};
use anyhow::Result;
use crossterm::{
    event,
    event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
};
use log::*;
use std::{sync::mpsc, thread, time::Duration};

/// Specify terminal event poll rate in milliseconds.
///
const TICK_RATE_IN_MS: u64 = 60;

/// Specify different terminal event types.
///
#[derive(Debug)]
pub enum Event<I> {
    Input(I),
    Tick,
}

/// Specify struct for managing terminal events channel.
///
pub struct Handler {
    rx: mpsc::Receiver<Event<KeyEvent>>,
    _tx: mpsc::Sender<Event<KeyEvent>>,
}

impl Handler {
    /// Return new instance after spawning new input polling thread.
    ///
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        let tx_clone = tx.clone();
        thread::spawn(move || loop {
            let tick_rate = Duration::from_millis(TICK_RATE_IN_MS);
            match event::poll(tick_rate) {
                Ok(true) => {
                    if let Ok(CrosstermEvent::Key(key)) = event::read() {
                        if key.kind == KeyEventKind::Press
                            && tx_clone.send(Event::Input(key)).is_err()
                        {
                            break;
                        }
                    }
                }
                Ok(false) => (),
                Err(e) => {
                    error!("Failed to poll terminal events: {}", e);
                    break;
                }
            }
            if tx_clone.send(Event::Tick).is_err() {
                break;
            }
        });
        Handler { rx, _tx: tx }
    }

    /// Receive next terminal event and handle it accordingly. Returns result
    /// with value true if should continue or false if exit was requested.
    ///
    pub fn handle_next(&self, state: &mut State) -> Result<bool> {
        match self.rx.recv()? {
            Event::Input(event) => Ok(handle_key(state, event)),
            Event::Tick => {
                if state.is_session_pending() {
                    state.advance_spinner_index();
                }
                Ok(true)
            }
        }
    }
}

/// Apply a key press to the state. Returns false if exit was requested.
///
pub fn handle_key(state: &mut State, event: KeyEvent) -> bool {
    if event.code == KeyCode::Char('c') && event.modifiers == KeyModifiers::CONTROL {
        debug!("Processing exit terminal event '{:?}'...", event);
        return false;
    }
    if state.current_view().is_form() {
        handle_form_key(state, event);
        true
    } else {
        handle_home_key(state, event)
    }
}

fn handle_form_key(state: &mut State, event: KeyEvent) {
    match event.code {
        KeyCode::Esc => {
            state.close_job_form();
        }
        KeyCode::Enter => {
            if state.submit_job_form() && *state.current_view() == View::PostJob {
                info!("Ready for the next job.");
            }
        }
        KeyCode::Char('r') if event.modifiers == KeyModifiers::CONTROL => {
            state.reset_job_form();
        }
        KeyCode::PageDown => {
            state.next_edit_target();
        }
        KeyCode::PageUp => {
            state.previous_edit_target();
        }
        code => {
            let form = match state.get_job_form_mut() {
                Some(form) => form,
                None => return,
            };
            match code {
                KeyCode::Tab | KeyCode::Down => {
                    form.focus_next();
                }
                KeyCode::BackTab | KeyCode::Up => {
                    form.focus_previous();
                }
                KeyCode::Backspace => {
                    form.pop_char();
                }
                KeyCode::Char(c)
                    if event.modifiers == KeyModifiers::NONE
                        || event.modifiers == KeyModifiers::SHIFT =>
                {
                    form.push_char(c);
                }
                _ => (),
            }
        }
    }
}

fn handle_home_key(state: &mut State, event: KeyEvent) -> bool {
    match event.code {
        KeyCode::Char('q') => {
            debug!("Processing exit terminal event '{:?}'...", event);
            return false;
        }
        KeyCode::Char('j') | KeyCode::Down => {
            state.next_job_index();
        }
        KeyCode::Char('k') | KeyCode::Up => {
            state.previous_job_index();
        }
        KeyCode::Char('n') => {
            if let Err(e) = state.open_post_job() {
                warn!("{}. Press 'l' to log in.", e);
            }
        }
        KeyCode::Char('e') => {
            if let Err(e) = state.open_edit_job() {
                warn!("{}. Press 'l' to log in.", e);
            }
        }
        KeyCode::Char('l') => {
            state.request_login();
        }
        KeyCode::Char('o') => {
            state.request_log_out();
        }
        _ => (),
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{JobBoard, JobField, JobRecord, SessionAction, Status};
    use fake::{Fake, Faker};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(state: &mut State, text: &str) {
        for c in text.chars() {
            assert!(handle_key(state, key(KeyCode::Char(c))));
        }
    }

    fn logged_in() -> State {
        let mut state = State::default();
        state.dispatch(SessionAction::Login("recruiter".to_string()));
        state.dispatch(SessionAction::LoginSuccess);
        state
    }

    #[test]
    fn ctrl_c_exits_from_any_view() {
        let mut state = logged_in();
        handle_key(&mut state, key(KeyCode::Char('n')));
        assert!(!handle_key(
            &mut state,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)
        ));
    }

    #[test]
    fn q_exits_from_home_but_types_in_form() {
        let mut state = logged_in();
        handle_key(&mut state, key(KeyCode::Char('n')));
        assert!(handle_key(&mut state, key(KeyCode::Char('q'))));
        assert_eq!(state.get_job_form().unwrap().record().title, "q");
        handle_key(&mut state, key(KeyCode::Esc));
        assert!(!handle_key(&mut state, key(KeyCode::Char('q'))));
    }

    #[test]
    fn login_key_dispatches_login() {
        let mut state = State::default();
        handle_key(&mut state, key(KeyCode::Char('l')));
        assert_eq!(state.session().status(), Status::Running);
        assert_eq!(state.session().role(), Some("recruiter"));
    }

    #[test]
    fn post_job_blocked_when_logged_out() {
        let mut state = State::default();
        handle_key(&mut state, key(KeyCode::Char('n')));
        assert_eq!(*state.current_view(), View::Home);
    }

    #[test]
    fn typing_a_job_and_submitting() {
        let mut state = logged_in();
        handle_key(&mut state, key(KeyCode::Char('n')));
        let values = [
            "Engineer",
            "Build things",
            "Remote",
            "100k",
            "Rust",
            "Engineering",
            "2000-01-01",
            "2999-01-01",
        ];
        for value in values {
            type_text(&mut state, value);
            handle_key(&mut state, key(KeyCode::Tab));
        }
        handle_key(&mut state, key(KeyCode::Enter));
        assert_eq!(state.get_board().len(), 1);
        assert_eq!(state.get_board().get(0).unwrap().title, "Engineer");
        assert_eq!(*state.current_view(), View::PostJob);
    }

    #[test]
    fn invalid_submit_shows_errors_and_backspace_clears_one() {
        let mut state = logged_in();
        handle_key(&mut state, key(KeyCode::Char('n')));
        handle_key(&mut state, key(KeyCode::Enter));
        let errors = state.get_job_form().unwrap().errors().len();
        assert_eq!(errors, JobField::ALL.len());
        handle_key(&mut state, key(KeyCode::Backspace));
        let form = state.get_job_form().unwrap();
        assert_eq!(form.error(JobField::Title), None);
        assert_eq!(form.errors().len(), errors - 1);
    }

    #[test]
    fn ctrl_r_resets_form() {
        let mut state = logged_in();
        handle_key(&mut state, key(KeyCode::Char('n')));
        type_text(&mut state, "Draft");
        handle_key(
            &mut state,
            KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL),
        );
        assert_eq!(*state.get_job_form().unwrap().record(), JobRecord::default());
    }

    #[test]
    fn back_tab_moves_focus_backwards() {
        let mut state = logged_in();
        handle_key(&mut state, key(KeyCode::Char('n')));
        handle_key(&mut state, KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT));
        assert_eq!(state.get_job_form().unwrap().focus(), JobField::LastDate);
    }

    #[test]
    fn page_down_switches_edit_target() {
        let mut first: JobRecord = Faker.fake();
        first.id = Some("1".to_string());
        let mut second: JobRecord = Faker.fake();
        second.id = Some("2".to_string());
        let (tx, _rx) = std::sync::mpsc::channel();
        let mut state = State::new(
            tx,
            JobBoard::new(vec![first, second.clone()]),
            "recruiter".to_string(),
            crate::ui::Theme::default(),
        );
        state.dispatch(SessionAction::LoginSuccess);
        handle_key(&mut state, key(KeyCode::Char('e')));
        assert_eq!(*state.current_view(), View::EditJob);
        handle_key(&mut state, key(KeyCode::PageDown));
        assert_eq!(*state.get_job_form().unwrap().record(), second);
    }
}
