use super::{footer, header, home, job_form, log, Frame};
use crate::state::{State, View};
use ratatui::layout::{Constraint, Direction, Layout};

const LOG_HEIGHT: u16 = 8;

/// Render all widgets according to state.
///
pub fn all(frame: &mut Frame, state: &mut State) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),          // Header
            Constraint::Min(6),             // Main view
            Constraint::Length(LOG_HEIGHT), // Log
            Constraint::Length(1),          // Footer
        ])
        .split(frame.size());

    header(frame, rows[0], state);
    match *state.current_view() {
        View::Home => home(frame, rows[1], state),
        View::PostJob | View::EditJob => job_form(frame, rows[1], state),
    }
    log(frame, rows[2], state);
    footer(frame, rows[3], state);
}
