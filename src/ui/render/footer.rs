use super::Frame;
use crate::state::{FormMode, State, View};
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

/// Return the key hints for the current view.
///
fn hints(state: &State) -> Vec<(String, &'static str)> {
    match state.current_view() {
        View::Home => {
            let mut hints = vec![("j/k".to_string(), "select")];
            if state.session().is_authenticated() {
                hints.push(("n".to_string(), "post job"));
                hints.push(("e".to_string(), "edit job"));
                hints.push(("o".to_string(), "log out"));
            } else {
                hints.push(("l".to_string(), "log in"));
            }
            hints.push(("q".to_string(), "quit"));
            hints
        }
        View::PostJob | View::EditJob => {
            let submit = state
                .get_job_form()
                .map(|form| form.mode().submit_label())
                .unwrap_or(FormMode::Create.submit_label());
            let mut hints = vec![
                ("tab".to_string(), "next field"),
                ("enter".to_string(), submit),
                ("ctrl-r".to_string(), "reset"),
            ];
            if *state.current_view() == View::EditJob {
                hints.push(("pgup/pgdn".to_string(), "switch job"));
            }
            hints.push(("esc".to_string(), "back"));
            hints
        }
    }
}

/// Render footer with key hints for the current view.
///
pub fn footer(frame: &mut Frame, size: Rect, state: &mut State) {
    let theme = state.get_theme();
    let mut spans = vec![];
    for (key, action) in hints(state) {
        spans.push(Span::styled(
            format!(" {} ", key),
            styling::active_list_item_style(theme),
        ));
        spans.push(Span::styled(
            format!(" {}  ", action),
            styling::normal_text_style(theme),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), size);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::SessionAction;

    #[test]
    fn home_hints_follow_session() {
        let mut state = State::default();
        let actions: Vec<_> = hints(&state).into_iter().map(|(_, a)| a).collect();
        assert!(actions.contains(&"log in"));
        assert!(!actions.contains(&"post job"));

        state.dispatch(SessionAction::LoginSuccess);
        let actions: Vec<_> = hints(&state).into_iter().map(|(_, a)| a).collect();
        assert!(actions.contains(&"post job"));
        assert!(actions.contains(&"log out"));
    }

    #[test]
    fn form_hints_use_submit_label() {
        let mut state = State::default();
        state.dispatch(SessionAction::LoginSuccess);
        state.open_post_job().unwrap();
        let actions: Vec<_> = hints(&state).into_iter().map(|(_, a)| a).collect();
        assert!(actions.contains(&"Create Job"));
        assert!(!actions.contains(&"switch job"));
    }
}
