use super::Frame;
use crate::state::{State, Status};
use crate::ui::widgets::{spinner, styling};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

const BANNER: &str = "Job Board";

/// Render header with the banner and the session status.
///
pub fn header(frame: &mut Frame, size: Rect, state: &mut State) {
    let theme = state.get_theme();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styling::normal_block_border_style(theme));
    let inner = block.inner(size);
    frame.render_widget(block, size);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(inner);

    let banner = Paragraph::new(Line::from(Span::styled(
        BANNER,
        styling::banner_style(theme),
    )));
    frame.render_widget(banner, columns[0]);

    let session = state.session();
    let status_style = match session.status() {
        Status::Idle => styling::muted_text_style(theme),
        Status::Running => styling::warning_text_style(theme),
        Status::Ready => styling::success_text_style(theme),
    };
    let mut spans = vec![];
    if session.status() == Status::Running {
        spans.push(Span::styled(
            format!("{} ", spinner::frame(*state.get_spinner_index())),
            status_style,
        ));
    }
    spans.push(Span::styled(session.status().to_string(), status_style));
    spans.push(Span::styled(" | ", styling::muted_text_style(theme)));
    let account = match (session.is_authenticated(), session.role()) {
        (true, Some(role)) => format!("Signed in as {}", role),
        (true, None) => "Signed in".to_string(),
        (false, _) => "Signed out".to_string(),
    };
    spans.push(Span::styled(account, styling::normal_text_style(theme)));

    let status = Paragraph::new(Line::from(spans)).alignment(Alignment::Right);
    frame.render_widget(status, columns[1]);
}
