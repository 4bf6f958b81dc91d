use super::Frame;
use crate::state::{JobField, JobRecord, State};
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};

/// Render the home view: posted jobs and the selected job's details.
///
pub fn home(frame: &mut Frame, size: Rect, state: &mut State) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(size);

    jobs_list(frame, columns[0], state);
    job_details(frame, columns[1], state);
}

fn jobs_list(frame: &mut Frame, size: Rect, state: &mut State) {
    let theme = state.get_theme().clone();
    let title = format!("Jobs ({})", state.get_board().len());
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(title, styling::active_block_title_style()))
        .border_style(styling::active_block_border_style(&theme));

    if state.get_board().is_empty() {
        let hint = if state.session().is_authenticated() {
            "No jobs posted yet. Press n to post one."
        } else {
            "No jobs posted yet. Press l to log in."
        };
        let empty = Paragraph::new(Span::styled(hint, styling::muted_text_style(&theme)))
            .block(block)
            .wrap(Wrap { trim: true });
        frame.render_widget(empty, size);
        return;
    }

    let items: Vec<ListItem> = state
        .get_board()
        .jobs()
        .iter()
        .map(|job| {
            ListItem::new(Line::from(vec![
                Span::styled(job.title.clone(), styling::normal_text_style(&theme)),
                Span::styled(
                    format!("  {}", job.location),
                    styling::muted_text_style(&theme),
                ),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(styling::active_list_item_style(&theme));
    frame.render_stateful_widget(list, size, state.get_jobs_list_state());
}

fn job_details(frame: &mut Frame, size: Rect, state: &mut State) {
    let theme = state.get_theme();
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Details")
        .border_style(styling::normal_block_border_style(theme));

    let lines: Vec<Line> = match state.selected_job() {
        Some(job) => detail_lines(job)
            .into_iter()
            .map(|(label, value)| {
                Line::from(vec![
                    Span::styled(format!("{}: ", label), styling::muted_text_style(theme)),
                    Span::styled(value, styling::normal_text_style(theme)),
                ])
            })
            .collect(),
        None => vec![Line::from(Span::styled(
            "Select a job to see its details.",
            styling::muted_text_style(theme),
        ))],
    };

    let details = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
    frame.render_widget(details, size);
}

fn detail_lines(job: &JobRecord) -> Vec<(&'static str, String)> {
    JobField::ALL
        .iter()
        .map(|field| (field.label(), job.get(*field).to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_lines_follow_form_order() {
        let job = JobRecord {
            title: "QA Engineer".to_string(),
            last_date: "2024-05-01".to_string(),
            ..JobRecord::default()
        };
        let lines = detail_lines(&job);
        assert_eq!(lines.len(), JobField::ALL.len());
        assert_eq!(lines[0], ("Job Title", "QA Engineer".to_string()));
        assert_eq!(lines[7], ("Last Date", "2024-05-01".to_string()));
    }
}
