use super::Frame;
use crate::state::{FormPhase, JobField, JobForm, State};
use crate::ui::theme::Theme;
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{
        block::{Position, Title},
        Block, Borders, Paragraph,
    },
};

const FIELD_HEIGHT: u16 = 3;
const CURSOR: &str = "▏";

/// Render the job form for posting or editing.
///
pub fn job_form(frame: &mut Frame, size: Rect, state: &mut State) {
    let theme = state.get_theme();
    let form = match state.get_job_form() {
        Some(form) => form,
        None => return,
    };

    let mut block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(
            form.mode().title(),
            styling::active_block_title_style(),
        ))
        .border_style(styling::active_block_border_style(theme));
    if form.phase() == FormPhase::Invalid {
        block = block.title(
            Title::from(Span::styled(
                format!(" {} field(s) need attention ", form.errors().len()),
                styling::error_text_style(theme),
            ))
            .alignment(Alignment::Right),
        );
    }
    let inner = block.inner(size);
    frame.render_widget(block, size);

    let fields = visible_fields(form.focus(), inner.height);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            fields
                .iter()
                .map(|_| Constraint::Length(FIELD_HEIGHT))
                .chain(std::iter::once(Constraint::Min(0)))
                .collect::<Vec<_>>(),
        )
        .split(inner);

    for (row, field) in rows.iter().zip(fields) {
        frame.render_widget(field_widget(form, field, theme), *row);
    }
}

/// Return the fields that fit in the given height, keeping the focused field
/// visible.
///
fn visible_fields(focus: JobField, height: u16) -> Vec<JobField> {
    let capacity = ((height / FIELD_HEIGHT) as usize).max(1);
    let focus_index = JobField::ALL
        .iter()
        .position(|field| *field == focus)
        .unwrap_or(0);
    let start = (focus_index + 1).saturating_sub(capacity);
    JobField::ALL
        .iter()
        .copied()
        .skip(start)
        .take(capacity)
        .collect()
}

fn field_widget<'a>(form: &'a JobForm, field: JobField, theme: &Theme) -> Paragraph<'a> {
    let focused = form.focus() == field;
    let error = form.error(field);

    let border_style = match (error, focused) {
        (Some(_), _) => styling::invalid_block_border_style(theme),
        (None, true) => styling::active_block_border_style(theme),
        (None, false) => styling::normal_block_border_style(theme),
    };
    let mut block = Block::default()
        .borders(Borders::ALL)
        .title(field.label())
        .border_style(border_style);
    if let Some(message) = error {
        block = block.title(
            Title::from(Span::styled(
                message.to_string(),
                styling::error_text_style(theme),
            ))
            .position(Position::Bottom),
        );
    }

    let value = form.record().get(field);
    let mut spans = if value.is_empty() && !focused {
        vec![Span::styled(
            field.placeholder(),
            styling::muted_text_style(theme),
        )]
    } else {
        vec![Span::styled(value, styling::normal_text_style(theme))]
    };
    if focused {
        spans.push(Span::styled(CURSOR, styling::normal_text_style(theme)));
    }

    Paragraph::new(Line::from(spans)).block(block)
}
