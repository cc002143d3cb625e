//! Contact form rendering as document lines
//!
//! The form lives inside the scrolled landing document, so this module
//! produces plain lines plus the row metadata the app needs for focus
//! jumps and click handling.

use crate::platform::{PASTE_SHORTCUT, SUBMIT_SHORTCUT};
use crate::state::{
    AppState, BannerKind, ContactField, Focus, FormTarget, Validity, FIELD_CONSENT, FIELD_COUNT,
    FIELD_MESSAGE, FIELD_ROLE, ROLE_OPTIONS,
};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// Composed form lines plus their row metadata
pub struct FormLines {
    pub lines: Vec<Line<'static>>,
    /// Document row -> focusable control, for click mapping
    pub targets: Vec<(u16, FormTarget)>,
    /// Document row of the page-level banner, when shown
    pub banner_row: Option<u16>,
}

/// Cursor glyph shown in the focused field
const CURSOR: &str = "▌";

fn label_style(is_focused: bool) -> Style {
    if is_focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

/// Value styling is derived from focus and the last validation run only,
/// so the visual state always agrees with the recorded validity.
fn value_style(is_focused: bool, validity: &Validity) -> Style {
    if is_focused {
        return Style::default().fg(Color::Cyan);
    }
    match validity {
        Validity::Invalid(_) => Style::default().fg(Color::Red),
        Validity::Valid => Style::default().fg(Color::Green),
        Validity::Unvalidated => Style::default(),
    }
}

fn error_line(message: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        format!("  ✖ {message}"),
        Style::default().fg(Color::Red),
    ))
}

/// Build the lines for the contact form starting at `base_row`
pub fn form_lines(state: &AppState, base_row: u16) -> FormLines {
    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut targets: Vec<(u16, FormTarget)> = Vec::new();
    let mut banner_row = None;

    let focused = match state.focus {
        Focus::Form(target) => Some(target),
        _ => None,
    };

    let push_target = |row_of: &Vec<Line<'static>>,
                       targets: &mut Vec<(u16, FormTarget)>,
                       target: FormTarget| {
        targets.push((base_row + row_of.len() as u16, target));
    };

    for index in 0..FIELD_COUNT {
        let Some(field) = state.form.field(index) else {
            continue;
        };
        let target = FormTarget::Field(index);
        let is_focused = focused == Some(target);

        match index {
            FIELD_ROLE => {
                push_target(&lines, &mut targets, target);
                lines.push(Line::from(Span::styled(
                    format!("{} *", field.label),
                    label_style(is_focused),
                )));
                let choice = field
                    .selected()
                    .and_then(|i| ROLE_OPTIONS.get(i))
                    .map(|o| o.label)
                    .unwrap_or("choose an option");
                push_target(&lines, &mut targets, target);
                lines.push(Line::from(Span::styled(
                    format!("  < {choice} >"),
                    value_style(is_focused, &field.validity),
                )));
            }
            FIELD_CONSENT => {
                let mark = if field.is_checked() { "x" } else { " " };
                push_target(&lines, &mut targets, target);
                lines.push(Line::from(Span::styled(
                    format!("  [{mark}] {} *", field.label),
                    value_style(is_focused, &field.validity).patch(label_style(is_focused)),
                )));
            }
            FIELD_MESSAGE => {
                push_target(&lines, &mut targets, target);
                lines.push(Line::from(Span::styled(
                    format!("{} *", field.label),
                    label_style(is_focused),
                )));
                append_multiline_value(&mut lines, &mut targets, base_row, field, is_focused);
            }
            _ => {
                push_target(&lines, &mut targets, target);
                lines.push(Line::from(Span::styled(
                    format!("{} *", field.label),
                    label_style(is_focused),
                )));
                let cursor = if is_focused { CURSOR } else { "" };
                push_target(&lines, &mut targets, target);
                lines.push(Line::from(Span::styled(
                    format!("  > {}{cursor}", field.as_text()),
                    value_style(is_focused, &field.validity),
                )));
            }
        }

        if let Some(message) = field.validity.error() {
            lines.push(error_line(message));
        }
        lines.push(Line::default());
    }

    // Submit control
    let submit_focused = focused == Some(FormTarget::Submit);
    let submit_style = if !state.submit_phase.accepts_submit() {
        Style::default().fg(Color::DarkGray)
    } else if submit_focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    push_target(&lines, &mut targets, FormTarget::Submit);
    lines.push(Line::from(Span::styled(
        format!("  [ {} ]", state.submit_phase.submit_label()),
        submit_style,
    )));

    lines.push(Line::from(Span::styled(
        format!("  Tab: next field  {SUBMIT_SHORTCUT}: submit  {PASTE_SHORTCUT}: paste  Esc: back"),
        Style::default().fg(Color::DarkGray),
    )));

    // Page-level message area
    if let Some(banner) = &state.banner {
        lines.push(Line::default());
        let (icon, color) = match banner.kind {
            BannerKind::Success => ("✔", Color::Green),
            BannerKind::Error => ("✖", Color::Red),
        };
        banner_row = Some(base_row + lines.len() as u16);
        lines.push(Line::from(Span::styled(
            format!("  {icon} {}", banner.text),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )));
    }

    FormLines {
        lines,
        targets,
        banner_row,
    }
}

fn append_multiline_value(
    lines: &mut Vec<Line<'static>>,
    targets: &mut Vec<(u16, FormTarget)>,
    base_row: u16,
    field: &ContactField,
    is_focused: bool,
) {
    let style = value_style(is_focused, &field.validity);
    let text = field.as_text();
    let mut rows: Vec<String> = text.lines().map(|l| format!("  > {l}")).collect();
    if rows.is_empty() {
        rows.push("  > ".to_string());
    }
    if is_focused {
        if let Some(last) = rows.last_mut() {
            last.push_str(CURSOR);
        }
    }
    for row in rows {
        targets.push((base_row + lines.len() as u16, FormTarget::Field(FIELD_MESSAGE)));
        lines.push(Line::from(Span::styled(row, style)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{FormBanner, SubmitPhase};

    fn render_text(lines: &[Line<'_>]) -> Vec<String> {
        lines
            .iter()
            .map(|line| {
                line.spans
                    .iter()
                    .map(|span| span.content.as_ref())
                    .collect::<String>()
            })
            .collect()
    }

    #[test]
    fn test_every_field_and_submit_are_targets() {
        let state = AppState::default();
        let form = form_lines(&state, 0);
        for index in 0..FIELD_COUNT {
            assert!(
                form.targets
                    .iter()
                    .any(|(_, t)| *t == FormTarget::Field(index)),
                "field {index} has no target row"
            );
        }
        assert_eq!(
            form.targets
                .iter()
                .filter(|(_, t)| *t == FormTarget::Submit)
                .count(),
            1
        );
    }

    #[test]
    fn test_error_text_follows_validity() {
        let mut state = AppState::default();
        state.form.validate_field(0);
        let form = form_lines(&state, 0);
        let text = render_text(&form.lines);
        assert!(text
            .iter()
            .any(|l| l.contains("Please fill out this required field.")));
    }

    #[test]
    fn test_no_error_text_when_unvalidated() {
        let state = AppState::default();
        let form = form_lines(&state, 0);
        let text = render_text(&form.lines);
        assert!(!text.iter().any(|l| l.contains('✖')));
    }

    #[test]
    fn test_banner_row_points_at_banner_line() {
        let mut state = AppState::default();
        state.banner = Some(FormBanner::submitted());
        let base = 40;
        let form = form_lines(&state, base);
        let row = form.banner_row.expect("banner row");
        let text = render_text(&form.lines);
        assert!(text[(row - base) as usize].contains("Thank you!"));
    }

    #[test]
    fn test_submit_label_reflects_phase() {
        let mut state = AppState::default();
        let idle = render_text(&form_lines(&state, 0).lines);
        assert!(idle.iter().any(|l| l.contains("[ Submit Query ]")));

        state.submit_phase = SubmitPhase::Submitting;
        let busy = render_text(&form_lines(&state, 0).lines);
        assert!(busy.iter().any(|l| l.contains("[ Submitting... ]")));
    }

    #[test]
    fn test_cursor_rendered_in_focused_field_only() {
        let mut state = AppState::default();
        state.focus = Focus::Form(FormTarget::Field(0));
        let form = form_lines(&state, 0);
        let text = render_text(&form.lines);
        assert_eq!(text.iter().filter(|l| l.contains(CURSOR)).count(), 1);
    }

    #[test]
    fn test_multiline_message_occupies_multiple_rows() {
        let mut state = AppState::default();
        state.form.message.push_str("first line\nsecond line");
        let form = form_lines(&state, 0);
        let text = render_text(&form.lines);
        assert!(text.iter().any(|l| l.contains("> first line")));
        assert!(text.iter().any(|l| l.contains("> second line")));
    }
}
