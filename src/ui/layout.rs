//! Layout areas and the status bar

use crate::app::App;
use crate::platform::SUBMIT_SHORTCUT;
use crate::state::{BannerKind, Focus, Liveness, SubmitPhase};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::navbar::NAV_HEIGHT;

/// Split the screen into nav bar, page content and status bar
pub fn page_areas(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(NAV_HEIGHT), // Fixed nav bar
            Constraint::Min(0),             // Page content
            Constraint::Length(1),          // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        get_focus_hints(&app.state.focus),
        Style::default().fg(Color::DarkGray),
    )];

    if matches!(app.state.submit_phase, SubmitPhase::Submitting) {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            "Submitting...",
            Style::default().fg(Color::Yellow),
        ));
    }

    // Assertive banners are echoed here in addition to the document flow
    if let Some(banner) = &app.state.banner {
        if banner.liveness == Liveness::Assertive {
            let color = match banner.kind {
                BannerKind::Success => Color::Green,
                BannerKind::Error => Color::Red,
            };
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(banner.text, Style::default().fg(color)));
        }
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    // Quit hint on the right
    let quit_hint = " ^C:quit ";
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(quit_hint.len() as u16),
        y: area.y,
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the current focus
fn get_focus_hints(focus: &Focus) -> String {
    match focus {
        Focus::Page => " j/k:scroll  1-4:jump  Tab:form  m:menu  q:quit".to_string(),
        Focus::Menu => " j/k:choose  Enter:go  Esc:close".to_string(),
        Focus::Form(_) => format!(" Tab:next  {SUBMIT_SHORTCUT}:submit  Esc:page"),
    }
}
