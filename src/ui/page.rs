//! Landing document composition
//!
//! Builds the full page as a list of lines plus the row metadata used for
//! scroll targeting, scroll-spy and click handling. Composition depends
//! only on [`AppState`], so the app can recompute the layout outside of a
//! draw pass.

use crate::content::{SectionExtent, CONTACT_SECTION, SECTIONS};
use crate::state::{AppState, FormTarget};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

use super::contact;

/// Row metadata of the composed document
pub struct PageLayout {
    pub sections: Vec<SectionExtent>,
    /// Document row -> focusable form control
    pub targets: Vec<(u16, FormTarget)>,
    /// Document row of the page-level banner, when shown
    pub banner_row: Option<u16>,
    pub total_rows: u16,
}

impl PageLayout {
    /// First row mapped to the given control
    pub fn target_row(&self, target: FormTarget) -> Option<u16> {
        self.targets
            .iter()
            .find(|(_, t)| *t == target)
            .map(|(row, _)| *row)
    }

    /// Control mapped to the given document row, if any
    pub fn target_at(&self, row: u16) -> Option<FormTarget> {
        self.targets
            .iter()
            .find(|(r, _)| *r == row)
            .map(|(_, t)| *t)
    }
}

/// The composed document: renderable lines plus layout metadata
pub struct PageDocument {
    pub lines: Vec<Line<'static>>,
    pub layout: PageLayout,
}

fn heading_style(section_index: usize) -> Style {
    let color = if section_index == 0 {
        Color::Yellow
    } else {
        Color::Cyan
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

/// Compose the landing document from the current state
pub fn compose(state: &AppState) -> PageDocument {
    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut sections: Vec<SectionExtent> = Vec::new();
    let mut targets: Vec<(u16, FormTarget)> = Vec::new();
    let mut banner_row = None;

    for (index, spec) in SECTIONS.iter().enumerate() {
        let top = lines.len() as u16;

        lines.push(Line::from(Span::styled(spec.heading, heading_style(index))));
        lines.push(Line::from(Span::styled(
            "─".repeat(spec.heading.chars().count().max(12)),
            Style::default().fg(Color::DarkGray),
        )));
        lines.push(Line::default());
        for body in spec.body {
            lines.push(Line::from(*body));
        }

        if index == CONTACT_SECTION {
            lines.push(Line::default());
            let form = contact::form_lines(state, lines.len() as u16);
            targets = form.targets;
            banner_row = form.banner_row;
            lines.extend(form.lines);
        }

        lines.push(Line::default());
        lines.push(Line::default());

        sections.push(SectionExtent {
            id: spec.id,
            top,
            height: lines.len() as u16 - top,
        });
    }

    let total_rows = lines.len() as u16;
    PageDocument {
        lines,
        layout: PageLayout {
            sections,
            targets,
            banner_row,
            total_rows,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FormBanner;

    #[test]
    fn test_sections_tile_the_document() {
        let doc = compose(&AppState::default());
        let sections = &doc.layout.sections;
        assert_eq!(sections.len(), SECTIONS.len());
        assert_eq!(sections[0].top, 0);
        for pair in sections.windows(2) {
            assert_eq!(pair[0].top + pair[0].height, pair[1].top);
        }
        let last = sections.last().unwrap();
        assert_eq!(last.top + last.height, doc.layout.total_rows);
    }

    #[test]
    fn test_lines_match_total_rows() {
        let doc = compose(&AppState::default());
        assert_eq!(doc.lines.len() as u16, doc.layout.total_rows);
    }

    #[test]
    fn test_form_targets_live_in_contact_section() {
        let doc = compose(&AppState::default());
        let contact = doc.layout.sections[CONTACT_SECTION];
        for (row, _) in &doc.layout.targets {
            assert!(*row >= contact.top && *row < contact.top + contact.height);
        }
    }

    #[test]
    fn test_target_row_and_target_at_agree() {
        let doc = compose(&AppState::default());
        let row = doc.layout.target_row(FormTarget::Submit).unwrap();
        assert_eq!(doc.layout.target_at(row), Some(FormTarget::Submit));
        assert_eq!(doc.layout.target_at(doc.layout.total_rows + 5), None);
    }

    #[test]
    fn test_validation_errors_grow_contact_section() {
        let mut state = AppState::default();
        let before = compose(&state).layout.sections[CONTACT_SECTION].height;
        state.form.validate_all();
        let after = compose(&state).layout.sections[CONTACT_SECTION].height;
        assert!(after > before);
    }

    #[test]
    fn test_banner_row_within_contact_section() {
        let mut state = AppState::default();
        state.banner = Some(FormBanner::failed());
        let doc = compose(&state);
        let contact = doc.layout.sections[CONTACT_SECTION];
        let row = doc.layout.banner_row.unwrap();
        assert!(row >= contact.top && row < contact.top + contact.height);
    }
}
