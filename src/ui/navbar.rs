//! Fixed navigation bar with a collapsible menu
//!
//! Wide terminals show the section links inline; below the collapse
//! threshold they fold into a `≡ Menu` toggle with a dropdown. Rendering
//! and click hit-testing share the same column math.

use crate::content::SECTIONS;
use crate::state::{AppState, NavState};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Nav bar height in rows (border + content + border)
pub const NAV_HEIGHT: u16 = 3;
/// Terminal width below which the links collapse into a menu
pub const COLLAPSE_WIDTH: u16 = 70;
/// Width of the dropdown menu
pub const MENU_WIDTH: u16 = 18;

/// Column where the inline links begin
const LINKS_COL: u16 = 14;
/// Width of the collapsed menu toggle, including padding
const TOGGLE_WIDTH: u16 = 10;

/// What a click inside the nav area or open menu landed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavHit {
    /// The collapsed-menu toggle control
    Toggle,
    /// An inline nav link
    Link(usize),
    /// A link row inside the open dropdown
    MenuLink(usize),
    Outside,
}

/// Whether the nav links are collapsed behind the toggle at this width
pub fn is_collapsed(width: u16) -> bool {
    width < COLLAPSE_WIDTH
}

/// Inline link cells as (start column, end column, link index)
fn link_cells() -> Vec<(u16, u16, usize)> {
    let mut column = LINKS_COL;
    SECTIONS
        .iter()
        .enumerate()
        .map(|(index, section)| {
            let width = section.nav_label.chars().count() as u16 + 2;
            let cell = (column, column + width, index);
            column += width + 1;
            cell
        })
        .collect()
}

/// Left edge of the collapsed-menu toggle
fn toggle_col(width: u16) -> u16 {
    width.saturating_sub(TOGGLE_WIDTH + 2)
}

/// Screen area of the open dropdown menu
pub fn menu_rect(width: u16) -> Rect {
    Rect {
        x: width.saturating_sub(MENU_WIDTH + 1),
        y: NAV_HEIGHT,
        width: MENU_WIDTH,
        height: SECTIONS.len() as u16 + 2,
    }
}

/// Map a click to a nav control
pub fn hit_test(column: u16, row: u16, width: u16, menu_open: bool) -> NavHit {
    if row < NAV_HEIGHT {
        if is_collapsed(width) {
            if row == 1 && column >= toggle_col(width) && column < toggle_col(width) + TOGGLE_WIDTH {
                return NavHit::Toggle;
            }
        } else if row == 1 {
            for (start, end, index) in link_cells() {
                if column >= start && column < end {
                    return NavHit::Link(index);
                }
            }
        }
        return NavHit::Outside;
    }

    if menu_open && is_collapsed(width) {
        let rect = menu_rect(width);
        let first_link_row = rect.y + 1;
        let link_count = SECTIONS.len() as u16;
        if row >= first_link_row
            && row < first_link_row + link_count
            && column > rect.x
            && column < rect.x + rect.width - 1
        {
            return NavHit::MenuLink((row - first_link_row) as usize);
        }
    }

    NavHit::Outside
}

fn link_style(is_active: bool) -> Style {
    if is_active {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    } else {
        Style::default().fg(Color::Gray)
    }
}

/// Draw the fixed nav bar
pub fn draw(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    frame.render_widget(block, area);

    let title = Paragraph::new(Line::from(Span::styled(
        "⚡ TECHFEST",
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(
        title,
        Rect {
            x: area.x + 2,
            y: area.y + 1,
            width: LINKS_COL.saturating_sub(2).min(area.width),
            height: 1,
        },
    );

    if is_collapsed(area.width) {
        // Expanded state is part of the toggle's rendered label
        let label = if state.nav.menu_open {
            "≡ Menu ▾"
        } else {
            "≡ Menu ▸"
        };
        let style = if state.nav.menu_open {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(label, style))),
            Rect {
                x: toggle_col(area.width),
                y: area.y + 1,
                width: TOGGLE_WIDTH.min(area.width),
                height: 1,
            },
        );
    } else {
        for (start, end, index) in link_cells() {
            if end >= area.width {
                break;
            }
            let is_active = state.nav.active_section == Some(index);
            let label = format!(" {} ", SECTIONS[index].nav_label);
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(label, link_style(is_active)))),
                Rect {
                    x: start,
                    y: area.y + 1,
                    width: end - start,
                    height: 1,
                },
            );
        }
    }
}

/// Draw the dropdown menu over the page content
pub fn draw_menu(frame: &mut Frame, screen: Rect, nav: &NavState) {
    let rect = menu_rect(screen.width);
    if rect.x + rect.width > screen.width || rect.y + rect.height > screen.height {
        return;
    }
    frame.render_widget(Clear, rect);

    let lines: Vec<Line> = SECTIONS
        .iter()
        .enumerate()
        .map(|(index, section)| {
            let marker = if nav.active_section == Some(index) {
                "• "
            } else {
                "  "
            };
            let mut style = link_style(nav.active_section == Some(index));
            if nav.menu_selected == index {
                style = style.add_modifier(Modifier::REVERSED);
            }
            Line::from(Span::styled(
                format!("{marker}{}", section.nav_label),
                style,
            ))
        })
        .collect();

    let menu = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(menu, rect);
}
