//! Navigation menu state and scroll-spy

use crate::content::SectionExtent;

/// Rows probed above a section's top when matching the scroll position.
/// Slightly deeper than the jump margin so a just-jumped-to section
/// registers as active.
pub const SPY_PROBE_ROWS: u16 = 2;

/// Navigation bar state: collapsible menu plus the scroll-spy highlight
#[derive(Debug, Default)]
pub struct NavState {
    /// Whether the collapsed menu is expanded
    pub menu_open: bool,
    /// Highlighted link inside the open menu
    pub menu_selected: usize,
    /// Section whose band contains the scroll position, if any
    pub active_section: Option<usize>,
}

impl NavState {
    /// Toggle the collapsed menu open or closed
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
        if self.menu_open {
            self.menu_selected = 0;
        }
    }

    /// Close the menu if open
    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Move the menu highlight down, wrapping
    pub fn menu_next(&mut self, link_count: usize) {
        if link_count > 0 {
            self.menu_selected = (self.menu_selected + 1) % link_count;
        }
    }

    /// Move the menu highlight up, wrapping
    pub fn menu_prev(&mut self, link_count: usize) {
        if link_count > 0 {
            self.menu_selected = if self.menu_selected == 0 {
                link_count - 1
            } else {
                self.menu_selected - 1
            };
        }
    }
}

/// Section whose probe band contains the scroll offset.
///
/// A section's band starts [`SPY_PROBE_ROWS`] above its first row and spans
/// its height, so the bands of adjacent sections tile the document without
/// overlap; at most one link carries the active highlight.
pub fn active_section(sections: &[SectionExtent], offset: f32) -> Option<usize> {
    sections.iter().position(|section| {
        let band_top = section.top as f32 - SPY_PROBE_ROWS as f32;
        offset > band_top && offset <= band_top + section.height as f32
    })
}
