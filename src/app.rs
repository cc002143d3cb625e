//! Application state and core logic

use crate::config::TuiConfig;
use crate::platform::SHORTCUT_MODIFIER;
use crate::state::{
    AppState, Focus, FormBanner, FormTarget, SplashState, SubmitPhase, View, FIELD_CONSENT,
    FIELD_COUNT, FIELD_MESSAGE, FIELD_ROLE, ROLE_OPTIONS,
};
use crate::transport::{SubmitResponse, SubmitTransport, TransportError};
use crate::ui::navbar::{self, NavHit, NAV_HEIGHT};
use crate::ui::page::{self, PageLayout};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Rows kept above a section heading after a nav jump
const HEADER_OFFSET_ROWS: u16 = 1;
/// Rows scrolled per mouse wheel notch
const WHEEL_SCROLL: f32 = 3.0;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// User configuration
    pub config: TuiConfig,
    /// Transport the assembled submission is handed to
    transport: Arc<dyn SubmitTransport>,
    /// In-flight submission, if any
    pending_submission: Option<JoinHandle<Result<SubmitResponse, TransportError>>>,
    /// Whether the app should quit
    quit: bool,
    /// Splash screen animation state
    pub splash_state: Option<SplashState>,
    /// Terminal size (height, width)
    pub terminal_size: Option<(u16, u16)>,
}

impl App {
    /// Create a new App instance
    pub fn new(config: TuiConfig, transport: Arc<dyn SubmitTransport>) -> Self {
        let mut state = AppState::default();
        let skip_splash = config.skip_splash.unwrap_or(false);
        state.current_view = if skip_splash {
            View::Landing
        } else {
            View::Splash
        };

        let mut app = Self {
            state,
            config,
            transport,
            pending_submission: None,
            quit: false,
            splash_state: (!skip_splash).then(SplashState::new),
            terminal_size: None,
        };

        // Initial scroll-spy pass so a link is highlighted from the start
        app.refresh_active_section();
        tracing::info!("landing page loaded");
        app
    }

    /// Update splash animation state.
    /// Returns true if the animation completed and the landing page took over.
    pub fn update_splash(&mut self, terminal_height: u16) -> bool {
        if let Some(splash) = &mut self.splash_state {
            splash.update(terminal_height);
            if splash.is_complete() {
                self.splash_state = None;
                self.state.current_view = View::Landing;
                return true;
            }
        }
        false
    }

    /// Check if in splash screen
    pub fn in_splash(&self) -> bool {
        matches!(self.state.current_view, View::Splash)
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Whether the loop should poll at animation rate
    pub fn needs_fast_tick(&self) -> bool {
        self.in_splash() || self.state.scroll.is_animating() || self.pending_submission.is_some()
    }

    /// Advance time-based state (scroll animation, scroll-spy)
    pub fn tick(&mut self) {
        if self.state.scroll.update() {
            self.refresh_active_section();
        }
    }

    /// Whether the in-flight submission has resolved
    pub fn submission_ready(&self) -> bool {
        self.pending_submission
            .as_ref()
            .is_some_and(|handle| handle.is_finished())
    }

    fn viewport_height(&self) -> u16 {
        let height = self.terminal_size.map(|(h, _)| h).unwrap_or(24);
        height.saturating_sub(NAV_HEIGHT + 1)
    }

    fn terminal_width(&self) -> u16 {
        self.terminal_size.map(|(_, w)| w).unwrap_or(80)
    }

    fn reduce_motion(&self) -> bool {
        self.config.reduce_motion.unwrap_or(false)
    }

    fn max_scroll(&self, layout: &PageLayout) -> f32 {
        layout.total_rows.saturating_sub(self.viewport_height()) as f32
    }

    /// Recompute which nav link carries the active highlight
    fn refresh_active_section(&mut self) {
        let layout = page::compose(&self.state).layout;
        self.state.nav.active_section =
            crate::state::active_section(&layout.sections, self.state.scroll.offset());
    }

    /// Move focus, running blur validation on the field being left.
    /// Consent validates on toggle instead, like a change event.
    fn move_focus(&mut self, new: Focus) {
        if let Focus::Form(FormTarget::Field(index)) = self.state.focus {
            let leaving = !matches!(new, Focus::Form(FormTarget::Field(n)) if n == index);
            if leaving && index != FIELD_CONSENT {
                self.state.form.validate_field(index);
            }
        }
        self.state.focus = new;
    }

    /// Jump the page to a section; the menu closes on link activation
    fn activate_nav_link(&mut self, index: usize) {
        self.state.nav.close_menu();
        if !matches!(self.state.focus, Focus::Page) {
            self.move_focus(Focus::Page);
        }

        let layout = page::compose(&self.state).layout;
        let Some(section) = layout.sections.get(index) else {
            return;
        };
        let target = section.top.saturating_sub(HEADER_OFFSET_ROWS) as f32;
        let max = self.max_scroll(&layout);
        self.state
            .scroll
            .scroll_to(target, max, self.reduce_motion());
        self.refresh_active_section();
    }

    /// Scroll so `row` is inside the viewport, with a one-row margin
    fn ensure_row_visible(&mut self, row: u16, instant: bool) {
        let layout = page::compose(&self.state).layout;
        let viewport = self.viewport_height();
        let offset = self.state.scroll.offset_rows();
        let max = self.max_scroll(&layout);

        if row <= offset {
            let target = row.saturating_sub(HEADER_OFFSET_ROWS) as f32;
            self.state
                .scroll
                .scroll_to(target, max, instant || self.reduce_motion());
        } else if row + 1 >= offset + viewport {
            let target = (row + 2).saturating_sub(viewport) as f32;
            self.state
                .scroll
                .scroll_to(target, max, instant || self.reduce_motion());
        }
        self.refresh_active_section();
    }

    fn focus_form_target(&mut self, target: FormTarget) {
        self.move_focus(Focus::Form(target));
        let layout = page::compose(&self.state).layout;
        if let Some(row) = layout.target_row(target) {
            self.ensure_row_visible(row, true);
        }
    }

    fn scroll_page_by(&mut self, delta: f32) {
        let layout = page::compose(&self.state).layout;
        let max = self.max_scroll(&layout);
        self.state.scroll.scroll_by(delta, max);
        self.refresh_active_section();
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if self.in_splash() {
            if let Some(splash) = &mut self.splash_state {
                splash.skip();
            }
            return Ok(());
        }

        match self.state.focus {
            Focus::Page => self.handle_page_key(key),
            Focus::Menu => self.handle_menu_key(key),
            Focus::Form(target) => self.handle_form_key(key, target),
        }
        Ok(())
    }

    fn handle_page_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Char('m') => self.toggle_menu(),
            KeyCode::Tab => self.focus_form_target(FormTarget::Field(0)),
            KeyCode::Char('j') | KeyCode::Down => self.scroll_page_by(1.0),
            KeyCode::Char('k') | KeyCode::Up => self.scroll_page_by(-1.0),
            KeyCode::PageDown => self.scroll_page_by(self.viewport_height() as f32),
            KeyCode::PageUp => self.scroll_page_by(-(self.viewport_height() as f32)),
            KeyCode::Home => self.scroll_page_by(f32::NEG_INFINITY),
            KeyCode::End => self.scroll_page_by(f32::INFINITY),
            KeyCode::Char(c @ '1'..='4') => {
                let index = (c as u8 - b'1') as usize;
                self.activate_nav_link(index);
            }
            _ => {}
        }
    }

    fn handle_menu_key(&mut self, key: KeyEvent) {
        match key.code {
            // Escape closes the menu and hands focus back to the toggle
            KeyCode::Esc | KeyCode::Char('m') => {
                self.state.nav.close_menu();
                self.state.focus = Focus::Page;
            }
            KeyCode::Char('j') | KeyCode::Down => self.state.nav.menu_next(NAV_LINK_COUNT),
            KeyCode::Char('k') | KeyCode::Up => self.state.nav.menu_prev(NAV_LINK_COUNT),
            KeyCode::Enter => self.activate_nav_link(self.state.nav.menu_selected),
            _ => {}
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent, target: FormTarget) {
        // Submit and paste shortcuts work from anywhere in the form
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('s') {
            self.submit_query();
            return;
        }
        if key.modifiers.contains(SHORTCUT_MODIFIER) && key.code == KeyCode::Char('v') {
            self.paste_into_focused();
            return;
        }

        match key.code {
            KeyCode::Tab => self.focus_form_target(next_target(target)),
            KeyCode::BackTab => self.focus_form_target(prev_target(target)),
            KeyCode::Esc => self.move_focus(Focus::Page),
            _ => match target {
                FormTarget::Field(index) => self.handle_field_key(key, index),
                FormTarget::Submit => {
                    if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                        self.submit_query();
                    }
                }
            },
        }
    }

    fn handle_field_key(&mut self, key: KeyEvent, index: usize) {
        match index {
            FIELD_ROLE => match key.code {
                KeyCode::Up | KeyCode::Left => {
                    self.state.form.role.select_prev(ROLE_OPTIONS.len());
                }
                KeyCode::Down | KeyCode::Right => {
                    self.state.form.role.select_next(ROLE_OPTIONS.len());
                }
                KeyCode::Enter => self.focus_form_target(next_target(FormTarget::Field(index))),
                _ => {}
            },
            FIELD_CONSENT => match key.code {
                // Toggling is a change event: consent re-validates immediately
                KeyCode::Char(' ') => {
                    self.state.form.consent.toggle();
                    self.state.form.validate_field(FIELD_CONSENT);
                }
                KeyCode::Enter => self.focus_form_target(next_target(FormTarget::Field(index))),
                _ => {}
            },
            _ => match key.code {
                KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                    if let Some(field) = self.state.form.field_mut(index) {
                        field.push_char(c);
                    }
                }
                KeyCode::Backspace => {
                    if let Some(field) = self.state.form.field_mut(index) {
                        field.pop_char();
                    }
                }
                KeyCode::Enter if index == FIELD_MESSAGE => {
                    self.state.form.message.push_char('\n');
                }
                KeyCode::Enter => self.focus_form_target(next_target(FormTarget::Field(index))),
                KeyCode::Up => self.focus_form_target(prev_target(FormTarget::Field(index))),
                KeyCode::Down => self.focus_form_target(next_target(FormTarget::Field(index))),
                _ => {}
            },
        }
    }

    fn toggle_menu(&mut self) {
        // The toggle only exists while the links are collapsed
        if !navbar::is_collapsed(self.terminal_width()) {
            return;
        }
        self.state.nav.toggle_menu();
        self.state.focus = if self.state.nav.menu_open {
            Focus::Menu
        } else {
            Focus::Page
        };
    }

    /// Handle a mouse event
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<()> {
        if self.in_splash() {
            return Ok(());
        }

        match mouse.kind {
            MouseEventKind::ScrollDown => self.scroll_page_by(WHEEL_SCROLL),
            MouseEventKind::ScrollUp => self.scroll_page_by(-WHEEL_SCROLL),
            MouseEventKind::Down(MouseButton::Left) => self.handle_click(mouse.column, mouse.row),
            _ => {}
        }
        Ok(())
    }

    fn handle_click(&mut self, column: u16, row: u16) {
        let width = self.terminal_width();
        match navbar::hit_test(column, row, width, self.state.nav.menu_open) {
            NavHit::Toggle => self.toggle_menu(),
            NavHit::Link(index) | NavHit::MenuLink(index) => self.activate_nav_link(index),
            NavHit::Outside => {
                // A click outside the open menu closes it
                if self.state.nav.menu_open {
                    self.state.nav.close_menu();
                    self.state.focus = Focus::Page;
                    return;
                }
                if row < NAV_HEIGHT {
                    return;
                }
                let document_row = self.state.scroll.offset_rows() + (row - NAV_HEIGHT);
                let layout = page::compose(&self.state).layout;
                match layout.target_at(document_row) {
                    Some(FormTarget::Submit) => {
                        self.move_focus(Focus::Form(FormTarget::Submit));
                        self.submit_query();
                    }
                    Some(target) => self.move_focus(Focus::Form(target)),
                    None => self.move_focus(Focus::Page),
                }
            }
        }
    }

    /// Run the submit action: validate all fields and either surface the
    /// errors or hand the assembled submission to the transport.
    pub fn submit_query(&mut self) {
        // Soft exclusion: the disabled control is the only concurrency guard
        if !self.state.submit_phase.accepts_submit() {
            return;
        }

        // Hide any previous message before validating
        self.state.banner = None;

        if !self.state.form.validate_all() {
            if let Some(index) = self.state.form.first_invalid() {
                self.focus_form_target(FormTarget::Field(index));
            }
            self.state.banner = Some(FormBanner::fix_errors());
            tracing::info!("submission blocked by invalid fields");
            return;
        }

        let submission = self.state.form.submission();
        tracing::info!(timestamp = %submission.timestamp, "submission started");

        self.state.submit_phase = SubmitPhase::Submitting;
        let transport = Arc::clone(&self.transport);
        self.pending_submission =
            Some(tokio::spawn(async move { transport.submit(submission).await }));
    }

    /// Resolve the finished submission and surface its outcome.
    /// The submit control is re-enabled on every exit path.
    pub async fn finish_submission(&mut self) {
        let Some(handle) = self.pending_submission.take() else {
            return;
        };
        self.state.submit_phase = SubmitPhase::Idle;

        let succeeded = matches!(handle.await, Ok(Ok(SubmitResponse { success: true })));
        if succeeded {
            tracing::info!("submission succeeded");
            self.state.banner = Some(FormBanner::submitted());
            self.state.form.clear();
        } else {
            tracing::warn!("submission failed");
            self.state.banner = Some(FormBanner::failed());
        }

        let layout = page::compose(&self.state).layout;
        if let Some(row) = layout.banner_row {
            self.ensure_row_visible(row, false);
        }
    }

    fn paste_into_focused(&mut self) {
        let Focus::Form(FormTarget::Field(index)) = self.state.focus else {
            return;
        };
        match arboard::Clipboard::new().and_then(|mut clipboard| clipboard.get_text()) {
            Ok(text) => {
                if let Some(field) = self.state.form.field_mut(index) {
                    field.push_str(&text);
                }
            }
            Err(err) => tracing::warn!("clipboard unavailable: {err}"),
        }
    }
}

/// Number of links in the dropdown menu
const NAV_LINK_COUNT: usize = crate::content::SECTIONS.len();

fn next_target(target: FormTarget) -> FormTarget {
    match target {
        FormTarget::Field(index) if index + 1 < FIELD_COUNT => FormTarget::Field(index + 1),
        FormTarget::Field(_) => FormTarget::Submit,
        FormTarget::Submit => FormTarget::Field(0),
    }
}

fn prev_target(target: FormTarget) -> FormTarget {
    match target {
        FormTarget::Field(0) => FormTarget::Submit,
        FormTarget::Field(index) => FormTarget::Field(index - 1),
        FormTarget::Submit => FormTarget::Field(FIELD_COUNT - 1),
    }
}
