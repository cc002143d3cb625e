//! Splash screen animation state

use std::time::{Duration, Instant};

/// Animation phase for splash screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplashPhase {
    /// Static logo display
    Display,
    /// Logo animating upward
    ScrollUp,
    /// Animation finished
    Complete,
}

/// Splash screen animation state
#[derive(Debug)]
pub struct SplashState {
    /// When the splash started
    pub start_time: Instant,
    /// Current animation phase
    pub phase: SplashPhase,
    /// Current vertical offset (for scroll animation)
    pub scroll_offset: f32,
}

impl SplashState {
    /// Display duration before animation starts
    const DISPLAY_DURATION: Duration = Duration::from_millis(1100);
    /// Duration of scroll-up animation
    const ANIMATION_DURATION: Duration = Duration::from_millis(700);

    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            phase: SplashPhase::Display,
            scroll_offset: 0.0,
        }
    }

    /// Update animation state based on elapsed time
    pub fn update(&mut self, terminal_height: u16) {
        let elapsed = self.start_time.elapsed();

        if elapsed < Self::DISPLAY_DURATION {
            self.phase = SplashPhase::Display;
            self.scroll_offset = 0.0;
        } else if elapsed < Self::DISPLAY_DURATION + Self::ANIMATION_DURATION {
            self.phase = SplashPhase::ScrollUp;
            let animation_elapsed = elapsed - Self::DISPLAY_DURATION;
            let progress = animation_elapsed.as_secs_f32() / Self::ANIMATION_DURATION.as_secs_f32();
            // Cubic ease-out: the logo decelerates as it leaves the screen
            let eased = simple_easing::cubic_out(progress);
            self.scroll_offset = eased * (terminal_height as f32);
        } else {
            self.phase = SplashPhase::Complete;
        }
    }

    /// Skip to completion (user pressed a key)
    pub fn skip(&mut self) {
        self.phase = SplashPhase::Complete;
    }

    /// Check if animation is complete
    pub fn is_complete(&self) -> bool {
        self.phase == SplashPhase::Complete
    }
}

impl Default for SplashState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_starts_in_display_phase() {
        let state = SplashState::new();
        assert_eq!(state.phase, SplashPhase::Display);
        assert_eq!(state.scroll_offset, 0.0);
    }

    #[test]
    fn test_skip_immediately_completes() {
        let mut state = SplashState::new();
        assert!(!state.is_complete());

        state.skip();

        assert!(state.is_complete());
        assert_eq!(state.phase, SplashPhase::Complete);
    }

    #[test]
    fn test_update_stays_in_display_phase_initially() {
        let mut state = SplashState::new();
        state.update(24);

        assert_eq!(state.phase, SplashPhase::Display);
        assert_eq!(state.scroll_offset, 0.0);
    }

    #[test]
    fn test_multiple_skips_do_not_break() {
        let mut state = SplashState::new();
        state.skip();
        state.skip();
        assert!(state.is_complete());
    }

    // Note: the time-based Display -> ScrollUp -> Complete transitions are
    // not unit tested; there is no way to mock Instant here. The instant
    // paths (initial phase, skip) cover the observable contract.
}
