//! Page scroll position with eased scroll-to animation

use std::time::{Duration, Instant};

/// In-flight animated scroll between two offsets
#[derive(Debug)]
struct ScrollAnimation {
    from: f32,
    to: f32,
    started: Instant,
    duration: Duration,
}

/// Vertical scroll state for the landing document
#[derive(Debug, Default)]
pub struct ScrollState {
    /// Current offset in document rows
    offset: f32,
    animation: Option<ScrollAnimation>,
}

impl ScrollState {
    /// Duration of an animated section jump
    const SCROLL_DURATION: Duration = Duration::from_millis(400);

    /// Current offset in fractional rows
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Current offset as a whole row count for rendering
    pub fn offset_rows(&self) -> u16 {
        self.offset.round().max(0.0) as u16
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Begin an animated scroll to `target`, clamped to `[0, max]`.
    /// With `instant` set the offset jumps immediately (reduced motion).
    pub fn scroll_to(&mut self, target: f32, max: f32, instant: bool) {
        let target = target.clamp(0.0, max.max(0.0));
        if instant || (target - self.offset).abs() < f32::EPSILON {
            self.offset = target;
            self.animation = None;
            return;
        }
        self.animation = Some(ScrollAnimation {
            from: self.offset,
            to: target,
            started: Instant::now(),
            duration: Self::SCROLL_DURATION,
        });
    }

    /// Scroll by a row delta, clamped to `[0, max]`. Cancels any animation.
    pub fn scroll_by(&mut self, delta: f32, max: f32) {
        self.animation = None;
        self.offset = (self.offset + delta).clamp(0.0, max.max(0.0));
    }

    /// Advance the animation based on elapsed time.
    /// Returns true when the offset changed.
    pub fn update(&mut self) -> bool {
        let Some(animation) = &self.animation else {
            return false;
        };

        let elapsed = animation.started.elapsed();
        let (next, done) = if elapsed >= animation.duration {
            (animation.to, true)
        } else {
            let progress = elapsed.as_secs_f32() / animation.duration.as_secs_f32();
            // Cubic ease-out for smooth deceleration
            let eased = simple_easing::cubic_out(progress);
            (
                animation.from + (animation.to - animation.from) * eased,
                false,
            )
        };

        if done {
            self.animation = None;
        }
        let changed = (next - self.offset).abs() > f32::EPSILON;
        self.offset = next;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_starts_at_top() {
        let scroll = ScrollState::default();
        assert_eq!(scroll.offset(), 0.0);
        assert_eq!(scroll.offset_rows(), 0);
        assert!(!scroll.is_animating());
    }

    #[test]
    fn test_instant_scroll_jumps() {
        let mut scroll = ScrollState::default();
        scroll.scroll_to(40.0, 100.0, true);
        assert_eq!(scroll.offset(), 40.0);
        assert!(!scroll.is_animating());
    }

    #[test]
    fn test_instant_scroll_clamps_to_max() {
        let mut scroll = ScrollState::default();
        scroll.scroll_to(500.0, 100.0, true);
        assert_eq!(scroll.offset(), 100.0);
    }

    #[test]
    fn test_animated_scroll_starts_animation() {
        let mut scroll = ScrollState::default();
        scroll.scroll_to(40.0, 100.0, false);
        assert!(scroll.is_animating());
        // Offset does not move until update() is called
        assert_eq!(scroll.offset(), 0.0);
    }

    #[test]
    fn test_scroll_to_current_offset_is_noop() {
        let mut scroll = ScrollState::default();
        scroll.scroll_to(0.0, 100.0, false);
        assert!(!scroll.is_animating());
    }

    #[test]
    fn test_scroll_by_clamps_low() {
        let mut scroll = ScrollState::default();
        scroll.scroll_by(-5.0, 100.0);
        assert_eq!(scroll.offset(), 0.0);
    }

    #[test]
    fn test_scroll_by_clamps_high() {
        let mut scroll = ScrollState::default();
        scroll.scroll_by(250.0, 100.0);
        assert_eq!(scroll.offset(), 100.0);
    }

    #[test]
    fn test_scroll_by_cancels_animation() {
        let mut scroll = ScrollState::default();
        scroll.scroll_to(40.0, 100.0, false);
        assert!(scroll.is_animating());
        scroll.scroll_by(1.0, 100.0);
        assert!(!scroll.is_animating());
        assert_eq!(scroll.offset(), 1.0);
    }

    #[test]
    fn test_update_without_animation_reports_no_change() {
        let mut scroll = ScrollState::default();
        assert!(!scroll.update());
    }

    #[test]
    fn test_update_converges_to_target() {
        let mut scroll = ScrollState::default();
        scroll.scroll_to(40.0, 100.0, false);
        // Drive the animation to completion; bounded by the duration
        let deadline = Instant::now() + Duration::from_secs(2);
        while scroll.is_animating() && Instant::now() < deadline {
            scroll.update();
            std::thread::sleep(Duration::from_millis(10));
        }
        assert_eq!(scroll.offset(), 40.0);
        assert!(!scroll.is_animating());
    }

    #[test]
    fn test_negative_max_treated_as_zero() {
        let mut scroll = ScrollState::default();
        scroll.scroll_to(10.0, -5.0, true);
        assert_eq!(scroll.offset(), 0.0);
    }
}
