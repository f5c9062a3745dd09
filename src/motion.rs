use std::time::Duration;

/// Slide distance of a card before it is revealed (`translate-y-8`).
pub const ENTRANCE_OFFSET_PX: u32 = 32;
pub const ENTRANCE_DURATION_MS: u64 = 400;

/// Per-index reveal delay for a grid of cards, `min(index * step, cap)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stagger {
    pub step_ms: u64,
    pub cap_ms: u64,
}

impl Stagger {
    pub const CERTIFICATES: Stagger = Stagger {
        step_ms: 150,
        cap_ms: 400,
    };
    pub const GRID: Stagger = Stagger {
        step_ms: 150,
        cap_ms: 300,
    };

    pub fn delay(&self, index: usize) -> Duration {
        let ms = (index as u64).saturating_mul(self.step_ms).min(self.cap_ms);
        Duration::from_millis(ms)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualState {
    pub opacity: f32,
    pub translate_y_px: u32,
}

impl VisualState {
    pub const SHOWN: VisualState = VisualState {
        opacity: 1.0,
        translate_y_px: 0,
    };
    const HIDDEN: VisualState = VisualState {
        opacity: 0.0,
        translate_y_px: ENTRANCE_OFFSET_PX,
    };
}

/// How a single card enters the page.
///
/// With reduced motion there is no delay and no transform: the card is in
/// its final state from the first frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entrance {
    delay: Duration,
    animated: bool,
}

impl Entrance {
    pub fn new(index: usize, stagger: Stagger, reduced_motion: bool) -> Self {
        if reduced_motion {
            Self {
                delay: Duration::ZERO,
                animated: false,
            }
        } else {
            Self {
                delay: stagger.delay(index),
                animated: true,
            }
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn is_animated(&self) -> bool {
        self.animated
    }

    pub fn visual(&self, revealed: bool) -> VisualState {
        if revealed || !self.animated {
            VisualState::SHOWN
        } else {
            VisualState::HIDDEN
        }
    }

    /// Inline style for the card wrapper.
    pub fn style(&self, revealed: bool) -> String {
        let visual = self.visual(revealed);
        let transform = if visual.translate_y_px == 0 {
            "none".to_string()
        } else {
            format!("translateY({}px)", visual.translate_y_px)
        };
        let mut style = format!("opacity: {}; transform: {};", visual.opacity, transform);
        if self.animated {
            let delay = self.delay.as_millis();
            style.push_str(&format!(
                " transition: opacity {ENTRANCE_DURATION_MS}ms ease-out {delay}ms, transform {ENTRANCE_DURATION_MS}ms ease-out {delay}ms;"
            ));
        }
        style
    }

    /// Progress bars start empty and fill once the card has been revealed.
    pub fn progress(&self, level: u8, revealed: bool) -> u8 {
        if revealed || !self.animated {
            level
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stagger_is_capped() {
        let stagger = Stagger::CERTIFICATES;
        assert_eq!(stagger.delay(0), Duration::ZERO);
        assert_eq!(stagger.delay(1), Duration::from_millis(150));
        assert_eq!(stagger.delay(2), Duration::from_millis(300));
        assert_eq!(stagger.delay(3), Duration::from_millis(400));
        assert_eq!(stagger.delay(500), Duration::from_millis(400));
        assert_eq!(Stagger::GRID.delay(usize::MAX), Duration::from_millis(300));
    }

    #[test]
    fn test_animated_entrance_starts_hidden() {
        let entrance = Entrance::new(2, Stagger::GRID, false);
        assert!(entrance.is_animated());
        assert_eq!(entrance.delay(), Duration::from_millis(300));

        let hidden = entrance.visual(false);
        assert_eq!(hidden.opacity, 0.0);
        assert_eq!(hidden.translate_y_px, ENTRANCE_OFFSET_PX);
        assert!(entrance.style(false).contains("translateY(32px)"));
        assert!(entrance.style(true).contains("300ms"));
    }

    #[test]
    fn test_reduced_motion_matches_final_state() {
        let reduced = Entrance::new(3, Stagger::CERTIFICATES, true);
        let animated = Entrance::new(3, Stagger::CERTIFICATES, false);

        assert_eq!(reduced.delay(), Duration::ZERO);
        assert!(!reduced.is_animated());
        // visible before any reveal tick, identical to the animated end state
        assert_eq!(reduced.visual(false), animated.visual(true));
        assert_eq!(reduced.visual(false), VisualState::SHOWN);

        let style = reduced.style(false);
        assert_eq!(style, "opacity: 1; transform: none;");
        assert!(!style.contains("transition"));
        assert!(animated.style(true).starts_with("opacity: 1; transform: none;"));
    }

    #[test]
    fn test_progress_fill() {
        let animated = Entrance::new(0, Stagger::GRID, false);
        assert_eq!(animated.progress(70, false), 0);
        assert_eq!(animated.progress(70, true), 70);

        let reduced = Entrance::new(0, Stagger::GRID, true);
        assert_eq!(reduced.progress(70, false), 70);
    }
}
