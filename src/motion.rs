//! Animation parameters for page transitions and micro-interactions.
//!
//! These are plain data. Pages turn them into CSS through
//! [`entrance_style`] and the `motion-*` classes in `input.css`.

use std::time::Duration;

/// Damped spring, described the way motion libraries do.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
}

impl Spring {
    /// Panels sliding into the landing grid.
    pub const BASE: Spring = Spring::new(90.0, 20.0, 1.0);
    /// Softer, weightier spring used by the inner pages.
    pub const SMOOTH: Spring = Spring::new(100.0, 30.0, 1.5);
    /// Name and title on the splash.
    pub const NAME: Spring = Spring::new(80.0, 18.0, 1.0);
    /// Portrait moving from the splash into its grid cell.
    pub const LAYOUT: Spring = Spring::new(80.0, 20.0, 1.0);
    /// Active nav underline.
    pub const UNDERLINE: Spring = Spring::new(300.0, 25.0, 1.0);
    /// Magnetic social links following the pointer.
    pub const MAGNETIC: Spring = Spring::new(350.0, 10.0, 0.5);
    /// Critically damped, 0.8s with no overshoot. Projects and Resume columns.
    pub const EASE: Spring = Spring::new(50.0, 20.0, 2.0);

    pub const fn new(stiffness: f64, damping: f64, mass: f64) -> Self {
        Self {
            stiffness,
            damping,
            mass,
        }
    }

    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }

    /// Time for the oscillation envelope to fall within 2% of the target.
    ///
    /// Clamped to [0.2s, 2s] so CSS durations stay sensible.
    pub fn settle_time(&self) -> Duration {
        let natural = (self.stiffness / self.mass).sqrt();
        let zeta = self.damping_ratio().min(1.0);
        let secs = 4.0 / (zeta * natural);
        Duration::from_secs_f64(secs.clamp(0.2, 2.0))
    }
}

/// Delays applied to a group of children entering one after another.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stagger {
    pub delay_children: Duration,
    pub stagger_children: Duration,
}

impl Stagger {
    /// Landing grid after the splash.
    pub const LANDING: Stagger = Stagger::new(450, 100);
    /// Columns of the inner pages.
    pub const PAGE: Stagger = Stagger::new(0, 150);
    /// Header items.
    pub const HEADER: Stagger = Stagger::new(0, 100);
    /// Lists inside a column.
    pub const LIST: Stagger = Stagger::new(400, 100);
    /// Projects and Resume columns.
    pub const GENTLE: Stagger = Stagger::new(0, 100);

    pub const fn new(delay_ms: u64, stagger_ms: u64) -> Self {
        Self {
            delay_children: Duration::from_millis(delay_ms),
            stagger_children: Duration::from_millis(stagger_ms),
        }
    }

    pub fn delay_for(&self, index: usize) -> Duration {
        self.delay_children + self.stagger_children * index as u32
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Entrance {
    FromLeft,
    FromRight,
    FromBottom,
    FromTop,
    Fade,
    /// Fade with a short rise, for overlays and tooltips.
    FadeUp,
}

impl Entrance {
    pub fn class(self) -> &'static str {
        match self {
            Self::FromLeft => "motion-from-left",
            Self::FromRight => "motion-from-right",
            Self::FromBottom => "motion-from-bottom",
            Self::FromTop => "motion-from-top",
            Self::Fade => "motion-fade",
            Self::FadeUp => "motion-fade-up",
        }
    }
}

/// Inline style for the `index`th child of a staggered group.
pub fn entrance_style(stagger: Stagger, index: usize, spring: Spring) -> String {
    format!(
        "animation-delay: {:.2}s; animation-duration: {:.2}s;",
        stagger.delay_for(index).as_secs_f64(),
        spring.settle_time().as_secs_f64()
    )
}

/// Class and style for one staggered child, ready for `class=` / `style=`.
pub fn enter(
    entrance: Entrance,
    stagger: Stagger,
    index: usize,
    spring: Spring,
) -> (&'static str, String) {
    (entrance.class(), entrance_style(stagger, index, spring))
}

/// How far a magnetic element drifts toward the pointer.
pub const MAGNETIC_STRENGTH: f64 = 0.1;

/// Offset for a magnetic element given the pointer position relative to
/// the element's top-left corner and the element's size.
pub fn magnetic_offset(
    pointer: (f64, f64),
    size: (f64, f64),
    strength: f64,
    outside: bool,
) -> (f64, f64) {
    if outside {
        return (0.0, 0.0);
    }
    (
        (pointer.0 - size.0 / 2.0) * strength,
        (pointer.1 - size.1 / 2.0) * strength,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stagger_delays() {
        let s = Stagger::LANDING;
        assert_eq!(s.delay_for(0), Duration::from_millis(450));
        assert_eq!(s.delay_for(3), Duration::from_millis(750));
        assert_eq!(Stagger::PAGE.delay_for(2), Duration::from_millis(300));
    }

    #[test]
    fn test_settle_time_is_clamped() {
        for spring in [
            Spring::BASE,
            Spring::SMOOTH,
            Spring::NAME,
            Spring::LAYOUT,
            Spring::UNDERLINE,
            Spring::MAGNETIC,
            Spring::EASE,
        ] {
            let t = spring.settle_time();
            assert!(t >= Duration::from_millis(200), "{spring:?} too fast");
            assert!(t <= Duration::from_secs(2), "{spring:?} too slow");
        }
    }

    #[test]
    fn test_stiffer_spring_settles_faster() {
        assert!(Spring::UNDERLINE.settle_time() < Spring::LAYOUT.settle_time());
        // damping ratio above 1 is treated as critically damped
        let overdamped = Spring::new(100.0, 100.0, 1.0);
        assert!(overdamped.damping_ratio() > 1.0);
        assert_eq!(overdamped.settle_time(), Duration::from_millis(400));
        assert_eq!(Spring::EASE.damping_ratio(), 1.0);
        assert_eq!(Spring::EASE.settle_time(), Duration::from_millis(800));
    }

    #[test]
    fn test_entrance_classes() {
        assert_eq!(Entrance::Fade.class(), "motion-fade");
        assert_eq!(Entrance::FadeUp.class(), "motion-fade-up");
        let (class, style) = enter(Entrance::FromTop, Stagger::HEADER, 2, Spring::BASE);
        assert_eq!(class, "motion-from-top");
        assert!(style.starts_with("animation-delay: 0.20s;"));
    }

    #[test]
    fn test_entrance_style() {
        let style = entrance_style(Stagger::LANDING, 1, Spring::UNDERLINE);
        assert!(style.starts_with("animation-delay: 0.55s;"));
        assert!(style.contains("animation-duration: 0.32s;"));
    }

    #[test]
    fn test_magnetic_offset() {
        assert_eq!(
            magnetic_offset((50.0, 10.0), (100.0, 20.0), 0.1, false),
            (0.0, 0.0)
        );
        let (x, y) = magnetic_offset((100.0, 0.0), (100.0, 20.0), MAGNETIC_STRENGTH, false);
        assert!((x - 5.0).abs() < 1e-9);
        assert!((y + 1.0).abs() < 1e-9);
        assert_eq!(
            magnetic_offset((100.0, 0.0), (100.0, 20.0), 0.1, true),
            (0.0, 0.0)
        );
    }
}
