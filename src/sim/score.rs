//! Height score and personal best

use crate::consts::FEET_PER_PIXEL;

/// Height above `base_y` in feet (negative below it)
#[inline]
pub fn height_feet(y: f32, base_y: f32) -> f32 {
    (base_y - y) * FEET_PER_PIXEL
}

/// Best whole-foot height reached this run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PersonalBest {
    best: i32,
    /// A new best was set on the most recent `record` call
    highlight: bool,
}

impl PersonalBest {
    pub fn new() -> Self {
        Self {
            best: 0,
            highlight: false,
        }
    }

    pub fn best(&self) -> i32 {
        self.best
    }

    pub fn is_highlighted(&self) -> bool {
        self.highlight
    }

    /// Offer this frame's height; returns the new best if it was raised
    ///
    /// Compared in whole feet so that hovering at 10.4 ft with a best of 10
    /// does not count as a new record every frame.
    pub fn record(&mut self, feet: f32) -> Option<i32> {
        let whole = feet.floor() as i32;
        self.highlight = whole > self.best;
        if self.highlight {
            self.best = whole;
            Some(whole)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn feet_from_y() {
        assert_eq!(height_feet(400.0, 400.0), 0.0);
        assert_eq!(height_feet(250.0, 400.0), 15.0);
        assert_eq!(height_feet(500.0, 400.0), -10.0);
    }

    #[test]
    fn new_best_highlights_once() {
        let mut pb = PersonalBest::new();
        assert_eq!(pb.record(0.0), None);
        assert_eq!(pb.record(10.4), Some(10));
        assert!(pb.is_highlighted());
        assert_eq!(pb.record(10.9), None);
        assert!(!pb.is_highlighted());
        assert_eq!(pb.record(11.0), Some(11));
        assert_eq!(pb.record(3.0), None);
        assert_eq!(pb.best(), 11);
    }

    proptest! {
        #[test]
        fn best_never_decreases(heights in proptest::collection::vec(-500.0f32..8_000.0, 1..200)) {
            let mut pb = PersonalBest::new();
            let mut last = pb.best();
            for h in heights {
                pb.record(h);
                prop_assert!(pb.best() >= last);
                prop_assert!(pb.best() as f32 <= h.max(last as f32));
                last = pb.best();
            }
        }
    }
}
