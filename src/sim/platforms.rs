//! The platform field: one ground slab plus a tower of randomly placed beams

use rand::Rng;

use super::state::{Platform, Rect};
use crate::tuning::Tuning;

/// Ordered platforms, ground first, then beams from the bottom up
#[derive(Debug, Clone, Default)]
pub struct PlatformField {
    platforms: Vec<Platform>,
}

impl PlatformField {
    pub fn new() -> Self {
        Self {
            platforms: Vec::new(),
        }
    }

    /// Discard every platform and build a fresh tower
    ///
    /// Beams sit at `first_platform_y - i * platform_step` for every step at
    /// or below `ceiling_y`, each at a random integer x in
    /// `0..=playfield_width`.
    pub fn regenerate<R: Rng + ?Sized>(&mut self, rng: &mut R, tuning: &Tuning) {
        let count = tuning.climbing_platform_count();
        self.platforms.clear();
        self.platforms.reserve(count + 1);

        let base = Rect::new(
            tuning.base_x,
            tuning.base_y,
            tuning.base_width,
            tuning.base_height,
        );
        self.platforms.push(Platform::ground(base));

        for i in 0..count {
            // Computed from the index, not accumulated, so the top beam lands exactly
            let y = tuning.first_platform_y - i as f32 * tuning.platform_step;
            let x = rng.random_range(0..=tuning.playfield_width) as f32;
            let rect = Rect::new(x, y, tuning.platform_width, tuning.platform_height);
            self.platforms.push(Platform::beam(rect));
        }
    }

    pub fn platforms(&self) -> &[Platform] {
        &self.platforms
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Platform> {
        self.platforms.iter()
    }

    pub fn len(&self) -> usize {
        self.platforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.platforms.is_empty()
    }

    /// The ground slab, if the field has been generated
    pub fn base(&self) -> Option<&Platform> {
        self.platforms.first()
    }

    /// Highest landing surface in the field
    pub fn top_y(&self) -> Option<f32> {
        self.platforms
            .iter()
            .map(Platform::top)
            .min_by(|a, b| a.total_cmp(b))
    }

    /// Replace the contents wholesale (hand-built levels, tests)
    pub fn from_platforms(platforms: Vec<Platform>) -> Self {
        Self { platforms }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::PlatformColor;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn one_base_plus_one_beam_per_step() {
        let tuning = Tuning::default();
        let mut field = PlatformField::new();
        field.regenerate(&mut Pcg32::seed_from_u64(3), &tuning);

        assert_eq!(field.len(), 1 + 990);
        let base = field.base().unwrap();
        assert_eq!(base.color, PlatformColor::Ground);
        assert_eq!(base.rect, Rect::new(0.0, 400.0, 1000.0, 20.0));

        let beams = &field.platforms()[1..];
        assert!(beams.iter().all(|p| p.color == PlatformColor::Beam));
        assert!(beams.iter().all(|p| p.blocking));
        assert_eq!(beams[0].rect.y, 250.0);
        assert_eq!(beams[1].rect.y, 175.0);
        assert_eq!(beams.last().unwrap().rect.y, -73_925.0);
        assert_eq!(field.top_y(), Some(-73_925.0));
        for beam in beams {
            assert!((0.0..=800.0).contains(&beam.rect.x));
            assert_eq!(beam.rect.x.fract(), 0.0);
            assert_eq!(beam.rect.w, 100.0);
            assert_eq!(beam.rect.h, 1.0);
        }
    }

    #[test]
    fn regenerating_discards_previous_set() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(11);
        let stale = Platform::beam(Rect::new(5.0, -99_999.0, 10.0, 1.0));
        let mut field = PlatformField::from_platforms(vec![stale]);

        field.regenerate(&mut rng, &tuning);
        let first: Vec<Platform> = field.iter().copied().collect();
        field.regenerate(&mut rng, &tuning);

        assert_eq!(field.len(), first.len());
        assert!(field.iter().all(|p| p.rect.y != -99_999.0));
        assert_ne!(first, field.iter().copied().collect::<Vec<_>>());
    }

    #[test]
    fn same_seed_same_layout() {
        let tuning = Tuning::default();
        let mut a = PlatformField::new();
        let mut b = PlatformField::new();
        a.regenerate(&mut Pcg32::seed_from_u64(42), &tuning);
        b.regenerate(&mut Pcg32::seed_from_u64(42), &tuning);
        assert_eq!(a.platforms(), b.platforms());
    }

    #[test]
    fn runaway_layout_is_capped() {
        let tuning = Tuning {
            ceiling_y: -1e38,
            platform_step: 1e-30,
            ..Tuning::default()
        };
        let mut field = PlatformField::new();
        field.regenerate(&mut Pcg32::seed_from_u64(1), &tuning);
        assert_eq!(field.len(), 1 + crate::consts::MAX_CLIMBING_PLATFORMS);
    }

    #[test]
    fn inverted_layout_yields_only_the_base() {
        let tuning = Tuning {
            first_platform_y: -10.0,
            ceiling_y: 0.0,
            ..Tuning::default()
        };
        let mut field = PlatformField::new();
        field.regenerate(&mut Pcg32::seed_from_u64(0), &tuning);
        assert_eq!(field.len(), 1);
    }
}
