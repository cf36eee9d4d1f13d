//! Tile generation policy
//!
//! - color: uniform over the six colors
//! - pattern: uniform over `Flat..=min(Triangle, level - 1)`, so level 1 only
//!   produces flat tiles and each level unlocks one more tier
//! - star: an independent roll in `0..=50` turns the tile into a star when it
//!   lands on `STAR_DRAW`, a 1 in 51 chance
//!
//! Draw order per tile is color, pattern, star roll.

use crate::rng::RandomSource;
use crate::tile::{Tile, TileId};
use crate::types::{TileColor, TilePattern, STAR_DRAW, STAR_ROLL_MAX};

/// Highest non-star pattern a tile can roll at `level` (level 0 counts as 1).
pub fn max_pattern_for_level(level: u32) -> TilePattern {
    let tier = level
        .saturating_sub(1)
        .min(TilePattern::MAX_NON_STAR.tier());
    TilePattern::from_tier(tier).unwrap_or(TilePattern::Flat)
}

/// Produces fresh tiles with unique ids.
#[derive(Debug, Clone)]
pub struct TileGenerator<R> {
    rng: R,
    next_id: TileId,
}

impl<R: RandomSource> TileGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng, next_id: 0 }
    }

    /// Generate a tile for cell (x, y).
    pub fn generate(&mut self, x: u8, y: u8, level: u32) -> Tile {
        let color = self
            .rng
            .pick(&TileColor::ALL)
            .unwrap_or(TileColor::Beige);

        let max_tier = max_pattern_for_level(level).tier();
        let mut pattern =
            TilePattern::from_tier(self.rng.int_inclusive(0, max_tier)).unwrap_or(TilePattern::Flat);

        if self.rng.int_inclusive(0, STAR_ROLL_MAX) == STAR_DRAW {
            pattern = TilePattern::Star;
        }

        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        Tile::new(id, x, y, color, pattern)
    }

    /// Id the next generated tile will receive.
    pub fn next_id(&self) -> TileId {
        self.next_id
    }

    /// Continue numbering after `id` (for grids built outside the generator).
    pub fn reserve_ids_through(&mut self, id: TileId) {
        self.next_id = self.next_id.max(id.wrapping_add(1));
    }

    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SimpleRng;

    /// Replays a fixed list of draws, offset into each requested range.
    struct Scripted(Vec<u32>, usize);

    impl RandomSource for Scripted {
        fn int_inclusive(&mut self, min: u32, max: u32) -> u32 {
            let v = self.0[self.1 % self.0.len()];
            self.1 += 1;
            if max <= min {
                min
            } else {
                min + v % (max - min + 1)
            }
        }
    }

    #[test]
    fn test_max_pattern_widens_with_level() {
        assert_eq!(max_pattern_for_level(0), TilePattern::Flat);
        assert_eq!(max_pattern_for_level(1), TilePattern::Flat);
        assert_eq!(max_pattern_for_level(2), TilePattern::Circle);
        assert_eq!(max_pattern_for_level(5), TilePattern::Triangle);
        assert_eq!(max_pattern_for_level(40), TilePattern::Triangle);
    }

    #[test]
    fn test_draw_order_color_pattern_star() {
        // color index 4 (Blue), pattern draw 2 (Cross at level 5), star roll 0.
        let mut generator = TileGenerator::new(Scripted(vec![4, 2, 0], 0));
        let tile = generator.generate(3, 6, 5);
        assert_eq!(tile.color, TileColor::Blue);
        assert_eq!(tile.pattern, TilePattern::Cross);
        assert_eq!((tile.x, tile.y), (3, 6));
    }

    #[test]
    fn test_star_roll_overrides_pattern() {
        let mut generator = TileGenerator::new(Scripted(vec![0, 1, STAR_DRAW], 0));
        let tile = generator.generate(0, 0, 3);
        assert_eq!(tile.pattern, TilePattern::Star);
    }

    #[test]
    fn test_level_one_never_rolls_tiers() {
        let mut generator = TileGenerator::new(SimpleRng::new(11));
        for i in 0..2_000 {
            let tile = generator.generate(0, 0, 1);
            assert!(
                tile.pattern == TilePattern::Flat || tile.pattern == TilePattern::Star,
                "tile {} rolled {:?}",
                i,
                tile.pattern
            );
        }
    }

    #[test]
    fn test_stars_are_rare() {
        let mut generator = TileGenerator::new(SimpleRng::new(3));
        let stars = (0..51_000)
            .filter(|_| generator.generate(0, 0, 1).is_star())
            .count();
        // Expected about 1000.
        assert!((700..1300).contains(&stars), "stars = {}", stars);
    }

    #[test]
    fn test_ids_are_unique() {
        let mut generator = TileGenerator::new(SimpleRng::new(1));
        let a = generator.generate(0, 0, 1);
        let b = generator.generate(0, 0, 1);
        assert_ne!(a.id, b.id);
        generator.reserve_ids_through(100);
        assert_eq!(generator.generate(0, 0, 1).id, 101);
    }
}
