use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::types::{FieldSize, Point};

pub struct GameRng {
    rng: StdRng,
    seed: u64,
}

impl GameRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn from_random() -> Self {
        let seed: u64 = rand::rng().random();
        Self::new(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn random_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distr::uniform::SampleUniform,
        R: rand::distr::uniform::SampleRange<T>,
    {
        self.rng.random_range(range)
    }

    pub fn random_cell(&mut self, size: FieldSize) -> Point {
        Point::new(
            self.rng.random_range(0..size.width as i32),
            self.rng.random_range(0..size.height as i32),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_sequence() {
        let size = FieldSize::new(17, 11);
        let mut a = GameRng::new(42);
        let mut b = GameRng::new(42);
        for _ in 0..100 {
            assert_eq!(a.random_cell(size), b.random_cell(size));
        }
    }

    #[test]
    fn test_random_cell_in_bounds() {
        let size = FieldSize::new(5, 3);
        let mut rng = GameRng::new(42);
        for _ in 0..200 {
            let p = rng.random_cell(size);
            assert!(p.x >= 0 && p.x < 5);
            assert!(p.y >= 0 && p.y < 3);
        }
    }

    #[test]
    fn test_seed_is_reported() {
        assert_eq!(GameRng::new(7).seed(), 7);
    }
}
