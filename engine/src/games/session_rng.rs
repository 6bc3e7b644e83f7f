use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;

/// Seeded RNG owned by one game session, so random bots can be replayed from the seed.
#[derive(Debug, Clone)]
pub struct SessionRng {
    seed: u64,
    rng: StdRng,
}

impl SessionRng {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_random() -> Self {
        Self::new(rand::random())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        items.choose(&mut self.rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_choices() {
        let items: Vec<u32> = (0..50).collect();
        let mut first = SessionRng::new(7);
        let mut second = SessionRng::new(7);
        for _ in 0..20 {
            assert_eq!(first.choose(&items), second.choose(&items));
        }
    }

    #[test]
    fn test_choose_from_empty_is_none() {
        let mut rng = SessionRng::new(1);
        let items: [u8; 0] = [];
        assert_eq!(rng.choose(&items), None);
    }

    #[test]
    fn test_seed_is_kept() {
        assert_eq!(SessionRng::new(42).seed(), 42);
    }
}
