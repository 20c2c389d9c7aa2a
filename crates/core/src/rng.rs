use rand::{rngs::StdRng, seq::SliceRandom, RngCore, SeedableRng};

#[derive(Debug, Clone)]
pub struct RngState {
    seed: u64,
    rng: StdRng,
}

impl RngState {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Seeds from the OS so the shoe can still be replayed from `seed()`.
    pub fn from_entropy() -> Self {
        Self::from_seed(rand::random::<u64>())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_gives_same_permutation() {
        let mut a: Vec<u32> = (0..52).collect();
        let mut b = a.clone();
        RngState::from_seed(7).shuffle(&mut a);
        RngState::from_seed(7).shuffle(&mut b);
        assert_eq!(a, b);
    }

    #[test]
    fn shuffle_keeps_every_item() {
        let mut items: Vec<u32> = (0..416).collect();
        RngState::from_seed(99).shuffle(&mut items);
        let mut sorted = items.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..416).collect::<Vec<_>>());
        assert_ne!(items, sorted);
    }
}
