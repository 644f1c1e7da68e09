use super::Player;
use crate::game::Throw;
use crate::markov;
use crate::markov::Chain;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// CPU seat. Owns its rng; the decisions themselves are the predictor's.
pub struct Robot {
    rng: SmallRng,
}

impl Robot {
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_os_rng(),
        }
    }
    /// Fixed-seed variant for reproducible play.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Default for Robot {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for Robot {
    fn act(&mut self, _: u32, chain: &Chain, last: Option<Throw>) -> Throw {
        markov::forecast(chain, last, &mut self.rng)
    }
}
