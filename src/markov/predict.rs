use super::chain::Chain;
use crate::game::Throw;
use rand::Rng;
use rand::distr::Distribution;
use rand::distr::weighted::WeightedIndex;
use rand::seq::IndexedRandom;

/// Sample the human's probable next throw from the transition row keyed by
/// their last one. A weighted draw from the normalized row, not an argmax.
pub fn predict<R: Rng>(chain: &Chain, last: Throw, rng: &mut R) -> Throw {
    let index = WeightedIndex::new(chain.density(last))
        .expect("smoothed counts are strictly positive")
        .sample(rng);
    Throw::from(index as u8)
}

/// Choose the machine's throw: a uniform draw when there is no history
/// yet, otherwise the counter of the predicted human throw.
pub fn forecast<R: Rng>(chain: &Chain, last: Option<Throw>, rng: &mut R) -> Throw {
    match last {
        None => Throw::all()
            .choose(rng)
            .copied()
            .expect("three throws to choose from"),
        Some(last) => predict(chain, last, rng).counter(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Rock row skewed to 50/52 on scissors.
    fn skewed() -> Chain {
        let mut chain = Chain::uniform();
        for _ in 0..49 {
            chain.observe(Some(Throw::Rock), Throw::Scissors);
        }
        chain
    }

    #[test]
    fn first_round_covers_all_throws() {
        let ref mut rng = rand::rng();
        let chain = Chain::uniform();
        let draws = (0..300)
            .map(|_| forecast(&chain, None, rng))
            .collect::<Vec<_>>();
        for throw in Throw::all() {
            assert!(draws.contains(&throw));
        }
    }

    #[test]
    fn prediction_follows_the_counts() {
        let ref mut rng = rand::rng();
        let chain = skewed();
        let scissors = (0..1000)
            .filter(|_| predict(&chain, Throw::Rock, rng) == Throw::Scissors)
            .count();
        assert!(scissors > 800);
    }

    #[test]
    fn forecast_counters_the_prediction() {
        let ref mut rng = rand::rng();
        let chain = skewed();
        let rocks = (0..1000)
            .filter(|_| forecast(&chain, Some(Throw::Rock), rng) == Throw::Rock)
            .count();
        assert!(rocks > 800);
    }
}
