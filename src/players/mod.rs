mod human;
mod robot;

pub use human::*;
pub use robot::*;

use crate::game::Throw;
use crate::markov::Chain;

/// Trait for entities that throw.
///
/// Both seats are consulted with the same public state: the current round
/// number, the learned transition table, and the human's last throw. The
/// human ignores the model; the machine ignores the prompt number.
pub trait Player {
    /// Commit to a throw for this round.
    fn act(&mut self, round: u32, chain: &Chain, last: Option<Throw>) -> Throw;
}
