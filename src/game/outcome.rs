use super::throw::Throw;
use crate::Score;

/// Result of one round from the human's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Draw,
    Loss,
}

impl Outcome {
    /// Resolve a pair of throws. Total over all nine pairs.
    pub fn of(human: Throw, robot: Throw) -> Self {
        if human == robot {
            Self::Draw
        } else if robot.beats() == human {
            Self::Loss
        } else {
            Self::Win
        }
    }
    /// Score movement for this outcome.
    pub const fn delta(&self) -> Score {
        match self {
            Self::Win => 1,
            Self::Draw => 0,
            Self::Loss => -1,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Win => write!(f, "win"),
            Self::Draw => write!(f, "draw"),
            Self::Loss => write!(f, "loss"),
        }
    }
}
