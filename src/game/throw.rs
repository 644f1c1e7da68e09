use crate::Arbitrary;
use serde::Deserialize;
use serde::Serialize;

/// One of the three hand shapes.
///
/// Dominance is cyclic: rock beats scissors, paper beats rock, scissors
/// beats paper. [`beats`](Throw::beats) and [`counter`](Throw::counter)
/// spell the relation out in both directions.
///
/// The discriminant doubles as the column index of the transition table.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Throw {
    Rock = 0,
    Paper = 1,
    Scissors = 2,
}

impl Throw {
    /// All three throws in ordinal order.
    pub const fn all() -> [Self; 3] {
        [Self::Rock, Self::Paper, Self::Scissors]
    }
    /// The throw this one defeats.
    pub const fn beats(&self) -> Self {
        match self {
            Self::Rock => Self::Scissors,
            Self::Paper => Self::Rock,
            Self::Scissors => Self::Paper,
        }
    }
    /// The throw that defeats this one.
    pub const fn counter(&self) -> Self {
        match self {
            Self::Rock => Self::Paper,
            Self::Paper => Self::Scissors,
            Self::Scissors => Self::Rock,
        }
    }
    /// Capitalized name for transcripts and the persisted model.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Rock => "Rock",
            Self::Paper => "Paper",
            Self::Scissors => "Scissors",
        }
    }
}

/// u8 isomorphism
impl From<u8> for Throw {
    fn from(n: u8) -> Throw {
        match n {
            0 => Throw::Rock,
            1 => Throw::Paper,
            2 => Throw::Scissors,
            _ => unreachable!("invalid throw"),
        }
    }
}
impl From<Throw> for u8 {
    fn from(t: Throw) -> u8 {
        t as u8
    }
}

/// str isomorphism, case-insensitive, full name or first letter
impl TryFrom<&str> for Throw {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "rock" | "r" => Ok(Throw::Rock),
            "paper" | "p" => Ok(Throw::Paper),
            "scissors" | "s" => Ok(Throw::Scissors),
            _ => Err(anyhow::anyhow!("invalid throw str: {}", s)),
        }
    }
}
impl std::str::FromStr for Throw {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

impl std::fmt::Display for Throw {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Rock => write!(f, "rock"),
            Self::Paper => write!(f, "paper"),
            Self::Scissors => write!(f, "scissors"),
        }
    }
}

impl Arbitrary for Throw {
    fn random() -> Self {
        match rand::random_range(0..3) {
            0 => Self::Rock,
            1 => Self::Paper,
            _ => Self::Scissors,
        }
    }
}
