use crate::Count;
use crate::Probability;
use crate::SMOOTHING;
use crate::game::Throw;
use serde::Deserialize;
use serde::Serialize;
use std::collections::BTreeMap;

/// First-order transition counts over the human's throws.
///
/// Each row keys on the previous throw and counts which throw followed it.
/// Every cell starts at [`SMOOTHING`] and only ever grows, so every row sum
/// is at least 3 and normalization can never divide by zero or pin a throw
/// at zero probability.
///
/// Serializes as a name-keyed map of three-count rows, the exact shape the
/// model file carries between sessions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chain(BTreeMap<Throw, [Count; 3]>);

impl Chain {
    /// The maximum-entropy prior: all cells at the smoothing pseudocount.
    pub fn uniform() -> Self {
        Self(
            Throw::all()
                .into_iter()
                .map(|t| (t, [SMOOTHING; 3]))
                .collect(),
        )
    }

    /// Record one observed transition, incrementing exactly one cell.
    /// The first round of a session has no predecessor and teaches nothing.
    /// Counts saturate at the integer ceiling.
    pub fn observe(&mut self, previous: Option<Throw>, next: Throw) {
        if let Some(previous) = previous {
            let row = self.0.get_mut(&previous).expect("every throw has a row");
            let cell = &mut row[u8::from(next) as usize];
            *cell = cell.saturating_add(1);
        }
    }

    /// The raw count row for a previous throw, in ordinal order.
    pub fn counts(&self, previous: Throw) -> [Count; 3] {
        *self.0.get(&previous).expect("every throw has a row")
    }

    /// The count row normalized to probabilities. Sums to 1 and has no
    /// zero entry, by the smoothing invariant. The row mass is widened to
    /// u128 so no combination of stored counts can overflow it.
    pub fn density(&self, previous: Throw) -> [Probability; 3] {
        let row = self.counts(previous);
        let mass = row.iter().map(|&c| c as u128).sum::<u128>() as Probability;
        row.map(|c| c as Probability / mass)
    }

    /// Whether a deserialized table upholds the in-memory invariants:
    /// all three rows present, every cell at least the smoothing count.
    /// Anything else is treated as an absent store.
    pub fn wellformed(&self) -> bool {
        self.0.len() == 3
            && Throw::all()
                .iter()
                .all(|t| self.0.get(t).is_some_and(|row| row.iter().all(|c| *c >= SMOOTHING)))
    }
}

impl Default for Chain {
    fn default() -> Self {
        Self::uniform()
    }
}
