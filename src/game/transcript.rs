use super::throw::Throw;
use crate::Score;

/// One completed round: who threw what, and the score after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record {
    pub round: u32,
    pub human: Throw,
    pub robot: Throw,
    pub score: Score,
}

/// One row of the results table.
impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{:>7} {:>20} {:>15}",
            self.round,
            format!("{}-{}", self.human.label(), self.robot.label()),
            self.score
        )
    }
}

/// Ordered history of a session's rounds.
///
/// Exists for reporting only. The core never reads it back, so it carries
/// no game logic, just the rows of the results table.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Transcript(Vec<Record>);

impl Transcript {
    pub fn push(&mut self, record: Record) {
        self.0.push(record);
    }
    pub fn records(&self) -> &[Record] {
        &self.0
    }
}

impl std::fmt::Display for Transcript {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            std::iter::once(format!(
                "{:>7} {:>20} {:>15}",
                "[Round]", "[Human-Robot]", "[Total Score]"
            ))
            .chain(self.0.iter().map(Record::to_string))
            .collect::<Vec<String>>()
            .join("\n")
        )
    }
}
