use crate::game::Transcript;
use anyhow::Context;
use anyhow::Result;
use std::path::PathBuf;

/// Plain-text results writer. The finished transcript table, a blank
/// line, then the closing score lines. No color codes reach the file.
pub struct Report {
    path: PathBuf,
}

impl Report {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
    /// Overwrite any previous report at this path.
    pub fn write(&self, transcript: &Transcript, closing: &str) -> Result<()> {
        std::fs::write(&self.path, format!("{}\n\n{}\n", transcript, closing))
            .with_context(|| format!("write report to {}", self.path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Record;
    use crate::game::Throw;

    #[test]
    fn table_then_closing() {
        let mut path = std::env::temp_dir();
        path.push(format!("roshambot_report_{}.txt", std::process::id()));
        let mut transcript = Transcript::default();
        transcript.push(Record {
            round: 1,
            human: Throw::Rock,
            robot: Throw::Scissors,
            score: 1,
        });
        let report = Report::new(&path);
        report
            .write(&transcript, "[Your Score / Your Target]: 1/1\nYou Win")
            .unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with(&format!("{}\n\n", transcript)));
        assert!(written.ends_with("You Win\n"));
    }
}
