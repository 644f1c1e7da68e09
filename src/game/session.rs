use super::outcome::Outcome;
use super::throw::Throw;
use super::transcript::Record;
use super::transcript::Transcript;
use crate::Score;
use crate::markov::Chain;
use crate::players::Player;
use crate::save::Report;
use crate::save::Store;
use anyhow::Result;
use colored::Colorize;

/// One full game, played until the score magnitude reaches the target.
///
/// Each round the machine commits first, the human answers, the outcome
/// moves the score, the model absorbs the human throw, and the transcript
/// grows a row. When the walk exits at ±target the counts are persisted
/// exactly once and the report is written. There is no round cap: the
/// score is a ±1/0 walk and the session runs until it escapes.
pub struct Session {
    target: Score,
    score: Score,
    round: u32,
    last: Option<Throw>,
    chain: Chain,
    transcript: Transcript,
    human: Box<dyn Player>,
    robot: Box<dyn Player>,
    store: Box<dyn Store>,
    report: Report,
}

impl Session {
    /// Wire up a session against whatever counts the store remembers,
    /// or the uniform prior when it remembers nothing usable.
    /// Callers validate that `target` is positive.
    pub fn new(
        target: Score,
        human: Box<dyn Player>,
        robot: Box<dyn Player>,
        store: Box<dyn Store>,
        report: Report,
    ) -> Self {
        let chain = match store.load() {
            Some(chain) => {
                log::info!("resuming learned transition counts");
                chain
            }
            None => {
                log::info!("no saved counts, starting from the uniform prior");
                Chain::uniform()
            }
        };
        Self {
            target,
            score: 0,
            round: 0,
            last: None,
            chain,
            transcript: Transcript::default(),
            human,
            robot,
            store,
            report,
        }
    }

    /// Play rounds until the target is reached, then settle up.
    pub fn run(&mut self) -> Result<()> {
        while self.has_rounds() {
            self.play_round();
        }
        self.finish()
    }

    fn has_rounds(&self) -> bool {
        self.score.abs() < self.target
    }

    /// The machine commits before the human is prompted, so the
    /// prediction can never peek at the throw it is trying to beat.
    fn play_round(&mut self) {
        self.round += 1;
        let robot = self.robot.act(self.round, &self.chain, self.last);
        let human = self.human.act(self.round, &self.chain, self.last);
        let outcome = Outcome::of(human, robot);
        self.score += outcome.delta();
        self.chain.observe(self.last, human);
        self.transcript.push(Record {
            round: self.round,
            human,
            robot,
            score: self.score,
        });
        self.last = Some(human);
        println!("[You/Robot]: [{}-{}]", human.label(), robot.label());
        println!("[Score]: {}", self.score);
        log::debug!(
            "round {}: {} vs {} is a {}, score {}",
            self.round,
            human,
            robot,
            outcome,
            self.score
        );
    }

    fn finish(&mut self) -> Result<()> {
        let verdict = format!("You {}", self.verdict());
        let closing = format!(
            "[Your Score / Your Target]: {}/{}\n{}",
            self.score, self.target, verdict
        );
        println!();
        println!("[Your Score / Your Target]: {}/{}", self.score, self.target);
        match self.score == self.target {
            true => println!("{}", verdict.green()),
            false => println!("{}", verdict.red()),
        }
        self.report.write(&self.transcript, &closing)?;
        self.store.save(&self.chain)?;
        log::info!("session over after {} rounds, counts saved", self.round);
        Ok(())
    }

    fn verdict(&self) -> &'static str {
        match self.score == self.target {
            true => "Win",
            false => "Lose",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::save::Memory;
    use std::path::PathBuf;
    use std::rc::Rc;

    /// Replays a fixed sequence of throws, ignoring all game state.
    struct Script(Vec<Throw>);

    impl Player for Script {
        fn act(&mut self, _: u32, _: &Chain, _: Option<Throw>) -> Throw {
            self.0.remove(0)
        }
    }

    fn report_path(name: &str) -> PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!(
            "roshambot_session_{}_{}.txt",
            name,
            std::process::id()
        ));
        path
    }

    fn session(
        target: Score,
        human: Vec<Throw>,
        robot: Vec<Throw>,
        store: Memory,
        name: &str,
    ) -> Session {
        Session::new(
            target,
            Box::new(Script(human)),
            Box::new(Script(robot)),
            Box::new(store),
            Report::new(report_path(name)),
        )
    }

    #[test]
    fn first_round_win_settles_without_learning() {
        use Throw::*;
        let store = Memory::default();
        let saves = Rc::clone(&store.saves);
        let mut session = session(1, vec![Rock], vec![Scissors], store, "one_round");
        session.run().unwrap();
        assert!(session.round == 1);
        assert!(session.score == 1);
        assert!(session.transcript.records().len() == 1);
        let saved = saves.borrow();
        assert!(saved.len() == 1);
        assert!(saved[0] == Chain::uniform());
    }

    #[test]
    fn five_round_walk_to_three() {
        use Throw::*;
        let human = vec![Rock, Rock, Paper, Scissors, Rock];
        let robot = vec![Scissors, Scissors, Paper, Scissors, Scissors];
        let store = Memory::default();
        let saves = Rc::clone(&store.saves);
        let mut session = session(3, human, robot, store, "five_rounds");
        session.run().unwrap();
        let records = session.transcript.records();
        assert!(records.len() == 5);
        assert!(records.iter().enumerate().all(|(i, r)| r.round as usize == i + 1));
        let mut running = 0;
        for record in records {
            running += Outcome::of(record.human, record.robot).delta();
            assert!(record.score == running);
        }
        assert!(session.score == 3);
        let saved = saves.borrow();
        assert!(saved[0].counts(Rock) == [2, 2, 1]);
        assert!(saved[0].counts(Paper) == [1, 1, 2]);
        assert!(saved[0].counts(Scissors) == [2, 1, 1]);
    }

    #[test]
    fn lost_session_reports_lose() {
        use Throw::*;
        let store = Memory::default();
        let mut session = session(1, vec![Rock], vec![Paper], store, "lost");
        session.run().unwrap();
        assert!(session.score == -1);
        let written = std::fs::read_to_string(report_path("lost")).unwrap();
        assert!(written.contains("[Round]"));
        assert!(written.contains("Rock-Paper"));
        assert!(written.contains("[Your Score / Your Target]: -1/1"));
        assert!(written.contains("You Lose"));
    }

    #[test]
    fn seeded_store_resumes_unchanged_after_one_round() {
        use Throw::*;
        let mut seeded = Chain::uniform();
        for _ in 0..49 {
            seeded.observe(Some(Rock), Scissors);
        }
        let store = Memory {
            seed: Some(seeded.clone()),
            saves: Default::default(),
        };
        let saves = Rc::clone(&store.saves);
        let mut session = session(1, vec![Paper], vec![Rock], store, "resume");
        session.run().unwrap();
        assert!(session.score == 1);
        let saved = saves.borrow();
        assert!(saved[0] == seeded);
    }
}
