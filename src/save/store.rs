use crate::markov::Chain;
use anyhow::Context;
use anyhow::Result;
use std::path::PathBuf;

/// Where learned transition counts live between sessions.
///
/// Loading is forgiving: absent or malformed storage yields `None` and the
/// session starts from the uniform prior. Saving is not: a session that
/// cannot persist what it learned has no defined behavior, so write
/// failures propagate and end the process.
pub trait Store {
    /// Read back the persisted counts, if well-formed ones exist.
    fn load(&self) -> Option<Chain>;
    /// Overwrite the persisted counts. Called once, at session end.
    fn save(&self, chain: &Chain) -> Result<()>;
}

/// File-backed store holding the model's JSON shape:
/// `{"Rock": [r, p, s], "Paper": [..], "Scissors": [..]}`.
pub struct Json {
    path: PathBuf,
}

impl Json {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Store for Json {
    fn load(&self) -> Option<Chain> {
        let text = std::fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str::<Chain>(&text) {
            Ok(chain) if chain.wellformed() => Some(chain),
            _ => {
                log::warn!("malformed model at {}, starting over", self.path.display());
                None
            }
        }
    }
    fn save(&self, chain: &Chain) -> Result<()> {
        let text = serde_json::to_string_pretty(chain).context("serialize transition counts")?;
        std::fs::write(&self.path, text)
            .with_context(|| format!("write model to {}", self.path.display()))
    }
}

/// In-memory store for exercising sessions without touching disk.
/// Keep a clone of `saves` to observe what a session persisted.
#[cfg(test)]
#[derive(Default)]
pub struct Memory {
    pub seed: Option<Chain>,
    pub saves: std::rc::Rc<std::cell::RefCell<Vec<Chain>>>,
}

#[cfg(test)]
impl Store for Memory {
    fn load(&self) -> Option<Chain> {
        self.seed.clone()
    }
    fn save(&self, chain: &Chain) -> Result<()> {
        self.saves.borrow_mut().push(chain.clone());
        Ok(())
    }
}
