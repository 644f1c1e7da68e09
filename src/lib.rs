//! Rock-Paper-Scissors against an adaptive opponent.
//!
//! The machine treats the human as a first-order Markov chain: it counts
//! which throw tends to follow which, samples the predicted next throw from
//! those transition frequencies, and plays the counter. Counts persist
//! across sessions, so the opponent keeps what it has learned about you.

pub mod game;
pub mod markov;
pub mod players;
pub mod save;

/// Signed running score from the human's perspective.
pub type Score = i32;
/// Observed transition counts.
pub type Count = u64;
/// Normalized transition weights and sampling distributions.
pub type Probability = f32;

/// Random instance generation for testing.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

/// Pseudocount every transition cell starts from. Keeping all cells
/// positive means no throw can ever reach zero prediction probability.
pub const SMOOTHING: Count = 1;
/// Default location of the persisted transition counts.
pub const MODEL_PATH: &str = "roshambot_chain.json";
/// Default location of the plain-text session report.
pub const REPORT_PATH: &str = "roshambot_result.txt";

/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` and writes DEBUG level to file, INFO to terminal.
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("system clock")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
