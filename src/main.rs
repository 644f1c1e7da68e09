use clap::Parser;
use roshambot::MODEL_PATH;
use roshambot::REPORT_PATH;
use roshambot::Score;
use roshambot::game::Session;
use roshambot::players::Human;
use roshambot::players::Robot;
use roshambot::save::Json;
use roshambot::save::Report;
use std::path::PathBuf;

/// Play Rock-Paper-Scissors to a target score against an opponent
/// that learns your habits between sessions.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// First score magnitude that ends the game
    #[arg(value_parser = clap::value_parser!(Score).range(1..))]
    target: Score,
    /// Where the learned transition counts live
    #[arg(long, default_value = MODEL_PATH)]
    model: PathBuf,
    /// Where the plain-text session report goes
    #[arg(long, default_value = REPORT_PATH)]
    report: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    roshambot::log();
    let mut session = Session::new(
        args.target,
        Box::new(Human),
        Box::new(Robot::new()),
        Box::new(Json::new(args.model)),
        Report::new(args.report),
    );
    session.run()
}
