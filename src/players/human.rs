use super::Player;
use crate::game::Throw;
use crate::markov::Chain;
use dialoguer::Input;

/// Human seat, prompting on the terminal.
///
/// Re-asks until the reply parses as a throw, so the session only ever
/// receives a valid one. The wait is blocking with no timeout.
#[derive(Debug, Default)]
pub struct Human;

impl Player for Human {
    fn act(&mut self, round: u32, _: &Chain, _: Option<Throw>) -> Throw {
        Input::new()
            .with_prompt(format!("{}) your throw [rock/paper/scissors]", round))
            .report(false)
            .validate_with(|i: &String| -> Result<(), &str> {
                match i.parse::<Throw>() {
                    Ok(_) => Ok(()),
                    Err(_) => Err("enter rock, paper, or scissors (or r/p/s)"),
                }
            })
            .interact()
            .unwrap()
            .parse::<Throw>()
            .unwrap()
    }
}
