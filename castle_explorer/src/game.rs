//! The game loop.
//!
//! The player keeps walking from room to room until an encounter ends the
//! game, then chooses whether to explore again. Running out of input at any
//! prompt ends the session with a farewell instead of an error.

use castle_rules::{CastleConfig, Outcome, SenseClueGenerator};
use rand::RngCore;
use std::cell::RefCell;
use std::io::{self, BufRead, Write};
use std::rc::Rc;

use crate::castle::Castle;
use crate::console::Console;
use crate::error::PlayError;

const WELCOME: &str = "\nWelcome, adventurer.";
const OBJECTIVE: &str =
    "Objective: Navigate through the castle's doors and seek the hidden treasure.\n";
const GAME_OVER: &str = "\nGame Over\n";
const RESET_NOTICE: &str = "Room selector has been reset; all rooms are available again.";
const RESTART_PROMPT: &str = "Would you like to explore a different castle? (y/n): ";
const RESTART_HINT: &str = "Please respond with 'y' or 'n'.";
const NEW_EXPLORATION: &str = "\nA new exploration begins...\n";
const FAREWELL: &str = "\nFarewell, adventurer.";
/// Printed when the player walks away mid-game.
pub const PAUSED_FAREWELL: &str = "\n\nAdventure paused. Farewell.";

/// How a play session finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    /// The player declined to play again.
    Quit,
    /// Input ended or was aborted while waiting for the player.
    Interrupted,
}

/// The player's answer to the restart question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RestartChoice {
    Restart,
    Quit,
}

impl RestartChoice {
    fn parse(answer: &str) -> Option<Self> {
        match answer.to_lowercase().as_str() {
            "y" | "yes" => Some(Self::Restart),
            "n" | "no" => Some(Self::Quit),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub struct Game {
    castle: Castle,
}

impl Game {
    pub fn new(castle: Castle) -> Self {
        Self { castle }
    }

    /// Build a game whose rooms share one sense/clue generator.
    pub fn from_config(config: &CastleConfig) -> Self {
        let generator = Rc::new(RefCell::new(SenseClueGenerator::new(&config.corpus())));
        Self::new(Castle::from_config(config, generator))
    }

    pub fn castle(&self) -> &Castle {
        &self.castle
    }

    /// Play until the player quits or input runs out.
    ///
    /// Only failures to write to the console are reported as errors.
    pub fn play<R, W, G>(
        &mut self,
        console: &mut Console<R, W>,
        rng: &mut G,
    ) -> io::Result<ExitReason>
    where
        R: BufRead,
        W: Write,
        G: RngCore,
    {
        console.say(WELCOME)?;
        console.say(OBJECTIVE)?;
        tracing::info!(rooms = self.castle.rooms().len(), "exploration started");

        match self.explore(console, rng) {
            Ok(()) => {
                tracing::info!("player left the castle");
                Ok(ExitReason::Quit)
            }
            Err(PlayError::Io(e)) => Err(e),
            Err(e) => {
                tracing::info!(reason = %e, "exploration interrupted");
                console.say(PAUSED_FAREWELL)?;
                Ok(ExitReason::Interrupted)
            }
        }
    }

    fn explore<R, W, G>(
        &mut self,
        console: &mut Console<R, W>,
        rng: &mut G,
    ) -> Result<(), PlayError>
    where
        R: BufRead,
        W: Write,
        G: RngCore,
    {
        loop {
            let outcome = self.castle.next(console, rng)?;
            if outcome == Outcome::Continue {
                continue;
            }

            self.castle.reset();
            console.say(RESET_NOTICE)?;
            console.say(GAME_OVER)?;

            match Self::ask_restart(console)? {
                RestartChoice::Restart => {
                    tracing::info!("exploration restarted");
                    console.say(NEW_EXPLORATION)?;
                }
                RestartChoice::Quit => {
                    console.say(FAREWELL)?;
                    return Ok(());
                }
            }
        }
    }

    fn ask_restart<R: BufRead, W: Write>(
        console: &mut Console<R, W>,
    ) -> Result<RestartChoice, PlayError> {
        loop {
            let answer = console.prompt(RESTART_PROMPT)?;
            match RestartChoice::parse(&answer) {
                Some(choice) => return Ok(choice),
                None => console.say(RESTART_HINT)?,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::AbortSignal;
    use castle_rules::{DoorRange, Encounter, Room};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    struct Trapdoor;

    impl Encounter for Trapdoor {
        fn run(&mut self, out: &mut dyn Write, _rng: &mut dyn RngCore) -> io::Result<Outcome> {
            writeln!(out, "The floor drops away.")?;
            Ok(Outcome::End)
        }
    }

    fn trapdoor_game() -> Game {
        Game::new(Castle::new(vec![Room::new("Dungeon", Trapdoor)], DoorRange::default()))
    }

    fn play(game: &mut Game, input: &str, seed: u64) -> (ExitReason, String) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut console = Console::new(input.as_bytes(), Vec::new());
        let reason = game.play(&mut console, &mut rng).unwrap();
        (reason, String::from_utf8(console.into_output()).unwrap())
    }

    #[test]
    fn test_restart_choice_parse() {
        assert_eq!(RestartChoice::parse("Y"), Some(RestartChoice::Restart));
        assert_eq!(RestartChoice::parse("yes"), Some(RestartChoice::Restart));
        assert_eq!(RestartChoice::parse("No"), Some(RestartChoice::Quit));
        assert_eq!(RestartChoice::parse("n"), Some(RestartChoice::Quit));
        assert_eq!(RestartChoice::parse("maybe"), None);
        assert_eq!(RestartChoice::parse(""), None);
    }

    #[test]
    fn test_invalid_restart_answer_reprompts() {
        let mut game = trapdoor_game();

        let (reason, output) = play(&mut game, "1\nmaybe\nn\n", 51);

        assert_eq!(reason, ExitReason::Quit);
        assert_eq!(output.matches(RESTART_PROMPT).count(), 2);
        assert!(output.contains(RESTART_HINT));
        assert!(output.ends_with("\nFarewell, adventurer.\n"));
    }

    #[test]
    fn test_restart_then_quit() {
        let mut game = trapdoor_game();

        let (reason, output) = play(&mut game, "1\nY\n2\nNo\n", 52);

        assert_eq!(reason, ExitReason::Quit);
        assert_eq!(output.matches("Game Over").count(), 2);
        assert_eq!(output.matches("A new exploration begins...").count(), 1);
        assert_eq!(output.matches(RESET_NOTICE).count(), 2);
    }

    #[test]
    fn test_end_of_input_during_door_prompt() {
        let config = CastleConfig::builtin().unwrap();
        let mut game = Game::from_config(&config);

        let (reason, output) = play(&mut game, "1\n2\nnot a door\n", 53);

        assert_eq!(reason, ExitReason::Interrupted);
        assert_eq!(output.matches("You step through and enter:").count(), 2);
        assert!(output.ends_with(&format!("{PAUSED_FAREWELL}\n")));
        assert!(!output.contains("Game Over"));
    }

    #[test]
    fn test_end_of_input_during_restart_prompt() {
        let mut game = trapdoor_game();

        let (reason, output) = play(&mut game, "1\n", 54);

        assert_eq!(reason, ExitReason::Interrupted);
        assert!(output.starts_with(WELCOME));
        assert!(output.contains("Game Over"));
        assert!(output.ends_with(&format!("{PAUSED_FAREWELL}\n")));
    }

    /// Walks away from the game as soon as the room is entered.
    struct WalkAway(AbortSignal);

    impl Encounter for WalkAway {
        fn run(&mut self, _out: &mut dyn Write, _rng: &mut dyn RngCore) -> io::Result<Outcome> {
            self.0.trigger();
            Ok(Outcome::Continue)
        }
    }

    #[test]
    fn test_abort_ends_with_farewell() {
        let abort = AbortSignal::new();
        let rooms = vec![Room::new("Throne Room", WalkAway(abort.clone()))];
        let mut game = Game::new(Castle::new(rooms, DoorRange::default()));
        let mut rng = ChaCha8Rng::seed_from_u64(56);
        let mut console = Console::with_abort(&b"1\n2\n2\n"[..], Vec::new(), abort);

        let reason = game.play(&mut console, &mut rng).unwrap();

        assert_eq!(reason, ExitReason::Interrupted);
        let output = String::from_utf8(console.into_output()).unwrap();
        assert_eq!(output.matches("You step through and enter:").count(), 1);
        assert_eq!(output.matches("Choose a door").count(), 1);
        assert!(output.ends_with(&format!("{PAUSED_FAREWELL}\n")));
    }

    #[test]
    fn test_rooms_share_one_generator() {
        let config = CastleConfig::from_toml_str(
            r#"
            rooms = ["Solar"]
            clues = ["c1", "c2"]
            senses = []
            "#,
        )
        .unwrap();
        let mut game = Game::from_config(&config);

        let (_, output) = play(&mut game, "1\n2\n", 55);

        // Two visits to the same room exhaust both clues exactly once.
        assert_eq!(output.matches("\nc1\n").count(), 1);
        assert_eq!(output.matches("\nc2\n").count(), 1);
    }
}
