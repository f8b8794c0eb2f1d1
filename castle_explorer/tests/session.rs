//! Full sessions driven from in-memory input.

use castle_explorer::{Castle, Console, ExitReason, Game};
use castle_rules::{CastleConfig, DoorRange, Encounter, Outcome, Room};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::io::{self, Write};

/// Lets the player through a fixed number of times, then ends the game.
struct Countdown(u32);

impl Encounter for Countdown {
    fn run(&mut self, out: &mut dyn Write, _rng: &mut dyn RngCore) -> io::Result<Outcome> {
        if self.0 == 0 {
            writeln!(out, "The torches gutter out.")?;
            return Ok(Outcome::End);
        }
        self.0 -= 1;
        writeln!(out, "The corridor goes on.")?;
        Ok(Outcome::Continue)
    }
}

fn run_session(game: &mut Game, input: &str, seed: u64) -> (ExitReason, String) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut console = Console::new(input.as_bytes(), Vec::new());
    let reason = game.play(&mut console, &mut rng).unwrap();
    (reason, String::from_utf8(console.into_output()).unwrap())
}

#[test]
fn test_builtin_castle_until_input_ends() {
    let config = CastleConfig::builtin().unwrap();
    let mut game = Game::from_config(&config);
    let input = "1\n".repeat(12);

    let (reason, output) = run_session(&mut game, &input, 1);

    assert_eq!(reason, ExitReason::Interrupted);
    assert!(output.starts_with("\nWelcome, adventurer.\n"));
    assert_eq!(output.matches("You step through and enter:").count(), 12);
    // Twelve visits cover the six rooms exactly twice.
    for name in &config.rooms {
        assert_eq!(output.matches(&format!("enter: {name}\n")).count(), 2);
    }
    assert!(output.ends_with("\n\nAdventure paused. Farewell.\n"));
}

#[test]
fn test_encounter_can_end_the_game() {
    let rooms = vec![Room::new("Great Hall", Countdown(2))];
    let mut game = Game::new(Castle::new(rooms, DoorRange::default()));

    let (reason, output) = run_session(&mut game, "1\nabc\n1\n2\nmaybe\nn\n", 2);

    assert_eq!(reason, ExitReason::Quit);
    assert_eq!(output.matches("The corridor goes on.").count(), 2);
    assert_eq!(output.matches("The torches gutter out.").count(), 1);
    assert!(output.contains("Invalid input: please enter a numeric value."));
    assert!(output.contains("Please respond with 'y' or 'n'."));
    assert!(output.ends_with("\nFarewell, adventurer.\n"));
}

#[test]
fn test_restart_reuses_rooms() {
    let rooms = vec![Room::new("Armory", Countdown(0))];
    let mut game = Game::new(Castle::new(rooms, DoorRange::new(1, 1).unwrap()));

    let (reason, output) = run_session(&mut game, "1\nyes\n1\nYES\n1\nno\n", 3);

    assert_eq!(reason, ExitReason::Quit);
    assert_eq!(output.matches("There are 1 doors before you.").count(), 3);
    assert_eq!(output.matches("Game Over").count(), 3);
    assert_eq!(game.castle().unvisited(), 1);
}
