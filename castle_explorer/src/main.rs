use anyhow::Context;
use castle_explorer::{AbortSignal, Console, Game, PAUSED_FAREWELL};
use castle_rules::CastleConfig;
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_target(false)
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(err = %format!("{e:#}"), "castle explorer stopped");
            ExitCode::FAILURE
        }
    }
}

/// Ctrl-C usually lands while the game is blocked on stdin, which the game
/// loop cannot observe, so the handler says goodbye and exits itself. It holds
/// the stdout lock throughout so the game loop cannot print a second farewell.
fn install_abort_handler(abort: AbortSignal) -> Result<(), ctrlc::Error> {
    ctrlc::set_handler(move || {
        let mut stdout = io::stdout().lock();
        abort.trigger();
        info!("player pressed Ctrl-C");
        let _ = writeln!(stdout, "{PAUSED_FAREWELL}");
        let _ = stdout.flush();
        std::process::exit(0);
    })
}

fn run() -> anyhow::Result<()> {
    let config = CastleConfig::builtin().context("loading the built-in castle")?;
    let mut game = Game::from_config(&config);

    let abort = AbortSignal::new();
    install_abort_handler(abort.clone()).context("installing the Ctrl-C handler")?;

    // Stdout stays unlocked between writes so the Ctrl-C handler can reach it.
    let mut console = Console::with_abort(io::stdin().lock(), io::stdout(), abort);
    let mut rng = rand::thread_rng();

    let reason = game
        .play(&mut console, &mut rng)
        .context("writing to the console")?;
    info!(?reason, "session finished");
    Ok(())
}
