use std::io;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use regina_ex::cli::Cli;
use regina_ex::editor::RustylineEditor;
use regina_ex::{game, ExitCode, Game};

fn init_logging() {
    let filter = EnvFilter::try_from_env("REGINA_LOG").unwrap_or_else(|_| EnvFilter::new("off"));

    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("regina-ex: {}", e);
            match e.downcast_ref::<regina_ex::Error>() {
                Some(err) => ExitCode::from(err),
                None => ExitCode::InternalError,
            }
        }
    };

    std::process::exit(exit_code as i32);
}

fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let levels = regina_ex::load_levels(cli.levels.as_deref())?;

    if cli.list {
        game::list_levels(&levels, &mut io::stdout().lock())?;
        return Ok(ExitCode::Success);
    }

    let game = Game::new(levels)?;
    let mut editor = match cli.history_path() {
        Some(path) => RustylineEditor::with_history(path)?,
        None => RustylineEditor::new()?,
    };

    let ending = game.run(&mut editor, &mut io::stdout().lock());
    // Keep what was typed even if the session ended with an error.
    if let Err(err) = editor.save_history() {
        tracing::warn!(%err, "could not save history");
    }
    ending?;

    Ok(ExitCode::Success)
}
