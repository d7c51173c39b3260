//! asteroid CLI
//!
//! Click to start, press `a` to finish, click again to close.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use env_logger::{Env, Target};

use asteroid::game::{Controller, MonotonicTime, ScriptedInput, TextPresenter};
use asteroid::report::format_report;
use asteroid::tui;
use asteroid::types::{GameConfig, OutputFormat, DEFAULT_FPS};

#[derive(Parser)]
#[command(name = "asteroid")]
#[command(about = "Minimal MVC game loop with fixed-framerate pacing")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play in the terminal (click or Enter to start, `a` to finish)
    Play {
        #[command(flatten)]
        run: RunArgs,
    },

    /// Run headless from a scripted event sequence, printing each frame
    Script {
        /// Whitespace-separated poll results: `-`, `click`, `<key>`, or `click+<key>`
        events: String,

        #[command(flatten)]
        run: RunArgs,
    },
}

#[derive(clap::Args)]
struct RunArgs {
    /// Target frames per second
    #[arg(long, default_value_t = DEFAULT_FPS, value_parser = clap::value_parser!(u32).range(1..=1000))]
    fps: u32,

    /// Report format printed after the run
    #[arg(long, value_enum, default_value = "human")]
    format: OutputFormatArg,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormatArg {
    Human,
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Human => OutputFormat::Human,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play { run } => cmd_play(run),
        Commands::Script { events, run } => cmd_script(&events, run),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

// ============================================================================
// LOGGING
// ============================================================================

/// Route logs to `log_file` at info level, or use `fallback_filter` on stderr.
///
/// `RUST_LOG` overrides either default.
fn init_logging(log_file: Option<&Path>, fallback_filter: &str) -> Result<(), String> {
    let mut builder = match log_file {
        Some(path) => {
            let file = File::create(path)
                .map_err(|e| format!("Cannot open log file {}: {}", path.display(), e))?;
            let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("info"));
            builder.target(Target::Pipe(Box::new(file)));
            builder
        }
        None => env_logger::Builder::from_env(Env::default().default_filter_or(fallback_filter)),
    };
    builder.init();
    Ok(())
}

// ============================================================================
// COMMAND HANDLERS
// ============================================================================

fn cmd_play(args: RunArgs) -> Result<(), String> {
    // The alternate screen owns the terminal; stderr logs would corrupt it.
    init_logging(args.log_file.as_deref(), "off")?;

    let config = GameConfig::with_fps(args.fps);
    let report = tui::run(&config).map_err(|e| e.to_string())?;

    print!("{}", format_report(&report, args.format.into()));
    Ok(())
}

fn cmd_script(events: &str, args: RunArgs) -> Result<(), String> {
    init_logging(args.log_file.as_deref(), "warn")?;

    let config = GameConfig::with_fps(args.fps);
    let input = ScriptedInput::parse(events).map_err(|e| e.to_string())?;
    let presenter = TextPresenter::new(io::stdout().lock());

    let report = Controller::new(input, presenter, MonotonicTime, &config)
        .run()
        .map_err(|e| e.to_string())?;

    print!("{}", format_report(&report, args.format.into()));
    Ok(())
}
