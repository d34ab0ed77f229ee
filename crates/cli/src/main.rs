#![deny(unsafe_code)]
//! CLI binary for the maze-gen perfect-maze generator.
//!
//! Subcommands:
//! - `generate <generator>`: clamp the size, carve a maze, print it
//! - `replay <record>`: regenerate a maze from a JSON replay record
//! - `list`: print available generators
//!
//! Logging goes through `env_logger`; set `RUST_LOG=debug` for seed and
//! timing details.

mod error;

use clap::{Parser, Subcommand};
use error::CliError;
use maze_gen_core::animation::{ChannelObserver, MazeEvent, NullObserver};
use maze_gen_core::{Completion, Generator, Replay};
use maze_gen_generators::dims::{clamp_dimensions, validate_dimensions};
use maze_gen_generators::text::render_text;
use maze_gen_generators::GeneratorKind;
use serde_json::{json, Value};
use std::process;
use std::sync::mpsc;
use std::thread;

/// ANSI sequence: clear screen and home the cursor.
const CLEAR: &str = "\x1b[2J\x1b[H";

#[derive(Parser)]
#[command(name = "maze-gen", about = "Perfect maze generator CLI")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Carve a maze and print it.
    Generate {
        /// Generator name (e.g. "dfs").
        generator: String,

        /// Maze width in cells (clamped to at least 5 and at most 3x the height).
        #[arg(short = 'W', long, default_value_t = 20)]
        width: usize,

        /// Maze height in cells (clamped to at least 5 and at most 3x the width).
        #[arg(short = 'H', long, default_value_t = 10)]
        height: usize,

        /// PRNG seed; 0 picks a random seed and reports it.
        #[arg(long, default_value_t = 0)]
        seed: u64,

        /// Generator options as a JSON string: animate, delay_ms, timing.
        #[arg(long, default_value = "{}")]
        params: String,
    },
    /// Regenerate a maze from a replay record printed by `generate --json`.
    Replay {
        /// Replay record as a JSON string.
        record: String,

        /// Generator options as a JSON string: animate, delay_ms, timing.
        #[arg(long, default_value = "{}")]
        params: String,
    },
    /// List available generators.
    List,
}

/// What a finished (or cancelled) run produced.
struct RunReport {
    generator: GeneratorKind,
    completion: Completion,
    elapsed_ms: Option<u64>,
}

fn parse_params(params: &str) -> Result<Value, CliError> {
    serde_json::from_str(params).map_err(|e| CliError::Input(format!("invalid --params JSON: {e}")))
}

/// Runs `generate` on a worker thread and prints animation frames as they
/// arrive, so pacing delays never block the terminal output.
fn run_generator(mut generator: GeneratorKind, show_frames: bool) -> Result<RunReport, CliError> {
    let (tx, rx) = mpsc::channel();
    generator.set_observer(Box::new(ChannelObserver::new(tx)));

    let worker = thread::spawn(move || {
        let outcome = generator.generate();
        // Dropping the channel observer ends the receive loop below.
        generator.set_observer(Box::new(NullObserver));
        outcome.map(|completion| (generator, completion))
    });

    let mut elapsed_ms = None;
    for event in rx {
        match event {
            MazeEvent::Updated(maze) if show_frames => print!("{CLEAR}{}", render_text(&maze)),
            MazeEvent::Updated(_) => {}
            MazeEvent::Timed(ms) => elapsed_ms = Some(ms),
        }
    }

    let (generator, completion) = worker
        .join()
        .map_err(|_| CliError::Worker("panicked during generation".into()))??;
    Ok(RunReport {
        generator,
        completion,
        elapsed_ms,
    })
}

fn report(run: &RunReport, json_mode: bool) -> Result<(), CliError> {
    let generator = &run.generator;
    let replay = generator.replay();
    if json_mode {
        let walls: Vec<Value> = generator
            .walls()
            .map(|w| {
                let (a, b) = w.cells();
                json!([[a.x, a.y], [b.x, b.y]])
            })
            .collect();
        let info = json!({
            "replay": replay,
            "params": generator.params(),
            "steps": run.completion.steps(),
            "finished": run.completion.is_finished(),
            "elapsed_ms": run.elapsed_ms,
            "walls": walls,
        });
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        print!("{}", render_text(generator.maze()));
        eprintln!(
            "generated {} ({}x{}, seed {}, {} walls removed)",
            replay.generator,
            replay.width,
            replay.height,
            replay.seed,
            run.completion.steps()
        );
        if let Some(ms) = run.elapsed_ms {
            eprintln!("generation: {ms}ms");
        }
    }
    Ok(())
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::List => {
            let generators = GeneratorKind::list_generators();
            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&json!({ "generators": generators }))?
                );
            } else {
                println!("Generators:");
                for name in generators {
                    println!("  {name}");
                }
            }
        }
        Command::Generate {
            generator,
            width,
            height,
            seed,
            params,
        } => {
            let params = parse_params(&params)?;
            let (w, h) = clamp_dimensions(width, height);
            if (w, h) != (width, height) {
                log::info!("clamped {width}x{height} to {w}x{h}");
            }
            validate_dimensions(w, h)?;
            let generator = GeneratorKind::from_json(&generator, w, h, seed, &params)?;
            let animate = generator.base().config().animation.enabled;
            let run = run_generator(generator, animate && !cli.json)?;
            report(&run, cli.json)?;
        }
        Command::Replay { record, params } => {
            let params = parse_params(&params)?;
            let record: Replay = serde_json::from_str(&record)
                .map_err(|e| CliError::Input(format!("invalid replay record: {e}")))?;
            let generator = GeneratorKind::from_replay(&record, &params)?;
            let animate = generator.base().config().animation.enabled;
            let run = run_generator(generator, animate && !cli.json)?;
            report(&run, cli.json)?;
        }
    }

    Ok(())
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
