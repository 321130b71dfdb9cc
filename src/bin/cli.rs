use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::Editor;

use lifosim::common::config::SimulatorConfig;
use lifosim::input::{
    check_frame_count, example_input, format_references, parse_reference_string, random_references,
};
use lifosim::report::chart::{event_strip, series_up_to};
use lifosim::report::export::{default_file_name, write_report, ExportFormat};
use lifosim::report::narration::{describe, stack_line};
use lifosim::report::{format_ratio, render_table};
use lifosim::simulation::fault_curve;
use lifosim::{parse_input, simulate, Session, SimulationHistory, SimulationInput, StepRecord, Tally};

const HISTORY_FILE: &str = ".lifosh_history";

#[derive(Parser)]
#[command(author, version, about = "lifosh - step through the LIFO page replacement algorithm")]
struct Cli {
    /// JSON configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Number of memory frames
    #[arg(short, long, global = true)]
    frames: Option<String>,

    /// Command to execute
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate a reference string and print every step
    Run {
        /// Page references separated by spaces or commas
        #[arg(short, long)]
        refs: String,

        /// Also print the action log
        #[arg(short, long)]
        verbose: bool,
    },

    /// Simulate the classroom example (7 0 1 2 0 3 0 4, 3 frames)
    Example,

    /// Simulate a random reference string
    Random {
        /// Seed for a reproducible string
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Compare fault counts for every frame count up to a maximum
    Compare {
        /// Page references separated by spaces or commas
        #[arg(short, long)]
        refs: String,

        /// Largest frame count to try
        #[arg(short, long)]
        max_frames: Option<usize>,
    },

    /// Write a report of a simulation to a file
    Export {
        /// Page references separated by spaces or commas
        #[arg(short, long)]
        refs: String,

        /// Report format: json or text
        #[arg(long, default_value = "json")]
        format: String,

        /// Output path, defaults to LIFO_Report_<date>.<ext>
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Start an interactive shell
    Shell,
}

/// A parsed shell line
#[derive(Debug, PartialEq, Eq)]
enum ShellCommand {
    Load { frames: String, refs: String },
    Example,
    Random,
    Start,
    Next,
    Prev,
    Goto(usize),
    Play,
    Speed(u64),
    Show,
    Table,
    Stats,
    Chart,
    Export { path: PathBuf, format: ExportFormat },
    Reset,
    Help,
    Exit,
}

impl ShellCommand {
    fn parse(line: &str) -> Result<Self, String> {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Err("empty command".to_string());
        };
        let rest: Vec<&str> = words.collect();

        let command = match head.to_lowercase().as_str() {
            "load" => {
                let Some((frames, refs)) = rest.split_first() else {
                    return Err("usage: load <frames> <references...>".to_string());
                };
                if refs.is_empty() {
                    return Err("usage: load <frames> <references...>".to_string());
                }
                ShellCommand::Load {
                    frames: frames.to_string(),
                    refs: refs.join(" "),
                }
            }
            "example" => ShellCommand::Example,
            "random" => ShellCommand::Random,
            "start" => ShellCommand::Start,
            "next" | "n" => ShellCommand::Next,
            "prev" | "p" => ShellCommand::Prev,
            "goto" | "g" => {
                let step = rest
                    .first()
                    .and_then(|s| s.parse().ok())
                    .ok_or_else(|| "usage: goto <step>".to_string())?;
                ShellCommand::Goto(step)
            }
            "play" => ShellCommand::Play,
            "speed" => {
                let ms = rest
                    .first()
                    .and_then(|s| s.parse().ok())
                    .ok_or_else(|| "usage: speed <milliseconds>".to_string())?;
                ShellCommand::Speed(ms)
            }
            "show" => ShellCommand::Show,
            "table" => ShellCommand::Table,
            "stats" => ShellCommand::Stats,
            "chart" => ShellCommand::Chart,
            "export" => {
                let Some(path) = rest.first() else {
                    return Err("usage: export <path> [json|text]".to_string());
                };
                let format = match rest.get(1) {
                    Some(format) => format.parse().map_err(|e: lifosim::ExportError| e.to_string())?,
                    None => ExportFormat::Json,
                };
                ShellCommand::Export {
                    path: PathBuf::from(path),
                    format,
                }
            }
            "reset" => ShellCommand::Reset,
            "help" => ShellCommand::Help,
            "exit" | "quit" => ShellCommand::Exit,
            other => return Err(format!("unknown command '{}', type 'help'", other)),
        };
        Ok(command)
    }
}

fn load_config(path: Option<&PathBuf>) -> Result<SimulatorConfig> {
    match path {
        Some(path) => SimulatorConfig::from_file(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display())),
        None => Ok(SimulatorConfig::default()),
    }
}

fn frames_text(cli: &Cli, config: &SimulatorConfig) -> String {
    cli.frames
        .clone()
        .unwrap_or_else(|| config.default_frames.to_string())
}

fn print_run(input: &SimulationInput, history: &SimulationHistory, verbose: bool) {
    println!(
        "Reference string: {} ({} frames)",
        format_references(input.references()),
        input.frame_count()
    );
    if verbose {
        for step in history {
            println!("{:>3}. {}", step.step_index, describe(step));
            println!("     {}", stack_line(step));
        }
    }
    print!("{}", render_table(history));
    print_tally(history.totals());
}

fn print_tally(tally: Tally) {
    println!(
        "Hits: {}  Faults: {}  Hit ratio: {}",
        tally.hits,
        tally.faults,
        format_ratio(tally)
    );
}

fn print_step(step: &StepRecord, total: usize) {
    println!("Step {}/{}: {}", step.step_index, total, describe(step));
    let frames: Vec<String> = step
        .frames_after
        .iter()
        .zip(&step.frame_ages)
        .map(|(slot, age)| match slot {
            Some(page) => format!("[{} age {}]", page, age),
            None => "[-]".to_string(),
        })
        .collect();
    println!("  Frames: {}", frames.join(" "));
    println!("  {}", stack_line(step));
}

fn print_help() {
    println!("Available commands:");
    println!("  load <frames> <refs...>       - Validate and simulate a reference string");
    println!("  example                       - Load 7 0 1 2 0 3 0 4 with 3 frames");
    println!("  random                        - Load a random reference string");
    println!("  start                         - Go to the first step");
    println!("  next | n                      - Go to the next step");
    println!("  prev | p                      - Go to the previous step");
    println!("  goto <step>                   - Jump to a step (1-based)");
    println!("  play                          - Auto-advance to the last step");
    println!("  speed <ms>                    - Set the auto-play delay");
    println!("  show                          - Show the current step");
    println!("  table                         - Show every step");
    println!("  stats                         - Hits, faults and hit ratio so far");
    println!("  chart                         - Hit/fault strip so far");
    println!("  export <path> [json|text]     - Write a report");
    println!("  reset                         - Clear the loaded simulation");
    println!("  help                          - Display this help message");
    println!("  exit                          - Exit the shell");
}

fn run_shell(config: SimulatorConfig, initial_frames: Option<String>) -> Result<()> {
    println!("LIFO page replacement simulator. Type 'help' for assistance or 'exit' to quit.");

    let mut delay = Duration::from_millis(config.playback_delay_ms);
    let default_frames = initial_frames.unwrap_or_else(|| config.default_frames.to_string());
    let mut session = Session::new(config);

    let mut rl = Editor::<(), DefaultHistory>::new()?;
    if let Err(err) = rl.load_history(HISTORY_FILE) {
        if !err.to_string().contains("No such file or directory") {
            println!("Error loading history: {}", err);
        }
    }

    loop {
        let readline = rl.readline("lifo> ");
        match readline {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(line);

                let command = match ShellCommand::parse(line) {
                    Ok(command) => command,
                    Err(msg) => {
                        println!("Error: {}", msg);
                        continue;
                    }
                };
                if command == ShellCommand::Exit {
                    println!("Goodbye!");
                    break;
                }
                if let Err(err) = execute(&mut session, command, &default_frames, &mut delay) {
                    println!("Error: {}", err);
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            }
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                break;
            }
            Err(err) => {
                println!("Error: {}", err);
                break;
            }
        }
    }

    if let Err(err) = rl.save_history(HISTORY_FILE) {
        println!("Error saving history: {}", err);
    }
    Ok(())
}

fn execute(
    session: &mut Session,
    command: ShellCommand,
    default_frames: &str,
    delay: &mut Duration,
) -> Result<()> {
    match command {
        ShellCommand::Load { frames, refs } => {
            let history = session.load(&frames, &refs)?;
            println!(
                "Loaded successfully! {} pages with {} frames. Type 'start' to begin.",
                history.len(),
                history.frame_count()
            );
        }
        ShellCommand::Example => {
            let input = example_input();
            println!("Example loaded: {} with {} frames", format_references(input.references()), input.frame_count());
            session.load_input(input);
        }
        ShellCommand::Random => {
            let refs = random_references(&mut StdRng::from_entropy(), session.config())?;
            let refs = format_references(&refs);
            println!("Random reference string generated: {}", refs);
            session.load(default_frames, &refs)?;
        }
        ShellCommand::Start => {
            let total = session.history()?.len();
            print_step(session.start()?, total);
        }
        ShellCommand::Next => {
            let total = session.history()?.len();
            print_step(session.next()?, total);
        }
        ShellCommand::Prev => {
            let total = session.history()?.len();
            print_step(session.prev()?, total);
        }
        ShellCommand::Goto(step) => {
            let total = session.history()?.len();
            print_step(session.goto(step)?, total);
        }
        ShellCommand::Play => {
            let total = session.history()?.len();
            if session.is_finished() {
                session.rewind()?;
            }
            while session.can_step_forward() {
                print_step(session.next()?, total);
                if session.can_step_forward() {
                    thread::sleep(*delay);
                }
            }
            print_tally(session.tally()?);
        }
        ShellCommand::Speed(ms) => {
            *delay = Duration::from_millis(ms);
            println!("Auto-play delay set to {} ms", ms);
        }
        ShellCommand::Show => match session.current()? {
            Some(step) => print_step(step, session.history()?.len()),
            None => println!("Not started. Type 'start' to begin."),
        },
        ShellCommand::Table => print!("{}", render_table(session.history()?)),
        ShellCommand::Stats => {
            let cursor = session.cursor();
            println!("Step {} of {}", cursor.processed(), session.history()?.len());
            print_tally(session.tally()?);
        }
        ShellCommand::Chart => {
            let points = series_up_to(session.history()?, session.cursor())?;
            println!("Events: {}", event_strip(&points));
            if let Some(last) = points.last() {
                println!("Hit ratio: {:.1}%", last.hit_ratio);
            }
        }
        ShellCommand::Export { path, format } => {
            write_report(session.input()?, session.history()?, format, &path)?;
            println!("Report written to {}", path.display());
        }
        ShellCommand::Reset => {
            session.reset();
            println!("Simulator reset. Load new values to begin.");
        }
        ShellCommand::Help => print_help(),
        ShellCommand::Exit => {}
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_ref())?;

    match &cli.command {
        Some(Commands::Run { refs, verbose }) => {
            let input = parse_input(&frames_text(&cli, &config), refs, &config)?;
            print_run(&input, &simulate(&input), *verbose);
        }
        Some(Commands::Example) => {
            let input = example_input();
            print_run(&input, &simulate(&input), true);
        }
        Some(Commands::Random { seed }) => {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(*seed),
                None => StdRng::from_entropy(),
            };
            let refs = format_references(&random_references(&mut rng, &config)?);
            let input = parse_input(&frames_text(&cli, &config), &refs, &config)?;
            print_run(&input, &simulate(&input), false);
        }
        Some(Commands::Compare { refs, max_frames }) => {
            let references = parse_reference_string(refs)?;
            let max_frames = check_frame_count(max_frames.unwrap_or(config.max_frames), config.max_frames)?;
            let curve = fault_curve(&references, 1..=max_frames);
            println!("Reference string: {}", format_references(&references));
            println!("| Frames | Hits | Faults | Hit ratio |");
            for point in curve.points() {
                println!(
                    "| {:>6} | {:>4} | {:>6} | {:>9} |",
                    point.frame_count,
                    point.tally.hits,
                    point.tally.faults,
                    format_ratio(point.tally)
                );
            }
            if curve.is_monotonic() {
                println!("No Belady anomaly: faults never increase with more frames.");
            } else {
                println!("Belady anomaly detected.");
            }
        }
        Some(Commands::Export { refs, format, output }) => {
            let format: ExportFormat = format.parse()?;
            let input = parse_input(&frames_text(&cli, &config), refs, &config)?;
            let history = simulate(&input);
            let path = output
                .clone()
                .unwrap_or_else(|| default_file_name(format, chrono::Local::now().date_naive()));
            write_report(&input, &history, format, &path)
                .with_context(|| format!("Failed to write report to {}", path.display()))?;
            println!("Report written to {}", path.display());
        }
        Some(Commands::Shell) | None => {
            run_shell(config, cli.frames.clone())?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_navigation_commands() {
        assert_eq!(ShellCommand::parse("next"), Ok(ShellCommand::Next));
        assert_eq!(ShellCommand::parse("  P "), Ok(ShellCommand::Prev));
        assert_eq!(ShellCommand::parse("goto 4"), Ok(ShellCommand::Goto(4)));
        assert_eq!(ShellCommand::parse("speed 250"), Ok(ShellCommand::Speed(250)));
        assert_eq!(ShellCommand::parse("quit"), Ok(ShellCommand::Exit));
    }

    #[test]
    fn test_parse_load_joins_references() {
        assert_eq!(
            ShellCommand::parse("load 3 7 0 1,2"),
            Ok(ShellCommand::Load {
                frames: "3".to_string(),
                refs: "7 0 1,2".to_string()
            })
        );
        assert!(ShellCommand::parse("load 3").is_err());
    }

    #[test]
    fn test_parse_export() {
        assert_eq!(
            ShellCommand::parse("export out.txt text"),
            Ok(ShellCommand::Export {
                path: PathBuf::from("out.txt"),
                format: ExportFormat::Text
            })
        );
        assert!(ShellCommand::parse("export out.pdf pdf").is_err());
    }

    #[test]
    fn test_parse_rejects_unknown_and_malformed() {
        assert!(ShellCommand::parse("goto").is_err());
        assert!(ShellCommand::parse("goto x").is_err());
        assert!(ShellCommand::parse("fly").is_err());
    }

    #[test]
    fn test_execute_walks_session() {
        let mut session = Session::default();
        let mut delay = Duration::from_millis(0);

        execute(&mut session, ShellCommand::Example, "3", &mut delay).unwrap();
        execute(&mut session, ShellCommand::Start, "3", &mut delay).unwrap();
        execute(&mut session, ShellCommand::Play, "3", &mut delay).unwrap();
        assert!(session.is_finished());
        assert!(execute(&mut session, ShellCommand::Next, "3", &mut delay).is_err());

        execute(&mut session, ShellCommand::Reset, "3", &mut delay).unwrap();
        assert!(execute(&mut session, ShellCommand::Show, "3", &mut delay).is_err());
    }

    #[test]
    fn test_random_with_empty_page_range_is_an_error() {
        let mut session = Session::new(SimulatorConfig {
            random_page_bound: 0,
            ..SimulatorConfig::default()
        });
        let mut delay = Duration::from_millis(0);

        assert!(execute(&mut session, ShellCommand::Random, "3", &mut delay).is_err());
        assert!(!session.is_loaded());
    }

    #[test]
    fn test_print_helpers_do_not_panic() {
        let input = example_input();
        let history = simulate(&input);
        print_run(&input, &history, true);
        print_help();
    }
}
