//! Civic Planner - Entry Point
//!
//! Loads a scenario, then reads commands line by line (stdin or a script
//! file) and applies them to the simulation until `close` or end of input.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use civic_planner::city::PlanSummary;
use civic_planner::command::parse_command;
use civic_planner::config::load_scenario;
use civic_planner::simulation::{Action, ActionOutput, Session};

/// Turn-based urban development simulation
#[derive(Parser, Debug)]
#[command(name = "civic-planner")]
#[command(about = "Run an urban development simulation from a scenario file")]
struct Args {
    /// Scenario file (`.toml`, or the line format used by the shell)
    config: PathBuf,

    /// Output format for the results printed on close
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Read commands from this file instead of stdin
    #[arg(long)]
    script: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("civic_planner=info")),
        )
        .init();

    let args = Args::parse();

    let simulation = load_scenario(&args.config)?;
    let mut session = Session::new(simulation);
    session.simulation_mut().open();
    println!("The simulation has started");

    let input: Box<dyn BufRead> = match &args.script {
        Some(path) => Box::new(BufReader::new(File::open(path)?)),
        None => Box::new(BufReader::new(io::stdin())),
    };
    let interactive = args.script.is_none();

    let mut lines = input.lines();
    while session.is_running() {
        if interactive {
            print!("> ");
            io::stdout().flush()?;
        }

        let action = match lines.next() {
            Some(line) => match parse_command(&line?) {
                Ok(Some(action)) => action,
                Ok(None) => continue,
                Err(e) => {
                    println!("Error: {}", e);
                    continue;
                }
            },
            // End of input closes the simulation
            None => Action::Close,
        };

        match session.execute(action) {
            Ok(output) => print_output(output, args.format)?,
            Err(e) => println!("Error: {}", e),
        }
    }

    tracing::info!(
        tick = session.simulation().current_tick(),
        "Simulation finished"
    );
    Ok(())
}

fn print_output(output: ActionOutput, format: OutputFormat) -> Result<(), serde_json::Error> {
    match output {
        ActionOutput::None => {}
        ActionOutput::Text(text) => println!("{}", text.trim_end()),
        ActionOutput::Results(results) => print_results(&results, format)?,
    }
    Ok(())
}

fn print_results(results: &[PlanSummary], format: OutputFormat) -> Result<(), serde_json::Error> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(results)?),
        OutputFormat::Text => {
            println!("Simulation Results:");
            for summary in results {
                println!("{}", summary);
            }
        }
    }
    Ok(())
}
