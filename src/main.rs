use std::io::{self, BufRead, Write};

use broadside::cli::{parse_command, render_board, Command, HELP};
use broadside::{dispatch, handle_json, init_logging, MatchRegistry, Request, Response};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Drive the engine interactively with text commands.
    Repl {
        #[arg(long, help = "Fix RNG seed for reproducible match codes (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, help = "Create matches that require shooters to alternate")]
        strict_turns: bool,
    },
    /// Read one JSON request per line from stdin, write one JSON response per line.
    Batch {
        #[arg(long, help = "Fix RNG seed for reproducible match codes (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

fn registry(seed: Option<u64>) -> MatchRegistry {
    match seed {
        Some(s) => {
            log::info!("Using fixed seed: {} (match codes will be reproducible)", s);
            MatchRegistry::with_seed(s)
        }
        None => MatchRegistry::new(),
    }
}

fn run_repl(registry: &MatchRegistry, strict_turns: bool) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    println!("broadside - type 'help' for commands");
    loop {
        print!("> ");
        stdout.flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                println!("Error: {}", e);
                continue;
            }
        };
        let mut request = match command {
            Command::Help => {
                println!("{}", HELP);
                continue;
            }
            Command::Quit => break,
            Command::Run(request) => request,
        };
        if let Request::CreateMatch {
            strict_turns: strict,
            ..
        } = &mut request
        {
            *strict |= strict_turns;
        }
        let response = dispatch(registry, request);
        println!("{}", serde_json::to_string_pretty(&response)?);
        if let Response::Board(board) = &response {
            print!("{}", render_board(board));
        }
    }
    Ok(())
}

fn run_batch(registry: &MatchRegistry) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        writeln!(stdout, "{}", handle_json(registry, &line))?;
    }
    stdout.flush()?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Repl { seed, strict_turns } => run_repl(&registry(seed), strict_turns),
        Commands::Batch { seed } => run_batch(&registry(seed)),
    }
}
