use apportion::engine::Election;
use apportion::reports::AllocationReport;
use clap::{Parser, Subcommand};
use colored::*;
use instant::Instant;

/// Demo input: the five-party race from the project writeup.
const DEMO_VOTES: [u64; 5] = [400000, 250000, 100000, 73000, 5000];
const DEMO_SEATS: u64 = 5;

#[derive(Parser)]
struct Opts {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Allocate seats among parties by largest remainder.
    Allocate {
        /// Number of seats to distribute
        seats: u64,
        /// Vote count per party, in party order
        votes: Vec<u64>,
        /// Emit the report as JSON instead of text lines
        #[clap(long)]
        json: bool,
    },
    /// Run the built-in five-party demo election.
    Demo {
        /// Emit the report as JSON instead of text lines
        #[clap(long)]
        json: bool,
    },
}

fn main() {
    let opts = Opts::parse();

    let result = match opts.command {
        Command::Allocate { seats, votes, json } => run_allocation(seats, &votes, json),
        Command::Demo { json } => run_allocation(DEMO_SEATS, &DEMO_VOTES, json),
    };

    if let Err(e) = result {
        eprintln!("❌ Allocation failed: {}", e);
        std::process::exit(1);
    }
}

fn run_allocation(
    seat_total: u64,
    votes: &[u64],
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let start = Instant::now();
    let election = Election::new(votes, seat_total)?;
    let allocation = election.allocate();
    let report = AllocationReport::from_allocation(&allocation);
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "🗳️  Allocating {} seats among {} parties (quota {})",
        report.seat_total.to_string().bright_cyan(),
        report.parties.len().to_string().bright_cyan(),
        report.quota.to_string().bright_yellow()
    );
    println!("{}", report.text_lines());
    println!(
        "✅ Done in {} ms",
        format!("{:.2}", elapsed_ms).bright_green()
    );

    Ok(())
}
