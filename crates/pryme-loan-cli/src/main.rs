mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::eligibility::{EligibilityArgs, ProfileArgs};
use commands::emi::{EmiArgs, ScheduleArgs};
use commands::prepayment::{PrepaymentArgs, SimulateArgs};
use commands::rewards::RewardsArgs;

/// Loan analytics for the PRYME loan-comparison platform
#[derive(Parser)]
#[command(
    name = "pryme",
    version,
    about = "Loan analytics for the PRYME loan-comparison platform",
    long_about = "Decimal-precision loan calculations for the PRYME platform: \
                  EMI breakdowns, amortization schedules, prepayment savings \
                  (estimate and exact simulation), FOIR-based eligibility, and \
                  credit-card reward comparison."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// EMI breakdown: installment, total payment, total interest
    Emi(EmiArgs),
    /// Full month-by-month amortization schedule
    Schedule(ScheduleArgs),
    /// Prepayment savings, fixed-multiplier estimate
    Prepayment(PrepaymentArgs),
    /// Prepayment savings, exact month-by-month simulation
    Simulate(SimulateArgs),
    /// Quick FOIR eligibility check
    Eligibility(EligibilityArgs),
    /// Full applicant profile with approval tier
    Profile(ProfileArgs),
    /// Rank credit cards by reward value for a spend profile
    Rewards(RewardsArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Emi(args) => commands::emi::run_emi(args),
        Commands::Schedule(args) => commands::emi::run_schedule(args),
        Commands::Prepayment(args) => commands::prepayment::run_prepayment(args),
        Commands::Simulate(args) => commands::prepayment::run_simulate(args),
        Commands::Eligibility(args) => commands::eligibility::run_eligibility(args),
        Commands::Profile(args) => commands::eligibility::run_profile(args),
        Commands::Rewards(args) => commands::rewards::run_rewards(args),
        Commands::Version => {
            println!("pryme {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
