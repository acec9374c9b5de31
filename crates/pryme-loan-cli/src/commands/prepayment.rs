use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use pryme_loan_core::prepayment::heuristic::{self, SavingsEstimateInput};
use pryme_loan_core::prepayment::simulation::{self, SimulationInput};
use pryme_loan_core::prepayment::PrepaymentStrategy;

use crate::commands::emi::terms_from_parts;
use crate::input;

/// Arguments for the fixed-multiplier savings estimate
#[derive(Args)]
pub struct PrepaymentArgs {
    /// Path to JSON/YAML input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Amount borrowed
    #[arg(long)]
    pub principal: Option<Decimal>,

    /// Annual interest rate as a percentage (e.g. 8.5)
    #[arg(long, alias = "rate")]
    pub annual_rate_pct: Option<Decimal>,

    /// Repayment duration in months
    #[arg(long)]
    pub tenure_months: Option<u32>,

    /// Pay one extra installment at the end of every loan year
    #[arg(long)]
    pub extra_annual_installment: bool,

    /// Raise the installment yearly by this percentage (5 when the flag is
    /// given without a value)
    #[arg(long, num_args = 0..=1, default_missing_value = "5")]
    pub annual_step_up_pct: Option<Decimal>,
}

/// Arguments for the exact month-by-month simulation
#[derive(Args)]
pub struct SimulateArgs {
    /// Path to JSON/YAML input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Amount borrowed
    #[arg(long)]
    pub principal: Option<Decimal>,

    /// Annual interest rate as a percentage (e.g. 8.5)
    #[arg(long, alias = "rate")]
    pub annual_rate_pct: Option<Decimal>,

    /// Repayment duration in months
    #[arg(long)]
    pub tenure_months: Option<u32>,

    /// Pay one extra installment at the end of every loan year
    #[arg(long)]
    pub extra_annual_installment: bool,

    /// Raise the installment yearly by this percentage (5 when the flag is
    /// given without a value)
    #[arg(long, num_args = 0..=1, default_missing_value = "5")]
    pub annual_step_up_pct: Option<Decimal>,
}

pub fn run_prepayment(args: PrepaymentArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let estimate_input: SavingsEstimateInput = if let Some(ref path) = args.input {
        input::file::read_input(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        SavingsEstimateInput {
            terms: terms_from_parts(args.principal, args.annual_rate_pct, args.tenure_months)?,
            strategy: PrepaymentStrategy {
                extra_annual_installment: args.extra_annual_installment,
                annual_step_up_pct: args.annual_step_up_pct.unwrap_or(Decimal::ZERO),
            },
        }
    };

    let result = heuristic::estimate_savings(&estimate_input)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_simulate(args: SimulateArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let simulation_input: SimulationInput = if let Some(ref path) = args.input {
        input::file::read_input(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        SimulationInput {
            terms: terms_from_parts(args.principal, args.annual_rate_pct, args.tenure_months)?,
            strategy: PrepaymentStrategy {
                extra_annual_installment: args.extra_annual_installment,
                annual_step_up_pct: args.annual_step_up_pct.unwrap_or(Decimal::ZERO),
            },
        }
    };

    let result = simulation::simulate_prepayment(&simulation_input)?;
    Ok(serde_json::to_value(result)?)
}
