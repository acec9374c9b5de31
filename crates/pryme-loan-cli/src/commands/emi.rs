use chrono::NaiveDate;
use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use pryme_loan_core::amortization::{emi, schedule};
use pryme_loan_core::types::LoanTerms;

use crate::input;

/// Arguments for the EMI breakdown
#[derive(Args)]
pub struct EmiArgs {
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
}

/// Arguments for the amortization schedule
#[derive(Args)]
pub struct ScheduleArgs {
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

    /// Date of the first installment (YYYY-MM-DD)
    #[arg(long)]
    pub start_date: Option<NaiveDate>,
}

pub(crate) fn terms_from_parts(
    principal: Option<Decimal>,
    annual_rate_pct: Option<Decimal>,
    tenure_months: Option<u32>,
) -> Result<LoanTerms, Box<dyn std::error::Error>> {
    Ok(LoanTerms {
        principal: principal.ok_or("--principal is required (or provide --input)")?,
        annual_rate_pct: annual_rate_pct
            .ok_or("--annual-rate-pct is required (or provide --input)")?,
        tenure_months: tenure_months.ok_or("--tenure-months is required (or provide --input)")?,
    })
}

pub fn run_emi(args: EmiArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let terms: LoanTerms = if let Some(ref path) = args.input {
        input::file::read_input(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        terms_from_parts(args.principal, args.annual_rate_pct, args.tenure_months)?
    };

    let result = emi::calculate_emi(&terms)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_schedule(args: ScheduleArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let schedule_input: schedule::ScheduleInput = if let Some(ref path) = args.input {
        input::file::read_input(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        schedule::ScheduleInput {
            terms: terms_from_parts(args.principal, args.annual_rate_pct, args.tenure_months)?,
            first_payment_date: args.start_date,
        }
    };

    let result = schedule::build_schedule(&schedule_input)?;
    Ok(serde_json::to_value(result)?)
}
