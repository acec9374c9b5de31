use clap::{Args, ValueEnum};
use rust_decimal::Decimal;
use serde_json::Value;

use pryme_loan_core::eligibility::foir::{self, QuickEligibilityInput};
use pryme_loan_core::eligibility::profile::{self, LoanType, ProfileInput};
use pryme_loan_core::eligibility::Occupation;

use crate::input;

/// Occupation classes accepted on the command line.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OccupationArg {
    Salaried,
    SelfEmployed,
    Professional,
}

impl From<OccupationArg> for Occupation {
    fn from(value: OccupationArg) -> Self {
        match value {
            OccupationArg::Salaried => Occupation::Salaried,
            OccupationArg::SelfEmployed => Occupation::SelfEmployed,
            OccupationArg::Professional => Occupation::Professional,
        }
    }
}

/// Loan products accepted on the command line.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LoanTypeArg {
    Home,
    Personal,
    Business,
    Other,
}

impl From<LoanTypeArg> for LoanType {
    fn from(value: LoanTypeArg) -> Self {
        match value {
            LoanTypeArg::Home => LoanType::Home,
            LoanTypeArg::Personal => LoanType::Personal,
            LoanTypeArg::Business => LoanType::Business,
            LoanTypeArg::Other => LoanType::Other,
        }
    }
}

/// Arguments for the quick FOIR check
#[derive(Args)]
pub struct EligibilityArgs {
    /// Path to JSON/YAML input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Monthly income
    #[arg(long)]
    pub income: Option<Decimal>,

    /// Occupation class
    #[arg(long)]
    pub occupation: Option<OccupationArg>,

    /// EMIs already being serviced each month
    #[arg(long, default_value = "0")]
    pub existing_obligations: Decimal,
}

/// Arguments for the full profile assessment
#[derive(Args)]
pub struct ProfileArgs {
    /// Path to JSON/YAML input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Monthly income
    #[arg(long)]
    pub income: Option<Decimal>,

    /// Occupation class
    #[arg(long)]
    pub occupation: Option<OccupationArg>,

    /// EMIs already being serviced each month
    #[arg(long, default_value = "0")]
    pub existing_obligations: Decimal,

    /// Applicant age in years
    #[arg(long)]
    pub age: Option<u32>,

    /// CIBIL score (300-900), if known
    #[arg(long)]
    pub credit_score: Option<u32>,

    /// Loan product being applied for
    #[arg(long)]
    pub loan_type: Option<LoanTypeArg>,
}

pub fn run_eligibility(args: EligibilityArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let check_input: QuickEligibilityInput = if let Some(ref path) = args.input {
        input::file::read_input(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        QuickEligibilityInput {
            monthly_income: args.income.ok_or("--income is required (or provide --input)")?,
            occupation: args
                .occupation
                .ok_or("--occupation is required (or provide --input)")?
                .into(),
            existing_obligations: args.existing_obligations,
        }
    };

    let result = foir::check_eligibility(&check_input)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_profile(args: ProfileArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let profile_input: ProfileInput = if let Some(ref path) = args.input {
        input::file::read_input(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        ProfileInput {
            monthly_income: args.income.ok_or("--income is required (or provide --input)")?,
            occupation: args
                .occupation
                .ok_or("--occupation is required (or provide --input)")?
                .into(),
            existing_obligations: args.existing_obligations,
            age: args.age.ok_or("--age is required (or provide --input)")?,
            credit_score: args.credit_score,
            loan_type: args.loan_type.map(Into::into),
        }
    };

    let result = profile::assess_profile(&profile_input)?;
    Ok(serde_json::to_value(result)?)
}
