use clap::Args;
use serde_json::Value;

use pryme_loan_core::rewards::card_rewards::{self, RewardsInput};

use crate::input;

/// Arguments for reward comparison. The card catalogue has too much shape
/// for flags, so input comes from a file or stdin.
#[derive(Args)]
pub struct RewardsArgs {
    /// Path to JSON/YAML input file with the card catalogue and spend profile
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_rewards(args: RewardsArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let rewards_input: RewardsInput = if let Some(ref path) = args.input {
        input::file::read_input(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        return Err("--input file is required for reward comparison (or pipe JSON via stdin)".into());
    };

    let result = card_rewards::rank_card_rewards(&rewards_input)?;
    Ok(serde_json::to_value(result)?)
}
