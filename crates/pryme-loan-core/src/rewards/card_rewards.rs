//! Credit-card reward comparison.
//!
//! Given a card catalogue and an annual spend profile, scores every card by
//! the points it would earn and the cash value of those points, ranked best
//! first.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::annuity;
use crate::error::LoanEngineError;
use crate::types::{with_metadata, ComputationOutput, Money};
use crate::LoanEngineResult;

// ---------------------------------------------------------------------------
// Input / Output types
// ---------------------------------------------------------------------------

/// One card's reward program.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardProgram {
    pub card_name: String,
    /// Points per rupee of dining spend (e.g. 4.0 for 4x).
    pub dining_multiplier: Decimal,
    /// Points per rupee of travel spend.
    pub travel_multiplier: Decimal,
    /// Points per rupee of all other spend.
    pub other_multiplier: Decimal,
    /// Cash value of one point in rupees (e.g. 0.25 for 25 paise).
    pub point_value: Decimal,
}

/// Annual spend, split the way card programs split it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpendProfile {
    pub annual_dining_spend: Money,
    pub annual_travel_spend: Money,
    pub annual_other_spend: Money,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RewardsInput {
    pub cards: Vec<CardProgram>,
    pub spend: SpendProfile,
}

/// One card's score against the spend profile, whole-rupee rounded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardRewardEstimate {
    pub card_name: String,
    pub total_points: Decimal,
    pub estimated_savings: Money,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Score every card in the catalogue and rank by estimated savings,
/// best first.
pub fn rank_card_rewards(
    input: &RewardsInput,
) -> LoanEngineResult<ComputationOutput<Vec<CardRewardEstimate>>> {
    let start = Instant::now();
    let warnings: Vec<String> = Vec::new();

    validate_input(input)?;

    let mut estimates: Vec<CardRewardEstimate> = input
        .cards
        .iter()
        .map(|card| {
            let points = input.spend.annual_dining_spend * card.dining_multiplier
                + input.spend.annual_travel_spend * card.travel_multiplier
                + input.spend.annual_other_spend * card.other_multiplier;
            CardRewardEstimate {
                card_name: card.card_name.clone(),
                total_points: annuity::round_rupee(points),
                estimated_savings: annuity::round_rupee(points * card.point_value),
            }
        })
        .collect();

    estimates.sort_by(|a, b| b.estimated_savings.cmp(&a.estimated_savings));

    let elapsed = start.elapsed().as_micros() as u64;
    let assumptions = serde_json::json!({
        "ranking": "estimated savings, descending",
        "cards_compared": input.cards.len(),
    });

    Ok(with_metadata(
        "Card reward comparison",
        &assumptions,
        warnings,
        elapsed,
        estimates,
    ))
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

fn validate_input(input: &RewardsInput) -> LoanEngineResult<()> {
    if input.cards.is_empty() {
        return Err(LoanEngineError::InsufficientData(
            "At least one card program is required.".into(),
        ));
    }

    for card in &input.cards {
        for (field, value) in [
            ("dining_multiplier", card.dining_multiplier),
            ("travel_multiplier", card.travel_multiplier),
            ("other_multiplier", card.other_multiplier),
            ("point_value", card.point_value),
        ] {
            if value < Decimal::ZERO {
                return Err(LoanEngineError::InvalidInput {
                    field: format!("{}.{field}", card.card_name),
                    reason: "Multipliers and point values cannot be negative.".into(),
                });
            }
        }
    }

    for (field, value) in [
        ("annual_dining_spend", input.spend.annual_dining_spend),
        ("annual_travel_spend", input.spend.annual_travel_spend),
        ("annual_other_spend", input.spend.annual_other_spend),
    ] {
        if value < Decimal::ZERO {
            return Err(LoanEngineError::InvalidInput {
                field: field.into(),
                reason: "Spend cannot be negative.".into(),
            });
        }
    }

    Ok(())
}
