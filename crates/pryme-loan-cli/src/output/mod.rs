pub mod csv_out;
pub mod json;
pub mod minimal;
pub mod table;

use crate::OutputFormat;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::Value;

/// Dispatch output to the appropriate formatter.
pub fn format_output(format: &OutputFormat, value: &Value) {
    match format {
        OutputFormat::Json => json::print_json(value),
        OutputFormat::Table => table::print_table(value),
        OutputFormat::Csv => csv_out::print_csv(value),
        OutputFormat::Minimal => minimal::print_minimal(value),
    }
}

/// Format an amount the way the platform displays rupees: crores above
/// 1,00,00,000, lakhs above 1,00,000, plain rupees below that.
pub fn format_inr(amount: Decimal) -> String {
    const CRORE: Decimal = dec!(10_000_000);
    const LAKH: Decimal = dec!(100_000);

    if amount.abs() >= CRORE {
        format!("₹{} Cr", (amount / CRORE).round_dp(2))
    } else if amount.abs() >= LAKH {
        format!("₹{} L", (amount / LAKH).round_dp(2))
    } else {
        format!("₹{}", amount.round_dp(2))
    }
}
