use rust_decimal::Decimal;
use serde_json::Value;
use std::str::FromStr;

use crate::output::format_inr;

/// Print just the key answer value from the output.
///
/// Heuristic: look for well-known result fields in order of priority, then
/// fall back to the first field in the result object. Rupee amounts get the
/// platform's lakh/crore notation.
pub fn print_minimal(value: &Value) {
    let result_obj = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    // Priority list of (key, is_money) output fields
    let priority_keys = [
        ("monthly_installment", true),
        ("interest_saved", true),
        ("max_loan_amount", true),
        ("estimated_savings", true),
        ("total_interest", true),
        ("new_tenure_months", false),
        ("eligible", false),
        ("approval_tier", false),
    ];

    match result_obj {
        Value::Object(map) => {
            for (key, is_money) in &priority_keys {
                if let Some(val) = map.get(*key) {
                    if !val.is_null() {
                        println!("{}", format_minimal(val, *is_money));
                        return;
                    }
                }
            }

            // Fall back to first field
            if let Some((key, val)) = map.iter().next() {
                println!("{}: {}", key, format_minimal(val, false));
                return;
            }
            println!();
        }
        // Ranked results: one line per entry, best first
        Value::Array(arr) => {
            for item in arr {
                if let Value::Object(map) = item {
                    let name = map
                        .get("card_name")
                        .and_then(Value::as_str)
                        .unwrap_or("?");
                    let savings = map
                        .get("estimated_savings")
                        .map(|v| format_minimal(v, true))
                        .unwrap_or_default();
                    println!("{}: {}", name, savings);
                } else {
                    println!("{}", format_minimal(item, false));
                }
            }
        }
        other => println!("{}", format_minimal(other, false)),
    }
}

fn format_minimal(value: &Value, is_money: bool) -> String {
    match value {
        Value::String(s) => {
            if is_money {
                if let Ok(amount) = Decimal::from_str(s) {
                    return format_inr(amount);
                }
            }
            s.clone()
        }
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}
