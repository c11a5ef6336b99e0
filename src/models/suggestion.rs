use serde::{Deserialize, Serialize};
use std::fmt;

/// Server-computed production plan.
///
/// Lines arrive ordered by descending priority as assigned by the server.
/// The client preserves that order and never re-sorts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionReport {
    pub total_value: f64,
    pub suggestions: Vec<SuggestionLine>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionLine {
    pub product_name: String,
    pub quantity_produced: u32,
    pub subtotal: f64,
}

impl fmt::Display for SuggestionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.suggestions {
            writeln!(
                f,
                "{} x {} = {:.2}",
                line.product_name, line.quantity_produced, line.subtotal
            )?;
        }
        write!(f, "Total: {:.2}", self.total_value)
    }
}
