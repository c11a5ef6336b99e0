use clap::Args;

use super::OutputFormat;
use crate::store::AppState;

#[derive(Args)]
pub struct SuggestCommand {
    /// Output format
    #[arg(long, short, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

impl SuggestCommand {
    pub async fn run(&self, state: &mut AppState) -> Result<(), Box<dyn std::error::Error>> {
        let report = state.suggestions.fetch().await?;

        match self.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(report)?),
            OutputFormat::Text => {
                if report.suggestions.is_empty() {
                    println!("Nothing can be produced with the current stock");
                }
                // Lines are printed in server priority order.
                println!("{}", report);
            }
        }
        Ok(())
    }
}
