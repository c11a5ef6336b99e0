use clap::{Args, Subcommand};

use super::OutputFormat;
use crate::models::RawMaterialPayload;
use crate::store::AppState;

#[derive(Args)]
pub struct MaterialCommand {
    #[command(subcommand)]
    pub command: MaterialSubcommand,
}

#[derive(Subcommand)]
pub enum MaterialSubcommand {
    /// List all raw materials
    List {
        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Show a raw material's details
    Show {
        /// Raw material id
        id: i64,

        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Add a raw material
    Add {
        /// Material name
        name: String,

        /// SKU code
        #[arg(long)]
        sku: String,

        /// Stock quantity
        #[arg(long, default_value_t = 0)]
        stock: u32,
    },

    /// Update an existing raw material
    Update {
        /// Raw material id
        id: i64,

        /// New material name
        #[arg(long)]
        name: Option<String>,

        /// New SKU code
        #[arg(long)]
        sku: Option<String>,

        /// New stock quantity
        #[arg(long)]
        stock: Option<u32>,
    },

    /// Remove a raw material
    Remove {
        /// Raw material id
        id: i64,
    },
}

impl MaterialCommand {
    pub async fn run(&self, state: &mut AppState) -> Result<(), Box<dyn std::error::Error>> {
        match &self.command {
            MaterialSubcommand::List { format } => {
                state.raw_materials.fetch_all().await;
                match format {
                    OutputFormat::Json => {
                        println!(
                            "{}",
                            serde_json::to_string_pretty(state.raw_materials.items())?
                        );
                    }
                    OutputFormat::Text => {
                        if state.raw_materials.items().is_empty() {
                            println!("No raw materials found");
                        }
                        for material in state.raw_materials.items() {
                            println!("{}", material);
                        }
                    }
                }
                Ok(())
            }

            MaterialSubcommand::Show { id, format } => {
                let material = state.api.get_raw_material(*id).await?;
                match format {
                    OutputFormat::Json => {
                        println!("{}", serde_json::to_string_pretty(&material)?)
                    }
                    OutputFormat::Text => println!("{}", material),
                }
                Ok(())
            }

            MaterialSubcommand::Add { name, sku, stock } => {
                let payload = RawMaterialPayload::new(name.clone(), sku.clone(), *stock);
                let created = state.raw_materials.create(&payload).await?;
                println!("Created raw material #{}", created.id);
                Ok(())
            }

            MaterialSubcommand::Update {
                id,
                name,
                sku,
                stock,
            } => {
                let current = state.api.get_raw_material(*id).await?;
                let payload = RawMaterialPayload::new(
                    name.clone().unwrap_or(current.material_name),
                    sku.clone().unwrap_or(current.sku_code),
                    stock.unwrap_or(current.stock),
                );
                state.raw_materials.update(*id, &payload).await?;
                println!("Updated raw material #{}", id);
                Ok(())
            }

            MaterialSubcommand::Remove { id } => {
                state.raw_materials.delete(*id).await?;
                println!("Removed raw material #{}", id);
                Ok(())
            }
        }
    }
}
