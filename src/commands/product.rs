use clap::{Args, Subcommand};

use super::OutputFormat;
use crate::form::{MaterialEntry, ProductForm};
use crate::models::RawMaterial;
use crate::store::AppState;

#[derive(Args)]
pub struct ProductCommand {
    #[command(subcommand)]
    pub command: ProductSubcommand,
}

#[derive(Subcommand)]
pub enum ProductSubcommand {
    /// List all products
    List {
        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Show a product's details
    Show {
        /// Product id
        id: i64,

        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Add a product
    Add {
        /// Product name
        name: String,

        /// SKU code
        #[arg(long)]
        sku: String,

        /// Monetary value
        #[arg(long)]
        value: f64,

        /// Required material as "NAME:QTY" (can be repeated)
        #[arg(long = "material", value_name = "NAME:QTY")]
        materials: Vec<String>,
    },

    /// Update an existing product
    Update {
        /// Product id
        id: i64,

        /// New product name
        #[arg(long)]
        name: Option<String>,

        /// New SKU code
        #[arg(long)]
        sku: Option<String>,

        /// New monetary value
        #[arg(long)]
        value: Option<f64>,

        /// Replacement material list as "NAME:QTY" (can be repeated)
        #[arg(long = "material", value_name = "NAME:QTY")]
        materials: Vec<String>,
    },

    /// Remove a product
    Remove {
        /// Product id
        id: i64,
    },
}

impl ProductCommand {
    pub async fn run(&self, state: &mut AppState) -> Result<(), Box<dyn std::error::Error>> {
        match &self.command {
            ProductSubcommand::List { format } => {
                state.products.fetch_all().await;
                match format {
                    OutputFormat::Json => {
                        println!("{}", serde_json::to_string_pretty(state.products.items())?);
                    }
                    OutputFormat::Text => {
                        if state.products.items().is_empty() {
                            println!("No products found");
                        }
                        for product in state.products.items() {
                            print!("{}", product);
                        }
                    }
                }
                Ok(())
            }

            ProductSubcommand::Show { id, format } => {
                let product = state.api.get_product(*id).await?;
                match format {
                    OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&product)?),
                    OutputFormat::Text => print!("{}", product),
                }
                Ok(())
            }

            ProductSubcommand::Add {
                name,
                sku,
                value,
                materials,
            } => {
                state.raw_materials.fetch_all().await;
                let form = ProductForm {
                    product_name: name.clone(),
                    sku_code: sku.clone(),
                    product_value: Some(*value),
                    materials: resolve_material_args(materials, state.raw_materials.items())?,
                };
                let payload = form.to_payload()?;
                let created = state.products.create(&payload).await?;
                println!("Created product #{}", created.product_id);
                Ok(())
            }

            ProductSubcommand::Update {
                id,
                name,
                sku,
                value,
                materials,
            } => {
                state.raw_materials.fetch_all().await;
                let current = state.api.get_product(*id).await?;

                // Rebuild the editable form from the server shape, then
                // apply the requested changes on top.
                let mut form = ProductForm::from_product(&current, state.raw_materials.items());
                if let Some(name) = name {
                    form.product_name = name.clone();
                }
                if let Some(sku) = sku {
                    form.sku_code = sku.clone();
                }
                if let Some(value) = value {
                    form.product_value = Some(*value);
                }
                if !materials.is_empty() {
                    form.materials = resolve_material_args(materials, state.raw_materials.items())?;
                }

                let payload = form.to_payload()?;
                state.products.update(*id, &payload).await?;
                println!("Updated product #{}", id);
                Ok(())
            }

            ProductSubcommand::Remove { id } => {
                state.products.delete(*id).await?;
                println!("Removed product #{}", id);
                Ok(())
            }
        }
    }
}

/// Parses repeated "NAME:QTY" arguments and resolves each name against the
/// cached catalog. An unknown name stays unresolved and is rejected by form
/// validation with a pointer to the offending row.
fn resolve_material_args(
    args: &[String],
    catalog: &[RawMaterial],
) -> Result<Vec<MaterialEntry>, String> {
    let mut entries = Vec::with_capacity(args.len());
    for arg in args {
        let (name, quantity) = parse_material_arg(arg)?;
        entries.push(MaterialEntry {
            raw_material_id: catalog
                .iter()
                .find(|m| m.material_name == name)
                .map(|m| m.id),
            required_quantity: quantity,
        });
    }
    Ok(entries)
}

fn parse_material_arg(arg: &str) -> Result<(String, u32), String> {
    match arg.rsplit_once(':') {
        Some((name, quantity)) if !name.is_empty() => {
            let quantity = quantity
                .parse()
                .map_err(|_| format!("Invalid quantity in '{}'", arg))?;
            Ok((name.to_string(), quantity))
        }
        _ => Err(format!("Expected NAME:QTY, got '{}'", arg)),
    }
}
