use serde::{Deserialize, Serialize};
use std::fmt;

/// A product as returned by the server.
///
/// The read shape references materials by display name only; the write shape
/// ([`ProductPayload`]) references them by id. Mapping between the two is the
/// job of the form module.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub product_id: i64,
    pub product_name: String,
    pub sku_code: String,
    pub product_value: f64,
    pub materials_required: Vec<MaterialRequirement>,
}

/// One entry of a product's bill of materials, read side (name-keyed).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialRequirement {
    pub material_name: String,
    pub required_quantity: u32,
}

/// Request body for creating or updating a product (id-keyed materials).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPayload {
    pub product_name: String,
    pub sku_code: String,
    pub product_value: f64,
    pub materials_required: Vec<MaterialLine>,
}

/// One entry of a product's bill of materials, write side (id-keyed).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialLine {
    pub raw_material_id: i64,
    pub required_quantity: u32,
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "#{} {} [{}] value: {:.2}",
            self.product_id, self.product_name, self.sku_code, self.product_value
        )?;
        for req in &self.materials_required {
            writeln!(f, "  - {} x {}", req.material_name, req.required_quantity)?;
        }
        Ok(())
    }
}
