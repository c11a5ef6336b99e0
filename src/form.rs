//! Product form state and the name-to-id reference resolution around it.
//!
//! The server returns a product's bill of materials keyed by material name
//! but accepts it keyed by material id. Opening a product for editing
//! resolves each name against the cached raw-material catalog; submitting
//! validates the form locally and produces the id-keyed payload. A name
//! that no longer matches the catalog (renamed or deleted upstream) stays
//! in the form as an unresolved entry the user must re-select.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{MaterialLine, Product, ProductPayload, RawMaterial};

/// One editable bill-of-materials row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaterialEntry {
    /// `None` means the entry needs re-selection before submit.
    pub raw_material_id: Option<i64>,
    pub required_quantity: u32,
}

impl MaterialEntry {
    /// A fresh row: unresolved, quantity 1.
    pub fn new() -> Self {
        Self {
            raw_material_id: None,
            required_quantity: 1,
        }
    }
}

impl Default for MaterialEntry {
    fn default() -> Self {
        Self::new()
    }
}

/// Editable product form state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductForm {
    pub product_name: String,
    pub sku_code: String,
    pub product_value: Option<f64>,
    pub materials: Vec<MaterialEntry>,
}

/// Local validation failure; surfaced before any network call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormError {
    #[error("Product name is required")]
    MissingName,
    #[error("Product value is required")]
    MissingValue,
    #[error("Add at least one material")]
    NoMaterials,
    #[error("Material {} needs re-selection", .index + 1)]
    UnresolvedMaterial { index: usize },
    #[error("Material {} needs a quantity of at least 1", .index + 1)]
    InvalidQuantity { index: usize },
}

impl ProductForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds the editable form from a server-returned product.
    ///
    /// Each requirement's name is looked up in the catalog; the first exact
    /// match wins. An unmatched name yields an unresolved entry, never an
    /// error and never a dropped row.
    pub fn from_product(product: &Product, catalog: &[RawMaterial]) -> Self {
        let materials = product
            .materials_required
            .iter()
            .map(|req| MaterialEntry {
                raw_material_id: catalog
                    .iter()
                    .find(|m| m.material_name == req.material_name)
                    .map(|m| m.id),
                required_quantity: req.required_quantity,
            })
            .collect();

        Self {
            product_name: product.product_name.clone(),
            sku_code: product.sku_code.clone(),
            product_value: Some(product.product_value),
            materials,
        }
    }

    /// Validates the form and produces the id-keyed request payload.
    pub fn to_payload(&self) -> Result<ProductPayload, FormError> {
        if self.product_name.is_empty() {
            return Err(FormError::MissingName);
        }
        let product_value = self.product_value.ok_or(FormError::MissingValue)?;
        if self.materials.is_empty() {
            return Err(FormError::NoMaterials);
        }

        let mut materials_required = Vec::with_capacity(self.materials.len());
        for (index, entry) in self.materials.iter().enumerate() {
            let raw_material_id = entry
                .raw_material_id
                .ok_or(FormError::UnresolvedMaterial { index })?;
            if entry.required_quantity == 0 {
                return Err(FormError::InvalidQuantity { index });
            }
            materials_required.push(MaterialLine {
                raw_material_id,
                required_quantity: entry.required_quantity,
            });
        }

        Ok(ProductPayload {
            product_name: self.product_name.clone(),
            sku_code: self.sku_code.clone(),
            product_value,
            materials_required,
        })
    }
}
