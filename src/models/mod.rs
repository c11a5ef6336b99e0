mod product;
mod raw_material;
mod suggestion;

pub use product::{MaterialLine, MaterialRequirement, Product, ProductPayload};
pub use raw_material::{RawMaterial, RawMaterialPayload};
pub use suggestion::{SuggestionLine, SuggestionReport};
