use serde::{Deserialize, Serialize};
use std::fmt;

/// A raw material as returned by the server.
///
/// `material_name` is unique within the catalog and doubles as the display
/// key products use to reference materials on the read side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMaterial {
    pub id: i64,
    pub material_name: String,
    pub sku_code: String,
    pub stock: u32,
}

/// Request body for creating or updating a raw material.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMaterialPayload {
    pub material_name: String,
    pub sku_code: String,
    pub stock: u32,
}

impl RawMaterialPayload {
    pub fn new(material_name: impl Into<String>, sku_code: impl Into<String>, stock: u32) -> Self {
        Self {
            material_name: material_name.into(),
            sku_code: sku_code.into(),
            stock,
        }
    }
}

impl fmt::Display for RawMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} [{}] stock: {}",
            self.id, self.material_name, self.sku_code, self.stock
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_material_wire_shape() {
        let json = r#"{"id":7,"materialName":"Steel","skuCode":"STL-01","stock":40}"#;
        let material: RawMaterial = serde_json::from_str(json).unwrap();

        assert_eq!(material.id, 7);
        assert_eq!(material.material_name, "Steel");
        assert_eq!(material.sku_code, "STL-01");
        assert_eq!(material.stock, 40);
    }

    #[test]
    fn test_payload_serializes_camel_case() {
        let payload = RawMaterialPayload::new("Steel", "STL-01", 40);
        let json = serde_json::to_value(&payload).unwrap();

        assert_eq!(json["materialName"], "Steel");
        assert_eq!(json["skuCode"], "STL-01");
        assert_eq!(json["stock"], 40);
    }

    #[test]
    fn test_raw_material_display() {
        let material = RawMaterial {
            id: 7,
            material_name: "Steel".to_string(),
            sku_code: "STL-01".to_string(),
            stock: 40,
        };

        let output = format!("{}", material);
        assert!(output.contains("Steel"));
        assert!(output.contains("STL-01"));
        assert!(output.contains("40"));
    }
}
