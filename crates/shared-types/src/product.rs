use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Domain Structs
// ---------------------------------------------------------------------------

/// A catalog product record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    /// Category label stored as text; one of [`VALID_CATEGORIES`].
    pub category: String,
    pub price: f64,
    pub quantity: u32,
    pub description: String,
}

/// A validated product without an identifier — the payload a form hands to
/// its caller. Price and quantity are already numeric here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub category: String,
    pub price: f64,
    pub quantity: u32,
    pub description: String,
}

impl NewProduct {
    /// Attach an identifier, producing a full [`Product`].
    pub fn with_id(self, id: Uuid) -> Product {
        Product {
            id,
            name: self.name,
            category: self.category,
            price: self.price,
            quantity: self.quantity,
            description: self.description,
        }
    }
}

// ---------------------------------------------------------------------------
// Validation Constants
// ---------------------------------------------------------------------------

/// Valid product category labels, rendered as the category select options.
pub const VALID_CATEGORIES: &[&str] = &["Điện tử", "Quần áo", "Đồ ăn", "Sách", "Khác"];
