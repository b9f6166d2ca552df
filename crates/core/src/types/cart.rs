//! Cart line types.

use serde::{Deserialize, Serialize};

/// The (variant label, color) pair that distinguishes otherwise-identical
/// cart lines for the same product.
///
/// Equality is structural over the two optional fields. A tagged value type
/// avoids the collision edge cases of string-join keys (a literal color
/// containing the separator character would alias another key).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Selection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Selection {
    /// A selection with both fields set as given.
    #[must_use]
    pub fn new(variant_label: Option<String>, color: Option<String>) -> Self {
        Self {
            variant_label,
            color,
        }
    }

    /// The empty selection: no variant, no color.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }
}

/// A single cart entry, keyed by (product id, selection).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: String,
    #[serde(flatten)]
    pub selection: Selection,
    pub quantity: u32,
    /// Unit price snapshot taken when the line was added. When present it
    /// always wins over a fresh catalog lookup.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<i64>,
}

impl CartLine {
    /// Whether this line matches the given key exactly. A selection with
    /// both fields absent matches only lines where both are absent.
    #[must_use]
    pub fn matches(&self, product_id: &str, selection: &Selection) -> bool {
        self.product_id == product_id && self.selection == *selection
    }
}
