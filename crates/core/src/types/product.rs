//! Product catalog types.
//!
//! All prices are integer VND. A product with variants prices each variant
//! independently; the *effective price* of such a product is its first
//! variant's price, never the base price.

use serde::{Deserialize, Serialize};

/// Phone manufacturer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Brand {
    Apple,
    Samsung,
    Xiaomi,
    #[serde(rename = "OPPO")]
    Oppo,
    Vivo,
    Realme,
    Honor,
    Nothing,
    Google,
    OnePlus,
    Asus,
    Motorola,
    Tecno,
    Infinix,
    Other,
}

impl std::fmt::Display for Brand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Apple => "Apple",
            Self::Samsung => "Samsung",
            Self::Xiaomi => "Xiaomi",
            Self::Oppo => "OPPO",
            Self::Vivo => "Vivo",
            Self::Realme => "Realme",
            Self::Honor => "Honor",
            Self::Nothing => "Nothing",
            Self::Google => "Google",
            Self::OnePlus => "OnePlus",
            Self::Asus => "Asus",
            Self::Motorola => "Motorola",
            Self::Tecno => "Tecno",
            Self::Infinix => "Infinix",
            Self::Other => "Other",
        };
        write!(f, "{name}")
    }
}

/// Marketing segment of a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Flagship,
    Premium,
    Midrange,
    Budget,
    Gaming,
}

/// Price classification bucket (0-3), matching the prediction model's
/// output classes.
///
/// Serialized as its numeric value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum PriceRange {
    Low,
    Mid,
    High,
    VeryHigh,
}

impl PriceRange {
    /// Human-readable bucket label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Giá thấp",
            Self::Mid => "Trung bình",
            Self::High => "Cao",
            Self::VeryHigh => "Rất cao",
        }
    }

    /// Inclusive VND band the bucket covers.
    #[must_use]
    pub const fn band(self) -> (i64, i64) {
        match self {
            Self::Low => (2_000_000, 4_000_000),
            Self::Mid => (4_000_000, 8_000_000),
            Self::High => (8_000_000, 15_000_000),
            Self::VeryHigh => (15_000_000, 30_000_000),
        }
    }
}

impl From<PriceRange> for u8 {
    fn from(range: PriceRange) -> Self {
        match range {
            PriceRange::Low => 0,
            PriceRange::Mid => 1,
            PriceRange::High => 2,
            PriceRange::VeryHigh => 3,
        }
    }
}

impl TryFrom<u8> for PriceRange {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Low),
            1 => Ok(Self::Mid),
            2 => Ok(Self::High),
            3 => Ok(Self::VeryHigh),
            other => Err(format!("invalid price range bucket: {other}")),
        }
    }
}

/// Hardware spec sheet for a phone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSpecs {
    /// RAM in MB.
    pub ram_mb: u32,
    /// Internal storage in GB.
    pub storage_gb: u32,
    pub battery_mah: u32,
    pub px_width: u32,
    pub px_height: u32,
    /// Screen width in cm.
    pub screen_w_cm: u32,
    /// Screen height in cm.
    pub screen_h_cm: u32,
    /// Primary camera MP.
    pub primary_camera_mp: u32,
    /// Front camera MP.
    pub front_camera_mp: u32,
    pub core_count: u8,
    pub clock_speed_ghz: f32,
    pub weight_g: u32,
    pub depth_mm: f32,
    pub talk_time_h: u32,
    pub bluetooth: bool,
    pub dual_sim: bool,
    pub four_g: bool,
    pub three_g: bool,
    pub touch_screen: bool,
    pub wifi: bool,
}

/// A purchasable configuration of a product (e.g. "256GB").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductVariant {
    pub label: String,
    /// Variant price in VND.
    pub price: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock: Option<u32>,
}

/// A catalog product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    /// URL-safe unique handle.
    pub slug: String,
    pub name: String,
    pub brand: Brand,
    /// Base price in VND. Superseded per-selection by variant prices.
    pub price: i64,
    pub price_range: PriceRange,
    #[serde(default)]
    pub images: Vec<String>,
    pub stock: u32,
    /// Average rating, 0-5.
    pub rating: f32,
    pub specs: ProductSpecs,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chipset: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub launch_year: Option<u16>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub highlights: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub badges: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub colors: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub variants: Vec<ProductVariant>,
    #[serde(default)]
    pub featured: bool,
}

impl Product {
    /// The price a selection starts from: the first variant's price when
    /// variants exist, the base price otherwise.
    #[must_use]
    pub fn effective_price(&self) -> i64 {
        self.variants.first().map_or(self.price, |v| v.price)
    }

    /// Price of the variant with the given label, if any.
    #[must_use]
    pub fn variant_price(&self, label: &str) -> Option<i64> {
        self.variants.iter().find(|v| v.label == label).map(|v| v.price)
    }
}
