//! Order types.
//!
//! An [`Order`] is immutable once created except for its status, which may
//! only move forward through the fulfillment lifecycle.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Supported payment methods at checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Cod,
    Momo,
    Vnpay,
    BankTransfer,
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cod => write!(f, "cod"),
            Self::Momo => write!(f, "momo"),
            Self::Vnpay => write!(f, "vnpay"),
            Self::BankTransfer => write!(f, "bank_transfer"),
        }
    }
}

/// Fulfillment status of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Processing,
    Paid,
    Shipped,
    Delivered,
}

impl OrderStatus {
    /// Position in the forward-only lifecycle
    /// (pending < processing < paid < shipped < delivered).
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Pending => 0,
            Self::Processing => 1,
            Self::Paid => 2,
            Self::Shipped => 3,
            Self::Delivered => 4,
        }
    }

    /// Whether moving from `self` to `next` is a legal (forward or
    /// same-status) transition.
    #[must_use]
    pub const fn can_advance_to(self, next: Self) -> bool {
        self.rank() <= next.rank()
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Processing => write!(f, "processing"),
            Self::Paid => write!(f, "paid"),
            Self::Shipped => write!(f, "shipped"),
            Self::Delivered => write!(f, "delivered"),
        }
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "processing" => Ok(Self::Processing),
            "paid" => Ok(Self::Paid),
            "shipped" => Ok(Self::Shipped),
            "delivered" => Ok(Self::Delivered),
            _ => Err(format!("invalid order status: {s}")),
        }
    }
}

/// Shipping details captured at checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingInfo {
    pub full_name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub city: String,
    pub district: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// A line snapshot inside an order, decoupled from later catalog or cart
/// mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    pub product_id: String,
    pub quantity: u32,
    /// Unit price in VND at order time.
    pub price: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// A placed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Generated id of the form `ORD-<YYYYMMDD>-<4-char suffix>`.
    pub id: String,
    pub status: OrderStatus,
    pub items: Vec<OrderItem>,
    /// Caller-supplied sum of item prices, in VND.
    pub subtotal: i64,
    pub shipping_fee: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<i64>,
    /// `subtotal + shipping_fee - discount`, computed by the order book.
    pub total: i64,
    pub payment_method: PaymentMethod,
    pub shipping: ShippingInfo,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
    pub eta: DateTime<Utc>,
}
