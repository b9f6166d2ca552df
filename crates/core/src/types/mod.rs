//! Domain types shared across the storefront.

pub mod cart;
pub mod order;
pub mod product;

pub use cart::{CartLine, Selection};
pub use order::{Order, OrderItem, OrderStatus, PaymentMethod, ShippingInfo};
pub use product::{Brand, Category, PriceRange, Product, ProductSpecs, ProductVariant};
