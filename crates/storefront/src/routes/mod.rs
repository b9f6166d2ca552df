//! HTTP route handlers for the storefront JSON API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                        - Health check
//!
//! # Products
//! GET  /api/products                  - List / search products
//! GET  /api/products/similar          - Nearest-price matches
//! GET  /api/products/{slug}           - Product detail with related items
//! GET  /api/products/{slug}/related   - Related products only
//!
//! # Cart
//! GET  /api/cart                      - Cart view with subtotal
//! GET  /api/cart/count                - Total item count
//! POST /api/cart/add                  - Add item (merges on same selection)
//! POST /api/cart/update               - Update quantity
//! POST /api/cart/remove               - Remove item
//! POST /api/cart/clear                - Empty the cart
//!
//! # Checkout & Orders
//! POST /api/checkout                  - Create order from cart, clear cart
//! GET  /api/orders/{id}               - Order detail (?placed=1 echoes a
//!                                       one-time success hint)
//!
//! # Admin
//! GET  /api/admin/products            - Search (name, brand, or id)
//! POST /api/admin/products            - Create product
//! PUT  /api/admin/products/{id}       - Patch product
//! POST /api/admin/orders/{id}/status  - Advance order status
//!
//! # Prediction
//! POST /api/predict                   - Price estimation proxy
//! ```

pub mod admin;
pub mod cart;
pub mod checkout;
pub mod orders;
pub mod predict;
pub mod products;

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::state::AppState;

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index))
        .route("/similar", get(products::similar))
        .route("/{slug}", get(products::show))
        .route("/{slug}/related", get(products::related))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/count", get(cart::count))
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
        .route("/clear", post(cart::clear))
}

/// Create the order routes router.
pub fn order_routes() -> Router<AppState> {
    Router::new().route("/{id}", get(orders::show))
}

/// Create the admin routes router.
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(admin::index).post(admin::create))
        .route("/products/{id}", put(admin::update))
        .route("/orders/{id}/status", post(admin::update_status))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .nest("/api/products", product_routes())
        .nest("/api/cart", cart_routes())
        .route("/api/checkout", post(checkout::submit))
        .nest("/api/orders", order_routes())
        .nest("/api/admin", admin_routes())
        .route("/api/predict", post(predict::predict))
}
