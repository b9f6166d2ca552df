//! Integration tests for the cart, checkout, and order-tracking flow,
//! driven through the full router.

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::{Value, json};
use tower::ServiceExt;

use phonestore_storefront::app;
use phonestore_storefront::config::{PredictConfig, StorefrontConfig};
use phonestore_storefront::persist::MemoryStore;
use phonestore_storefront::seed;
use phonestore_storefront::state::AppState;

fn test_app() -> Router {
    let config = StorefrontConfig {
        host: "127.0.0.1".parse().expect("valid ip"),
        port: 0,
        data_dir: "unused".into(),
        predict: PredictConfig::default(),
    };
    app(AppState::new(
        config,
        seed::catalog(),
        Arc::new(MemoryStore::new()),
    ))
}

async fn send(router: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(value) => {
            builder = builder.header("content-type", "application/json");
            Body::from(value.to_string())
        }
        None => Body::empty(),
    };
    let response = router
        .clone()
        .oneshot(builder.body(body).expect("request"))
        .await
        .expect("response");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };
    (status, value)
}

fn shipping() -> Value {
    json!({
        "full_name": "Nguyen Van A",
        "phone": "0900000000",
        "email": "a@example.com",
        "address": "1 Le Loi",
        "city": "Ho Chi Minh",
        "district": "District 1"
    })
}

#[tokio::test]
async fn adding_the_same_selection_merges_lines() {
    let router = test_app();

    let add = json!({
        "product_id": "redmi-note-13",
        "quantity": 2,
        "variant_label": "128GB"
    });
    let (status, _) = send(&router, "POST", "/api/cart/add", Some(add.clone())).await;
    assert_eq!(status, StatusCode::OK);

    let (_, cart) = send(&router, "POST", "/api/cart/add", Some(add)).await;
    assert_eq!(cart["items"].as_array().map(Vec::len), Some(1));
    assert_eq!(cart["total_items"], json!(4));
    // Variant price snapshot: 4 x 4,890,000.
    assert_eq!(cart["subtotal"], json!(19_560_000_i64));

    let (_, count) = send(&router, "GET", "/api/cart/count", None).await;
    assert_eq!(count["count"], json!(4));
}

#[tokio::test]
async fn different_colors_stay_separate_lines() {
    let router = test_app();

    for color in ["Đen", "Xanh Dương"] {
        let add = json!({
            "product_id": "redmi-note-13",
            "quantity": 1,
            "variant_label": "128GB",
            "color": color
        });
        send(&router, "POST", "/api/cart/add", Some(add)).await;
    }

    let (_, cart) = send(&router, "GET", "/api/cart", None).await;
    assert_eq!(cart["items"].as_array().map(Vec::len), Some(2));
}

#[tokio::test]
async fn update_clamps_quantity_and_remove_deletes_the_line() {
    let router = test_app();

    let key = json!({ "product_id": "vivo-y36", "quantity": 3 });
    send(&router, "POST", "/api/cart/add", Some(key)).await;

    let (_, cart) = send(
        &router,
        "POST",
        "/api/cart/update",
        Some(json!({ "product_id": "vivo-y36", "quantity": 0 })),
    )
    .await;
    assert_eq!(cart["total_items"], json!(1));

    let (_, cart) = send(
        &router,
        "POST",
        "/api/cart/remove",
        Some(json!({ "product_id": "vivo-y36" })),
    )
    .await;
    assert_eq!(cart["items"].as_array().map(Vec::len), Some(0));
}

#[tokio::test]
async fn adding_an_unknown_product_is_not_found() {
    let router = test_app();
    let (status, body) = send(
        &router,
        "POST",
        "/api/cart/add",
        Some(json!({ "product_id": "no-such-phone", "quantity": 1 })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn checkout_creates_an_order_and_clears_the_cart() {
    let router = test_app();

    send(
        &router,
        "POST",
        "/api/cart/add",
        Some(json!({
            "product_id": "galaxy-s24-ultra",
            "quantity": 1,
            "variant_label": "256GB",
            "color": "Xám Titan"
        })),
    )
    .await;

    let (status, order) = send(
        &router,
        "POST",
        "/api/checkout",
        Some(json!({
            "shipping": shipping(),
            "payment_method": "cod",
            "shipping_fee": 50_000
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    assert_eq!(order["subtotal"], json!(26_990_000_i64));
    assert_eq!(order["total"], json!(27_040_000_i64));
    assert_eq!(order["status"], json!("processing"));
    let item = &order["items"][0];
    assert_eq!(item["variant_label"], json!("256GB"));
    assert_eq!(item["color"], json!("Xám Titan"));

    let id = order["id"].as_str().expect("order id");
    assert!(id.starts_with("ORD-"));

    // Collaboration contract: checkout clears the cart.
    let (_, cart) = send(&router, "GET", "/api/cart", None).await;
    assert_eq!(cart["total_items"], json!(0));

    // Tracking view, with the one-time success hint.
    let (status, view) = send(&router, "GET", &format!("/api/orders/{id}?placed=1"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(view["just_placed"], json!(true));

    let (_, view) = send(&router, "GET", &format!("/api/orders/{id}"), None).await;
    assert_eq!(view["just_placed"], json!(false));
}

#[tokio::test]
async fn checkout_with_an_empty_cart_is_rejected() {
    let router = test_app();
    let (status, body) = send(
        &router,
        "POST",
        "/api/checkout",
        Some(json!({ "shipping": shipping(), "payment_method": "momo" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!("Bad request: Cart is empty"));
}

#[tokio::test]
async fn unknown_order_is_not_found() {
    let router = test_app();
    let (status, _) = send(&router, "GET", "/api/orders/ORD-20240101-ZZZZ", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn admin_can_advance_but_not_rewind_order_status() {
    let router = test_app();

    send(
        &router,
        "POST",
        "/api/cart/add",
        Some(json!({ "product_id": "iphone-13", "quantity": 1 })),
    )
    .await;
    let (_, order) = send(
        &router,
        "POST",
        "/api/checkout",
        Some(json!({ "shipping": shipping(), "payment_method": "vnpay" })),
    )
    .await;
    let id = order["id"].as_str().expect("order id");

    let (status, updated) = send(
        &router,
        "POST",
        &format!("/api/admin/orders/{id}/status"),
        Some(json!({ "status": "shipped" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["status"], json!("shipped"));

    let (status, body) = send(
        &router,
        "POST",
        &format!("/api/admin/orders/{id}/status"),
        Some(json!({ "status": "pending" })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn admin_search_and_product_crud() {
    let router = test_app();

    // Admin search matches on id.
    let (_, hits) = send(&router, "GET", "/api/admin/products?q=iphone-13", None).await;
    assert!(
        hits.as_array()
            .is_some_and(|hits| hits.iter().any(|p| p["id"] == json!("iphone-13")))
    );

    // Duplicate create is rejected.
    let (_, existing) = send(&router, "GET", "/api/products/iphone-13", None).await;
    let mut duplicate = existing.clone();
    duplicate.as_object_mut().map(|o| o.remove("related"));
    let (status, _) = send(&router, "POST", "/api/admin/products", Some(duplicate)).await;
    assert_eq!(status, StatusCode::CONFLICT);

    // Patch an existing product.
    let (status, patched) = send(
        &router,
        "PUT",
        "/api/admin/products/iphone-13",
        Some(json!({ "price": 12_990_000, "stock": 7 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(patched["price"], json!(12_990_000_i64));
    assert_eq!(patched["stock"], json!(7));

    // Unknown id is a 404 no-op.
    let (status, _) = send(
        &router,
        "PUT",
        "/api/admin/products/ghost",
        Some(json!({ "price": 1 })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn product_listing_search_and_similar_prices() {
    let router = test_app();

    let (_, all) = send(&router, "GET", "/api/products", None).await;
    let total = all.as_array().map(Vec::len).expect("product list");
    assert!(total >= 6);

    let (_, hits) = send(&router, "GET", "/api/products?q=samsung", None).await;
    assert!(hits.as_array().is_some_and(|hits| !hits.is_empty()));

    // Blank search falls back to the full listing.
    let (_, blank) = send(&router, "GET", "/api/products?q=%20", None).await;
    assert_eq!(blank.as_array().map(Vec::len), Some(total));

    // Detail carries related products of the same brand.
    let (status, detail) = send(&router, "GET", "/api/products/iphone-13", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(
        detail["related"]
            .as_array()
            .is_some_and(|related| related.iter().all(|p| p["brand"] == json!("Apple")))
    );

    // Nearest-price matching around 5M: the three mid-range phones.
    let (_, similar) = send(
        &router,
        "GET",
        "/api/products/similar?price=5000000&limit=10",
        None,
    )
    .await;
    let ids: Vec<&str> = similar
        .as_array()
        .expect("similar list")
        .iter()
        .filter_map(|p| p["id"].as_str())
        .collect();
    assert_eq!(ids, ["galaxy-a15", "redmi-note-13", "vivo-y36"]);

    let (status, _) = send(&router, "GET", "/api/products/no-such-slug", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
