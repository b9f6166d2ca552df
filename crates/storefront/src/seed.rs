//! Built-in catalog seed data.
//!
//! The catalog is read-mostly and lives in memory; this module provides the
//! products it starts with. Prices are VND.

use phonestore_core::catalog::Catalog;
use phonestore_core::{Brand, Category, PriceRange, Product, ProductSpecs, ProductVariant};

/// Build the seeded catalog.
#[must_use]
pub fn catalog() -> Catalog {
    Catalog::new(seed_products())
}

#[allow(clippy::too_many_arguments)]
fn specs(
    ram_mb: u32,
    storage_gb: u32,
    battery_mah: u32,
    px: (u32, u32),
    cameras: (u32, u32),
    core_count: u8,
    clock_speed_ghz: f32,
    weight_g: u32,
) -> ProductSpecs {
    ProductSpecs {
        ram_mb,
        storage_gb,
        battery_mah,
        px_width: px.0,
        px_height: px.1,
        screen_w_cm: 7,
        screen_h_cm: 16,
        primary_camera_mp: cameras.0,
        front_camera_mp: cameras.1,
        core_count,
        clock_speed_ghz,
        weight_g,
        depth_mm: 8.0,
        talk_time_h: 22,
        bluetooth: true,
        dual_sim: true,
        four_g: true,
        three_g: true,
        touch_screen: true,
        wifi: true,
    }
}

fn variant(label: &str, price: i64) -> ProductVariant {
    ProductVariant {
        label: label.to_string(),
        price,
        stock: None,
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(ToString::to_string).collect()
}

fn seed_products() -> Vec<Product> {
    vec![
        Product {
            id: "iphone-15-pro-max".to_string(),
            slug: "iphone-15-pro-max".to_string(),
            name: "iPhone 15 Pro Max".to_string(),
            brand: Brand::Apple,
            price: 29_990_000,
            price_range: PriceRange::VeryHigh,
            images: strings(&["/images/iphone-15-pro-max.jpg"]),
            stock: 12,
            rating: 4.9,
            specs: specs(8192, 256, 4422, (1290, 2796), (48, 12), 6, 3.78, 221),
            description: "Khung titan, chip A17 Pro, camera 48MP với zoom quang 5x".to_string(),
            category: Some(Category::Flagship),
            chipset: Some("Apple A17 Pro".to_string()),
            launch_year: Some(2023),
            highlights: strings(&["Titan chuẩn hàng không", "Action Button", "USB-C"]),
            badges: strings(&["Trả góp 0%"]),
            colors: strings(&["Titan Tự Nhiên", "Titan Xanh", "Titan Đen"]),
            variants: vec![
                variant("256GB", 29_990_000),
                variant("512GB", 35_990_000),
                variant("1TB", 41_990_000),
            ],
            featured: true,
        },
        Product {
            id: "galaxy-s24-ultra".to_string(),
            slug: "samsung-galaxy-s24-ultra".to_string(),
            name: "Samsung Galaxy S24 Ultra".to_string(),
            brand: Brand::Samsung,
            price: 26_990_000,
            price_range: PriceRange::VeryHigh,
            images: strings(&["/images/galaxy-s24-ultra.jpg"]),
            stock: 18,
            rating: 4.8,
            specs: specs(12_288, 256, 5000, (1440, 3120), (200, 12), 8, 3.39, 232),
            description: "Galaxy AI, bút S Pen, camera 200MP, khung titan".to_string(),
            category: Some(Category::Flagship),
            chipset: Some("Snapdragon 8 Gen 3 for Galaxy".to_string()),
            launch_year: Some(2024),
            highlights: strings(&["Galaxy AI", "S Pen", "Màn hình 120Hz"]),
            badges: strings(&["Giảm sốc"]),
            colors: strings(&["Xám Titan", "Tím Titan", "Đen Titan"]),
            variants: vec![variant("256GB", 26_990_000), variant("512GB", 29_990_000)],
            featured: true,
        },
        Product {
            id: "iphone-13".to_string(),
            slug: "iphone-13".to_string(),
            name: "iPhone 13".to_string(),
            brand: Brand::Apple,
            price: 13_990_000,
            price_range: PriceRange::High,
            images: strings(&["/images/iphone-13.jpg"]),
            stock: 25,
            rating: 4.7,
            specs: specs(4096, 128, 3240, (1170, 2532), (12, 12), 6, 3.23, 174),
            description: "Chip A15 Bionic, camera kép 12MP, pin cả ngày".to_string(),
            category: Some(Category::Premium),
            chipset: Some("Apple A15 Bionic".to_string()),
            launch_year: Some(2021),
            highlights: strings(&["Face ID", "Ceramic Shield"]),
            badges: Vec::new(),
            colors: strings(&["Midnight", "Starlight", "Hồng"]),
            variants: vec![variant("128GB", 13_990_000), variant("256GB", 16_490_000)],
            featured: false,
        },
        Product {
            id: "oppo-reno11-f".to_string(),
            slug: "oppo-reno11-f-5g".to_string(),
            name: "OPPO Reno11 F 5G".to_string(),
            brand: Brand::Oppo,
            price: 8_490_000,
            price_range: PriceRange::High,
            images: strings(&["/images/oppo-reno11-f.jpg"]),
            stock: 30,
            rating: 4.5,
            specs: specs(8192, 256, 5000, (1080, 2412), (64, 32), 8, 2.6, 177),
            description: "Chuyên gia chân dung, sạc nhanh SUPERVOOC 67W".to_string(),
            category: Some(Category::Midrange),
            chipset: Some("Dimensity 7050".to_string()),
            launch_year: Some(2024),
            highlights: strings(&["Sạc 67W", "Camera chân dung 64MP"]),
            badges: strings(&["Mới"]),
            colors: strings(&["Xanh Lá", "Tím"]),
            variants: Vec::new(),
            featured: false,
        },
        Product {
            id: "redmi-note-13".to_string(),
            slug: "xiaomi-redmi-note-13".to_string(),
            name: "Xiaomi Redmi Note 13".to_string(),
            brand: Brand::Xiaomi,
            price: 4_890_000,
            price_range: PriceRange::Mid,
            images: strings(&["/images/redmi-note-13.jpg"]),
            stock: 45,
            rating: 4.4,
            specs: specs(8192, 128, 5000, (1080, 2400), (108, 16), 8, 2.8, 188),
            description: "Camera 108MP, màn hình AMOLED 120Hz, giá phổ thông".to_string(),
            category: Some(Category::Budget),
            chipset: Some("Snapdragon 685".to_string()),
            launch_year: Some(2024),
            highlights: strings(&["AMOLED 120Hz", "Camera 108MP"]),
            badges: strings(&["Bán chạy"]),
            colors: strings(&["Đen", "Xanh Dương", "Vàng"]),
            variants: vec![variant("128GB", 4_890_000), variant("256GB", 5_690_000)],
            featured: true,
        },
        Product {
            id: "galaxy-a15".to_string(),
            slug: "samsung-galaxy-a15".to_string(),
            name: "Samsung Galaxy A15".to_string(),
            brand: Brand::Samsung,
            price: 4_990_000,
            price_range: PriceRange::Mid,
            images: strings(&["/images/galaxy-a15.jpg"]),
            stock: 40,
            rating: 4.3,
            specs: specs(8192, 128, 5000, (1080, 2340), (50, 13), 8, 2.2, 200),
            description: "Màn hình Super AMOLED, pin 5000mAh, sạc nhanh 25W".to_string(),
            category: Some(Category::Budget),
            chipset: Some("Helio G99".to_string()),
            launch_year: Some(2024),
            highlights: strings(&["Super AMOLED", "Pin 5000mAh"]),
            badges: Vec::new(),
            colors: strings(&["Xanh", "Đen", "Vàng"]),
            variants: Vec::new(),
            featured: false,
        },
        Product {
            id: "vivo-y36".to_string(),
            slug: "vivo-y36".to_string(),
            name: "Vivo Y36".to_string(),
            brand: Brand::Vivo,
            price: 5_290_000,
            price_range: PriceRange::Mid,
            images: strings(&["/images/vivo-y36.jpg"]),
            stock: 22,
            rating: 4.2,
            specs: specs(8192, 128, 5000, (1080, 2388), (50, 16), 8, 2.4, 202),
            description: "Thiết kế trẻ trung, sạc nhanh 44W, loa kép".to_string(),
            category: Some(Category::Budget),
            chipset: Some("Snapdragon 680".to_string()),
            launch_year: Some(2023),
            highlights: strings(&["Sạc 44W"]),
            badges: Vec::new(),
            colors: strings(&["Xanh Biển", "Đen Bóng"]),
            variants: Vec::new(),
            featured: false,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_has_unique_ids_and_slugs() {
        let products = seed_products();
        for (i, a) in products.iter().enumerate() {
            for b in products.iter().skip(i + 1) {
                assert_ne!(a.id, b.id);
                assert_ne!(a.slug, b.slug);
            }
        }
    }

    #[test]
    fn seed_prices_match_their_buckets() {
        for product in seed_products() {
            let (min, max) = product.price_range.band();
            let price = product.effective_price();
            assert!(
                price >= min && price <= max,
                "{} priced {price} outside bucket {:?}",
                product.id,
                product.price_range
            );
        }
    }

    #[test]
    fn seeded_catalog_is_nonempty() {
        assert!(!catalog().is_empty());
    }
}
