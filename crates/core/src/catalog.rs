//! In-memory product repository.
//!
//! The catalog is an ordered collection seeded at startup. Reads hand out
//! owned copies so callers never observe internal mutation; admin writes go
//! through [`Catalog::create`] and [`Catalog::update`].

use thiserror::Error;

use crate::types::product::{Brand, Category, PriceRange, Product, ProductVariant};

/// Half-width of the nearest-price window, in VND.
pub const SIMILAR_PRICE_BAND: i64 = 2_000_000;

/// Errors from admin catalog writes.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// A product with this id already exists.
    #[error("duplicate product id: {0}")]
    DuplicateId(String),

    /// A product with this slug already exists.
    #[error("duplicate product slug: {0}")]
    DuplicateSlug(String),
}

/// Partial update for a product. `None` fields are left untouched.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub price: Option<i64>,
    pub price_range: Option<PriceRange>,
    pub stock: Option<u32>,
    pub rating: Option<f32>,
    pub description: Option<String>,
    pub category: Option<Category>,
    pub chipset: Option<String>,
    pub badges: Option<Vec<String>>,
    pub colors: Option<Vec<String>>,
    pub variants: Option<Vec<ProductVariant>>,
    pub featured: Option<bool>,
}

/// Ordered, in-memory product collection.
#[derive(Debug, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Create a catalog from seed products, preserving their order.
    #[must_use]
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Owned copy of the full catalog in catalog order.
    #[must_use]
    pub fn all(&self) -> Vec<Product> {
        self.products.clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Look up a product by id.
    #[must_use]
    pub fn by_id(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Look up a product by slug.
    #[must_use]
    pub fn by_slug(&self, slug: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.slug == slug)
    }

    /// Effective price of a product by id, for cart subtotal lookups.
    #[must_use]
    pub fn price_of(&self, id: &str) -> Option<i64> {
        self.by_id(id).map(Product::effective_price)
    }

    /// Products sharing the seed's brand, excluding the seed itself, in
    /// catalog order, capped at `limit`. Unknown slugs yield nothing.
    #[must_use]
    pub fn related(&self, slug: &str, limit: usize) -> Vec<Product> {
        let Some(seed) = self.by_slug(slug) else {
            return Vec::new();
        };
        let brand = seed.brand;
        self.products
            .iter()
            .filter(|p| p.slug != slug && p.brand == brand)
            .take(limit)
            .cloned()
            .collect()
    }

    /// Products whose effective price falls within
    /// `[target - SIMILAR_PRICE_BAND, target + SIMILAR_PRICE_BAND]`
    /// inclusive, sorted ascending by distance to `target`. The sort is
    /// stable, so equidistant products keep catalog order.
    #[must_use]
    pub fn similar_by_price(
        &self,
        target: i64,
        exclude: Option<&str>,
        limit: usize,
    ) -> Vec<Product> {
        let mut matches: Vec<&Product> = self
            .products
            .iter()
            .filter(|p| exclude != Some(p.id.as_str()))
            .filter(|p| (p.effective_price() - target).abs() <= SIMILAR_PRICE_BAND)
            .collect();
        matches.sort_by_key(|p| (p.effective_price() - target).abs());
        matches.into_iter().take(limit).cloned().collect()
    }

    /// Case-insensitive substring search over name, brand, and description.
    /// A blank query yields an empty result, not the full catalog.
    #[must_use]
    pub fn search(&self, query: &str, limit: usize) -> Vec<Product> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        self.products
            .iter()
            .filter(|p| {
                p.name.to_lowercase().contains(&needle)
                    || p.brand.to_string().to_lowercase().contains(&needle)
                    || p.description.to_lowercase().contains(&needle)
            })
            .take(limit)
            .cloned()
            .collect()
    }

    /// Search for the admin panel: also matches on product id.
    #[must_use]
    pub fn search_admin(&self, query: &str, limit: usize) -> Vec<Product> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        self.products
            .iter()
            .filter(|p| {
                p.name.to_lowercase().contains(&needle)
                    || p.brand.to_string().to_lowercase().contains(&needle)
                    || p.id.to_lowercase().contains(&needle)
            })
            .take(limit)
            .cloned()
            .collect()
    }

    /// Append a new product.
    ///
    /// # Errors
    ///
    /// Rejects ids and slugs that already exist; lookups are first-match, so
    /// a shadowed duplicate would be unreachable forever.
    pub fn create(&mut self, product: Product) -> Result<(), CatalogError> {
        if self.by_id(&product.id).is_some() {
            return Err(CatalogError::DuplicateId(product.id));
        }
        if self.by_slug(&product.slug).is_some() {
            return Err(CatalogError::DuplicateSlug(product.slug));
        }
        self.products.push(product);
        Ok(())
    }

    /// Apply a partial update to the product with the given id, returning
    /// the updated product. Unknown ids are a no-op returning `None`.
    pub fn update(&mut self, id: &str, patch: ProductPatch) -> Option<Product> {
        let product = self.products.iter_mut().find(|p| p.id == id)?;
        if let Some(name) = patch.name {
            product.name = name;
        }
        if let Some(price) = patch.price {
            product.price = price;
        }
        if let Some(price_range) = patch.price_range {
            product.price_range = price_range;
        }
        if let Some(stock) = patch.stock {
            product.stock = stock;
        }
        if let Some(rating) = patch.rating {
            product.rating = rating;
        }
        if let Some(description) = patch.description {
            product.description = description;
        }
        if let Some(category) = patch.category {
            product.category = Some(category);
        }
        if let Some(chipset) = patch.chipset {
            product.chipset = Some(chipset);
        }
        if let Some(badges) = patch.badges {
            product.badges = badges;
        }
        if let Some(colors) = patch.colors {
            product.colors = colors;
        }
        if let Some(variants) = patch.variants {
            product.variants = variants;
        }
        if let Some(featured) = patch.featured {
            product.featured = featured;
        }
        Some(product.clone())
    }
}
