//! Cart engine.
//!
//! A cart is an ordered list of [`CartLine`]s keyed by
//! (product id, [`Selection`]). Within a cart that key is unique: adding an
//! item whose key already exists merges into the existing line instead of
//! appending a duplicate.
//!
//! The engine is pure; persistence wraps it in the storefront crate.

use serde::{Deserialize, Serialize};

use crate::types::cart::{CartLine, Selection};

/// Ordered cart contents for a single session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<CartLine>,
}

impl Cart {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rehydrate a cart from persisted lines.
    #[must_use]
    pub fn from_lines(items: Vec<CartLine>) -> Self {
        Self { items }
    }

    /// Current lines in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.items
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Add `quantity` of a selection to the cart. Quantities below 1 are
    /// clamped to 1.
    ///
    /// If a line with the same (product id, selection) exists, its quantity
    /// grows by `quantity` and, when `unit_price` is supplied, its snapshot
    /// is overwritten with the new value (last write wins). Otherwise a new
    /// line is appended, preserving insertion order.
    pub fn add_item(
        &mut self,
        product_id: &str,
        quantity: u32,
        selection: Selection,
        unit_price: Option<i64>,
    ) {
        let quantity = quantity.max(1);
        if let Some(line) = self
            .items
            .iter_mut()
            .find(|line| line.matches(product_id, &selection))
        {
            line.quantity = line.quantity.saturating_add(quantity);
            if unit_price.is_some() {
                line.unit_price = unit_price;
            }
            return;
        }
        self.items.push(CartLine {
            product_id: product_id.to_string(),
            selection,
            quantity,
            unit_price,
        });
    }

    /// Remove every line matching (product id, selection) exactly. A
    /// selection with both fields absent removes only selection-less lines.
    pub fn remove_item(&mut self, product_id: &str, selection: &Selection) {
        self.items
            .retain(|line| !line.matches(product_id, selection));
    }

    /// Set the quantity on the matching line, clamped to a minimum of 1.
    /// No-op when no line matches.
    pub fn update_quantity(&mut self, product_id: &str, quantity: u32, selection: &Selection) {
        if let Some(line) = self
            .items
            .iter_mut()
            .find(|line| line.matches(product_id, selection))
        {
            line.quantity = quantity.max(1);
        }
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sum of quantities across all lines.
    #[must_use]
    pub fn total_items(&self) -> u32 {
        self.items.iter().map(|line| line.quantity).sum()
    }

    /// Cart subtotal in VND.
    ///
    /// Per line the unit price resolves as: explicit snapshot, else
    /// `lookup(product_id)`, else 0. The snapshot always wins over a fresh
    /// catalog price, and a vanished product contributes nothing rather
    /// than erroring.
    pub fn subtotal<F>(&self, lookup: F) -> i64
    where
        F: Fn(&str) -> Option<i64>,
    {
        self.items
            .iter()
            .map(|line| {
                let unit = line
                    .unit_price
                    .or_else(|| lookup(&line.product_id))
                    .unwrap_or(0);
                unit * i64::from(line.quantity)
            })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blue_128() -> Selection {
        Selection::new(Some("128GB".to_string()), Some("Blue".to_string()))
    }

    #[test]
    fn repeated_adds_merge_into_one_line() {
        let mut cart = Cart::new();
        cart.add_item("p1", 1, blue_128(), Some(10_000_000));
        cart.add_item("p1", 2, blue_128(), Some(10_000_000));
        cart.add_item("p1", 3, blue_128(), Some(10_000_000));

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.total_items(), 6);
    }

    #[test]
    fn different_selections_are_distinct_lines() {
        let mut cart = Cart::new();
        cart.add_item("p1", 1, blue_128(), None);
        cart.add_item(
            "p1",
            1,
            Selection::new(Some("128GB".to_string()), Some("Black".to_string())),
            None,
        );
        cart.add_item("p1", 1, Selection::none(), None);

        assert_eq!(cart.lines().len(), 3);
        assert_eq!(cart.total_items(), 3);
    }

    #[test]
    fn merge_refreshes_unit_price_last_write_wins() {
        let mut cart = Cart::new();
        cart.add_item("p1", 1, Selection::none(), Some(12_000_000));
        cart.add_item("p1", 1, Selection::none(), Some(11_000_000));

        let line = cart.lines().first().expect("one line");
        assert_eq!(line.unit_price, Some(11_000_000));
    }

    #[test]
    fn merge_without_price_keeps_existing_snapshot() {
        let mut cart = Cart::new();
        cart.add_item("p1", 1, Selection::none(), Some(12_000_000));
        cart.add_item("p1", 1, Selection::none(), None);

        let line = cart.lines().first().expect("one line");
        assert_eq!(line.unit_price, Some(12_000_000));
        assert_eq!(line.quantity, 2);
    }

    #[test]
    fn add_clamps_zero_quantity_to_one() {
        let mut cart = Cart::new();
        cart.add_item("p1", 0, Selection::none(), None);
        assert_eq!(cart.total_items(), 1);
    }

    #[test]
    fn remove_then_add_leaves_no_ghost_duplicates() {
        let mut cart = Cart::new();
        cart.add_item("p1", 5, blue_128(), None);
        cart.remove_item("p1", &blue_128());
        cart.add_item("p1", 1, blue_128(), None);

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines().first().map(|l| l.quantity), Some(1));
    }

    #[test]
    fn remove_matches_selection_exactly() {
        let mut cart = Cart::new();
        cart.add_item("p1", 1, blue_128(), None);
        cart.add_item("p1", 1, Selection::none(), None);

        cart.remove_item("p1", &Selection::none());
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(
            cart.lines().first().map(|l| l.selection.clone()),
            Some(blue_128())
        );
    }

    #[test]
    fn update_quantity_clamps_to_minimum_one() {
        let mut cart = Cart::new();
        cart.add_item("p1", 3, Selection::none(), None);
        cart.update_quantity("p1", 0, &Selection::none());
        assert_eq!(cart.total_items(), 1);

        cart.update_quantity("p1", 7, &Selection::none());
        assert_eq!(cart.total_items(), 7);
    }

    #[test]
    fn update_quantity_unknown_key_is_noop() {
        let mut cart = Cart::new();
        cart.add_item("p1", 2, Selection::none(), None);
        cart.update_quantity("p1", 9, &blue_128());
        assert_eq!(cart.total_items(), 2);
    }

    #[test]
    fn clear_empties_everything() {
        let mut cart = Cart::new();
        cart.add_item("p1", 2, Selection::none(), None);
        cart.add_item("p2", 1, blue_128(), None);
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total_items(), 0);
    }

    #[test]
    fn subtotal_follows_fallback_chain() {
        let mut cart = Cart::new();
        // Snapshot price wins.
        cart.add_item("p1", 2, Selection::none(), Some(10_000_000));
        // No snapshot: catalog lookup.
        cart.add_item("p2", 1, Selection::none(), None);
        // No snapshot and no product: contributes zero.
        cart.add_item("ghost", 4, Selection::none(), None);

        let subtotal = cart.subtotal(|id| match id {
            "p1" => Some(99_000_000), // must be ignored
            "p2" => Some(5_000_000),
            _ => None,
        });
        assert_eq!(subtotal, 2 * 10_000_000 + 5_000_000);
    }

    #[test]
    fn subtotal_is_invariant_under_catalog_price_changes() {
        let mut cart = Cart::new();
        cart.add_item("p1", 1, Selection::none(), Some(10_000_000));

        let before = cart.subtotal(|_| Some(10_000_000));
        let after = cart.subtotal(|_| Some(25_000_000));
        assert_eq!(before, after);
    }

    #[test]
    fn persisted_lines_round_trip() {
        let mut cart = Cart::new();
        cart.add_item("p1", 2, blue_128(), Some(9_000_000));

        let json = serde_json::to_string(&cart).expect("serialize");
        let back: Cart = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, cart);
    }
}
