//! # Wishlist State
//!
//! Membership store for wishlisted products: a bare product reference per
//! entry, no quantity, id equality as the only duplicate key.

use std::sync::{Arc, Mutex};

use meridian_core::Product;

use crate::collection::{Collection, Keyed};

impl Keyed for Product {
    fn key(&self) -> &str {
        &self.id
    }
}

// =============================================================================
// Wishlist
// =============================================================================

/// Which way a toggle went. The surface uses this to pick the add vs
/// remove notice message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WishlistChange {
    Added,
    Removed,
}

/// Ordered set of wishlisted products.
#[derive(Debug, Clone, Default)]
pub struct Wishlist {
    items: Collection<Product>,
}

impl Wishlist {
    /// Creates an empty wishlist.
    pub fn new() -> Self {
        Wishlist {
            items: Collection::new(),
        }
    }

    /// Membership test by product id.
    pub fn contains(&self, product_id: &str) -> bool {
        self.items.contains(product_id)
    }

    /// Appends a product unless it is already wishlisted.
    ///
    /// ## Returns
    /// `true` when the product was newly added.
    pub fn add(&mut self, product: Product) -> bool {
        if self.contains(&product.id) {
            return false;
        }
        self.items.insert(product);
        true
    }

    /// Removes a product by id.
    ///
    /// ## Returns
    /// `true` when the product was present.
    pub fn remove(&mut self, product_id: &str) -> bool {
        self.items.remove(product_id)
    }

    /// Flips membership: present → remove, absent → append.
    ///
    /// Defined purely in terms of `contains` + `add`/`remove`; there is
    /// no separate toggle state. Two toggles with the same product always
    /// return the wishlist to its prior membership.
    pub fn toggle(&mut self, product: Product) -> WishlistChange {
        if self.contains(&product.id) {
            self.remove(&product.id);
            WishlistChange::Removed
        } else {
            self.add(product);
            WishlistChange::Added
        }
    }

    /// The wishlist in insertion order, cloned out.
    pub fn all(&self) -> Vec<Product> {
        self.items.snapshot()
    }

    /// Number of wishlisted products.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Checks whether the wishlist is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// =============================================================================
// Wishlist Store (shared wrapper)
// =============================================================================

/// Shared handle to the wishlist.
#[derive(Debug, Clone, Default)]
pub struct WishlistStore {
    inner: Arc<Mutex<Wishlist>>,
}

impl WishlistStore {
    /// Creates a store over an empty wishlist.
    pub fn new() -> Self {
        WishlistStore {
            inner: Arc::new(Mutex::new(Wishlist::new())),
        }
    }

    /// Executes a function with read access to the wishlist.
    pub fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Wishlist) -> R,
    {
        let wishlist = self.inner.lock().expect("wishlist mutex poisoned");
        f(&wishlist)
    }

    /// Executes a function with write access to the wishlist.
    pub fn with_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Wishlist) -> R,
    {
        let mut wishlist = self.inner.lock().expect("wishlist mutex poisoned");
        f(&mut wishlist)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
