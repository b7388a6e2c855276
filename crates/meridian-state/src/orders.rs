//! # Order State
//!
//! The order book: every order the session knows about, in creation
//! order, with independent fulfillment- and payment-status mutation.
//!
//! ## Order Operations Flow
//! ```text
//! Frontend Action            Surface Call               State Change
//! ───────────────            ────────────               ────────────
//! Checkout completes ──────► create_order() ──────────► append
//! Seller marks shipped ────► update_order_status() ───► one record + stamp
//! Payment webhook lands ───► update_payment_status() ─► one record + stamp
//! Customer opens history ──► orders_for_customer() ───► filtered snapshot
//! ```
//!
//! Orders are never deleted here; cancellation is just another status.

use std::sync::{Arc, Mutex};

use chrono::Utc;

use meridian_core::{Order, OrderStatus, PaymentStatus};

use crate::collection::{Collection, Keyed};

impl Keyed for Order {
    fn key(&self) -> &str {
        &self.id
    }
}

// =============================================================================
// Order Book
// =============================================================================

/// Ordered collection of orders with status mutation.
#[derive(Debug, Clone, Default)]
pub struct OrderBook {
    orders: Collection<Order>,
}

impl OrderBook {
    /// Creates an empty order book.
    pub fn new() -> Self {
        OrderBook {
            orders: Collection::new(),
        }
    }

    /// Appends an order.
    ///
    /// The caller has already assigned the id and computed the monetary
    /// fields; nothing is validated or de-duplicated here.
    pub fn create(&mut self, order: Order) {
        self.orders.insert(order);
    }

    /// Returns the first order with the given id, cloned out.
    pub fn get(&self, id: &str) -> Option<Order> {
        self.orders.get(id).cloned()
    }

    /// Sets the fulfillment status of one order, stamping `updated_at`.
    ///
    /// ## Returns
    /// `false` when no order matches - the book is unchanged and no
    /// error is raised (intentional simplicity). Never reorders.
    pub fn update_order_status(&mut self, id: &str, status: OrderStatus) -> bool {
        self.orders.update(id, |order| {
            order.order_status = status;
            order.updated_at = Utc::now();
        })
    }

    /// Sets the payment status of one order, stamping `updated_at`.
    ///
    /// Same miss semantics as [`update_order_status`](Self::update_order_status).
    pub fn update_payment_status(&mut self, id: &str, status: PaymentStatus) -> bool {
        self.orders.update(id, |order| {
            order.payment_status = status;
            order.updated_at = Utc::now();
        })
    }

    /// Every order placed by the given customer, in original relative order.
    pub fn for_customer(&self, customer_id: &str) -> Vec<Order> {
        self.orders.filter_by(|o| o.customer_id == customer_id)
    }

    /// Every order fulfilled by the given seller, in original relative order.
    ///
    /// Orders with no seller never match.
    pub fn for_seller(&self, seller_id: &str) -> Vec<Order> {
        self.orders
            .filter_by(|o| o.seller_id.as_deref() == Some(seller_id))
    }

    /// The full book in creation order, cloned out.
    pub fn all(&self) -> Vec<Order> {
        self.orders.snapshot()
    }

    /// Number of orders in the book.
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// Checks whether the book is empty.
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

// =============================================================================
// Order Store (shared wrapper)
// =============================================================================

/// Shared handle to the order book.
///
/// The mutex guards the container so it can be handed to the embedding
/// runtime; the execution model still performs one mutation at a time.
#[derive(Debug, Clone, Default)]
pub struct OrderStore {
    inner: Arc<Mutex<OrderBook>>,
}

impl OrderStore {
    /// Creates a store over an empty book.
    pub fn new() -> Self {
        OrderStore {
            inner: Arc::new(Mutex::new(OrderBook::new())),
        }
    }

    /// Executes a function with read access to the book.
    pub fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&OrderBook) -> R,
    {
        let book = self.inner.lock().expect("order book mutex poisoned");
        f(&book)
    }

    /// Executes a function with write access to the book.
    pub fn with_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut OrderBook) -> R,
    {
        let mut book = self.inner.lock().expect("order book mutex poisoned");
        f(&mut book)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
