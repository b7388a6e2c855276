//! # Application Context
//!
//! The consumer surface: one explicitly constructed container owning the
//! order book, the wishlist, the UI state, and the subscriber registry.
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     Application Startup                         │
//! │                                                                 │
//! │  1. init_tracing()                                              │
//! │  2. PrefsStore::at_default_location()                           │
//! │  3. AppContext::boot(prefs)                                     │
//! │     • load persisted subset (theme, sidebar) - once             │
//! │     • missing or corrupt blob → defaults, logged at warn        │
//! │     • construct empty order book + wishlist                     │
//! │  4. hand &AppContext to the presentation layer                  │
//! │     • subscribe(listener) for re-render triggers                │
//! │     • read snapshots, call the operation set below              │
//! │  5. torn down at process exit - nothing to flush                │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The context is created once at boot and injected into presentation
//! code. There is no global instance and no runtime "am I inside a
//! provider?" check; holding an `AppContext` IS the proof of wiring,
//! enforced by the compiler.

use tracing::{debug, info, warn};

use meridian_core::{DashboardModule, Notification, Order, OrderStatus, PaymentStatus, Product, Theme};
use meridian_prefs::PrefsStore;

use crate::events::{Notice, StoreEvent, Subscribers, SubscriptionId, UiField};
use crate::orders::OrderStore;
use crate::ui::{UiState, UiStore};
use crate::wishlist::{WishlistChange, WishlistStore};

// =============================================================================
// App Context
// =============================================================================

/// The domain-state container behind every Meridian dashboard.
///
/// Cloning is cheap and shares state: clones are handles to the same
/// stores, not copies of them.
#[derive(Debug, Clone)]
pub struct AppContext {
    orders: OrderStore,
    wishlist: WishlistStore,
    ui: UiStore,
    prefs: PrefsStore,
    subscribers: Subscribers,
}

impl AppContext {
    /// Boots the context: restores the persisted UI subset and constructs
    /// empty stores.
    ///
    /// A missing blob is a fresh install; a corrupt one is logged and
    /// treated the same. Neither stops boot.
    pub fn boot(prefs: PrefsStore) -> Self {
        let ui = match prefs.load() {
            Ok(Some(saved)) => {
                info!(theme = ?saved.theme, sidebar_open = saved.sidebar_open, "restored ui preferences");
                UiStore::from_prefs(saved)
            }
            Ok(None) => {
                info!("no saved ui preferences, using defaults");
                UiStore::new()
            }
            Err(e) => {
                warn!(error = %e, "failed to load ui preferences, using defaults");
                UiStore::new()
            }
        };

        info!("state container initialized");

        AppContext {
            orders: OrderStore::new(),
            wishlist: WishlistStore::new(),
            ui,
            prefs,
            subscribers: Subscribers::new(),
        }
    }

    // =========================================================================
    // Subscriptions
    // =========================================================================

    /// Registers a listener invoked after every committed mutation.
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&StoreEvent) + Send + 'static,
    {
        self.subscribers.subscribe(listener)
    }

    /// Removes a listener.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    // =========================================================================
    // Orders
    // =========================================================================

    /// Appends a caller-constructed order to the book.
    ///
    /// No id uniqueness check: a duplicate id coexists with the original
    /// and lookups return the first created.
    pub fn create_order(&self, order: Order) {
        debug!(order_id = %order.id, customer_id = %order.customer_id, "create_order");
        let order_id = order.id.clone();
        self.orders.with_mut(|book| book.create(order));
        self.subscribers.emit(&StoreEvent::OrderCreated { order_id });
    }

    /// First order with the given id, or `None`.
    pub fn get_order_by_id(&self, id: &str) -> Option<Order> {
        self.orders.with(|book| book.get(id))
    }

    /// Every order, in creation order.
    pub fn list_orders(&self) -> Vec<Order> {
        self.orders.with(|book| book.all())
    }

    /// This customer's orders, in creation order.
    pub fn orders_for_customer(&self, customer_id: &str) -> Vec<Order> {
        self.orders.with(|book| book.for_customer(customer_id))
    }

    /// This seller's orders, in creation order.
    pub fn orders_for_seller(&self, seller_id: &str) -> Vec<Order> {
        self.orders.with(|book| book.for_seller(seller_id))
    }

    /// Updates one order's fulfillment status, stamping `updated_at`.
    ///
    /// An unknown id is a silent no-op: no error, no event.
    pub fn update_order_status(&self, id: &str, status: OrderStatus) -> bool {
        debug!(order_id = %id, ?status, "update_order_status");
        let changed = self
            .orders
            .with_mut(|book| book.update_order_status(id, status));

        if changed {
            self.subscribers.emit(&StoreEvent::OrderStatusChanged {
                order_id: id.to_string(),
                status,
            });
        } else {
            debug!(order_id = %id, "update_order_status: no such order");
        }
        changed
    }

    /// Updates one order's payment status, stamping `updated_at`.
    ///
    /// Same miss semantics as [`update_order_status`](Self::update_order_status).
    pub fn update_payment_status(&self, id: &str, status: PaymentStatus) -> bool {
        debug!(order_id = %id, ?status, "update_payment_status");
        let changed = self
            .orders
            .with_mut(|book| book.update_payment_status(id, status));

        if changed {
            self.subscribers.emit(&StoreEvent::PaymentStatusChanged {
                order_id: id.to_string(),
                status,
            });
        }
        changed
    }

    // =========================================================================
    // Wishlist
    // =========================================================================

    /// Membership test by product id.
    pub fn is_in_wishlist(&self, product_id: &str) -> bool {
        self.wishlist.with(|w| w.contains(product_id))
    }

    /// The wishlist in insertion order.
    pub fn wishlist(&self) -> Vec<Product> {
        self.wishlist.with(|w| w.all())
    }

    /// Adds a product to the wishlist. Already-present products are left
    /// alone and emit nothing.
    pub fn add_to_wishlist(&self, product: Product) -> bool {
        debug!(product_id = %product.id, "add_to_wishlist");
        let product_id = product.id.clone();
        let name = product.name.clone();
        let added = self.wishlist.with_mut(|w| w.add(product));

        if added {
            self.subscribers.emit(&StoreEvent::WishlistChanged {
                product_id,
                added: true,
            });
            self.subscribers
                .emit(&StoreEvent::Notice(Notice::success(format!(
                    "{} added to your wishlist",
                    name
                ))));
        }
        added
    }

    /// Removes a product from the wishlist by id. A miss emits nothing.
    pub fn remove_from_wishlist(&self, product_id: &str) -> bool {
        debug!(product_id = %product_id, "remove_from_wishlist");
        let removed = self.wishlist.with_mut(|w| w.remove(product_id));

        if removed {
            self.subscribers.emit(&StoreEvent::WishlistChanged {
                product_id: product_id.to_string(),
                added: false,
            });
            self.subscribers
                .emit(&StoreEvent::Notice(Notice::info("Removed from your wishlist")));
        }
        removed
    }

    /// Flips wishlist membership, emitting the matching add/remove notice.
    ///
    /// Defined purely in terms of membership plus add/remove - there is
    /// no separate toggle state to drift.
    pub fn toggle_wishlist(&self, product: Product) -> WishlistChange {
        if self.is_in_wishlist(&product.id) {
            self.remove_from_wishlist(&product.id);
            WishlistChange::Removed
        } else {
            self.add_to_wishlist(product);
            WishlistChange::Added
        }
    }

    // =========================================================================
    // UI State
    // =========================================================================

    /// Snapshot of the full UI state.
    pub fn ui(&self) -> UiState {
        self.ui.with(|state| state.clone())
    }

    /// Sets the theme and writes back the persisted subset.
    pub fn set_theme(&self, theme: Theme) {
        debug!(?theme, "set_theme");
        self.ui.with_mut(|state| state.set_theme(theme));
        self.persist_prefs();
        self.subscribers
            .emit(&StoreEvent::UiChanged { field: UiField::Theme });
    }

    /// Sets sidebar visibility and writes back the persisted subset.
    pub fn set_sidebar_open(&self, open: bool) {
        debug!(open, "set_sidebar_open");
        self.ui.with_mut(|state| state.set_sidebar_open(open));
        self.persist_prefs();
        self.subscribers
            .emit(&StoreEvent::UiChanged { field: UiField::Sidebar });
    }

    /// Flips sidebar visibility and writes back the persisted subset.
    pub fn toggle_sidebar(&self) {
        self.ui.with_mut(|state| state.toggle_sidebar());
        self.persist_prefs();
        self.subscribers
            .emit(&StoreEvent::UiChanged { field: UiField::Sidebar });
    }

    /// Switches the dashboard section. Session-only.
    pub fn set_active_module(&self, module: DashboardModule) {
        debug!(?module, "set_active_module");
        self.ui.with_mut(|state| state.set_active_module(module));
        self.subscribers.emit(&StoreEvent::UiChanged {
            field: UiField::ActiveModule,
        });
    }

    /// Replaces the global search text. Session-only.
    pub fn set_search_query(&self, query: impl Into<String>) {
        self.ui.with_mut(|state| state.set_search_query(query));
        self.subscribers.emit(&StoreEvent::UiChanged {
            field: UiField::SearchQuery,
        });
    }

    /// Prepends a notification to the feed.
    pub fn push_notification(&self, notification: Notification) {
        debug!(notification_id = %notification.id, "push_notification");
        self.ui
            .with_mut(|state| state.push_notification(notification));
        self.subscribers.emit(&StoreEvent::UiChanged {
            field: UiField::Notifications,
        });
    }

    /// Marks one notification read. Silent no-op on a miss.
    pub fn mark_notification_read(&self, id: &str) -> bool {
        let changed = self.ui.with_mut(|state| state.mark_notification_read(id));
        if changed {
            self.subscribers.emit(&StoreEvent::UiChanged {
                field: UiField::Notifications,
            });
        }
        changed
    }

    /// Empties the notification feed.
    pub fn clear_notifications(&self) {
        self.ui.with_mut(|state| state.clear_notifications());
        self.subscribers.emit(&StoreEvent::UiChanged {
            field: UiField::Notifications,
        });
    }

    /// Flips an id in the bulk-selection set.
    pub fn toggle_selected_item(&self, id: &str) {
        self.ui.with_mut(|state| state.toggle_selected_item(id));
        self.subscribers.emit(&StoreEvent::UiChanged {
            field: UiField::Selection,
        });
    }

    /// Empties the bulk-selection set.
    pub fn clear_selected_items(&self) {
        self.ui.with_mut(|state| state.clear_selected_items());
        self.subscribers.emit(&StoreEvent::UiChanged {
            field: UiField::Selection,
        });
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    /// Writes the persisted subset back to durable storage.
    ///
    /// Best-effort: a failure is logged and dropped. No retry, no
    /// acknowledgement - the in-memory state is already committed and
    /// stays authoritative for the session.
    fn persist_prefs(&self) {
        let snapshot = self.ui.with(|state| state.prefs());
        if let Err(e) = self.prefs.save(&snapshot) {
            warn!(error = %e, "failed to persist ui preferences");
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use tempfile::TempDir;

    use chrono::{DateTime, Duration, Utc};
    use meridian_core::{NotificationKind, ShippingAddress};
    use meridian_prefs::PREFS_NAMESPACE;

    fn context(dir: &TempDir) -> AppContext {
        AppContext::boot(PrefsStore::new(dir.path(), PREFS_NAMESPACE))
    }

    fn product(id: &str) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {}", id),
            price_cents: 1999,
            image: format!("/images/{}.jpg", id),
            category: "general".to_string(),
            variants: None,
            stock: Some(3),
            rating: None,
            review_count: None,
        }
    }

    fn order(id: &str, customer_id: &str) -> Order {
        let stamp: DateTime<Utc> = Utc::now() - Duration::seconds(1);
        Order {
            id: id.to_string(),
            customer_id: customer_id.to_string(),
            customer_name: "Jordan Reyes".to_string(),
            customer_email: "jordan@example.com".to_string(),
            customer_phone: None,
            items: Vec::new(),
            subtotal_cents: 1999,
            tax_cents: 160,
            shipping_cents: 0,
            total_cents: 2159,
            shipping_address: ShippingAddress {
                line1: "400 Harbor Blvd".to_string(),
                line2: None,
                city: "Portland".to_string(),
                state: "OR".to_string(),
                postal_code: "97201".to_string(),
                country: "US".to_string(),
            },
            payment_status: PaymentStatus::Pending,
            order_status: OrderStatus::Pending,
            seller_id: None,
            created_at: stamp,
            updated_at: stamp,
        }
    }

    fn recorded_events(ctx: &AppContext) -> Arc<Mutex<Vec<StoreEvent>>> {
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = events.clone();
        ctx.subscribe(move |e| sink.lock().unwrap().push(e.clone()));
        events
    }

    #[test]
    fn test_order_status_scenario() {
        let dir = TempDir::new().unwrap();
        let ctx = context(&dir);

        ctx.create_order(order("ORD-100", "C1"));
        let before = ctx.get_order_by_id("ORD-100").unwrap().updated_at;

        assert!(ctx.update_order_status("ORD-100", OrderStatus::Shipped));

        let after = ctx.get_order_by_id("ORD-100").unwrap();
        assert_eq!(after.order_status, OrderStatus::Shipped);
        assert!(after.updated_at > before);
    }

    #[test]
    fn test_unknown_order_update_emits_nothing() {
        let dir = TempDir::new().unwrap();
        let ctx = context(&dir);
        let events = recorded_events(&ctx);

        assert!(!ctx.update_order_status("ORD-404", OrderStatus::Shipped));
        assert!(events.lock().unwrap().is_empty());
    }

    #[test]
    fn test_wishlist_scenario() {
        let dir = TempDir::new().unwrap();
        let ctx = context(&dir);

        ctx.add_to_wishlist(product("P1"));
        assert!(ctx.is_in_wishlist("P1"));

        ctx.remove_from_wishlist("P1");
        assert!(!ctx.is_in_wishlist("P1"));
    }

    #[test]
    fn test_wishlist_notices_differ_for_add_and_remove() {
        let dir = TempDir::new().unwrap();
        let ctx = context(&dir);
        let events = recorded_events(&ctx);

        ctx.toggle_wishlist(product("P1"));
        ctx.toggle_wishlist(product("P1"));

        let notices: Vec<Notice> = events
            .lock()
            .unwrap()
            .iter()
            .filter_map(|e| match e {
                StoreEvent::Notice(n) => Some(n.clone()),
                _ => None,
            })
            .collect();

        assert_eq!(notices.len(), 2);
        assert_ne!(notices[0].message, notices[1].message);
        assert!(notices[0].message.contains("added"));
    }

    #[test]
    fn test_events_are_post_commit() {
        let dir = TempDir::new().unwrap();
        let ctx = context(&dir);

        // The listener re-reads the store; the order must already be
        // visible when the event arrives.
        let seen = Arc::new(Mutex::new(false));
        let seen_clone = seen.clone();
        let reader = ctx.clone();
        ctx.subscribe(move |e| {
            if let StoreEvent::OrderCreated { order_id } = e {
                let found = reader.get_order_by_id(order_id).is_some();
                *seen_clone.lock().unwrap() = found;
            }
        });

        ctx.create_order(order("ORD-1", "C1"));
        assert!(*seen.lock().unwrap());
    }

    #[test]
    fn test_persisted_subset_round_trip() {
        let dir = TempDir::new().unwrap();

        {
            let ctx = context(&dir);
            ctx.set_theme(Theme::Dark);
            ctx.set_sidebar_open(false);
            // Session-only churn that must NOT survive the reload.
            ctx.set_active_module(DashboardModule::Orders);
            ctx.push_notification(Notification::new(
                NotificationKind::Reward { points: 10 },
                "You earned 10 points",
            ));
        }

        // Simulated reload: a fresh context over the same blob.
        let ctx = context(&dir);
        let ui = ctx.ui();

        assert_eq!(ui.theme, Theme::Dark);
        assert!(!ui.sidebar_open);
        assert_eq!(ui.active_module, DashboardModule::Dashboard);
        assert!(ui.notifications.is_empty());
    }

    #[test]
    fn test_corrupt_blob_boots_with_defaults() {
        let dir = TempDir::new().unwrap();
        let store = PrefsStore::new(dir.path(), PREFS_NAMESPACE);
        std::fs::create_dir_all(dir.path()).unwrap();
        std::fs::write(store.path(), "{definitely not json").unwrap();

        let ctx = AppContext::boot(store);
        let ui = ctx.ui();
        assert_eq!(ui.theme, Theme::Light);
        assert!(ui.sidebar_open);
    }

    #[test]
    fn test_ui_snapshot_is_detached() {
        let dir = TempDir::new().unwrap();
        let ctx = context(&dir);

        let mut snapshot = ctx.ui();
        snapshot.toggle_selected_item("P1");

        assert!(ctx.ui().selected_items.is_empty());
    }

    #[test]
    fn test_selection_and_notification_surface() {
        let dir = TempDir::new().unwrap();
        let ctx = context(&dir);

        ctx.toggle_selected_item("P1");
        ctx.toggle_selected_item("P2");
        ctx.toggle_selected_item("P1");
        assert_eq!(ctx.ui().selected_items, vec!["P2".to_string()]);

        ctx.push_notification(Notification::new(
            NotificationKind::Security {
                detail: "new sign-in from Portland".to_string(),
            },
            "New sign-in to your account",
        ));
        let id = ctx.ui().notifications[0].id.clone();
        assert!(ctx.mark_notification_read(&id));
        assert_eq!(ctx.ui().unread_count(), 0);

        ctx.clear_notifications();
        ctx.clear_selected_items();
        assert!(ctx.ui().notifications.is_empty());
        assert!(ctx.ui().selected_items.is_empty());
    }

    #[test]
    fn test_unsubscribe_via_context() {
        let dir = TempDir::new().unwrap();
        let ctx = context(&dir);
        let events = Arc::new(Mutex::new(Vec::new()));

        let sink = events.clone();
        let id = ctx.subscribe(move |e| sink.lock().unwrap().push(e.clone()));
        assert!(ctx.unsubscribe(id));

        ctx.set_search_query("desk");
        assert!(events.lock().unwrap().is_empty());
    }
}
