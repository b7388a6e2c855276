//! # Store Events
//!
//! The subscribe side of the consumer surface. Presentation code
//! registers a listener and is re-invoked with a `StoreEvent` after each
//! mutation fully commits; it then re-reads whatever snapshots it needs.
//!
//! Events are delivered post-commit only - a listener can never observe
//! a store mid-mutation - and synchronously on the mutating caller's
//! turn, matching the single-threaded execution model.

use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

use meridian_core::{OrderStatus, PaymentStatus};

// =============================================================================
// Notices
// =============================================================================

/// Severity of a user-facing notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// A transient user-facing message (toast). An event, not a data-model
/// field: nothing in any store remembers a notice after delivery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Notice {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Notice {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }
}

// =============================================================================
// Store Events
// =============================================================================

/// UI-state field that changed, for listeners that only care about some.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UiField {
    Sidebar,
    ActiveModule,
    Theme,
    SearchQuery,
    Notifications,
    Selection,
}

/// What changed, delivered to subscribers after the mutation commits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum StoreEvent {
    OrderCreated {
        order_id: String,
    },
    OrderStatusChanged {
        order_id: String,
        status: OrderStatus,
    },
    PaymentStatusChanged {
        order_id: String,
        status: PaymentStatus,
    },
    WishlistChanged {
        product_id: String,
        added: bool,
    },
    UiChanged {
        field: UiField,
    },
    Notice(Notice),
}

// =============================================================================
// Subscriber Registry
// =============================================================================

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn Fn(&StoreEvent) + Send>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
}

/// Registered listeners, invoked in subscription order on every event.
#[derive(Clone, Default)]
pub struct Subscribers {
    inner: Arc<Mutex<Registry>>,
}

impl Subscribers {
    pub fn new() -> Self {
        Subscribers::default()
    }

    /// Registers a listener.
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&StoreEvent) + Send + 'static,
    {
        let mut registry = self.inner.lock().expect("subscriber registry poisoned");
        registry.next_id += 1;
        let id = registry.next_id;
        registry.listeners.push((id, Box::new(listener)));
        SubscriptionId(id)
    }

    /// Removes a listener. Silent no-op for an already-removed id.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut registry = self.inner.lock().expect("subscriber registry poisoned");
        let before = registry.listeners.len();
        registry.listeners.retain(|(lid, _)| *lid != id.0);
        registry.listeners.len() != before
    }

    /// Delivers an event to every listener, in subscription order.
    ///
    /// Callers emit only after the corresponding store mutation has
    /// committed and its lock has been released.
    pub fn emit(&self, event: &StoreEvent) {
        let registry = self.inner.lock().expect("subscriber registry poisoned");
        for (_, listener) in &registry.listeners {
            listener(event);
        }
    }

    /// Number of registered listeners.
    pub fn len(&self) -> usize {
        self.inner
            .lock()
            .expect("subscriber registry poisoned")
            .listeners
            .len()
    }

    /// Checks whether any listener is registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl std::fmt::Debug for Subscribers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscribers").field("len", &self.len()).finish()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_subscribe_and_emit() {
        let subs = Subscribers::new();
        let hits = Arc::new(AtomicUsize::new(0));

        let hits_clone = hits.clone();
        subs.subscribe(move |_| {
            hits_clone.fetch_add(1, Ordering::SeqCst);
        });

        subs.emit(&StoreEvent::UiChanged {
            field: UiField::Theme,
        });
        subs.emit(&StoreEvent::UiChanged {
            field: UiField::Sidebar,
        });

        assert_eq!(hits.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_unsubscribe_stops_delivery() {
        let subs = Subscribers::new();
        let hits = Arc::new(AtomicUsize::new(0));

        let hits_clone = hits.clone();
        let id = subs.subscribe(move |_| {
            hits_clone.fetch_add(1, Ordering::SeqCst);
        });

        assert!(subs.unsubscribe(id));
        assert!(!subs.unsubscribe(id));

        subs.emit(&StoreEvent::UiChanged {
            field: UiField::Theme,
        });
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_event_serialization_shape() {
        let event = StoreEvent::OrderStatusChanged {
            order_id: "ORD-9".to_string(),
            status: OrderStatus::Shipped,
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["event"], "order_status_changed");
        assert_eq!(json["order_id"], "ORD-9");
        assert_eq!(json["status"], "shipped");
    }

    #[test]
    fn test_notice_constructors() {
        let n = Notice::success("Added to wishlist");
        assert_eq!(n.level, NoticeLevel::Success);
        let n = Notice::info("Removed from wishlist");
        assert_eq!(n.level, NoticeLevel::Info);
    }
}
