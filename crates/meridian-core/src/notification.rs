//! # Notifications
//!
//! User-facing notification records kept by the UI-state store.
//!
//! The payload is a closed set of variants - one per notification kind,
//! each carrying only the fields that kind needs. Consumers match on the
//! kind instead of poking at an untyped payload blob.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::types::OrderStatus;

// =============================================================================
// Notification Kind
// =============================================================================

/// The payload of a notification, tagged by kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NotificationKind {
    /// An order the customer placed changed status.
    OrderUpdate {
        order_id: String,
        status: OrderStatus,
    },

    /// A wishlisted product dropped in price.
    PriceDrop {
        product_id: String,
        product_name: String,
        old_price_cents: i64,
        new_price_cents: i64,
    },

    /// Loyalty points credited to the account.
    Reward { points: i64 },

    /// Account security event (new sign-in, password change, …).
    Security { detail: String },
}

// =============================================================================
// Notification
// =============================================================================

/// A notification shown in the dashboard bell menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    /// Generated identifier (UUID v4).
    pub id: String,

    pub kind: NotificationKind,

    /// Pre-rendered message line for the bell menu.
    pub message: String,

    /// Whether the user has opened this notification.
    pub read: bool,

    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

impl Notification {
    /// Creates an unread notification stamped with the current time.
    pub fn new(kind: NotificationKind, message: impl Into<String>) -> Self {
        Notification {
            id: Uuid::new_v4().to_string(),
            kind,
            message: message.into(),
            read: false,
            created_at: Utc::now(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
