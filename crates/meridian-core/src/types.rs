//! # Domain Types
//!
//! Core domain types for the Meridian storefront.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                          Domain Types                               │
//! │                                                                     │
//! │  ┌───────────────┐   ┌───────────────┐   ┌───────────────────────┐  │
//! │  │    Product    │   │     Order     │   │       CartItem        │  │
//! │  │  ───────────  │   │  ───────────  │   │  ───────────────────  │  │
//! │  │  id           │──►│  items[]      │◄──│  product (snapshot)   │  │
//! │  │  price_cents  │   │  order_status │   │  quantity (≥ 1)       │  │
//! │  │  variants?    │   │  pay_status   │   └───────────────────────┘  │
//! │  └───────────────┘   └───────────────┘                              │
//! │                                                                     │
//! │  ┌───────────────┐   ┌───────────────┐   ┌───────────────────────┐  │
//! │  │  OrderStatus  │   │ PaymentStatus │   │   Theme / Dashboard   │  │
//! │  │  pending …    │   │  pending      │   │   Module enums for    │  │
//! │  │  delivered    │   │  completed    │   │   the UI-state store  │  │
//! │  │  cancelled    │   │  failed       │   └───────────────────────┘  │
//! │  └───────────────┘   └───────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Entity ids are caller-assigned strings; this layer never mints them and
//! never checks them for uniqueness.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::Money;
use crate::validation::validate_quantity;

// =============================================================================
// Product
// =============================================================================

/// One selectable option inside a product variant (e.g. size "M").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct VariantOption {
    /// Option value shown to the shopper ("M", "Forest Green", …).
    pub value: String,

    /// Units in stock for exactly this option.
    pub stock_count: i64,

    /// Price adjustment relative to the product's base price, in cents.
    pub price_modifier_cents: Option<i64>,
}

/// A named variant axis on a product ("Size", "Color").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ProductVariant {
    /// Axis name shown above the option picker.
    pub name: String,

    /// The selectable options on this axis.
    pub options: Vec<VariantOption>,
}

/// A product in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Caller-assigned identifier, unique by convention.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Base price in cents (smallest currency unit).
    pub price_cents: i64,

    /// Primary image URL.
    pub image: String,

    /// Category identifier this product is listed under.
    pub category: String,

    /// Variant axes, if the product sells in variations.
    /// When present, option stock counts are the authoritative inventory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variants: Option<Vec<ProductVariant>>,

    /// Flat stock count. Ignored whenever `variants` is present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock: Option<i64>,

    /// Average review rating, if the product has been reviewed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,

    /// Number of reviews behind `rating`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review_count: Option<u32>,
}

impl Product {
    /// Returns the base price as a Money value.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Returns the sellable stock for this product, or `None` when
    /// inventory is untracked.
    ///
    /// ## Authoritative Source
    /// When `variants` is present, sellable stock is the sum of every
    /// option's `stock_count` and the flat `stock` field is ignored.
    /// Without variants the flat field is authoritative. The two fields
    /// are never reconciled against each other.
    pub fn sellable_stock(&self) -> Option<i64> {
        match &self.variants {
            Some(variants) => Some(
                variants
                    .iter()
                    .flat_map(|v| v.options.iter())
                    .map(|o| o.stock_count)
                    .sum(),
            ),
            None => self.stock,
        }
    }

    /// Checks whether `quantity` units can be sold.
    ///
    /// Untracked inventory always sells.
    pub fn can_sell(&self, quantity: i64) -> bool {
        match self.sellable_stock() {
            Some(stock) => stock >= quantity,
            None => true,
        }
    }
}

// =============================================================================
// Category
// =============================================================================

/// A catalog category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

// =============================================================================
// Cart Item
// =============================================================================

/// A product plus a quantity - one line of a cart or an order.
///
/// The embedded product is a snapshot: the line keeps displaying what the
/// shopper put in even if the catalog record changes afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub product: Product,

    /// Units of the product on this line. Always ≥ 1.
    pub quantity: i64,
}

impl CartItem {
    /// Creates a cart line, enforcing the quantity invariant (1..=999).
    pub fn new(product: Product, quantity: i64) -> Result<Self, ValidationError> {
        validate_quantity(quantity)?;
        Ok(CartItem { product, quantity })
    }

    /// Line total: base price × quantity.
    pub fn line_total(&self) -> Money {
        self.product.price() * self.quantity
    }
}

// =============================================================================
// Shipping Address
// =============================================================================

/// Shipping destination captured at checkout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ShippingAddress {
    pub line1: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line2: Option<String>,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,
}

// =============================================================================
// Order Status
// =============================================================================

/// Fulfillment status of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Order placed, not yet acknowledged.
    #[default]
    Pending,
    /// Seller confirmed the order.
    Confirmed,
    /// Being picked and packed.
    Processing,
    /// Handed to the carrier.
    Shipped,
    /// Arrived at the shipping address.
    Delivered,
    /// Cancelled by the customer or seller.
    Cancelled,
}

// =============================================================================
// Payment Status
// =============================================================================

/// Payment status of an order, independent of fulfillment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    #[default]
    Pending,
    Completed,
    Failed,
}

// =============================================================================
// Order
// =============================================================================

/// A customer order.
///
/// Constructed once by the caller with every field - including the
/// computed monetary fields - already filled in. This layer only ever
/// mutates the two status fields, stamping `updated_at` as it does.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Caller-assigned identifier (e.g. "ORD-1042").
    pub id: String,

    /// Customer who placed the order.
    pub customer_id: String,

    /// Denormalized contact fields, frozen at checkout.
    pub customer_name: String,
    pub customer_email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_phone: Option<String>,

    /// Ordered lines, in the sequence the shopper added them.
    pub items: Vec<CartItem>,

    /// Monetary fields, computed by the caller at checkout.
    pub subtotal_cents: i64,
    pub tax_cents: i64,
    pub shipping_cents: i64,
    pub total_cents: i64,

    pub shipping_address: ShippingAddress,

    pub payment_status: PaymentStatus,
    pub order_status: OrderStatus,

    /// Seller fulfilling the order, when the marketplace knows one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seller_id: Option<String>,

    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// Returns the grand total as a Money value.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }
}

// =============================================================================
// UI Enums
// =============================================================================

/// Color theme for the dashboards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    #[default]
    Light,
    Dark,
    /// Follow the operating system preference.
    System,
}

/// Dashboard section currently on screen.
///
/// Mirrors the backend resource groups plus the analytics and settings
/// panels. Nothing validates that the active module is actually rendered;
/// that is the consumer's responsibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum DashboardModule {
    #[default]
    Dashboard,
    Orders,
    Products,
    Categories,
    Customers,
    Coupons,
    Warehouses,
    Analytics,
    Settings,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn plain_product(id: &str, price_cents: i64) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {}", id),
            price_cents,
            image: format!("/images/{}.jpg", id),
            category: "general".to_string(),
            variants: None,
            stock: Some(10),
            rating: None,
            review_count: None,
        }
    }

    fn varied_product(id: &str) -> Product {
        Product {
            variants: Some(vec![ProductVariant {
                name: "Size".to_string(),
                options: vec![
                    VariantOption {
                        value: "S".to_string(),
                        stock_count: 2,
                        price_modifier_cents: None,
                    },
                    VariantOption {
                        value: "M".to_string(),
                        stock_count: 3,
                        price_modifier_cents: Some(100),
                    },
                ],
            }]),
            // Deliberately inconsistent flat stock; variants win.
            stock: Some(99),
            ..plain_product(id, 1999)
        }
    }

    #[test]
    fn test_sellable_stock_flat() {
        let p = plain_product("P1", 999);
        assert_eq!(p.sellable_stock(), Some(10));
    }

    #[test]
    fn test_sellable_stock_sums_variant_options() {
        let p = varied_product("P2");
        assert_eq!(p.sellable_stock(), Some(5));
    }

    #[test]
    fn test_sellable_stock_untracked() {
        let p = Product {
            stock: None,
            ..plain_product("P3", 999)
        };
        assert_eq!(p.sellable_stock(), None);
        assert!(p.can_sell(1_000_000));
    }

    #[test]
    fn test_can_sell_respects_variant_stock() {
        let p = varied_product("P4");
        assert!(p.can_sell(5));
        assert!(!p.can_sell(6));
    }

    #[test]
    fn test_cart_item_rejects_zero_quantity() {
        let p = plain_product("P5", 999);
        assert!(CartItem::new(p.clone(), 0).is_err());
        assert!(CartItem::new(p, 1).is_ok());
    }

    #[test]
    fn test_cart_item_line_total() {
        let p = plain_product("P6", 499);
        let line = CartItem::new(p, 3).unwrap();
        assert_eq!(line.line_total().cents(), 1497);
    }

    #[test]
    fn test_status_defaults() {
        assert_eq!(OrderStatus::default(), OrderStatus::Pending);
        assert_eq!(PaymentStatus::default(), PaymentStatus::Pending);
        assert_eq!(Theme::default(), Theme::Light);
        assert_eq!(DashboardModule::default(), DashboardModule::Dashboard);
    }

    #[test]
    fn test_category_serde_shape() {
        let c = Category {
            id: "cat-office".to_string(),
            name: "Office".to_string(),
            image: None,
        };
        let json = serde_json::to_value(&c).unwrap();
        assert_eq!(json["id"], "cat-office");
        // Absent image is omitted, not null.
        assert!(json.get("image").is_none());
    }

    #[test]
    fn test_status_serde_rename() {
        let json = serde_json::to_string(&OrderStatus::Shipped).unwrap();
        assert_eq!(json, "\"shipped\"");
        let back: OrderStatus = serde_json::from_str("\"delivered\"").unwrap();
        assert_eq!(back, OrderStatus::Delivered);
    }
}
