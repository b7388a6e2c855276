//! # meridian-core: Entity Model for Meridian
//!
//! Pure domain types for the Meridian storefront and its dashboards.
//! Everything in this crate is deterministic, I/O-free, and shared by the
//! state layer and the TypeScript presentation layer (via `ts-rs`).
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                  Frontend (TypeScript dashboards)               │
//! │      storefront  ──  admin panel  ──  seller / customer views   │
//! └───────────────────────────────┬─────────────────────────────────┘
//! │                               │ JSON snapshots + events          │
//! ┌───────────────────────────────▼─────────────────────────────────┐
//! │                 meridian-state (stores + surface)               │
//! └───────────────────────────────┬─────────────────────────────────┘
//! │                               │                                  │
//! ┌───────────────────────────────▼─────────────────────────────────┐
//! │               ★ meridian-core (THIS CRATE) ★                    │
//! │                                                                 │
//! │   ┌──────────┐  ┌─────────┐  ┌──────────────┐  ┌────────────┐  │
//! │   │  types   │  │  money  │  │ notification │  │ validation │  │
//! │   │ Product  │  │  Money  │  │ Notification │  │   rules    │  │
//! │   │  Order   │  │         │  │     kinds    │  │   checks   │  │
//! │   └──────────┘  └─────────┘  └──────────────┘  └────────────┘  │
//! │                                                                 │
//! │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS            │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Order, CartItem, UI enums)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`notification`] - Notification records with closed payload variants
//! - [`error`] - Validation error types
//! - [`validation`] - Input validation helpers
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same input = same output, always
//! 2. **No I/O**: database, network, and file system access are FORBIDDEN
//! 3. **Integer Money**: all monetary values are cents (i64)
//! 4. **Explicit Errors**: typed errors, never strings or panics

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod notification;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{ValidationError, ValidationResult};
pub use money::Money;
pub use notification::{Notification, NotificationKind};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum quantity of a single product on an order line.
///
/// Guards against fat-finger quantities (1000 typed instead of 10).
pub const MAX_LINE_QUANTITY: i64 = 999;

/// Maximum length of a caller-assigned entity id.
pub const MAX_ID_LENGTH: usize = 64;

/// Maximum length of a display name (product, customer, category).
pub const MAX_NAME_LENGTH: usize = 200;
