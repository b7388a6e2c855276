//! # meridian-state: Application State for Meridian
//!
//! The in-memory domain-state layer behind the Meridian dashboards.
//!
//! ## Module Organization
//! ```text
//! meridian_state/
//! ├── lib.rs          ◄─── You are here (exports + tracing setup)
//! ├── collection.rs   ◄─── Generic ordered collection store
//! ├── orders.rs       ◄─── Order book + OrderStore wrapper
//! ├── wishlist.rs     ◄─── Wishlist membership + WishlistStore wrapper
//! ├── ui.rs           ◄─── Keyed UI-state store
//! ├── events.rs       ◄─── StoreEvent, Notice, subscriber registry
//! └── context.rs      ◄─── AppContext consumer surface + boot
//! ```
//!
//! ## Execution Model
//! Single-threaded, cooperative, event-driven: every mutation is
//! synchronous, runs to completion on the caller's turn, and subscribers
//! observe it only after it has fully committed. The `Arc<Mutex>` store
//! wrappers exist so the container can be shared with the embedding
//! runtime, not because two mutations ever race.
//!
//! Returned collections are snapshots. Mutating a returned `Vec` never
//! affects store state.

pub mod collection;
pub mod context;
pub mod events;
pub mod orders;
pub mod ui;
pub mod wishlist;

pub use collection::{Collection, Keyed};
pub use context::AppContext;
pub use events::{Notice, NoticeLevel, StoreEvent, SubscriptionId, UiField};
pub use orders::{OrderBook, OrderStore};
pub use ui::{UiState, UiStore};
pub use wishlist::{Wishlist, WishlistChange, WishlistStore};

use tracing_subscriber::EnvFilter;

/// Initializes the tracing subscriber for structured logging.
///
/// Call once at application startup, before constructing the context.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - show debug messages
/// - `RUST_LOG=meridian=trace` - trace for meridian crates only
/// - Default: INFO level
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,meridian=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
