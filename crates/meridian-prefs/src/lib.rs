//! # meridian-prefs: Durable UI Preferences
//!
//! The durable storage boundary for Meridian: a key-value blob that
//! survives an application restart but represents nothing more than the
//! user's last UI preferences. Only a declared subset of UI state is
//! persisted (theme and sidebar visibility); everything else is
//! session-only and resets to its default on reload.
//!
//! ## Persistence Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     Preferences Lifecycle                       │
//! │                                                                 │
//! │  App boot ──► PrefsStore::load() ── once, before state exists   │
//! │                     │                                           │
//! │                     ├── Ok(Some(prefs)) → applied over defaults │
//! │                     ├── Ok(None)        → fresh install,        │
//! │                     │                     defaults              │
//! │                     └── Err(Malformed)  → warn + defaults       │
//! │                                                                 │
//! │  set_theme / set_sidebar_open ──► PrefsStore::save()            │
//! │                     │                                           │
//! │                     └── best-effort: failures are logged and    │
//! │                         dropped, never retried                  │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

pub mod error;
pub mod store;

pub use error::{PrefsError, PrefsResult};
pub use store::{PrefsStore, UiPrefs, DATA_DIR_ENV, PREFS_NAMESPACE};
