//! # UI State
//!
//! The keyed UI-state store: a fixed set of named fields with per-field
//! setters. Every setter is whole-value replacement except the
//! notification list (prepend) and the selected-items set (membership
//! toggle).
//!
//! Two fields - theme and sidebar visibility - are restored from durable
//! storage at boot; everything else is session-only and resets to its
//! default on reload. No cross-field invariants are enforced: nothing
//! stops `active_module` from naming a module the UI no longer renders.

use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

use meridian_core::{DashboardModule, Notification, Theme};
use meridian_prefs::UiPrefs;

// =============================================================================
// UI State
// =============================================================================

/// The named-field UI state behind the dashboards.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UiState {
    /// Whether the navigation sidebar is expanded. Persisted.
    pub sidebar_open: bool,

    /// Dashboard section currently on screen.
    pub active_module: DashboardModule,

    /// Color theme. Persisted.
    pub theme: Theme,

    /// Free-text global search box contents.
    pub search_query: String,

    /// Notification feed, newest first.
    pub notifications: Vec<Notification>,

    /// Ids selected for bulk actions. Set semantics: never a duplicate.
    pub selected_items: Vec<String>,
}

impl Default for UiState {
    fn default() -> Self {
        UiState {
            sidebar_open: true,
            active_module: DashboardModule::default(),
            theme: Theme::default(),
            search_query: String::new(),
            notifications: Vec::new(),
            selected_items: Vec::new(),
        }
    }
}

impl UiState {
    /// Builds the session state from the persisted subset, defaults for
    /// everything else.
    pub fn from_prefs(prefs: UiPrefs) -> Self {
        UiState {
            theme: prefs.theme,
            sidebar_open: prefs.sidebar_open,
            ..UiState::default()
        }
    }

    /// The persisted subset of this state.
    pub fn prefs(&self) -> UiPrefs {
        UiPrefs {
            theme: self.theme,
            sidebar_open: self.sidebar_open,
        }
    }

    // -------------------------------------------------------------------------
    // Whole-value setters
    // -------------------------------------------------------------------------

    pub fn set_sidebar_open(&mut self, open: bool) {
        self.sidebar_open = open;
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    pub fn set_active_module(&mut self, module: DashboardModule) {
        self.active_module = module;
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    // -------------------------------------------------------------------------
    // Notifications (prepend + clear)
    // -------------------------------------------------------------------------

    /// Prepends a notification so the feed reads newest-first.
    pub fn push_notification(&mut self, notification: Notification) {
        self.notifications.insert(0, notification);
    }

    /// Marks one notification read. Silent no-op on a miss.
    pub fn mark_notification_read(&mut self, id: &str) -> bool {
        match self.notifications.iter_mut().find(|n| n.id == id) {
            Some(n) => {
                n.read = true;
                true
            }
            None => false,
        }
    }

    /// Empties the feed. Independent of the persisted subset.
    pub fn clear_notifications(&mut self) {
        self.notifications.clear();
    }

    /// Unread notification count for the bell badge.
    pub fn unread_count(&self) -> usize {
        self.notifications.iter().filter(|n| !n.read).count()
    }

    // -------------------------------------------------------------------------
    // Selected items (membership toggle + clear)
    // -------------------------------------------------------------------------

    /// Flips membership of an id in the bulk-selection set.
    ///
    /// Present → removed, absent → appended. Two identical calls return
    /// the set to its original contents and size. Duplicates are never
    /// stored.
    pub fn toggle_selected_item(&mut self, id: &str) {
        if let Some(pos) = self.selected_items.iter().position(|s| s == id) {
            self.selected_items.remove(pos);
        } else {
            self.selected_items.push(id.to_string());
        }
    }

    /// Membership test for the bulk-selection set.
    pub fn is_selected(&self, id: &str) -> bool {
        self.selected_items.iter().any(|s| s == id)
    }

    /// Empties the bulk-selection set.
    pub fn clear_selected_items(&mut self) {
        self.selected_items.clear();
    }
}

// =============================================================================
// UI Store (shared wrapper)
// =============================================================================

/// Shared handle to the UI state.
#[derive(Debug, Clone, Default)]
pub struct UiStore {
    inner: Arc<Mutex<UiState>>,
}

impl UiStore {
    /// Creates a store over default state.
    pub fn new() -> Self {
        UiStore {
            inner: Arc::new(Mutex::new(UiState::default())),
        }
    }

    /// Creates a store seeded from the persisted subset.
    pub fn from_prefs(prefs: UiPrefs) -> Self {
        UiStore {
            inner: Arc::new(Mutex::new(UiState::from_prefs(prefs))),
        }
    }

    /// Executes a function with read access to the state.
    pub fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&UiState) -> R,
    {
        let state = self.inner.lock().expect("ui state mutex poisoned");
        f(&state)
    }

    /// Executes a function with write access to the state.
    pub fn with_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut UiState) -> R,
    {
        let mut state = self.inner.lock().expect("ui state mutex poisoned");
        f(&mut state)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
