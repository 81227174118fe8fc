//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Complaint, Notification, StaffMember};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastVariant {
    Success,
    Danger,
}

impl ToastVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToastVariant::Success => "success",
            ToastVariant::Danger => "danger",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub variant: ToastVariant,
}

/// Page-wide state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Records of whichever complaint list the page shows
    pub complaints: Vec<Complaint>,
    /// Assignment choices (admin page only)
    pub staff: Vec<StaffMember>,
    /// Citizen notifications
    pub notifications: Vec<Notification>,
    /// Visible toasts, oldest first
    pub toasts: Vec<Toast>,
    pub next_toast_id: u64,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Append a toast and return its id
pub fn store_push_toast(store: &AppStore, message: String, variant: ToastVariant) -> u64 {
    let id = {
        let next_field = store.next_toast_id();
        let mut next = next_field.write();
        *next += 1;
        *next
    };
    store.toasts().write().push(Toast { id, message, variant });
    id
}

/// Remove a toast by ID (no-op if it was already dismissed)
pub fn store_remove_toast(store: &AppStore, toast_id: u64) {
    store.toasts().write().retain(|toast| toast.id != toast_id);
}

/// Hands out increasing tickets so only the newest load may publish
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadGeneration(u64);

impl LoadGeneration {
    pub fn next(&mut self) -> u64 {
        self.0 += 1;
        self.0
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.0 == ticket
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slow_first_load_is_superseded() {
        let mut generation = LoadGeneration::default();
        let initial = generation.next();
        let after_mutation = generation.next();

        // the reload finishes first, then the initial fetch straggles in
        assert!(generation.is_current(after_mutation));
        assert!(!generation.is_current(initial));
    }

    #[test]
    fn test_single_load_is_current() {
        let mut generation = LoadGeneration::default();
        let ticket = generation.next();
        assert!(generation.is_current(ticket));
    }
}
