//! Toasts and Inline Errors
//!
//! The two user-facing error channels. A toast disappears after the
//! configured delay (or when dismissed); an inline error sits next to its
//! form and hides itself after its own, longer delay.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::browser;
use crate::config::ClientConfig;
use crate::store::{store_push_toast, store_remove_toast, AppStore, ToastVariant};

/// Handle to the toast container, provided by `App`
#[derive(Clone, Copy)]
pub struct Toaster {
    store: AppStore,
    delay_ms: u32,
}

impl Toaster {
    pub fn new(store: AppStore, delay_ms: u32) -> Self {
        Self { store, delay_ms }
    }

    pub fn show(&self, message: String, variant: ToastVariant) {
        let id = store_push_toast(&self.store, message, variant);
        let store = self.store;
        let delay = self.delay_ms;
        spawn_local(async move {
            TimeoutFuture::new(delay).await;
            store_remove_toast(&store, id);
        });
    }

    pub fn dismiss(&self, id: u64) {
        store_remove_toast(&self.store, id);
    }
}

/// Toasts with an `alert` fallback when no container exists.
/// Resolve it during component setup, then move it into handlers.
#[derive(Clone, Copy)]
pub struct Toasts(Option<Toaster>);

impl Toasts {
    pub fn success(&self, message: impl Into<String>) {
        self.show(message.into(), ToastVariant::Success);
    }

    pub fn danger(&self, message: impl Into<String>) {
        self.show(message.into(), ToastVariant::Danger);
    }

    fn show(&self, message: String, variant: ToastVariant) {
        match self.0 {
            Some(toaster) => toaster.show(message, variant),
            None => browser::alert(&message),
        }
    }
}

pub fn use_toasts() -> Toasts {
    Toasts(use_context::<Toaster>())
}

/// Inline error text for one form
#[derive(Clone, Copy)]
pub struct InlineError {
    pub message: RwSignal<Option<String>>,
    generation: RwSignal<u64>,
    hide_ms: u32,
    toasts: Toasts,
}

impl InlineError {
    pub fn new() -> Self {
        let hide_ms = use_context::<ClientConfig>()
            .map(|c| c.inline_error_ms)
            .unwrap_or_else(|| ClientConfig::default().inline_error_ms);
        Self {
            message: RwSignal::new(None),
            generation: RwSignal::new(0),
            hide_ms,
            toasts: use_toasts(),
        }
    }

    /// Show the message inline and as a danger toast
    pub fn fail(&self, message: impl Into<String>) {
        let message = message.into();
        self.show(message.clone());
        self.toasts.danger(message);
    }

    /// Inline only; hidden again after the configured delay unless replaced
    pub fn show(&self, message: String) {
        let generation = self.generation.get_untracked() + 1;
        self.generation.set(generation);
        self.message.set(Some(message));

        let (message_sig, generation_sig, delay) = (self.message, self.generation, self.hide_ms);
        spawn_local(async move {
            TimeoutFuture::new(delay).await;
            if generation_sig.try_get_untracked() == Some(generation) {
                let _ = message_sig.try_set(None);
            }
        });
    }

    pub fn clear(&self) {
        self.message.set(None);
    }
}

impl Default for InlineError {
    fn default() -> Self {
        Self::new()
    }
}
