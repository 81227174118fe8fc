//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::models::UserType;
use crate::page::{FormTarget, Page};

/// A card asked a form to take over a complaint id
#[derive(Debug, Clone, PartialEq)]
pub struct FocusRequest {
    pub target: FormTarget,
    pub complaint_id: String,
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to reload lists from backend - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload lists from backend - write
    set_reload_trigger: WriteSignal<u32>,
    /// Page resolved from the URL at startup
    pub page: Page,
    /// Role used for capability checks
    pub viewer: UserType,
    /// Latest card-to-form hand-off
    pub focus_request: RwSignal<Option<FocusRequest>>,
    /// Forms currently mounted that accept a hand-off
    mounted_forms: RwSignal<Vec<FormTarget>>,
    /// Complaint the feedback modal is open for (None = closed)
    pub feedback_for: RwSignal<Option<String>>,
}

impl AppContext {
    pub fn new(reload_trigger: (ReadSignal<u32>, WriteSignal<u32>), page: Page, viewer: UserType) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            page,
            viewer,
            focus_request: RwSignal::new(None),
            mounted_forms: RwSignal::new(Vec::new()),
            feedback_for: RwSignal::new(None),
        }
    }

    /// Trigger a reload of the visible lists
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    /// Called by a form on mount; unregisters itself on cleanup
    pub fn register_form(&self, target: FormTarget) {
        self.mounted_forms.update(|forms| forms.push(target));
        let forms = self.mounted_forms;
        on_cleanup(move || {
            let _ = forms.try_update(|forms| {
                if let Some(pos) = forms.iter().position(|t| *t == target) {
                    forms.remove(pos);
                }
            });
        });
    }

    /// Hand a complaint id to a form; false when that form is not on the page
    pub fn focus_form(&self, target: FormTarget, complaint_id: String) -> bool {
        if !self.mounted_forms.with_untracked(|forms| forms.contains(&target)) {
            return false;
        }
        self.focus_request.set(Some(FocusRequest { target, complaint_id }));
        true
    }

    pub fn open_feedback(&self, complaint_id: String) {
        self.feedback_for.set(Some(complaint_id));
    }

    pub fn close_feedback(&self) {
        self.feedback_for.set(None);
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
