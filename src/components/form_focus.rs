//! Card-to-Form Hand-off
//!
//! Lets a form receive the complaint id chosen on a card and scroll itself
//! into view.

use leptos::html::Form;
use leptos::prelude::*;

use crate::browser;
use crate::context::AppContext;
use crate::page::FormTarget;

/// Register `target` for the lifetime of the calling component and copy
/// matching hand-offs into `complaint_id`
pub fn bind_focus_target(ctx: AppContext, target: FormTarget, form_ref: NodeRef<Form>, complaint_id: RwSignal<String>) {
    ctx.register_form(target);

    Effect::new(move |_| {
        let Some(request) = ctx.focus_request.get() else { return };
        if request.target != target {
            return;
        }
        complaint_id.set(request.complaint_id);
        if let Some(form) = form_ref.get_untracked() {
            browser::scroll_to_element(&form);
        }
    });
}
