//! Form Outcome
//!
//! Carries out the [`Outcome`] a form's submission ended in.

use crate::browser;
use crate::context::AppContext;
use crate::flow::{Flow, Outcome};
use crate::toast::{InlineError, Toasts};

/// `reset` clears the form's fields; it runs only on a `Reset` outcome
pub fn apply_outcome(
    flow: Flow,
    outcome: Outcome,
    ctx: AppContext,
    toasts: Toasts,
    error: InlineError,
    reset: impl FnOnce(),
) {
    match outcome {
        Outcome::Navigate { toast, path, user_type } => {
            log::info!("[FORM] {:?} done, going to {}", flow, path);
            error.clear();
            toasts.success(toast);
            if let Some(user_type) = user_type {
                browser::remember_user_type(user_type);
            }
            browser::navigate(path);
        }
        Outcome::Reset { toast, reload } => {
            log::info!("[FORM] {:?} done", flow);
            error.clear();
            toasts.success(toast);
            reset();
            if reload {
                ctx.reload();
            }
        }
        Outcome::Failed(message) => {
            log::warn!("[FORM] {:?} failed: {}", flow, message);
            error.fail(message);
        }
    }
}
