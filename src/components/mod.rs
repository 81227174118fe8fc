//! UI Components
//!
//! Leptos components for forms, lists and notifications.

mod error_text;
mod toast_container;
pub(crate) mod form_focus;
pub(crate) mod form_outcome;
mod registration_form;
mod login_form;
mod complaint_form;
mod update_form;
mod verify_form;
mod progress_form;
mod create_user_form;
mod status_badge;
mod complaint_card;
mod complaint_list;
mod notification_list;
mod feedback_modal;
mod nav_bar;
mod dashboards;

pub use error_text::ErrorText;
pub use toast_container::ToastContainer;
pub use registration_form::RegistrationForm;
pub use login_form::LoginForm;
pub use complaint_form::ComplaintForm;
pub use update_form::UpdateForm;
pub use verify_form::VerifyForm;
pub use progress_form::ProgressForm;
pub use create_user_form::CreateUserForm;
pub use status_badge::StatusBadge;
pub use complaint_card::ComplaintCard;
pub use complaint_list::ComplaintList;
pub use notification_list::NotificationList;
pub use feedback_modal::FeedbackModal;
pub use nav_bar::NavBar;
pub use dashboards::{AdminDashboard, CitizenDashboard, HomePage, StaffDashboard, VerifierDashboard};
