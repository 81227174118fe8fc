//! Form Flows
//!
//! What a form does once the backend has answered. Components hand the
//! reply to [`Flow::outcome`] and act on the result.

use crate::api::{resolve_user_type, Ack};
use crate::error::{ApiResult, REQUEST_FAILED};
use crate::models::UserType;

/// A form submission that ends in a toast plus a page change or reset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Register,
    Login,
    SubmitComplaint,
    UpdateComplaint,
    VerifyComplaint,
    StaffUpdate,
    CreateUser,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Success toast, then leave the page. Login also records the role.
    Navigate {
        toast: String,
        path: &'static str,
        user_type: Option<UserType>,
    },
    /// Success toast and a cleared form; `reload` refreshes the lists
    Reset { toast: String, reload: bool },
    /// Inline error; nothing else changes
    Failed(String),
}

impl Flow {
    pub fn success_toast(&self) -> &'static str {
        match self {
            Flow::Register => "Registered successfully. Please login.",
            Flow::Login => "Logged in",
            Flow::SubmitComplaint => "Complaint submitted.",
            Flow::UpdateComplaint => "Complaint updated",
            Flow::VerifyComplaint => "Verification saved",
            Flow::StaffUpdate => "Progress updated",
            Flow::CreateUser => "Account created",
        }
    }

    /// Decide the outcome from the reply of a call made through `api::call`,
    /// where `success: false` has already become an error
    pub fn outcome(&self, reply: ApiResult<Ack>) -> Outcome {
        let resp = match reply {
            Ok(resp) => resp,
            Err(e) => return Outcome::Failed(e.message_or(REQUEST_FAILED)),
        };
        let toast = self.success_toast().to_string();
        match self {
            Flow::Register => Outcome::Navigate { toast, path: "/", user_type: None },
            Flow::Login => {
                let user_type = resolve_user_type(resp.user_type.as_deref());
                Outcome::Navigate {
                    toast,
                    path: user_type.dashboard_path(),
                    user_type: Some(user_type),
                }
            }
            Flow::CreateUser => Outcome::Reset {
                toast: resp.message.filter(|m| !m.trim().is_empty()).unwrap_or(toast),
                reload: false,
            },
            Flow::SubmitComplaint | Flow::UpdateComplaint | Flow::VerifyComplaint | Flow::StaffUpdate => {
                Outcome::Reset { toast, reload: true }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{submit_complaint_request, Body, Endpoint, CREATE_USER_FAILED, LOGIN_FAILED, SUBMISSION_FAILED};
    use crate::error::ApiError;
    use crate::validation::{validate_complaint, ComplaintFields};

    fn reply(json: &str, fallback: &str) -> ApiResult<Ack> {
        let resp: Ack = serde_json::from_str(json).unwrap();
        resp.into_result(fallback)
    }

    #[test]
    fn test_pothole_submission_resets_and_reloads() {
        let draft = validate_complaint(&ComplaintFields {
            title: "Pothole".into(),
            description: "Large pothole on Main St".into(),
            city: "Springfield".into(),
            pincode: "123456".into(),
            landmark: String::new(),
        })
        .unwrap();
        let req = submit_complaint_request(&draft, None);
        assert_eq!(req.endpoint, Endpoint::SubmitComplaint);
        assert!(matches!(req.body, Body::Multipart(_)));

        let outcome = Flow::SubmitComplaint.outcome(reply(r#"{"success": true}"#, SUBMISSION_FAILED));
        assert_eq!(
            outcome,
            Outcome::Reset { toast: "Complaint submitted.".into(), reload: true }
        );
    }

    #[test]
    fn test_rejected_login_stays_with_server_message() {
        let outcome = Flow::Login.outcome(reply(
            r#"{"success": false, "message": "Invalid credentials"}"#,
            LOGIN_FAILED,
        ));
        assert_eq!(outcome, Outcome::Failed("Invalid credentials".into()));
    }

    #[test]
    fn test_login_without_message_uses_fallback() {
        let outcome = Flow::Login.outcome(reply(r#"{"success": false}"#, LOGIN_FAILED));
        assert_eq!(outcome, Outcome::Failed("Login failed".into()));
    }

    #[test]
    fn test_login_navigates_to_reported_dashboard() {
        let outcome = Flow::Login.outcome(reply(r#"{"success": true, "user_type": "verifier"}"#, LOGIN_FAILED));
        assert_eq!(
            outcome,
            Outcome::Navigate {
                toast: "Logged in".into(),
                path: "/verifier",
                user_type: Some(UserType::Verifier),
            }
        );
    }

    #[test]
    fn test_transport_failure_without_text_reads_request_failed() {
        let outcome = Flow::UpdateComplaint.outcome(Err(ApiError::Transport(String::new())));
        assert_eq!(outcome, Outcome::Failed("Request failed".into()));

        let outcome = Flow::StaffUpdate.outcome(Err(ApiError::Transport("TypeError: Failed to fetch".into())));
        assert_eq!(outcome, Outcome::Failed("TypeError: Failed to fetch".into()));
    }

    #[test]
    fn test_register_returns_home() {
        let outcome = Flow::Register.outcome(reply(r#"{"success": true}"#, "Registration failed"));
        assert!(matches!(outcome, Outcome::Navigate { path: "/", user_type: None, .. }));
    }

    #[test]
    fn test_create_user_toasts_server_message_without_reload() {
        let outcome = Flow::CreateUser.outcome(reply(
            r#"{"success": true, "message": "Staff account created"}"#,
            CREATE_USER_FAILED,
        ));
        assert_eq!(
            outcome,
            Outcome::Reset { toast: "Staff account created".into(), reload: false }
        );
    }
}
