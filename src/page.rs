//! Page Resolution
//!
//! Maps the URL path to the typed page view and decides which controls a
//! viewer gets.

use crate::models::{ComplaintStatus, UserType};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    /// Registration and login
    Home,
    Citizen,
    Admin,
    Verifier,
    Staff,
}

impl Page {
    pub fn from_path(path: &str) -> Self {
        if path.contains("/admin") {
            Page::Admin
        } else if path.contains("/user") {
            Page::Citizen
        } else if path.contains("/verifier") {
            Page::Verifier
        } else if path.contains("/staff") {
            Page::Staff
        } else {
            Page::Home
        }
    }

    /// Role implied by the page when the session has none on record
    pub fn default_user_type(&self) -> Option<UserType> {
        match self {
            Page::Home => None,
            Page::Citizen => Some(UserType::User),
            Page::Admin => Some(UserType::Admin),
            Page::Verifier => Some(UserType::Verifier),
            Page::Staff => Some(UserType::Staff),
        }
    }
}

/// Role for capability checks: what the backend reported at login wins over
/// what the URL suggests
pub fn resolve_viewer(stored: Option<UserType>, page: Page) -> UserType {
    stored.or(page.default_user_type()).unwrap_or_default()
}

/// Which list a `ComplaintList` shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Complaints,
    VerifierQueue,
    StaffQueue,
}

impl ListKind {
    pub fn endpoint(&self) -> crate::api::Endpoint {
        use crate::api::Endpoint;
        match self {
            ListKind::Complaints => Endpoint::GetComplaints,
            ListKind::VerifierQueue => Endpoint::VerifierComplaints,
            ListKind::StaffQueue => Endpoint::StaffComplaints,
        }
    }
}

/// Form a card button copies the complaint id into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormTarget {
    Update,
    Verify,
    Progress,
}

impl FormTarget {
    pub fn missing_message(&self) -> &'static str {
        match self {
            FormTarget::Update => "Update form not present",
            FormTarget::Verify => "Verify form not present",
            FormTarget::Progress => "Progress form not present",
        }
    }
}

/// Controls attached to a complaint card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardAction {
    /// Copy id into a form and scroll to it
    Focus { label: &'static str, target: FormTarget },
    /// Jump back to the list anchor
    Details,
    OpenFeedback,
}

pub fn card_actions(kind: ListKind, viewer: UserType, status: Option<ComplaintStatus>) -> Vec<CardAction> {
    match kind {
        ListKind::Complaints if viewer == UserType::Admin => vec![
            CardAction::Focus { label: "Edit / Assign", target: FormTarget::Update },
            CardAction::Details,
        ],
        ListKind::Complaints => status
            .filter(ComplaintStatus::accepts_feedback)
            .map(|_| vec![CardAction::OpenFeedback])
            .unwrap_or_default(),
        ListKind::VerifierQueue => vec![CardAction::Focus { label: "Verify / Reject", target: FormTarget::Verify }],
        ListKind::StaffQueue => vec![CardAction::Focus { label: "Set progress", target: FormTarget::Progress }],
    }
}

/// Work-progress images are shown to everyone but admins
pub fn shows_work_images(kind: ListKind, viewer: UserType) -> bool {
    kind == ListKind::Complaints && viewer != UserType::Admin
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_from_path() {
        assert_eq!(Page::from_path("/"), Page::Home);
        assert_eq!(Page::from_path("/user"), Page::Citizen);
        assert_eq!(Page::from_path("/admin"), Page::Admin);
        assert_eq!(Page::from_path("/admin/reports"), Page::Admin);
        assert_eq!(Page::from_path("/verifier"), Page::Verifier);
        assert_eq!(Page::from_path("/staff"), Page::Staff);
    }

    #[test]
    fn test_stored_role_beats_path() {
        assert_eq!(resolve_viewer(Some(UserType::User), Page::Admin), UserType::User);
        assert_eq!(resolve_viewer(None, Page::Admin), UserType::Admin);
        assert_eq!(resolve_viewer(None, Page::Home), UserType::User);
    }

    #[test]
    fn test_admin_gets_edit_controls() {
        let actions = card_actions(ListKind::Complaints, UserType::Admin, Some(ComplaintStatus::Resolved));
        assert_eq!(
            actions,
            vec![
                CardAction::Focus { label: "Edit / Assign", target: FormTarget::Update },
                CardAction::Details
            ]
        );
        assert!(!shows_work_images(ListKind::Complaints, UserType::Admin));
    }

    #[test]
    fn test_citizen_feedback_only_when_finished() {
        for status in ComplaintStatus::ALL {
            let actions = card_actions(ListKind::Complaints, UserType::User, Some(status));
            let offered = actions.contains(&CardAction::OpenFeedback);
            assert_eq!(offered, matches!(status, ComplaintStatus::Resolved | ComplaintStatus::Closed));
        }
        assert!(card_actions(ListKind::Complaints, UserType::User, None).is_empty());
        assert!(shows_work_images(ListKind::Complaints, UserType::User));
    }

    #[test]
    fn test_queue_actions() {
        assert_eq!(
            card_actions(ListKind::VerifierQueue, UserType::Verifier, None),
            vec![CardAction::Focus { label: "Verify / Reject", target: FormTarget::Verify }]
        );
        assert_eq!(
            card_actions(ListKind::StaffQueue, UserType::Staff, Some(ComplaintStatus::Assigned)),
            vec![CardAction::Focus { label: "Set progress", target: FormTarget::Progress }]
        );
        assert_eq!(ListKind::StaffQueue.endpoint().path(), "/staff_complaints");
    }
}
