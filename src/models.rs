//! Frontend Models
//!
//! Data structures matching backend responses.

use serde::{Deserialize, Deserializer, Serialize};

/// Response envelope returned by every backend endpoint
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    pub data: Option<T>,
    #[serde(default)]
    pub user_type: Option<String>,
}

/// Nested submitter summary (`users` or `creator` depending on the list)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Submitter {
    #[serde(default, deserialize_with = "null_default")]
    pub first_name: String,
    #[serde(default, deserialize_with = "null_default")]
    pub last_name: String,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl Submitter {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_string()
    }

    /// One-line submitter summary with contact details
    pub fn summary(&self) -> String {
        format!(
            "User: {} {} — {} / {}",
            self.first_name,
            self.last_name,
            self.phone_number.as_deref().unwrap_or(""),
            self.email.as_deref().unwrap_or(""),
        )
    }
}

/// Staff member the complaint is assigned to
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Assignee {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default, deserialize_with = "null_default")]
    pub first_name: String,
    #[serde(default, deserialize_with = "null_default")]
    pub last_name: String,
}

/// Complaint record as listed by any of the three list endpoints.
/// Hashes over every field so a changed record re-renders its card.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Complaint {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub pincode: Option<String>,
    #[serde(default)]
    pub landmark: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub complaint_images: Vec<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub work_images: Vec<String>,
    #[serde(default, rename = "users", alias = "creator")]
    pub submitter: Option<Submitter>,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub assigned_to: Option<String>,
    #[serde(default)]
    pub assignee: Option<Assignee>,
}

impl Complaint {
    pub fn title_or_default(&self) -> &str {
        self.title.as_deref().filter(|t| !t.is_empty()).unwrap_or("Untitled")
    }

    pub fn status_label(&self) -> &str {
        self.status.as_deref().filter(|s| !s.is_empty()).unwrap_or("Open")
    }

    pub fn parsed_status(&self) -> Option<ComplaintStatus> {
        self.status.as_deref().and_then(ComplaintStatus::parse)
    }
}

/// Complaint lifecycle states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComplaintStatus {
    Open,
    Verified,
    Assigned,
    InProgress,
    Resolved,
    Closed,
    Rejected,
}

impl ComplaintStatus {
    pub const ALL: [ComplaintStatus; 7] = [
        ComplaintStatus::Open,
        ComplaintStatus::Verified,
        ComplaintStatus::Assigned,
        ComplaintStatus::InProgress,
        ComplaintStatus::Resolved,
        ComplaintStatus::Closed,
        ComplaintStatus::Rejected,
    ];

    /// Case-insensitive parse of the backend status string
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "open" => Some(Self::Open),
            "verified" => Some(Self::Verified),
            "assigned" => Some(Self::Assigned),
            "in progress" => Some(Self::InProgress),
            "resolved" => Some(Self::Resolved),
            "closed" => Some(Self::Closed),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }

    /// Wire value expected by the backend
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::Verified => "Verified",
            Self::Assigned => "Assigned",
            Self::InProgress => "In Progress",
            Self::Resolved => "Resolved",
            Self::Closed => "Closed",
            Self::Rejected => "Rejected",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Open => "status-open",
            Self::Verified => "status-verified",
            Self::Assigned => "status-assigned",
            Self::InProgress => "status-inprogress",
            Self::Resolved => "status-resolved",
            Self::Closed => "status-closed",
            Self::Rejected => "status-rejected",
        }
    }

    /// Complaints in these states can receive citizen feedback
    pub fn accepts_feedback(&self) -> bool {
        matches!(self, Self::Resolved | Self::Closed)
    }
}

/// Badge class for any status string; unknown values fall back to `status-open`
pub fn map_status_class(status: &str) -> &'static str {
    ComplaintStatus::parse(status)
        .unwrap_or(ComplaintStatus::Open)
        .css_class()
}

/// Account role, as returned in `user_type` and chosen in `login_type`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum UserType {
    #[default]
    User,
    Admin,
    Verifier,
    Staff,
}

impl UserType {
    pub const ALL: [UserType; 4] = [UserType::User, UserType::Admin, UserType::Verifier, UserType::Staff];

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "user" | "citizen" => Some(Self::User),
            "admin" => Some(Self::Admin),
            "verifier" => Some(Self::Verifier),
            "staff" => Some(Self::Staff),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Admin => "admin",
            Self::Verifier => "verifier",
            Self::Staff => "staff",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::User => "Citizen",
            Self::Admin => "Admin",
            Self::Verifier => "Verifier",
            Self::Staff => "Staff",
        }
    }

    pub fn dashboard_path(&self) -> &'static str {
        match self {
            Self::User => "/user",
            Self::Admin => "/admin",
            Self::Verifier => "/verifier",
            Self::Staff => "/staff",
        }
    }
}

/// Staff entry for the assignment selector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffMember {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default, deserialize_with = "null_default")]
    pub first_name: String,
    #[serde(default, deserialize_with = "null_default")]
    pub last_name: String,
    #[serde(default)]
    pub short_id: Option<String>,
}

impl StaffMember {
    /// "First Last (short id)", or the first 8 chars of the id when the
    /// backend sends no short id
    pub fn option_label(&self) -> String {
        match self.short_id.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            Some(short) => format!("{} {} ({})", self.first_name, self.last_name, short),
            None => {
                let prefix: String = self.id.chars().take(8).collect();
                format!("{} {} ({}...)", self.first_name, self.last_name, prefix)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NotificationPayload {
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub complaint_id: Option<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub message: String,
}

/// Status-change notification addressed to the logged-in citizen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default, deserialize_with = "null_default")]
    pub payload: NotificationPayload,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Notification {
    /// Timestamp as "YYYY-MM-DD HH:MM", or the raw value if it is not RFC 3339
    pub fn display_time(&self) -> String {
        match self.created_at.as_deref() {
            Some(raw) => chrono::DateTime::parse_from_rfc3339(raw)
                .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_else(|_| raw.to_string()),
            None => String::new(),
        }
    }
}

// ========================
// Serde helpers
// ========================

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    Int(i64),
    Float(f64),
}

impl From<StringOrNumber> for String {
    fn from(value: StringOrNumber) -> Self {
        match value {
            StringOrNumber::String(s) => s,
            StringOrNumber::Int(i) => i.to_string(),
            StringOrNumber::Float(f) => f.to_string(),
        }
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    StringOrNumber::deserialize(deserializer).map(String::from)
}

fn opt_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<StringOrNumber>::deserialize(deserializer)?.map(String::from))
}

/// Treat an explicit `null` like a missing field
fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_class_is_case_insensitive() {
        assert_eq!(map_status_class("OPEN"), "status-open");
        assert_eq!(map_status_class("open"), map_status_class("OPEN"));
        assert_eq!(map_status_class("In Progress"), "status-inprogress");
        assert_eq!(map_status_class("iN pRoGrEsS"), "status-inprogress");
        assert_eq!(map_status_class("Rejected"), "status-rejected");
    }

    #[test]
    fn test_status_class_falls_back_to_open() {
        assert_eq!(map_status_class(""), "status-open");
        assert_eq!(map_status_class("pending"), "status-open");
    }

    #[test]
    fn test_status_round_trips_wire_value() {
        for status in ComplaintStatus::ALL {
            assert_eq!(ComplaintStatus::parse(status.as_str()), Some(status));
        }
    }

    #[test]
    fn test_complaint_from_admin_list() {
        let json = r#"{
            "id": "9f1c2d3e-0000-4000-8000-000000000001",
            "title": "Streetlight",
            "description": "Light out near the park",
            "city": "Pune",
            "pincode": 411001,
            "status": "Assigned",
            "complaint_images": null,
            "work_images": ["https://cdn/w1.jpg"],
            "creator": {"id": "u1", "first_name": "Asha", "last_name": "K", "email": "a@k.in", "phone_number": "9876543210"},
            "assigned_to": "s1",
            "assignee": {"id": "s1", "first_name": "Ravi", "last_name": null}
        }"#;

        let c: Complaint = serde_json::from_str(json).unwrap();
        assert_eq!(c.pincode.as_deref(), Some("411001"));
        assert!(c.complaint_images.is_empty());
        assert_eq!(c.work_images.len(), 1);
        assert_eq!(c.submitter.as_ref().map(|s| s.first_name.as_str()), Some("Asha"));
        assert_eq!(c.assignee.as_ref().map(|a| a.last_name.as_str()), Some(""));
        assert_eq!(c.parsed_status(), Some(ComplaintStatus::Assigned));
    }

    #[test]
    fn test_complaint_minimal_defaults() {
        let c: Complaint = serde_json::from_str(r#"{"id": 42}"#).unwrap();
        assert_eq!(c.id, "42");
        assert_eq!(c.title_or_default(), "Untitled");
        assert_eq!(c.status_label(), "Open");
        assert!(c.submitter.is_none());
    }

    #[test]
    fn test_envelope_without_data() {
        let resp: ApiResponse<Vec<Complaint>> =
            serde_json::from_str(r#"{"success": false, "message": "Not authenticated"}"#).unwrap();
        assert!(!resp.success);
        assert_eq!(resp.message.as_deref(), Some("Not authenticated"));
        assert!(resp.data.is_none());
    }

    #[test]
    fn test_user_type_dashboards() {
        assert_eq!(UserType::parse("ADMIN"), Some(UserType::Admin));
        assert_eq!(UserType::parse("nobody"), None);
        assert_eq!(UserType::Verifier.dashboard_path(), "/verifier");
        assert_eq!(UserType::User.dashboard_path(), "/user");
    }

    #[test]
    fn test_staff_option_label_truncates_id() {
        let staff = StaffMember {
            id: "0123456789abcdef".to_string(),
            first_name: "Meena".to_string(),
            last_name: "S".to_string(),
            short_id: None,
        };
        assert_eq!(staff.option_label(), "Meena S (01234567...)");
    }

    #[test]
    fn test_staff_option_label_prefers_short_id() {
        let staff: StaffMember = serde_json::from_str(
            r#"{"id": "0123456789abcdef", "first_name": "Meena", "last_name": "S", "short_id": "ST-12"}"#,
        )
        .unwrap();
        assert_eq!(staff.option_label(), "Meena S (ST-12)");

        let blank = StaffMember { short_id: Some("  ".to_string()), ..staff };
        assert_eq!(blank.option_label(), "Meena S (01234567...)");
    }

    #[test]
    fn test_notification_time_formatting() {
        let n: Notification = serde_json::from_str(
            r#"{"id": 1, "type": "STATUS_UPDATE", "payload": {"complaint_id": "c1", "message": "Updated"}, "created_at": "2024-05-01T09:30:00+00:00"}"#,
        )
        .unwrap();
        assert_eq!(n.display_time(), "2024-05-01 09:30");
        assert_eq!(n.payload.message, "Updated");
    }
}
