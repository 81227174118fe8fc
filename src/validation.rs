//! Form Validation
//!
//! Pure field rules for every form. Each `validate_*` turns raw input into a
//! request payload or the first failing rule's message.

use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

use crate::error::ValidationError;
use crate::models::{ComplaintStatus, UserType};

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"))
}

/// `local@domain.tld`, compared lower-cased
pub fn is_valid_email(email: &str) -> bool {
    email_regex().is_match(&email.to_lowercase())
}

pub fn digits_only(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

fn has_exact_digits(raw: &str, len: usize) -> bool {
    digits_only(raw).len() == len
}

/// Aadhar number: 12 digits once separators are stripped
pub fn is_valid_national_id(raw: &str) -> bool {
    has_exact_digits(raw, 12)
}

pub fn is_valid_phone(raw: &str) -> bool {
    has_exact_digits(raw, 10)
}

pub fn is_valid_pincode(raw: &str) -> bool {
    has_exact_digits(raw, 6)
}

pub const MIN_PASSWORD_LEN: usize = 6;
pub const MIN_DESCRIPTION_LEN: usize = 10;

// ========================
// Registration
// ========================

#[derive(Debug, Clone, Default)]
pub struct RegistrationFields {
    pub first_name: String,
    pub last_name: String,
    pub aadhar_card: String,
    pub email: String,
    pub phone_number: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Registration {
    pub first_name: String,
    pub last_name: String,
    pub aadhar_card: String,
    pub email: String,
    pub phone_number: String,
    pub password: String,
}

pub fn validate_registration(fields: &RegistrationFields) -> Result<Registration, ValidationError> {
    let first_name = fields.first_name.trim().to_string();
    let last_name = fields.last_name.trim().to_string();
    let aadhar_card = digits_only(&fields.aadhar_card);
    let email = fields.email.trim().to_lowercase();
    let phone_number = digits_only(&fields.phone_number);

    if first_name.is_empty() {
        return Err(ValidationError("First name required"));
    }
    if !is_valid_national_id(&aadhar_card) {
        return Err(ValidationError("Aadhar must be 12 digits"));
    }
    if !is_valid_email(&email) {
        return Err(ValidationError("Enter a valid email"));
    }
    if !is_valid_phone(&phone_number) {
        return Err(ValidationError("Phone must be 10 digits"));
    }
    if fields.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError("Password must be at least 6 characters"));
    }

    Ok(Registration {
        first_name,
        last_name,
        aadhar_card,
        email,
        phone_number,
        password: fields.password.clone(),
    })
}

// ========================
// Login
// ========================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Login {
    pub email: String,
    pub password: String,
    pub login_type: &'static str,
}

pub fn validate_login(email: &str, password: &str, login_type: UserType) -> Result<Login, ValidationError> {
    let email = email.trim().to_lowercase();
    if !is_valid_email(&email) {
        return Err(ValidationError("Enter valid email"));
    }
    if password.is_empty() {
        return Err(ValidationError("Password required"));
    }
    Ok(Login {
        email,
        password: password.to_string(),
        login_type: login_type.as_str(),
    })
}

// ========================
// Complaint submission
// ========================

#[derive(Debug, Clone, Default)]
pub struct ComplaintFields {
    pub title: String,
    pub description: String,
    pub city: String,
    pub pincode: String,
    pub landmark: String,
}

/// Validated complaint text fields, ready for the multipart body
#[derive(Debug, Clone, PartialEq)]
pub struct ComplaintDraft {
    pub title: String,
    pub description: String,
    pub city: String,
    pub pincode: String,
    pub landmark: String,
}

pub fn validate_complaint(fields: &ComplaintFields) -> Result<ComplaintDraft, ValidationError> {
    let title = fields.title.trim().to_string();
    let description = fields.description.trim().to_string();
    let city = fields.city.trim().to_string();
    let pincode = digits_only(fields.pincode.trim());
    let landmark = fields.landmark.trim().to_string();

    if title.is_empty() {
        return Err(ValidationError("Title is required"));
    }
    if description.chars().count() < MIN_DESCRIPTION_LEN {
        return Err(ValidationError("Provide a more detailed description (min 10 chars)"));
    }
    if city.is_empty() {
        return Err(ValidationError("City is required"));
    }
    if !is_valid_pincode(&pincode) {
        return Err(ValidationError("Pincode must be 6 digits"));
    }

    Ok(ComplaintDraft { title, description, city, pincode, landmark })
}

// ========================
// Admin / staff / verifier updates
// ========================

pub fn require_complaint_id(raw: &str) -> Result<String, ValidationError> {
    let id = raw.trim();
    if id.is_empty() {
        return Err(ValidationError("Missing complaint id"));
    }
    Ok(id.to_string())
}

/// Admin update: status and assignee are only sent when chosen
#[derive(Debug, Clone, PartialEq)]
pub struct ComplaintUpdate {
    pub complaint_id: String,
    pub status: Option<ComplaintStatus>,
    pub assigned_to: Option<String>,
}

pub fn validate_update(complaint_id: &str, status: &str, assigned_to: &str) -> Result<ComplaintUpdate, ValidationError> {
    let complaint_id = require_complaint_id(complaint_id)?;
    let assigned_to = Some(assigned_to.trim().to_string()).filter(|s| !s.is_empty());
    Ok(ComplaintUpdate {
        complaint_id,
        status: ComplaintStatus::parse(status),
        assigned_to,
    })
}

/// Staff progress: status is optional, files are added by the caller
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressUpdate {
    pub complaint_id: String,
    pub status: Option<ComplaintStatus>,
}

pub fn validate_progress(complaint_id: &str, status: &str) -> Result<ProgressUpdate, ValidationError> {
    Ok(ProgressUpdate {
        complaint_id: require_complaint_id(complaint_id)?,
        status: ComplaintStatus::parse(status),
    })
}

/// Verifier decision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum VerificationDecision {
    Verified,
    Rejected,
}

impl VerificationDecision {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "Verified" => Some(Self::Verified),
            "Rejected" => Some(Self::Rejected),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Verification {
    pub complaint_id: String,
    pub verification_status: VerificationDecision,
    pub verification_notes: String,
}

pub fn validate_verification(complaint_id: &str, decision: &str, notes: &str) -> Result<Verification, ValidationError> {
    let complaint_id = require_complaint_id(complaint_id)?;
    let verification_status =
        VerificationDecision::parse(decision).ok_or(ValidationError("Choose Verified or Rejected"))?;
    Ok(Verification {
        complaint_id,
        verification_status,
        verification_notes: notes.to_string(),
    })
}

// ========================
// Feedback
// ========================

/// Rating choices shown in the feedback modal, best first
pub const RATING_OPTIONS: &[(u8, &str)] = &[
    (5, "5 - Excellent"),
    (4, "4 - Good"),
    (3, "3 - Average"),
    (2, "2 - Poor"),
    (1, "1 - Very Poor"),
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Feedback {
    pub complaint_id: String,
    pub rating: u8,
    pub comments: String,
}

pub fn validate_feedback(complaint_id: &str, rating: &str, comments: &str) -> Result<Feedback, ValidationError> {
    let rating = rating
        .trim()
        .parse::<u8>()
        .ok()
        .filter(|r| (1..=5).contains(r))
        .ok_or(ValidationError("Please select a rating."))?;
    Ok(Feedback {
        complaint_id: complaint_id.to_string(),
        rating,
        comments: comments.to_string(),
    })
}

// ========================
// Account creation (admin)
// ========================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewAccount {
    pub email: String,
    pub password: String,
    pub user_role: &'static str,
    pub first_name: String,
}

pub fn validate_new_account(email: &str, password: &str, first_name: &str, role: UserType) -> Result<NewAccount, ValidationError> {
    let email = email.trim().to_lowercase();
    if !is_valid_email(&email) {
        return Err(ValidationError("Enter a valid email"));
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError("Password must be at least 6 characters"));
    }
    if !matches!(role, UserType::Staff | UserType::Verifier) {
        return Err(ValidationError("Role must be staff or verifier"));
    }
    let first_name = first_name.trim();
    Ok(NewAccount {
        email,
        password: password.to_string(),
        user_role: role.as_str(),
        first_name: if first_name.is_empty() { "Staff".to_string() } else { first_name.to_string() },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registration() -> RegistrationFields {
        RegistrationFields {
            first_name: " Asha ".into(),
            last_name: "Kumar".into(),
            aadhar_card: "1234 5678 9012".into(),
            email: " Asha@Example.COM ".into(),
            phone_number: "98765-43210".into(),
            password: "secret1".into(),
        }
    }

    #[test]
    fn test_national_id_needs_twelve_digits() {
        assert!(is_valid_national_id("123456789012"));
        assert!(is_valid_national_id("1234-5678-9012"));
        assert!(!is_valid_national_id("12345678901"));
        assert!(!is_valid_national_id("1234567890123"));
        assert!(!is_valid_national_id(""));
        for len in (0..20).filter(|l| *l != 12) {
            assert!(!is_valid_national_id(&"7".repeat(len)), "length {}", len);
        }
    }

    #[test]
    fn test_email_shape() {
        assert!(is_valid_email("local@domain.tld"));
        assert!(is_valid_email("LOCAL@DOMAIN.TLD"));
        assert!(is_valid_email("a.b@c.d.e"));
        assert!(!is_valid_email("no-at-sign.com"));
        assert!(!is_valid_email("user@nodot"));
        assert!(!is_valid_email("user@domain."));
        assert!(!is_valid_email("us er@domain.com"));
        assert!(!is_valid_email("a@b@c.d"));
    }

    #[test]
    fn test_phone_and_pincode() {
        assert!(is_valid_phone("(987) 654-3210"));
        assert!(!is_valid_phone("987654321"));
        assert!(is_valid_pincode("411 001"));
        assert!(!is_valid_pincode("41100"));
    }

    #[test]
    fn test_registration_normalizes_fields() {
        let reg = validate_registration(&registration()).unwrap();
        assert_eq!(reg.first_name, "Asha");
        assert_eq!(reg.aadhar_card, "123456789012");
        assert_eq!(reg.email, "asha@example.com");
        assert_eq!(reg.phone_number, "9876543210");
    }

    #[test]
    fn test_registration_reports_first_failure() {
        let mut fields = registration();
        fields.first_name = "   ".into();
        fields.aadhar_card = "1".into();
        assert_eq!(validate_registration(&fields).unwrap_err().0, "First name required");

        let mut fields = registration();
        fields.aadhar_card = "1".into();
        assert_eq!(validate_registration(&fields).unwrap_err().0, "Aadhar must be 12 digits");

        let mut fields = registration();
        fields.email = "nope".into();
        assert_eq!(validate_registration(&fields).unwrap_err().0, "Enter a valid email");

        let mut fields = registration();
        fields.phone_number = "12345".into();
        assert_eq!(validate_registration(&fields).unwrap_err().0, "Phone must be 10 digits");

        let mut fields = registration();
        fields.password = "12345".into();
        assert_eq!(
            validate_registration(&fields).unwrap_err().0,
            "Password must be at least 6 characters"
        );
    }

    #[test]
    fn test_validators_agree_with_digit_rules() {
        for raw in ["123456789012", "1234-5678-9012", "12345678901", "1234567890123", "abc"] {
            let mut fields = registration();
            fields.aadhar_card = raw.into();
            assert_eq!(validate_registration(&fields).is_ok(), is_valid_national_id(raw), "aadhar {:?}", raw);
        }
        for raw in ["9876543210", "(987) 654-3210", "987654321"] {
            let mut fields = registration();
            fields.phone_number = raw.into();
            assert_eq!(validate_registration(&fields).is_ok(), is_valid_phone(raw), "phone {:?}", raw);
        }
        for raw in ["411001", "411 001", "41100", "4110011"] {
            let fields = ComplaintFields {
                title: "Streetlight".into(),
                description: "Dark for a week now".into(),
                city: "Pune".into(),
                pincode: raw.into(),
                landmark: String::new(),
            };
            assert_eq!(validate_complaint(&fields).is_ok(), is_valid_pincode(raw), "pincode {:?}", raw);
        }
    }

    #[test]
    fn test_login_rules() {
        let login = validate_login(" Me@Site.org ", "pw", UserType::Staff).unwrap();
        assert_eq!(login.email, "me@site.org");
        assert_eq!(login.login_type, "staff");

        assert_eq!(validate_login("bad", "pw", UserType::User).unwrap_err().0, "Enter valid email");
        assert_eq!(validate_login("a@b.c", "", UserType::User).unwrap_err().0, "Password required");
    }

    #[test]
    fn test_complaint_rules() {
        let fields = ComplaintFields {
            title: "Pothole".into(),
            description: "Large pothole on Main St".into(),
            city: "Springfield".into(),
            pincode: "123456".into(),
            landmark: String::new(),
        };
        let draft = validate_complaint(&fields).unwrap();
        assert_eq!(draft.pincode, "123456");

        let short = ComplaintFields { description: "  too short  ".into(), ..fields.clone() };
        assert_eq!(
            validate_complaint(&short).unwrap_err().0,
            "Provide a more detailed description (min 10 chars)"
        );

        let no_city = ComplaintFields { city: " ".into(), ..fields.clone() };
        assert_eq!(validate_complaint(&no_city).unwrap_err().0, "City is required");

        let bad_pin = ComplaintFields { pincode: "12-345".into(), ..fields };
        assert_eq!(validate_complaint(&bad_pin).unwrap_err().0, "Pincode must be 6 digits");
    }

    #[test]
    fn test_update_requires_id_and_drops_blank_choices() {
        assert_eq!(validate_update("", "Open", "").unwrap_err().0, "Missing complaint id");

        let update = validate_update("c1", "", "  ").unwrap();
        assert_eq!(update.status, None);
        assert_eq!(update.assigned_to, None);

        let update = validate_update("c1", "In Progress", " s9 ").unwrap();
        assert_eq!(update.status, Some(ComplaintStatus::InProgress));
        assert_eq!(update.assigned_to.as_deref(), Some("s9"));
    }

    #[test]
    fn test_verification_decision() {
        let v = validate_verification("c1", "Rejected", "duplicate").unwrap();
        assert_eq!(v.verification_status, VerificationDecision::Rejected);
        assert!(validate_verification("c1", "Maybe", "").is_err());
        assert_eq!(validate_verification("", "Verified", "").unwrap_err().0, "Missing complaint id");
    }

    #[test]
    fn test_feedback_requires_rating() {
        assert_eq!(validate_feedback("c1", "", "ok").unwrap_err().0, "Please select a rating.");
        assert_eq!(validate_feedback("c1", "6", "ok").unwrap_err().0, "Please select a rating.");
        let fb = validate_feedback("c1", "4", "quick fix").unwrap();
        assert_eq!(fb.rating, 4);
        assert_eq!(serde_json::to_value(&fb).unwrap()["rating"], 4);
    }

    #[test]
    fn test_new_account_role_and_defaults() {
        let acct = validate_new_account("S@x.io", "longpass", "", UserType::Verifier).unwrap();
        assert_eq!(acct.user_role, "verifier");
        assert_eq!(acct.first_name, "Staff");
        assert!(validate_new_account("s@x.io", "longpass", "A", UserType::Admin).is_err());
        assert!(validate_new_account("s@x.io", "short", "A", UserType::Staff).is_err());
    }
}
