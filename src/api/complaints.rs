//! Complaint Endpoints
//!
//! Citizen submission, the shared complaint list and the admin update.

use web_sys::FileList;

use super::{call, Ack, ApiRequest, Endpoint, Multipart};
use crate::config::ClientConfig;
use crate::error::ApiResult;
use crate::models::{Complaint, StaffMember};
use crate::validation::{ComplaintDraft, ComplaintUpdate};

pub const SUBMISSION_FAILED: &str = "Submission failed";
pub const UPDATE_FAILED: &str = "Update failed";

pub fn submit_complaint_request(draft: &ComplaintDraft, images: Option<&FileList>) -> ApiRequest {
    let form = Multipart::new()
        .text("title", draft.title.as_str())
        .text("description", draft.description.as_str())
        .text("city", draft.city.as_str())
        .text("pincode", draft.pincode.as_str())
        .text("landmark", draft.landmark.as_str())
        .files("complaint_images", images);
    ApiRequest::multipart(Endpoint::SubmitComplaint, form)
}

pub async fn submit_complaint(config: &ClientConfig, draft: &ComplaintDraft, images: Option<&FileList>) -> ApiResult<Ack> {
    call(config, &submit_complaint_request(draft, images), SUBMISSION_FAILED).await
}

pub fn update_complaint_request(update: &ComplaintUpdate, work_images: Option<&FileList>) -> ApiRequest {
    let form = Multipart::new()
        .text("complaint_id", update.complaint_id.as_str())
        .text_opt("status", update.status.map(|s| s.as_str()))
        .text_opt("assigned_to", update.assigned_to.as_deref())
        .files("work_images", work_images);
    ApiRequest::multipart(Endpoint::UpdateComplaint, form)
}

pub async fn update_complaint(config: &ClientConfig, update: &ComplaintUpdate, work_images: Option<&FileList>) -> ApiResult<Ack> {
    call(config, &update_complaint_request(update, work_images), UPDATE_FAILED).await
}

/// Fetch one of the three complaint lists; `null` data is an empty list
pub async fn list_complaints(config: &ClientConfig, endpoint: Endpoint) -> ApiResult<Vec<Complaint>> {
    let resp = call::<Vec<Complaint>>(config, &ApiRequest::get(endpoint), "Could not fetch complaints").await?;
    Ok(resp.data.unwrap_or_default())
}

pub async fn list_staff(config: &ClientConfig) -> ApiResult<Vec<StaffMember>> {
    let resp = call::<Vec<StaffMember>>(config, &ApiRequest::get(Endpoint::GetStaff), "Could not fetch staff").await?;
    Ok(resp.data.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{Body, Method};
    use crate::models::ComplaintStatus;
    use crate::validation::{validate_complaint, ComplaintFields};

    #[test]
    fn test_pothole_submission_is_multipart_post() {
        let draft = validate_complaint(&ComplaintFields {
            title: "Pothole".into(),
            description: "Large pothole on Main St".into(),
            city: "Springfield".into(),
            pincode: "123456".into(),
            landmark: String::new(),
        })
        .unwrap();

        let req = submit_complaint_request(&draft, None);
        assert_eq!(req.method(), Method::Post);
        assert_eq!(req.endpoint.path(), "/submit_complaint");
        let Body::Multipart(form) = req.body else { panic!("expected multipart body") };
        assert_eq!(form.field_names(), vec!["title", "description", "city", "pincode", "landmark"]);
        assert_eq!(form.text_value("title"), Some("Pothole"));
        assert_eq!(form.text_value("description"), Some("Large pothole on Main St"));
        assert_eq!(form.text_value("city"), Some("Springfield"));
        assert_eq!(form.text_value("pincode"), Some("123456"));
        assert_eq!(form.file_count("complaint_images"), 0);
    }

    #[test]
    fn test_admin_update_omits_unset_fields() {
        let update = ComplaintUpdate {
            complaint_id: "c7".into(),
            status: None,
            assigned_to: Some("s1".into()),
        };
        let Body::Multipart(form) = update_complaint_request(&update, None).body else { panic!() };
        assert_eq!(form.field_names(), vec!["complaint_id", "assigned_to"]);

        let update = ComplaintUpdate {
            complaint_id: "c7".into(),
            status: Some(ComplaintStatus::Resolved),
            assigned_to: None,
        };
        let Body::Multipart(form) = update_complaint_request(&update, None).body else { panic!() };
        assert_eq!(form.text_value("status"), Some("Resolved"));
    }
}
