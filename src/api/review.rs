//! Verifier and Staff Endpoints

use web_sys::FileList;

use super::{call, Ack, ApiRequest, Endpoint, Multipart};
use crate::config::ClientConfig;
use crate::error::ApiResult;
use crate::validation::{ProgressUpdate, Verification};

pub const VERIFICATION_FAILED: &str = "Verification failed";
pub const PROGRESS_FAILED: &str = "Update failed";

pub fn verify_complaint_request(verification: &Verification) -> ApiResult<ApiRequest> {
    ApiRequest::json(Endpoint::VerifyComplaint, verification)
}

pub async fn verify_complaint(config: &ClientConfig, verification: &Verification) -> ApiResult<Ack> {
    call(config, &verify_complaint_request(verification)?, VERIFICATION_FAILED).await
}

pub fn staff_update_request(update: &ProgressUpdate, work_images: Option<&FileList>) -> ApiRequest {
    let form = Multipart::new()
        .text("complaint_id", update.complaint_id.as_str())
        .text_opt("status", update.status.map(|s| s.as_str()))
        .files("work_images", work_images);
    ApiRequest::multipart(Endpoint::StaffUpdate, form)
}

pub async fn staff_update(config: &ClientConfig, update: &ProgressUpdate, work_images: Option<&FileList>) -> ApiResult<Ack> {
    call(config, &staff_update_request(update, work_images), PROGRESS_FAILED).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Body;
    use crate::models::ComplaintStatus;
    use crate::validation::validate_verification;

    #[test]
    fn test_verification_json() {
        let v = validate_verification("c3", "Verified", "photo matches").unwrap();
        let Body::Json(json) = verify_complaint_request(&v).unwrap().body else { panic!() };
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["complaint_id"], "c3");
        assert_eq!(value["verification_status"], "Verified");
        assert_eq!(value["verification_notes"], "photo matches");
    }

    #[test]
    fn test_staff_update_fields() {
        let update = ProgressUpdate {
            complaint_id: "c9".into(),
            status: Some(ComplaintStatus::InProgress),
        };
        let req = staff_update_request(&update, None);
        assert_eq!(req.endpoint, Endpoint::StaffUpdate);
        let Body::Multipart(form) = req.body else { panic!() };
        assert_eq!(form.field_names(), vec!["complaint_id", "status"]);
        assert_eq!(form.text_value("status"), Some("In Progress"));
    }
}
