//! Feedback Endpoint

use super::{call, Ack, ApiRequest, Endpoint};
use crate::config::ClientConfig;
use crate::error::ApiResult;
use crate::validation::Feedback;

pub const FEEDBACK_FAILED: &str = "Submission failed.";
pub const FEEDBACK_NETWORK_ERROR: &str = "A network error occurred.";

pub fn feedback_request(feedback: &Feedback) -> ApiResult<ApiRequest> {
    ApiRequest::json(Endpoint::Feedback, feedback)
}

pub async fn submit_feedback(config: &ClientConfig, feedback: &Feedback) -> ApiResult<Ack> {
    call(config, &feedback_request(feedback)?, FEEDBACK_FAILED).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Body;
    use crate::validation::validate_feedback;

    #[test]
    fn test_feedback_json() {
        let fb = validate_feedback("c5", "5", "Fixed the same day").unwrap();
        let Body::Json(json) = feedback_request(&fb).unwrap().body else { panic!() };
        assert_eq!(json, r#"{"complaint_id":"c5","rating":5,"comments":"Fixed the same day"}"#);
    }
}
