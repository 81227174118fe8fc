//! Admin Account Management

use super::{call, Ack, ApiRequest, Endpoint};
use crate::config::ClientConfig;
use crate::error::ApiResult;
use crate::validation::NewAccount;

pub const CREATE_USER_FAILED: &str = "User creation failed";

pub fn create_user_request(account: &NewAccount) -> ApiResult<ApiRequest> {
    ApiRequest::json(Endpoint::CreateUser, account)
}

/// Create a staff or verifier account; the reply's message confirms it
pub async fn create_user(config: &ClientConfig, account: &NewAccount) -> ApiResult<Ack> {
    call(config, &create_user_request(account)?, CREATE_USER_FAILED).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Body;
    use crate::models::UserType;
    use crate::validation::validate_new_account;

    #[test]
    fn test_create_user_json() {
        let acct = validate_new_account("Crew@City.gov", "longpass", "Ravi", UserType::Staff).unwrap();
        let Body::Json(json) = create_user_request(&acct).unwrap().body else { panic!() };
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["email"], "crew@city.gov");
        assert_eq!(value["user_role"], "staff");
        assert_eq!(value["first_name"], "Ravi");
    }
}
