//! Account Session Endpoints
//!
//! Registration, login and logout.

use serde::de::IgnoredAny;

use super::{call, send, Ack, ApiRequest, Endpoint};
use crate::config::ClientConfig;
use crate::error::ApiResult;
use crate::models::UserType;
use crate::validation::{Login, Registration};

pub const REGISTRATION_FAILED: &str = "Registration failed";
pub const LOGIN_FAILED: &str = "Login failed";

pub fn register_request(registration: &Registration) -> ApiResult<ApiRequest> {
    ApiRequest::json(Endpoint::Register, registration)
}

pub async fn register(config: &ClientConfig, registration: &Registration) -> ApiResult<Ack> {
    call(config, &register_request(registration)?, REGISTRATION_FAILED).await
}

pub fn login_request(login: &Login) -> ApiResult<ApiRequest> {
    ApiRequest::json(Endpoint::Login, login)
}

/// Log in; the reply carries the account's `user_type`
pub async fn login(config: &ClientConfig, login: &Login) -> ApiResult<Ack> {
    call(config, &login_request(login)?, LOGIN_FAILED).await
}

/// Unknown or missing `user_type` lands on the citizen dashboard
pub fn resolve_user_type(raw: Option<&str>) -> UserType {
    raw.and_then(UserType::parse).unwrap_or_default()
}

/// Ask the backend to clear the session; the outcome is only logged
pub async fn logout(config: &ClientConfig) {
    match send::<IgnoredAny>(config, &ApiRequest::get(Endpoint::Logout)).await {
        Ok(_) => log::info!("[AUTH] logged out"),
        Err(e) => log::warn!("[AUTH] logout request failed: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Body;
    use crate::validation::validate_login;

    #[test]
    fn test_login_body_shape() {
        let login = validate_login("Me@Site.org", "hunter22", UserType::User).unwrap();
        let req = login_request(&login).unwrap();
        assert_eq!(req.endpoint, Endpoint::Login);
        let Body::Json(json) = req.body else { panic!("expected JSON body") };
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["email"], "me@site.org");
        assert_eq!(value["password"], "hunter22");
        assert_eq!(value["login_type"], "user");
    }

    #[test]
    fn test_dashboard_for_reported_role() {
        assert_eq!(resolve_user_type(Some("admin")).dashboard_path(), "/admin");
        assert_eq!(resolve_user_type(Some("staff")).dashboard_path(), "/staff");
        assert_eq!(resolve_user_type(Some("mystery")).dashboard_path(), "/user");
        assert_eq!(resolve_user_type(None).dashboard_path(), "/user");
    }
}
