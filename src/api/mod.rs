//! Backend API Bindings
//!
//! Typed wrappers around the backend's JSON/multipart endpoints, organized by
//! domain. Every call goes through [`send`], which issues a same-origin
//! `fetch` and decodes the `{success, message, data, user_type}` envelope.

mod auth;
mod complaints;
mod review;
mod feedback;
mod accounts;
mod notifications;

use serde::de::{DeserializeOwned, IgnoredAny};
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{FileList, FormData, Headers, RequestCredentials, RequestInit, Response};

use crate::config::ClientConfig;
use crate::error::{ApiError, ApiResult};
use crate::models::ApiResponse;

// Re-export all public items
pub use auth::*;
pub use complaints::*;
pub use review::*;
pub use feedback::*;
pub use accounts::*;
pub use notifications::*;

/// Envelope for endpoints whose `data` the client never reads
pub type Ack = ApiResponse<IgnoredAny>;

// ========================
// Endpoint table
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Register,
    Login,
    Logout,
    SubmitComplaint,
    GetComplaints,
    UpdateComplaint,
    VerifierComplaints,
    VerifyComplaint,
    StaffComplaints,
    StaffUpdate,
    Feedback,
    GetStaff,
    CreateUser,
    Notifications,
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Register => "/register",
            Endpoint::Login => "/login",
            Endpoint::Logout => "/logout",
            Endpoint::SubmitComplaint => "/submit_complaint",
            Endpoint::GetComplaints => "/get_complaints",
            Endpoint::UpdateComplaint => "/update_complaint",
            Endpoint::VerifierComplaints => "/verifier_complaints",
            Endpoint::VerifyComplaint => "/verify_complaint",
            Endpoint::StaffComplaints => "/staff_complaints",
            Endpoint::StaffUpdate => "/staff_update",
            Endpoint::Feedback => "/feedback",
            Endpoint::GetStaff => "/api/get_staff",
            Endpoint::CreateUser => "/admin/create_user",
            Endpoint::Notifications => "/notifications",
        }
    }

    pub fn method(&self) -> Method {
        match self {
            Endpoint::Logout
            | Endpoint::GetComplaints
            | Endpoint::VerifierComplaints
            | Endpoint::StaffComplaints
            | Endpoint::GetStaff
            | Endpoint::Notifications => Method::Get,
            _ => Method::Post,
        }
    }
}

// ========================
// Request bodies
// ========================

/// One multipart field
#[derive(Debug, Clone)]
pub enum Part {
    Text(String),
    File(web_sys::File),
}

/// Ordered multipart fields; names may repeat (one part per attached file)
#[derive(Debug, Clone, Default)]
pub struct Multipart {
    parts: Vec<(&'static str, Part)>,
}

impl Multipart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.parts.push((name, Part::Text(value.into())));
        self
    }

    /// Only appended when present
    pub fn text_opt(self, name: &'static str, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(v) => self.text(name, v),
            None => self,
        }
    }

    pub fn file(mut self, name: &'static str, file: web_sys::File) -> Self {
        self.parts.push((name, Part::File(file)));
        self
    }

    /// Append every file in the list under the same field name
    pub fn files(self, name: &'static str, files: Option<&FileList>) -> Self {
        let Some(list) = files else { return self };
        (0..list.length())
            .filter_map(|i| list.get(i))
            .fold(self, |form, file| form.file(name, file))
    }

    pub fn field_names(&self) -> Vec<&'static str> {
        self.parts.iter().map(|(name, _)| *name).collect()
    }

    pub fn text_value(&self, name: &str) -> Option<&str> {
        self.parts.iter().find_map(|(n, part)| match part {
            Part::Text(v) if *n == name => Some(v.as_str()),
            _ => None,
        })
    }

    pub fn file_count(&self, name: &str) -> usize {
        self.parts
            .iter()
            .filter(|(n, part)| *n == name && matches!(part, Part::File(_)))
            .count()
    }

    fn to_form_data(&self) -> Result<FormData, JsValue> {
        let form = FormData::new()?;
        for (name, part) in &self.parts {
            match part {
                Part::Text(value) => form.append_with_str(name, value)?,
                Part::File(file) => form.append_with_blob_and_filename(name, file, &file.name())?,
            }
        }
        Ok(form)
    }
}

#[derive(Debug, Clone)]
pub enum Body {
    Empty,
    Json(String),
    Multipart(Multipart),
}

impl Body {
    pub fn json<T: Serialize>(value: &T) -> ApiResult<Self> {
        Ok(Body::Json(serde_json::to_string(value)?))
    }
}

/// Fully described request, built before anything touches the network
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub endpoint: Endpoint,
    pub body: Body,
}

impl ApiRequest {
    pub fn get(endpoint: Endpoint) -> Self {
        Self { endpoint, body: Body::Empty }
    }

    pub fn json<T: Serialize>(endpoint: Endpoint, value: &T) -> ApiResult<Self> {
        Ok(Self { endpoint, body: Body::json(value)? })
    }

    pub fn multipart(endpoint: Endpoint, form: Multipart) -> Self {
        Self { endpoint, body: Body::Multipart(form) }
    }

    pub fn method(&self) -> Method {
        self.endpoint.method()
    }
}

// ========================
// Transport
// ========================

fn build_init(request: &ApiRequest) -> Result<RequestInit, JsValue> {
    let init = RequestInit::new();
    init.set_method(request.method().as_str());
    init.set_credentials(RequestCredentials::SameOrigin);

    let headers = Headers::new()?;
    headers.set("Accept", "application/json")?;
    match &request.body {
        Body::Empty => {}
        Body::Json(json) => {
            headers.set("Content-Type", "application/json")?;
            init.set_body(&JsValue::from_str(json));
        }
        // Browser writes the multipart boundary into Content-Type
        Body::Multipart(form) => {
            let form_data: FormData = form.to_form_data()?;
            init.set_body(&form_data);
        }
    }
    init.set_headers(&headers);
    Ok(init)
}

async fn fetch_json(config: &ClientConfig, request: &ApiRequest) -> ApiResult<JsValue> {
    let window = web_sys::window().ok_or(ApiError::Unavailable("window"))?;
    let init = build_init(request).map_err(ApiError::from_js)?;
    let url = config.url_for(request.endpoint.path());
    let req = web_sys::Request::new_with_str_and_init(&url, &init).map_err(ApiError::from_js)?;

    let resp_value = JsFuture::from(window.fetch_with_request(&req))
        .await
        .map_err(ApiError::from_js)?;
    let resp: Response = resp_value.dyn_into().map_err(ApiError::from_js)?;
    log::debug!("[API] {} {} -> {}", request.method().as_str(), url, resp.status());

    let body = resp.json().map_err(ApiError::from_js)?;
    JsFuture::from(body).await.map_err(ApiError::from_js)
}

/// Issue the request and decode the envelope, whatever its `success` flag
pub async fn send<T: DeserializeOwned>(config: &ClientConfig, request: &ApiRequest) -> ApiResult<ApiResponse<T>> {
    let value = fetch_json(config, request).await?;
    Ok(serde_wasm_bindgen::from_value(value)?)
}

/// Like [`send`], but `success: false` becomes [`ApiError::Server`]
pub async fn call<T: DeserializeOwned>(
    config: &ClientConfig,
    request: &ApiRequest,
    fallback: &str,
) -> ApiResult<ApiResponse<T>> {
    send(config, request).await?.into_result(fallback)
}

impl<T> ApiResponse<T> {
    pub fn into_result(self, fallback: &str) -> ApiResult<Self> {
        if self.success {
            Ok(self)
        } else {
            Err(ApiError::server(self.message, fallback))
        }
    }
}
