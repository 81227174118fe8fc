//! Notification Endpoint

use super::{call, ApiRequest, Endpoint};
use crate::config::ClientConfig;
use crate::error::ApiResult;
use crate::models::Notification;

pub async fn list_notifications(config: &ClientConfig) -> ApiResult<Vec<Notification>> {
    let resp = call::<Vec<Notification>>(config, &ApiRequest::get(Endpoint::Notifications), "Could not fetch notifications").await?;
    Ok(resp.data.unwrap_or_default())
}
