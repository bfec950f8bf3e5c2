//! Thin gloo-net helpers shared by the HTTP clients: issue the request,
//! turn transport failures and non-2xx statuses into [`ApiError`]s.

use gloo_net::http::{Request, Response};
use serde::Serialize;
use serde_json::Value;

use crate::client::ApiError;

pub(crate) async fn get(url: &str) -> Result<Response, ApiError> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))?;
    check(response).await
}

pub(crate) async fn get_with_query(
    url: &str,
    query: &[(&str, &str)],
) -> Result<Response, ApiError> {
    let response = Request::get(url)
        .query(query.iter().copied())
        .send()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))?;
    check(response).await
}

pub(crate) async fn post_json<T: Serialize>(url: &str, body: &T) -> Result<Response, ApiError> {
    let response = Request::post(url)
        .json(body)
        .map_err(|err| ApiError::Decode(err.to_string()))?
        .send()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))?;
    check(response).await
}

pub(crate) async fn put_json<T: Serialize>(url: &str, body: &T) -> Result<Response, ApiError> {
    let response = Request::put(url)
        .json(body)
        .map_err(|err| ApiError::Decode(err.to_string()))?
        .send()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))?;
    check(response).await
}

pub(crate) async fn delete(url: &str) -> Result<Response, ApiError> {
    let response = Request::delete(url)
        .send()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))?;
    check(response).await
}

/// Maps non-2xx responses to [`ApiError::Status`], lifting the backend's
/// `detail` message when the body carries one.
async fn check(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let code = response.status();
    let message = match response.json::<Value>().await {
        Ok(body) => body
            .get("detail")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_default(),
        Err(_) => String::new(),
    };
    Err(ApiError::Status { code, message })
}
