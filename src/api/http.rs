//! HTTPヘルパー（gloo-net経由のJSON GET）

use gloo::net::http::Request;
use serde::de::DeserializeOwned;
use web_sys::AbortSignal;

use super::ApiError;

/// JSONをGETしてデシリアライズする
///
/// `signal` が中断されると `ApiError::Aborted` を返す
pub async fn get_json<T: DeserializeOwned>(
    url: &str,
    signal: Option<&AbortSignal>,
) -> Result<T, ApiError> {
    let response = Request::get(url).abort_signal(signal).send().await?;

    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }

    response.json::<T>().await.map_err(ApiError::from)
}

impl From<gloo::net::Error> for ApiError {
    fn from(err: gloo::net::Error) -> Self {
        match err {
            gloo::net::Error::JsError(js) if js.name == "AbortError" => ApiError::Aborted,
            gloo::net::Error::JsError(js) => ApiError::Network(js.message),
            gloo::net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}
