//! Analyst Chat - Model (API functions)

use crate::shared::api_utils::api_url;
use contracts::chat::{ChatRequest, ChatResponse};
use futures::future::{select, Either};
use gloo_timers::future::TimeoutFuture;

/// Upper bound on one round trip. A backend that never answers settles the
/// session as a failure instead of leaving it stuck in the loading state.
pub const REQUEST_TIMEOUT_MS: u32 = 60_000;

/// Send one question to the analyst backend
pub async fn send_chat_request(request: &ChatRequest) -> Result<ChatResponse, String> {
    use wasm_bindgen::JsCast;
    use web_sys::{Request, RequestInit, RequestMode, Response};

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);

    let body = serde_json::to_string(request).map_err(|e| format!("{e}"))?;
    opts.set_body(&wasm_bindgen::JsValue::from_str(&body));

    let url = api_url("/api/chat");
    let request = Request::new_with_str_and_init(&url, &opts).map_err(|e| format!("{e:?}"))?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(|e| format!("{e:?}"))?;

    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let resp_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("{e:?}"))?;
    let resp: Response = resp_value.dyn_into().map_err(|e| format!("{e:?}"))?;

    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }

    let text = wasm_bindgen_futures::JsFuture::from(resp.text().map_err(|e| format!("{e:?}"))?)
        .await
        .map_err(|e| format!("{e:?}"))?;
    let text: String = text.as_string().ok_or_else(|| "bad text".to_string())?;
    let data: ChatResponse = serde_json::from_str(&text).map_err(|e| format!("{e}"))?;

    Ok(data)
}

/// Same call, bounded by `REQUEST_TIMEOUT_MS`
pub async fn send_chat_request_with_timeout(
    request: &ChatRequest,
) -> Result<ChatResponse, String> {
    let fetch = send_chat_request(request);
    let timeout = TimeoutFuture::new(REQUEST_TIMEOUT_MS);
    futures::pin_mut!(fetch, timeout);

    match select(fetch, timeout).await {
        Either::Left((result, _)) => result,
        Either::Right(_) => Err(format!("request timed out after {}ms", REQUEST_TIMEOUT_MS)),
    }
}
