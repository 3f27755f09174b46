//! EmailJS transport over `fetch`

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, RequestMode, Response};

use super::{ContactError, EMAILJS_ENDPOINT, EmailJsRequest};

fn js_error(value: wasm_bindgen::JsValue) -> ContactError {
    ContactError::SubmissionFailed(
        value
            .as_string()
            .unwrap_or_else(|| format!("{value:?}")),
    )
}

/// POST the request to EmailJS. One attempt, no retry.
pub async fn send(request: &EmailJsRequest) -> Result<(), ContactError> {
    let body = request.to_json()?;

    let headers = Headers::new().map_err(js_error)?;
    headers
        .set("Content-Type", "application/json")
        .map_err(js_error)?;

    let init = RequestInit::new();
    init.set_method("POST");
    init.set_mode(RequestMode::Cors);
    init.set_headers(&headers);
    init.set_body(&wasm_bindgen::JsValue::from_str(&body));

    let req = Request::new_with_str_and_init(EMAILJS_ENDPOINT, &init).map_err(js_error)?;
    let window = web_sys::window()
        .ok_or_else(|| ContactError::SubmissionFailed("no window".to_string()))?;

    let response: Response = JsFuture::from(window.fetch_with_request(&req))
        .await
        .map_err(js_error)?
        .dyn_into()
        .map_err(js_error)?;

    if response.ok() {
        Ok(())
    } else {
        Err(ContactError::SubmissionFailed(format!(
            "HTTP {} {}",
            response.status(),
            response.status_text()
        )))
    }
}
