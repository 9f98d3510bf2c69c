//! Server Request Wrappers
//!
//! Requests the page makes against the todo server, organized by resource.
//! Builders are pure; `send` is the only function that touches the network.

mod todo;
mod list;

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, RequestInit, Response};

use crate::error::{ApiError, ApiResult};

// Re-export all public items
pub use todo::*;
pub use list::*;

/// Characters escaped inside one path segment
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

pub(crate) fn segment(raw: &str) -> String {
    utf8_percent_encode(raw, SEGMENT).to_string()
}

// ========================
// Request Description
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Post,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Post => "POST",
            Method::Delete => "DELETE",
        }
    }
}

/// One HTTP call: method, path relative to the API base, optional JSON body
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<String>,
}

impl ApiRequest {
    pub fn url(&self, api_base: &str) -> String {
        format!("{}{}", api_base, self.path)
    }
}

// ========================
// Transport
// ========================

fn network(err: JsValue) -> ApiError {
    ApiError::Network(format!("{:?}", err))
}

/// Perform the request. Only a completed 2xx response is `Ok`.
pub async fn send(api_base: &str, request: &ApiRequest) -> ApiResult<()> {
    let window = web_sys::window().ok_or(ApiError::NoWindow)?;
    let url = request.url(api_base);

    let init = RequestInit::new();
    init.set_method(request.method.as_str());
    if let Some(body) = &request.body {
        let headers = Headers::new().map_err(network)?;
        headers.set("Content-type", "application/json").map_err(network)?;
        init.set_headers(&headers);
        init.set_body(&JsValue::from_str(body));
    }

    log::debug!("{} {}", request.method.as_str(), url);
    let response = JsFuture::from(window.fetch_with_str_and_init(&url, &init))
        .await
        .map_err(network)?
        .dyn_into::<Response>()
        .map_err(network)?;

    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }
    Ok(())
}
