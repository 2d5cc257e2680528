//! Transport seam between typed API calls and the browser fetch stack.
//!
//! DESIGN
//! ======
//! `Backend` takes a fully described `ApiRequest` and hands back the decoded
//! JSON body. The browser implementation (`HttpBackend`) wraps `gloo-net`;
//! tests substitute a scripted backend that records every request, which is
//! how the "no network call on invalid input" guarantees are checked.
//!
//! Server-side (SSR) builds have no fetch stack, so `HttpBackend` reports a
//! network failure there. Session probes only run after hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "backend_test.rs"]
mod backend_test;

use serde_json::Value;

use super::api::ApiError;
use crate::config::ClientConfig;

/// HTTP verbs used by the backend API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// A browser file picked from an `<input type="file">`.
///
/// Only the metadata is available natively; the `File` handle itself exists
/// in hydrate builds.
#[derive(Clone, Debug)]
pub struct Attachment {
    pub name: String,
    pub size: u64,
    pub content_type: String,
    #[cfg(feature = "hydrate")]
    pub file: web_sys::File,
}

impl PartialEq for Attachment {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.size == other.size && self.content_type == other.content_type
    }
}

impl Attachment {
    #[cfg(feature = "hydrate")]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_file(file: web_sys::File) -> Self {
        Self { name: file.name(), size: file.size() as u64, content_type: file.type_(), file }
    }

    /// Metadata-only attachment for non-browser builds.
    #[cfg(not(feature = "hydrate"))]
    pub fn detached(name: &str, size: u64, content_type: &str) -> Self {
        Self { name: name.to_owned(), size, content_type: content_type.to_owned() }
    }

    pub fn is_image(&self) -> bool {
        self.content_type.starts_with("image/")
    }

    pub fn is_video(&self) -> bool {
        self.content_type.starts_with("video/")
    }
}

/// One field of a multipart body.
#[derive(Clone, Debug, PartialEq)]
pub enum FormPart {
    Text(String),
    File(Attachment),
}

/// Ordered multipart form, converted to `FormData` at send time.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MultipartForm {
    pub parts: Vec<(String, FormPart)>,
}

impl MultipartForm {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn text(mut self, name: &str, value: impl Into<String>) -> Self {
        self.parts.push((name.to_owned(), FormPart::Text(value.into())));
        self
    }

    #[must_use]
    pub fn file(mut self, name: &str, attachment: Attachment) -> Self {
        self.parts.push((name.to_owned(), FormPart::File(attachment)));
        self
    }

    /// Text value of the first field called `name`.
    pub fn text_value(&self, name: &str) -> Option<&str> {
        self.parts.iter().find_map(|(key, part)| match part {
            FormPart::Text(v) if key == name => Some(v.as_str()),
            _ => None,
        })
    }

    /// Attachment of the first file field called `name`.
    pub fn file_value(&self, name: &str) -> Option<&Attachment> {
        self.parts.iter().find_map(|(key, part)| match part {
            FormPart::File(a) if key == name => Some(a),
            _ => None,
        })
    }

    #[cfg(feature = "hydrate")]
    fn into_form_data(self) -> Result<web_sys::FormData, ApiError> {
        let js_err = |e: wasm_bindgen::JsValue| ApiError::Network(format!("{e:?}"));
        let data = web_sys::FormData::new().map_err(js_err)?;
        for (name, part) in self.parts {
            match part {
                FormPart::Text(value) => data.append_with_str(&name, &value).map_err(js_err)?,
                FormPart::File(attachment) => data
                    .append_with_blob_and_filename(&name, &attachment.file, &attachment.name)
                    .map_err(js_err)?,
            }
        }
        Ok(data)
    }
}

/// Request payload variants.
#[derive(Clone, Debug, PartialEq)]
pub enum RequestBody {
    Empty,
    Json(Value),
    Multipart(MultipartForm),
}

/// A complete backend request: verb, path (with query) and body.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub body: RequestBody,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self { method: Method::Get, path: path.into(), body: RequestBody::Empty }
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self { method: Method::Post, path: path.into(), body: RequestBody::Empty }
    }

    pub fn post_json(path: impl Into<String>, body: Value) -> Self {
        Self { method: Method::Post, path: path.into(), body: RequestBody::Json(body) }
    }

    pub fn put_json(path: impl Into<String>, body: Value) -> Self {
        Self { method: Method::Put, path: path.into(), body: RequestBody::Json(body) }
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self { method: Method::Delete, path: path.into(), body: RequestBody::Empty }
    }

    pub fn multipart(path: impl Into<String>, form: MultipartForm) -> Self {
        Self { method: Method::Post, path: path.into(), body: RequestBody::Multipart(form) }
    }

    /// Path without the query string.
    pub fn route(&self) -> &str {
        self.path.split_once('?').map_or(self.path.as_str(), |(route, _)| route)
    }
}

/// Something that can execute an `ApiRequest` and return its JSON body.
///
/// The returned value is the raw envelope; `api::decode` interprets the
/// `success`/`message` convention.
#[allow(async_fn_in_trait)]
pub trait Backend: Clone + 'static {
    async fn send(&self, request: ApiRequest) -> Result<Value, ApiError>;
}

/// Browser fetch backend carrying the configured base URL and credential mode.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpBackend {
    config: ClientConfig,
}

impl HttpBackend {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }
}

impl Backend for HttpBackend {
    async fn send(&self, request: ApiRequest) -> Result<Value, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::Request;

            let network = |e: gloo_net::Error| ApiError::Network(e.to_string());
            let url = self.config.endpoint(&request.path);
            let builder = match request.method {
                Method::Get => Request::get(&url),
                Method::Post => Request::post(&url),
                Method::Put => Request::put(&url),
                Method::Delete => Request::delete(&url),
            }
            .credentials(self.config.credentials.request_credentials());

            let prepared = match request.body {
                RequestBody::Empty => builder.build().map_err(network)?,
                RequestBody::Json(body) => builder.json(&body).map_err(network)?,
                RequestBody::Multipart(form) => builder.body(form.into_form_data()?).map_err(network)?,
            };
            let resp = prepared.send().await.map_err(network)?;
            // Rejections arrive as JSON with non-2xx status, so the body is
            // decoded regardless of `resp.ok()`.
            resp.json::<Value>().await.map_err(network)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(ApiError::Network("not available on server".to_owned()))
        }
    }
}
