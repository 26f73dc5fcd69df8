//! Buffered HTTP responses and body decoding.

use bytes::Bytes;
use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;

use crate::encoding::ApiGeneration;
use crate::error::Result;

/// A successful response, fully read into memory.
///
/// The connection is released before this value exists, so holding a
/// `Response` never pins a pooled connection.
#[derive(Debug, Clone)]
pub struct Response {
    status: u16,
    headers: HeaderMap,
    body: Bytes,
}

impl Response {
    pub(crate) fn new(status: u16, headers: HeaderMap, body: Bytes) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// Get the HTTP status code.
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Returns true if the response status is successful (2xx).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Get a header value.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name)?.to_str().ok()
    }

    /// Get the Content-Type header.
    pub fn content_type(&self) -> Option<&str> {
        self.header("content-type")
    }

    /// Raw body bytes.
    pub fn bytes(&self) -> &Bytes {
        &self.body
    }

    /// Body as text, with invalid UTF-8 replaced.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Returns true if the body is empty or only whitespace.
    pub fn is_blank(&self) -> bool {
        self.body.iter().all(u8::is_ascii_whitespace)
    }

    /// Decode the body in the generation's format.
    pub fn decode<T: DeserializeOwned>(&self, generation: ApiGeneration) -> Result<T> {
        generation.format().decode(&self.body)
    }

    /// Accept the response without binding the body to a type.
    ///
    /// A blank body succeeds. Anything else must be well-formed in the
    /// generation's format.
    pub fn discard(&self, generation: ApiGeneration) -> Result<()> {
        if self.is_blank() {
            return Ok(());
        }
        generation.format().validate(&self.body)
    }
}
