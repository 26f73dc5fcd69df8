//! Outbound request composition.

use bytes::Bytes;
use url::Url;

use crate::encoding::{select_format, ApiGeneration, Payload};
use crate::error::{Error, Result};
use crate::query::QueryParameters;

/// HTTP request method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl RequestMethod {
    /// Convert to reqwest::Method.
    pub fn to_reqwest(&self) -> reqwest::Method {
        match self {
            RequestMethod::Get => reqwest::Method::GET,
            RequestMethod::Post => reqwest::Method::POST,
            RequestMethod::Put => reqwest::Method::PUT,
            RequestMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

/// Credential attached to a single request.
#[derive(Clone, PartialEq, Eq)]
pub enum Authorization {
    /// Base64 `username:password`.
    Basic(String),
    /// Short-lived token from the token endpoint.
    Bearer(String),
}

impl Authorization {
    /// Value for the `Authorization` header.
    pub fn header_value(&self) -> String {
        match self {
            Authorization::Basic(encoded) => format!("Basic {}", encoded),
            Authorization::Bearer(token) => format!("Bearer {}", token),
        }
    }

    pub fn scheme(&self) -> &'static str {
        match self {
            Authorization::Basic(_) => "Basic",
            Authorization::Bearer(_) => "Bearer",
        }
    }
}

impl std::fmt::Debug for Authorization {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple(self.scheme()).field(&"[REDACTED]").finish()
    }
}

/// Encoded request body with its content type.
#[derive(Debug, Clone)]
pub struct RequestBody {
    pub bytes: Bytes,
    pub content_type: &'static str,
}

/// Builder for a [`RequestSpec`].
#[derive(Debug)]
pub struct RequestBuilder {
    generation: ApiGeneration,
    method: RequestMethod,
    versioned: bool,
    segments: Vec<String>,
    query: Vec<(&'static str, String)>,
    authorization: Option<Authorization>,
    body: Option<RequestBody>,
}

impl RequestBuilder {
    /// Create a new request builder.
    pub fn new(generation: ApiGeneration, method: RequestMethod) -> Self {
        Self {
            generation,
            method,
            versioned: true,
            segments: Vec::new(),
            query: Vec::new(),
            authorization: None,
            body: None,
        }
    }

    /// Skip the generation's version segment (the token endpoint lives at
    /// `uapi/auth/tokens`).
    pub fn unversioned(mut self) -> Self {
        self.versioned = false;
        self
    }

    /// Append a path segment. It is percent-encoded as a single segment.
    pub fn segment(mut self, segment: impl Into<String>) -> Self {
        self.segments.push(segment.into());
        self
    }

    /// Append several path segments.
    pub fn segments<I, S>(mut self, segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.segments.extend(segments.into_iter().map(Into::into));
        self
    }

    /// Attach query parameters using the sparse encoding.
    pub fn query(mut self, query: &QueryParameters) -> Self {
        self.query.extend(query.to_pairs());
        self
    }

    /// Set the credential for this request.
    pub fn authorization(mut self, authorization: Authorization) -> Self {
        self.authorization = Some(authorization);
        self
    }

    /// Encode a body in the generation's format.
    ///
    /// Fails with a configuration error when the schema belongs to the other
    /// generation.
    pub fn body<P: Payload>(mut self, payload: &P) -> Result<Self> {
        if P::GENERATION != self.generation {
            return Err(Error::configuration(format!(
                "{} payload cannot be sent to the {} API",
                P::GENERATION,
                self.generation
            )));
        }

        let selection = select_format(self.generation);
        let bytes = selection.body_format.encode(payload)?;
        self.body = Some(RequestBody {
            bytes: Bytes::from(bytes),
            content_type: selection.content_type,
        });
        Ok(self)
    }

    /// Resolve the full URL against `base_url` and freeze the request.
    pub fn build(self, base_url: &str) -> Result<RequestSpec> {
        let authorization = self.authorization.ok_or_else(|| {
            Error::configuration(format!("No credential available for the {} API", self.generation))
        })?;

        let mut url = parse_base_url(base_url)?;
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|_| Error::configuration(format!("Base URL cannot carry a path: {}", base_url)))?;
            path.pop_if_empty();
            path.push(self.generation.mount());
            if self.versioned {
                if let Some(version) = self.generation.version() {
                    path.push(version);
                }
            }
            for segment in &self.segments {
                path.push(segment);
            }
        }

        if !self.query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (name, value) in &self.query {
                pairs.append_pair(name, value);
            }
        }

        Ok(RequestSpec {
            generation: self.generation,
            method: self.method,
            url,
            accept: select_format(self.generation).content_type,
            authorization,
            body: self.body,
        })
    }
}

fn parse_base_url(base_url: &str) -> Result<Url> {
    let trimmed = base_url.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(Error::configuration("Base URL is empty"));
    }

    let mut url = Url::parse(trimmed)?;
    url.set_query(None);
    url.set_fragment(None);
    Ok(url)
}

/// A fully composed request. Immutable once built.
#[derive(Debug, Clone)]
pub struct RequestSpec {
    generation: ApiGeneration,
    method: RequestMethod,
    url: Url,
    accept: &'static str,
    authorization: Authorization,
    body: Option<RequestBody>,
}

impl RequestSpec {
    pub fn generation(&self) -> ApiGeneration {
        self.generation
    }

    pub fn method(&self) -> RequestMethod {
        self.method
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Value of the `Accept` header.
    pub fn accept(&self) -> &'static str {
        self.accept
    }

    pub fn authorization(&self) -> &Authorization {
        &self.authorization
    }

    pub fn body(&self) -> Option<&RequestBody> {
        self.body.as_ref()
    }

    /// Value of the `Content-Type` header; `None` for bodiless requests.
    pub fn content_type(&self) -> Option<&'static str> {
        self.body.as_ref().map(|b| b.content_type)
    }
}
