//! Encoding selection for the two Jamf Pro API generations.
//!
//! The [`ApiGeneration`] of a call is the only switch for its payload format,
//! its content type, its URL prefix, and its authentication scheme.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{Error, ErrorKind, Result};

/// Content type for Classic API payloads.
pub const XML_CONTENT_TYPE: &str = "application/xml";

/// Content type for v1 API payloads.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Mount point of the Classic API.
pub const CLASSIC_MOUNT: &str = "JSSResource";

/// Mount point of the v1 API.
pub const V1_MOUNT: &str = "uapi";

/// Version segment placed after the v1 mount.
pub const V1_VERSION: &str = "v1";

/// Which Jamf Pro API family a call targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiGeneration {
    /// `JSSResource/...`, Basic auth, XML bodies.
    Classic,
    /// `uapi/v1/...`, Bearer auth, JSON bodies.
    V1,
}

impl ApiGeneration {
    /// Payload format used by this generation.
    pub fn format(self) -> WireFormat {
        match self {
            ApiGeneration::Classic => WireFormat::Xml,
            ApiGeneration::V1 => WireFormat::Json,
        }
    }

    /// First path segment under the base URL.
    pub fn mount(self) -> &'static str {
        match self {
            ApiGeneration::Classic => CLASSIC_MOUNT,
            ApiGeneration::V1 => V1_MOUNT,
        }
    }

    /// Version segment following the mount, if the generation has one.
    pub fn version(self) -> Option<&'static str> {
        match self {
            ApiGeneration::Classic => None,
            ApiGeneration::V1 => Some(V1_VERSION),
        }
    }
}

impl std::fmt::Display for ApiGeneration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiGeneration::Classic => f.write_str("classic"),
            ApiGeneration::V1 => f.write_str("v1"),
        }
    }
}

/// Body format on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WireFormat {
    Xml,
    Json,
}

impl WireFormat {
    /// MIME type for `Content-Type` and `Accept`.
    pub fn content_type(self) -> &'static str {
        match self {
            WireFormat::Xml => XML_CONTENT_TYPE,
            WireFormat::Json => JSON_CONTENT_TYPE,
        }
    }

    /// Serialize a value. Absent optional fields are left out.
    pub fn encode<T: Serialize + ?Sized>(self, value: &T) -> Result<Vec<u8>> {
        match self {
            WireFormat::Xml => quick_xml::se::to_string(value)
                .map(String::into_bytes)
                .map_err(|e| {
                    Error::with_source(
                        ErrorKind::Configuration(format!("Payload is not encodable as XML: {}", e)),
                        e,
                    )
                }),
            WireFormat::Json => serde_json::to_vec(value).map_err(|e| {
                Error::with_source(
                    ErrorKind::Configuration(format!("Payload is not encodable as JSON: {}", e)),
                    e,
                )
            }),
        }
    }

    /// Deserialize a body into `T`.
    pub fn decode<T: DeserializeOwned>(self, bytes: &[u8]) -> Result<T> {
        match self {
            WireFormat::Xml => {
                if let Some(root) = expected_root::<T>() {
                    check_xml_root(bytes, root)?;
                }
                let text = std::str::from_utf8(bytes).map_err(Error::protocol)?;
                quick_xml::de::from_str(text).map_err(Error::protocol)
            }
            WireFormat::Json => serde_json::from_slice(bytes).map_err(Error::protocol),
        }
    }

    /// Check that a body is well-formed without binding it to a type.
    pub fn validate(self, bytes: &[u8]) -> Result<()> {
        match self {
            WireFormat::Xml => validate_xml(bytes),
            WireFormat::Json => serde_json::from_slice::<serde::de::IgnoredAny>(bytes)
                .map(|_| ())
                .map_err(Error::protocol),
        }
    }
}

fn validate_xml(bytes: &[u8]) -> Result<()> {
    use quick_xml::events::Event;

    let mut reader = quick_xml::Reader::from_reader(bytes);
    let mut buf = Vec::new();
    let mut depth: usize = 0;
    let mut saw_root = false;

    loop {
        match reader.read_event_into(&mut buf).map_err(Error::protocol)? {
            Event::Start(_) => {
                depth += 1;
                saw_root = true;
            }
            Event::End(_) => depth = depth.saturating_sub(1),
            Event::Empty(_) => saw_root = true,
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    if depth != 0 {
        return Err(Error::new(ErrorKind::Protocol(format!(
            "XML document ended with {} unclosed element(s)",
            depth
        ))));
    }
    if !saw_root {
        return Err(Error::new(ErrorKind::Protocol(
            "XML document has no root element".to_string(),
        )));
    }
    Ok(())
}

/// The serde deserializer for XML ignores the root element name, so the
/// document root is matched against the schema's struct name first.
fn check_xml_root(bytes: &[u8], expected: &str) -> Result<()> {
    use quick_xml::events::Event;

    let mut reader = quick_xml::Reader::from_reader(bytes);
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf).map_err(Error::protocol)? {
            Event::Start(e) | Event::Empty(e) => {
                let found = e.local_name();
                if found.as_ref() == expected.as_bytes() {
                    return Ok(());
                }
                return Err(Error::new(ErrorKind::Protocol(format!(
                    "Expected <{}> document, found <{}>",
                    expected,
                    String::from_utf8_lossy(found.as_ref())
                ))));
            }
            Event::Eof => {
                return Err(Error::new(ErrorKind::Protocol(
                    "XML document has no root element".to_string(),
                )))
            }
            _ => {}
        }
        buf.clear();
    }
}

/// Struct name a type hands to its deserializer (the `#[serde(rename)]`
/// value when present). `None` for types that are not plain structs.
fn expected_root<T: DeserializeOwned>() -> Option<&'static str> {
    match <T as serde::Deserialize>::deserialize(RootName) {
        Err(RootNameSignal::Struct(name)) => Some(name),
        _ => None,
    }
}

/// Deserializer that answers every request with an error, recording the
/// struct name when asked for a struct.
struct RootName;

#[derive(Debug)]
enum RootNameSignal {
    Struct(&'static str),
    Other,
}

impl std::fmt::Display for RootNameSignal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RootNameSignal::Struct(name) => write!(f, "struct {}", name),
            RootNameSignal::Other => f.write_str("not a struct"),
        }
    }
}

impl std::error::Error for RootNameSignal {}

impl serde::de::Error for RootNameSignal {
    fn custom<M: std::fmt::Display>(_msg: M) -> Self {
        RootNameSignal::Other
    }
}

impl<'de> serde::Deserializer<'de> for RootName {
    type Error = RootNameSignal;

    fn deserialize_any<V: serde::de::Visitor<'de>>(
        self,
        _visitor: V,
    ) -> std::result::Result<V::Value, Self::Error> {
        Err(RootNameSignal::Other)
    }

    fn deserialize_struct<V: serde::de::Visitor<'de>>(
        self,
        name: &'static str,
        _fields: &'static [&'static str],
        _visitor: V,
    ) -> std::result::Result<V::Value, Self::Error> {
        Err(RootNameSignal::Struct(name))
    }

    serde::forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf option unit unit_struct newtype_struct seq tuple
        tuple_struct map enum identifier ignored_any
    }
}

/// Result of [`select_format`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatSelection {
    pub body_format: WireFormat,
    pub content_type: &'static str,
}

/// Pick the body format and content type for a generation.
pub fn select_format(generation: ApiGeneration) -> FormatSelection {
    let body_format = generation.format();
    FormatSelection {
        body_format,
        content_type: body_format.content_type(),
    }
}

/// A request body schema bound to the API generation it belongs to.
///
/// ```rust,ignore
/// #[derive(Serialize)]
/// #[serde(rename = "policy")]
/// struct Policy { /* ... */ }
///
/// impl Payload for Policy {
///     const GENERATION: ApiGeneration = ApiGeneration::Classic;
/// }
/// ```
pub trait Payload: Serialize {
    /// Generation whose endpoints accept this schema.
    const GENERATION: ApiGeneration;
}
