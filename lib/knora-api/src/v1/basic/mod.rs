//! Shapes shared by every v1 response: the status envelope, binary
//! representation locations and the typed value payloads.

use serde::{Deserialize, Serialize};
use shared_types::ResourceIri;
use strum::Display;


/// Envelope common to all v1 responses.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct BasicResponse {
    /// Status code of the request, `0` on success.
    pub status: i32,
}

impl BasicResponse {
    pub fn is_ok(&self) -> bool {
        self.status == 0
    }
}

/// A binary representation (digital file) attached to a resource.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LocationItem {
    /// Duration in media units, `0` for still images.
    pub duration: i64,
    /// Width in pixels.
    pub nx: i64,
    /// Height in pixels.
    pub ny: i64,
    pub path: String,
    pub format_name: String,
    /// Original file name at upload time.
    pub origname: String,
    pub protocol: Protocol,
}

/// How the file behind a location is reachable.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Protocol {
    File,
    Url,
}

/// A text value with standoff markup.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct RichtextValue {
    pub utf8str: String,
    /// Standoff attributes, serialized as a JSON string.
    pub textattr: String,
    /// Resources referred to from within the text.
    pub resource_reference: Vec<ResourceIri>,
}

/// A date period in the given calendar.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct DateValue {
    pub dateval1: String,
    pub dateval2: String,
    pub calendar: String,
}

/// A time interval in media units.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IntervalValue {
    pub timeval1: f64,
    pub timeval2: f64,
}

/// Typed payload of a single value object.
///
/// Variant order is significant for untagged resolution: object variants
/// come before scalars, `Integer` before `Decimal`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum KnoraValue {
    Richtext(RichtextValue),
    Date(DateValue),
    Interval(IntervalValue),
    Boolean(bool),
    Integer(i64),
    Decimal(f64),
    Text(String),
}
