//! Indented rendering with a compact geometry field.
//!
//! Every object is written with a 4-space indent except the
//! `boundaries.coordinates` payload, which is rendered compactly up front and
//! emitted as a raw fragment so a polygon stays on one line. The fragment is
//! always the first field of `boundaries`.

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::ser::PrettyFormatter;
use serde_json::value::RawValue;
use serde_json::{Map, Value};

use crate::error::{Result, SanitizeError};
use crate::record::{NormalizedRecord, BOUNDARIES_KEY, COORDINATES_KEY};

pub const INDENT: &[u8] = b"    ";

/// Render a normalized record to its on-disk text (no trailing newline).
pub fn render(record: &NormalizedRecord) -> Result<String> {
    let compact = record.coordinates.as_ref().map(compact_fragment).transpose()?;
    render_document(&record.root, compact.as_deref())
}

/// Render `value` with no whitespace between tokens.
pub fn compact_fragment(value: &Value) -> Result<Box<RawValue>> {
    let text = serde_json::to_string(value)?;
    Ok(RawValue::from_string(text)?)
}

fn render_document(root: &Map<String, Value>, coordinates: Option<&RawValue>) -> Result<String> {
    let mut out = Vec::with_capacity(4096);
    let mut ser = serde_json::Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(INDENT));
    DocumentView { root, coordinates }.serialize(&mut ser)?;
    String::from_utf8(out).map_err(|e| SanitizeError::Render {
        message: e.to_string(),
    })
}

struct DocumentView<'a> {
    root: &'a Map<String, Value>,
    coordinates: Option<&'a RawValue>,
}

impl Serialize for DocumentView<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.root.len()))?;
        for (key, value) in self.root {
            match (key.as_str(), value, self.coordinates) {
                (BOUNDARIES_KEY, Value::Object(fields), Some(coordinates)) => {
                    map.serialize_entry(key, &BoundariesView { coordinates, fields })?;
                }
                _ => map.serialize_entry(key, value)?,
            }
        }
        map.end()
    }
}

struct BoundariesView<'a> {
    coordinates: &'a RawValue,
    fields: &'a Map<String, Value>,
}

impl Serialize for BoundariesView<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len() + 1))?;
        map.serialize_entry(COORDINATES_KEY, self.coordinates)?;
        for (key, value) in self.fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
