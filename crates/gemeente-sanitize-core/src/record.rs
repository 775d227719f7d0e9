//! Field rewrites applied to one gemeente record.
//!
//! Records are handled schema-on-read: the document is a generic
//! [`serde_json::Value`] and every rule checks the shape it needs before
//! touching anything, so unexpected content elsewhere in the record survives
//! untouched.

use serde_json::{Map, Value};

use crate::error::{Result, SanitizeError};

pub const BOUNDARIES_KEY: &str = "boundaries";
pub const COORDINATES_KEY: &str = "coordinates";
pub const PARKING_RULES_KEY: &str = "parkingRules";
pub const MOTORCYCLE_KEY: &str = "motorcycleSpecific";
pub const NOTES_KEY: &str = "notes";

/// A record after the defaulting rules ran, with its geometry held apart.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedRecord {
    /// Root object with `boundaries.coordinates` removed (if it was present).
    pub root: Map<String, Value>,
    /// The extracted `boundaries.coordinates` value, in its original structure.
    pub coordinates: Option<Value>,
    pub report: NormalizeReport,
}

/// Which rules actually changed something.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizeReport {
    pub coordinates_extracted: bool,
    pub parking_rules_reset: bool,
    pub motorcycle_reset: bool,
    pub note_defaulted: bool,
}

/// Apply the geometry extraction and the rules/notes defaulting to `doc`.
pub fn normalize(doc: Value, default_note: &str) -> Result<NormalizedRecord> {
    let mut root = match doc {
        Value::Object(root) => root,
        other => {
            return Err(SanitizeError::NotAnObject {
                found: kind_of(&other),
            })
        }
    };

    let coordinates = extract_coordinates(&mut root);
    let mut report = NormalizeReport {
        coordinates_extracted: coordinates.is_some(),
        ..NormalizeReport::default()
    };

    let rules_slot = root
        .entry(PARKING_RULES_KEY)
        .or_insert_with(|| Value::Object(Map::new()));
    report.parking_rules_reset = reset_to_object(rules_slot).is_some();

    if let Value::Object(rules) = rules_slot {
        let motorcycle_slot = rules
            .entry(MOTORCYCLE_KEY)
            .or_insert_with(|| Value::Object(Map::new()));
        if let Some(found) = reset_to_object(motorcycle_slot) {
            tracing::warn!(
                found,
                "replacing non-object {}.{}",
                PARKING_RULES_KEY,
                MOTORCYCLE_KEY
            );
            report.motorcycle_reset = true;
        }
        if let Value::Object(motorcycle) = motorcycle_slot {
            report.note_defaulted = default_notes(motorcycle, default_note);
        }
    }

    Ok(NormalizedRecord {
        root,
        coordinates,
        report,
    })
}

/// Detach `boundaries.coordinates` when `boundaries` is an object that has it.
///
/// The remaining `boundaries` fields keep their relative order.
pub fn extract_coordinates(root: &mut Map<String, Value>) -> Option<Value> {
    match root.get_mut(BOUNDARIES_KEY) {
        Some(Value::Object(boundaries)) => boundaries.shift_remove(COORDINATES_KEY),
        _ => None,
    }
}

/// Set `notes` to `default_note` when it is missing, null, or blank.
///
/// Returns true when the field was written. Non-blank strings and
/// non-string values are left alone.
pub fn default_notes(motorcycle: &mut Map<String, Value>, default_note: &str) -> bool {
    let needs_default = match motorcycle.get(NOTES_KEY) {
        None | Some(Value::Null) => true,
        Some(Value::String(notes)) => is_blank(notes),
        Some(_) => false,
    };
    if needs_default {
        motorcycle.insert(NOTES_KEY.to_string(), Value::String(default_note.to_string()));
    }
    needs_default
}

pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Replace a non-object `slot` with an empty object, returning the kind it held.
fn reset_to_object(slot: &mut Value) -> Option<&'static str> {
    if slot.is_object() {
        return None;
    }
    let found = kind_of(slot);
    *slot = Value::Object(Map::new());
    Some(found)
}

pub(crate) fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
