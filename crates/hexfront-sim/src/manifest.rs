//! Unit manifest loading.
//!
//! The manifest is a JSON document holding either a single unit record
//! or an array of them:
//! `{ "col": 0, "row": 0, "team": "blue", "speed": 1.5 }`.
//!
//! Parsing walks `serde_json::Value` by hand so the boundary reports
//! the exact offending field (`MissingField("speed")`,
//! `InvalidTeam("green")`, …) instead of a generic deserializer
//! message. All manifest errors are fatal at startup.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde_json::Value;

use hexfront_core::enums::Team;
use hexfront_core::errors::ManifestError;

/// One validated manifest record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitRecord {
    pub col: i32,
    pub row: i32,
    pub team: Team,
    pub speed: f64,
}

/// Read and parse a manifest file.
pub fn load_units(path: &Path) -> Result<Vec<UnitRecord>, ManifestError> {
    parse_units(&fs::read_to_string(path)?)
}

/// Parse a manifest document: a single record or a sequence of them.
pub fn parse_units(json: &str) -> Result<Vec<UnitRecord>, ManifestError> {
    let doc: Value = serde_json::from_str(json)?;
    match doc {
        Value::Array(records) => records.iter().map(parse_record).collect(),
        record @ Value::Object(_) => Ok(vec![parse_record(&record)?]),
        _ => Err(ManifestError::MalformedRecord),
    }
}

fn parse_record(record: &Value) -> Result<UnitRecord, ManifestError> {
    let record = record.as_object().ok_or(ManifestError::MalformedRecord)?;

    let col = int_field(record, "col")?;
    let row = int_field(record, "row")?;

    let team = record
        .get("team")
        .ok_or(ManifestError::MissingField("team"))?
        .as_str()
        .ok_or(ManifestError::InvalidField("team"))?;
    let team = Team::from_str(team)?;

    let speed = record
        .get("speed")
        .ok_or(ManifestError::MissingField("speed"))?
        .as_f64()
        .ok_or(ManifestError::InvalidField("speed"))?;
    if !speed.is_finite() || speed <= 0.0 {
        return Err(ManifestError::InvalidSpeed(speed));
    }

    Ok(UnitRecord {
        col,
        row,
        team,
        speed,
    })
}

fn int_field(
    record: &serde_json::Map<String, Value>,
    name: &'static str,
) -> Result<i32, ManifestError> {
    record
        .get(name)
        .ok_or(ManifestError::MissingField(name))?
        .as_i64()
        .and_then(|v| i32::try_from(v).ok())
        .ok_or(ManifestError::InvalidField(name))
}
