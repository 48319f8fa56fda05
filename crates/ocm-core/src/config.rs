//! Registering the context file in `opencode.json`.
//!
//! The document is handled as an ordered `serde_json::Map`: only
//! `instructions` and `$schema` are touched, every other key is written back
//! exactly where it was.

use crate::error::Result;
use crate::init::Outcome;
use crate::io;
use crate::paths::{self, CONTEXT_INSTRUCTION_PATH, SCHEMA_URL};
use crate::prompt::Console;
use serde_json::{Map, Value};
use std::path::Path;

pub const INSTRUCTIONS_KEY: &str = "instructions";
pub const SCHEMA_KEY: &str = "$schema";

/// What was found on disk.
#[derive(Debug)]
pub enum Loaded {
    Absent,
    Valid(Map<String, Value>),
    /// Present but not a JSON object; carries the reason.
    Invalid(String),
}

pub fn load(path: &Path) -> Result<Loaded> {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Loaded::Absent),
        Err(e) if e.kind() == std::io::ErrorKind::InvalidData => {
            return Ok(Loaded::Invalid(e.to_string()))
        }
        Err(e) => return Err(e.into()),
    };
    Ok(match serde_json::from_str::<Value>(&content) {
        Ok(Value::Object(map)) => Loaded::Valid(map),
        Ok(_) => Loaded::Invalid("top-level value is not an object".to_string()),
        Err(e) => Loaded::Invalid(e.to_string()),
    })
}

/// Add the context instruction (and a default `$schema`) to `doc`.
///
/// Returns `false` and leaves `doc` unchanged if the instruction is already
/// registered. A missing or non-array `instructions` value becomes `[]` first.
pub fn apply(doc: &mut Map<String, Value>) -> bool {
    if let Some(Value::Array(list)) = doc.get(INSTRUCTIONS_KEY) {
        if list
            .iter()
            .any(|v| v.as_str() == Some(CONTEXT_INSTRUCTION_PATH))
        {
            return false;
        }
    }

    let entry = Value::String(CONTEXT_INSTRUCTION_PATH.to_string());
    match doc.get_mut(INSTRUCTIONS_KEY) {
        Some(Value::Array(list)) => list.push(entry),
        // Replacing an existing key keeps its position in the map
        _ => {
            doc.insert(INSTRUCTIONS_KEY.to_string(), Value::Array(vec![entry]));
        }
    }

    let needs_schema = match doc.get(SCHEMA_KEY) {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(_) => false,
    };
    if needs_schema {
        doc.insert(SCHEMA_KEY.to_string(), Value::String(SCHEMA_URL.to_string()));
    }
    true
}

/// Two-space pretty JSON with a single trailing newline.
pub fn render(doc: &Map<String, Value>) -> Result<String> {
    let mut out = serde_json::to_string_pretty(doc)?;
    out.push('\n');
    Ok(out)
}

/// Merge the context instruction into `<target>/opencode.json`.
///
/// An unparsable file is reported through `console.warn`; it is replaced by
/// a fresh document only with `force` or an explicit yes. Nothing is written
/// when the instruction is already present.
pub fn merge_config(target: &Path, force: bool, console: &mut dyn Console) -> Result<Outcome> {
    let path = paths::config_path(target);
    let existed = path.exists();

    let mut doc = match load(&path)? {
        Loaded::Absent => Map::new(),
        Loaded::Valid(map) => map,
        Loaded::Invalid(reason) => {
            console.warn(&format!("Error parsing {}: {reason}", path.display()));
            if !force && !console.confirm("Create a new opencode.json? (y/N) ")? {
                tracing::debug!(path = %path.display(), "kept unparsable config");
                return Ok(Outcome::Skipped);
            }
            Map::new()
        }
    };

    if !apply(&mut doc) {
        tracing::debug!(path = %path.display(), "instruction already registered");
        return Ok(Outcome::AlreadyConfigured);
    }

    io::atomic_write(&path, render(&doc)?.as_bytes())?;
    tracing::debug!(path = %path.display(), existed, "wrote config");

    Ok(if existed {
        Outcome::Updated
    } else {
        Outcome::Created
    })
}
