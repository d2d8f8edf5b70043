//! Upgrade an existing YAML config file in place: add fields introduced by
//! later releases with their default values, never touching fields the user
//! already set.

use super::Config;
use serde_yaml::{Mapping, Value};
use std::fs;
use std::io;
use std::path::Path;

/// Add missing fields to the config file.
/// Returns:
///   Ok(vec![..]) → names of the fields that were added
///   Ok(vec![])   → no change needed
pub fn fill_missing_fields(path: &Path) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    let mut current = parse_mapping(&content, path)?;
    let defaults = default_mapping()?;

    let mut added = Vec::new();
    for (k, v) in defaults {
        if !current.contains_key(&k) {
            if let Some(name) = k.as_str() {
                added.push(name.to_string());
            }
            current.insert(k, v);
        }
    }

    if added.is_empty() {
        return Ok(added);
    }

    let serialized = serde_yaml::to_string(&Value::Mapping(current)).map_err(|e| {
        io::Error::other(format!("Failed to serialize YAML for {:?}: {}", path, e))
    })?;
    fs::write(path, serialized)?;

    Ok(added)
}

fn parse_mapping(content: &str, path: &Path) -> io::Result<Mapping> {
    match serde_yaml::from_str::<Value>(content) {
        Ok(Value::Mapping(m)) => Ok(m),
        Ok(Value::Null) => Ok(Mapping::new()),
        Ok(_) => Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("{:?} is not a YAML mapping", path),
        )),
        Err(e) => Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("Failed to parse {:?}: {}", path, e),
        )),
    }
}

fn default_mapping() -> io::Result<Mapping> {
    match serde_yaml::to_value(Config::default()) {
        Ok(Value::Mapping(m)) => Ok(m),
        Ok(_) => Err(io::Error::other("default config is not a mapping")),
        Err(e) => Err(io::Error::other(e.to_string())),
    }
}
