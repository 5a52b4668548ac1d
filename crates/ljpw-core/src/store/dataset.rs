//! Dataset document parsing.
//!
//! Expected shape:
//!
//! ```json
//! {
//!   "domains": {
//!     "<domain>": {
//!       "concepts": {
//!         "<key>": { "name": "...", "definition": "...", "coordinates": [L, J, P, W] }
//!       }
//!     }
//!   }
//! }
//! ```
//!
//! Document order is preserved (serde_json `preserve_order`), which defines
//! the store's insertion order. Unknown fields are ignored. `definition` may
//! be missing or null.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::LoadError;
use crate::types::{normalize_key, Concept, Coordinate, AXIS_COUNT};

/// Per-concept record as it appears in the dataset.
#[derive(Debug, Deserialize)]
struct RawConcept {
    name: Option<String>,
    #[serde(default)]
    definition: Option<String>,
    #[serde(default)]
    coordinates: Option<Value>,
}

/// Parse a dataset document into concepts in document order.
pub(crate) fn parse_dataset(json: &str) -> Result<Vec<Concept>, LoadError> {
    let root: Value = serde_json::from_str(json)?;
    parse_value(&root)
}

/// Parse an already-decoded dataset document.
pub(crate) fn parse_value(root: &Value) -> Result<Vec<Concept>, LoadError> {
    let root = root
        .as_object()
        .ok_or_else(|| LoadError::structure("$", "dataset root must be an object"))?;

    let domains = root
        .get("domains")
        .ok_or_else(|| LoadError::structure("$", "missing 'domains'"))?
        .as_object()
        .ok_or_else(|| LoadError::structure("domains", "'domains' must be an object"))?;

    let mut concepts = Vec::new();
    for (domain, domain_value) in domains {
        let location = format!("domains.{}", domain);
        let entries = domain_concepts(&location, domain_value)?;

        for (key, concept_value) in entries {
            concepts.push(parse_concept(domain, &location, key, concept_value)?);
        }
    }

    Ok(concepts)
}

fn domain_concepts<'a>(
    location: &str,
    domain_value: &'a Value,
) -> Result<&'a Map<String, Value>, LoadError> {
    let domain = domain_value
        .as_object()
        .ok_or_else(|| LoadError::structure(location, "domain must be an object"))?;

    domain
        .get("concepts")
        .ok_or_else(|| LoadError::structure(location, "missing 'concepts'"))?
        .as_object()
        .ok_or_else(|| LoadError::structure(location, "'concepts' must be an object"))
}

fn parse_concept(
    domain: &str,
    domain_location: &str,
    key: &str,
    value: &Value,
) -> Result<Concept, LoadError> {
    let location = format!("{}.concepts.{}", domain_location, key);

    let normalized = normalize_key(key);
    if normalized.is_empty() {
        return Err(LoadError::structure(location, "concept key is empty"));
    }

    if !value.is_object() {
        return Err(LoadError::structure(location, "concept must be an object"));
    }

    let raw: RawConcept = serde_json::from_value(value.clone())
        .map_err(|e| LoadError::structure(location.as_str(), e.to_string()))?;

    let name = raw
        .name
        .ok_or_else(|| LoadError::structure(location.as_str(), "missing 'name'"))?;

    let coordinate = parse_coordinates(&normalized, raw.coordinates.as_ref())?;

    Ok(Concept {
        key: normalized,
        name,
        coordinate,
        definition: raw.definition.unwrap_or_default(),
        domain: domain.to_string(),
    })
}

fn parse_coordinates(concept: &str, value: Option<&Value>) -> Result<Coordinate, LoadError> {
    let value = value.ok_or_else(|| LoadError::invalid_coordinate(concept, "missing 'coordinates'"))?;

    let items = value
        .as_array()
        .ok_or_else(|| LoadError::invalid_coordinate(concept, "'coordinates' must be an array"))?;

    if items.len() != AXIS_COUNT {
        return Err(LoadError::invalid_coordinate(
            concept,
            format!("expected {} values, got {}", AXIS_COUNT, items.len()),
        ));
    }

    let mut values = [0.0; AXIS_COUNT];
    for (i, item) in items.iter().enumerate() {
        let v = item.as_f64().ok_or_else(|| {
            LoadError::invalid_coordinate(concept, format!("value at index {} is not a number", i))
        })?;
        values[i] = v;
    }

    Coordinate::from_array(values)
        .map_err(|e| LoadError::invalid_coordinate(concept, e.to_string()))
}
