//! Parses extracted JSON text and applies the shallow shape check.

use crate::models::GiftIdea;
use crate::{Error, Result};
use serde_json::Value;

const REQUIRED_FIELDS: [&str; 4] = ["name", "description", "reason", "priceRange"];

/// Parse a candidate JSON array into gift ideas.
///
/// The shape check is intentionally shallow: the array must be non-empty and
/// the first element must carry non-empty `name`, `description`, `reason`,
/// and `priceRange`. Elements beyond index 0 and the optional
/// `whereToBuy`/`recommendedBrands` lists are not inspected.
pub fn parse_gift_ideas(candidate: &str) -> Result<Vec<GiftIdea>> {
    let value: Value = serde_json::from_str(candidate)?;

    let items = value
        .as_array()
        .filter(|items| !items.is_empty())
        .ok_or_else(|| Error::InvalidFormat("expected a non-empty JSON array".to_string()))?;

    let first = &items[0];
    for field in REQUIRED_FIELDS {
        let present = first
            .get(field)
            .and_then(Value::as_str)
            .is_some_and(|s| !s.trim().is_empty());
        if !present {
            return Err(Error::MissingField(field));
        }
    }

    serde_json::from_value(value).map_err(|e| Error::InvalidFormat(e.to_string()))
}
