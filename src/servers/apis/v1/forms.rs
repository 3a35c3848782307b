//! Field types shared by the request bodies of all the contexts.
use serde::Deserialize;

use crate::core::validation::FieldErrors;

pub const INVALID_INTEGER: &str = "A valid integer is required.";

/// An integer field. Clients may send it as a JSON number or as a string
/// with the number, like `"10"`.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum Integer {
    Number(i64),
    Text(String),
    Other(serde_json::Value),
}

impl Integer {
    #[must_use]
    pub fn value(&self) -> Option<i64> {
        match self {
            Integer::Number(number) => Some(*number),
            Integer::Text(text) => text.trim().parse::<i64>().ok(),
            Integer::Other(_) => None,
        }
    }
}

/// It reads an optional integer field. A value that is not an integer is
/// reported in `errors` with `message`.
pub fn integer(errors: &mut FieldErrors, field: &str, value: Option<&Integer>, message: &str) -> Option<i64> {
    let value = value?;

    match value.value() {
        Some(number) => Some(number),
        None => {
            errors.add(field, message);
            None
        }
    }
}

/// It reads a list of primary keys. Entries that are not integers are
/// reported in `errors`.
pub fn primary_keys(errors: &mut FieldErrors, field: &str, values: Option<&Vec<Integer>>) -> Option<Vec<i64>> {
    let values = values?;

    let mut keys = Vec::with_capacity(values.len());

    for value in values {
        match value.value() {
            Some(key) => keys.push(key),
            None => errors.add(field, format!("Incorrect type. Expected pk value, received {}.", type_name(value))),
        }
    }

    Some(keys)
}

fn type_name(value: &Integer) -> &'static str {
    match value {
        Integer::Number(_) => "int",
        Integer::Text(_) => "str",
        Integer::Other(serde_json::Value::Bool(_)) => "bool",
        Integer::Other(serde_json::Value::Number(_)) => "float",
        Integer::Other(serde_json::Value::Array(_)) => "list",
        Integer::Other(serde_json::Value::Object(_)) => "dict",
        Integer::Other(_) => "NoneType",
    }
}

/// It parses a boolean query param. `1` and `true` mean `true`, `0` and
/// `false` mean `false`. Other values are ignored.
#[must_use]
pub fn flag(value: Option<&str>) -> Option<bool> {
    match value?.trim().to_lowercase().as_str() {
        "1" | "true" => Some(true),
        "0" | "false" => Some(false),
        _ => None,
    }
}

/// It parses a positive integer query param. Other values are ignored.
#[must_use]
pub fn positive(value: Option<&str>) -> Option<u32> {
    value?.trim().parse::<u32>().ok().filter(|number| *number > 0)
}
