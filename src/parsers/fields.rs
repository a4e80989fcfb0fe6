//! Loose field access for heterogeneous SBOM JSON.
//!
//! SBOM producers disagree on field names and routinely emit empty strings
//! or `null` where a value is missing. Every lookup here treats empty
//! strings, `null` and values of the wrong type as absent, so extraction
//! code can express precedence tables as plain `first_str(obj, &[...])`
//! calls.

use serde_json::{Map, Value};

pub(crate) type Object = Map<String, Value>;

/// Non-empty string value of a field
pub(crate) fn str_field<'a>(obj: &'a Object, key: &str) -> Option<&'a str> {
    obj.get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

/// First non-empty string among `keys`, in precedence order
pub(crate) fn first_str<'a>(obj: &'a Object, keys: &[&str]) -> Option<&'a str> {
    keys.iter().find_map(|key| str_field(obj, key))
}

/// Non-empty string value of a field matched without regard to ASCII case.
///
/// An exact-case match wins over a case-folded one.
pub(crate) fn str_field_ignore_case<'a>(obj: &'a Object, key: &str) -> Option<&'a str> {
    str_field(obj, key).or_else(|| {
        obj.iter()
            .filter(|(k, _)| k.eq_ignore_ascii_case(key))
            .find_map(|(_, v)| v.as_str().filter(|s| !s.is_empty()))
    })
}

/// Entries of an array field; anything that is not an array yields nothing
pub(crate) fn array_field<'a>(obj: &'a Object, key: &str) -> &'a [Value] {
    obj.get(key)
        .and_then(Value::as_array)
        .map_or(&[][..], Vec::as_slice)
}

/// Object entries of an array field, skipping non-object elements
pub(crate) fn objects<'a>(obj: &'a Object, key: &str) -> impl Iterator<Item = &'a Object> {
    array_field(obj, key).iter().filter_map(Value::as_object)
}

/// Non-empty string elements of an array field
pub(crate) fn strings<'a>(obj: &'a Object, key: &str) -> impl Iterator<Item = &'a str> {
    array_field(obj, key)
        .iter()
        .filter_map(Value::as_str)
        .filter(|s| !s.is_empty())
}
