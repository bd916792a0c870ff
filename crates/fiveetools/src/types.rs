//! Typed structs mirroring the 5etools adventure JSON layout.
//!
//! These are a decode/encode intermediate only. Field names and
//! omission rules follow the wire format exactly: every section field
//! is optional and dropped from the output when it holds its zero
//! value, and text entries collapse to bare strings.

use serde::Serialize;

/// Top-level 5etools adventure document: `{"data": [...]}`.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct Adventure {
    #[serde(rename = "data")]
    pub sections: Vec<Section>,
}

/// A section object inside the `data` array.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct Section {
    #[serde(rename = "type", skip_serializing_if = "String::is_empty")]
    pub kind: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub page: u64,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub entries: Vec<Entry>,
}

/// One element of an `entries` array.
///
/// Serialized untagged, so `Text` is written as a bare JSON string and
/// `Branch` as an object.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum Entry {
    Text(String),
    Branch(Branch),
}

/// An entry object carrying a `type` and nested entries.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct Branch {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub entries: Vec<Entry>,
}

fn is_zero(n: &u64) -> bool {
    *n == 0
}
