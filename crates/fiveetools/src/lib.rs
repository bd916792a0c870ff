//! advconv-fiveetools: 5etools adventure JSON support.
//!
//! Converts between 5etools adventure JSON and the canonical
//! [`advconv_core::Adventure`] tree:
//!
//! ```text
//! bytes --decode--> types::Adventure --normalize--> Adventure
//! Adventure --denormalize--> types::Adventure --encode--> bytes
//! ```
//!
//! Most callers only need [`parse`] and [`serialize`]. The stage
//! functions are public for callers that work on the wire model
//! directly.

pub mod denormalize;
pub mod deserialize;
pub mod error;
pub mod normalize;
pub mod serialize;
pub mod types;

use advconv_core::Adventure;

pub use denormalize::denormalize;
pub use deserialize::decode;
pub use error::{DecodeError, DecodeReason, EncodeError};
pub use normalize::normalize;
pub use serialize::encode;

/// Decoder settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Reject entries that are neither strings nor objects with a
    /// non-empty `type`, instead of rendering them as text leaves.
    pub strict: bool,
    /// Maximum entry nesting depth; top-level section entries are depth 1.
    pub max_depth: Option<usize>,
}

/// Encoder settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EncodeOptions {
    pub pretty: bool,
}

/// Parse 5etools adventure JSON with default (permissive) options.
pub fn parse(bytes: &[u8]) -> Result<Adventure, DecodeError> {
    parse_with(bytes, &DecodeOptions::default())
}

pub fn parse_with(bytes: &[u8], options: &DecodeOptions) -> Result<Adventure, DecodeError> {
    let external = decode(bytes, options)?;
    let adventure = normalize(external);
    tracing::debug!(
        bytes = bytes.len(),
        sections = adventure.sections.len(),
        strict = options.strict,
        "parsed 5etools adventure"
    );
    Ok(adventure)
}

/// Serialize an adventure as compact 5etools JSON.
pub fn serialize(adventure: &Adventure) -> Result<Vec<u8>, EncodeError> {
    serialize_with(adventure, &EncodeOptions::default())
}

pub fn serialize_with(adventure: &Adventure, options: &EncodeOptions) -> Result<Vec<u8>, EncodeError> {
    let external = denormalize(adventure);
    let bytes = encode(&external, options)?;
    tracing::debug!(
        bytes = bytes.len(),
        sections = adventure.sections.len(),
        "serialized 5etools adventure"
    );
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use advconv_core::{Entry, Section};

    fn squish(s: &str) -> String {
        s.chars().filter(|c| !c.is_whitespace()).collect()
    }

    #[test]
    fn test_parse_cases() {
        let cases: Vec<(&str, &str, Adventure)> = vec![
            (
                "an empty input produces an empty adventure",
                "{}",
                Adventure::default(),
            ),
            (
                "the opening data tag is ignored",
                r#"{"data": []}"#,
                Adventure::default(),
            ),
            (
                "the adventure can be broken up into many named sections",
                r#"{"data": [{"type": "section", "name": "Section 1"},{"type": "section", "name": "Section 2"}]}"#,
                Adventure::new(vec![
                    Section::new("section", "Section 1"),
                    Section::new("section", "Section 2"),
                ]),
            ),
            (
                "sections have types, page numbers, and ids",
                r#"{"data": [{"type": "section", "name": "Section 1", "page": 1, "id": "abc123"}]}"#,
                Adventure::new(vec![Section {
                    page: 1,
                    id: "abc123".into(),
                    ..Section::new("section", "Section 1")
                }]),
            ),
            (
                "sections have entries which can be strings",
                r#"{"data": [{"entries": ["Some description"]}]}"#,
                Adventure::new(vec![Section {
                    entries: vec![Entry::text("Some description")],
                    ..Section::default()
                }]),
            ),
            (
                "sections have entries which can be full objects",
                r#"{"data": [{"entries": [{"type": "entry", "entries": ["Some description"]}]}]}"#,
                Adventure::new(vec![Section {
                    entries: vec![Entry::branch(
                        "entry",
                        "",
                        vec![Entry::text("Some description")],
                    )],
                    ..Section::default()
                }]),
            ),
        ];

        for (scenario, input, expected) in cases {
            let result = parse(input.as_bytes()).unwrap_or_else(|e| panic!("{}: {}", scenario, e));
            assert_eq!(result, expected, "{}", scenario);
        }
    }

    #[test]
    fn test_serialize_cases() {
        let cases: Vec<(&str, Adventure, &str)> = vec![
            (
                "an empty adventure keeps the data tag",
                Adventure::default(),
                r#"{"data": []}"#,
            ),
            (
                "sections are formatted in order",
                Adventure::new(vec![
                    Section::new("section", "Section 1"),
                    Section::new("section", "Section 2"),
                ]),
                r#"{"data": [{"type": "section", "name": "Section 1"},{"type": "section", "name": "Section 2"}]}"#,
            ),
            (
                "sections have types, page numbers, and ids",
                Adventure::new(vec![Section {
                    page: 1,
                    id: "abc123".into(),
                    ..Section::new("section", "Section 1")
                }]),
                r#"{"data": [{"type": "section", "name": "Section 1", "page": 1, "id": "abc123"}]}"#,
            ),
            (
                "text entries collapse to strings",
                Adventure::new(vec![Section {
                    entries: vec![Entry::text("Some description")],
                    ..Section::default()
                }]),
                r#"{"data": [{"entries": ["Some description"]}]}"#,
            ),
            (
                "branch entries stay objects",
                Adventure::new(vec![Section {
                    entries: vec![Entry::branch(
                        "entry",
                        "",
                        vec![Entry::text("Some description")],
                    )],
                    ..Section::default()
                }]),
                r#"{"data": [{"entries": [{"type": "entry", "entries": ["Some description"]}]}]}"#,
            ),
        ];

        for (scenario, input, expected) in cases {
            let out = serialize(&input).unwrap_or_else(|e| panic!("{}: {}", scenario, e));
            let result = String::from_utf8(out).unwrap();
            assert_eq!(squish(&result), squish(expected), "{}", scenario);
        }
    }

    #[test]
    fn test_branch_named_text_round_trips_as_branch() {
        let adventure = Adventure::new(vec![Section {
            entries: vec![Entry::branch("text", "", vec![Entry::text("inner")])],
            ..Section::default()
        }]);
        let bytes = serialize(&adventure).unwrap();
        assert_eq!(parse(&bytes).unwrap(), adventure);
    }

    #[test]
    fn test_parse_with_strict_propagates_error() {
        let options = DecodeOptions {
            strict: true,
            ..DecodeOptions::default()
        };
        let err = parse_with(br#"{"data": [{"entries": [{"id": "x"}]}]}"#, &options).unwrap_err();
        assert_eq!(err.reason(), DecodeReason::UnexpectedEntryShape);
    }

    #[test]
    fn test_serialize_rejects_empty_branch_kind() {
        let adventure = Adventure::new(vec![Section {
            entries: vec![Entry::branch("", "", vec![])],
            ..Section::default()
        }]);
        assert!(matches!(
            serialize(&adventure),
            Err(EncodeError::Unrepresentable { .. })
        ));
    }

    #[test]
    fn test_public_types_are_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Adventure>();
        assert_send_sync::<types::Adventure>();
        assert_send_sync::<DecodeOptions>();
        assert_send_sync::<EncodeOptions>();
        assert_send_sync::<DecodeError>();
        assert_send_sync::<EncodeError>();
    }
}
