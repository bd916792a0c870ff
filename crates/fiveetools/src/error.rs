/// Broad category of a [`DecodeError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeReason {
    /// Not valid JSON, or not shaped like an adventure document.
    Syntax,
    /// An entry was neither a string nor a typed object (strict mode only).
    UnexpectedEntryShape,
    /// Entry nesting went past the configured limit.
    TooDeep,
}

/// All errors that can be returned while decoding 5etools JSON.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// Malformed, truncated, or non-UTF-8 input.
    #[error("invalid JSON: {0}")]
    Syntax(#[from] serde_json::Error),

    /// Well-formed JSON whose structure does not match the document layout,
    /// e.g. a non-object top level or a `page` that is not an integer.
    #[error("unexpected document shape at {path}: {message}")]
    Shape { path: String, message: String },

    /// Strict mode rejected an entry that would otherwise fall back to text.
    #[error("unexpected entry shape at {path}: found {found}")]
    UnexpectedEntryShape { path: String, found: String },

    #[error("entry nesting at {path} exceeds the limit of {limit}")]
    TooDeep { path: String, limit: usize },
}

impl DecodeError {
    pub fn reason(&self) -> DecodeReason {
        match self {
            DecodeError::Syntax(_) | DecodeError::Shape { .. } => DecodeReason::Syntax,
            DecodeError::UnexpectedEntryShape { .. } => DecodeReason::UnexpectedEntryShape,
            DecodeError::TooDeep { .. } => DecodeReason::TooDeep,
        }
    }

    pub(crate) fn shape(path: impl Into<String>, message: impl Into<String>) -> Self {
        DecodeError::Shape {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// All errors that can be returned while encoding 5etools JSON.
///
/// Both variants mean the document cannot be represented on the wire.
#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    /// The document holds a value the wire format cannot carry losslessly.
    #[error("unrepresentable value at {path}: {message}")]
    Unrepresentable { path: String, message: String },

    /// The JSON serializer itself failed.
    #[error("serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}
