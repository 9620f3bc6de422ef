//! # Codec Errors
//!
//! Every variant means the same thing to the receiver: the payload is
//! malformed and the message is terminally rejected.

use thiserror::Error;

/// Decoding failures for the canonical wire format.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// The buffer ended before a field was complete.
    #[error("Truncated message: field `{field}` needs {needed} bytes, {remaining} remain")]
    Truncated {
        /// Field being read when the buffer ran out.
        field: &'static str,
        /// Bytes the field requires.
        needed: usize,
        /// Bytes left in the buffer.
        remaining: usize,
    },

    /// Bytes remained after the final field. Field count is part of the
    /// wire contract, so extra bytes are a hard error, not an extension
    /// point.
    #[error("Trailing bytes after message: {count}")]
    TrailingBytes {
        /// Number of unconsumed bytes.
        count: usize,
    },

    /// A string field was not valid UTF-8.
    #[error("Invalid UTF-8 in field `{field}`")]
    InvalidUtf8 {
        /// Offending field.
        field: &'static str,
    },

    /// A length prefix exceeded the permitted maximum.
    #[error("Oversized field `{field}`: {len} bytes (max {max})")]
    OversizedField {
        /// Offending field.
        field: &'static str,
        /// Declared length.
        len: usize,
        /// Permitted maximum.
        max: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncated_names_field() {
        let err = CodecError::Truncated {
            field: "data_hash",
            needed: 32,
            remaining: 7,
        };
        assert!(err.to_string().contains("data_hash"));
        assert!(err.to_string().contains("7 remain"));
    }

    #[test]
    fn test_oversized_field_display() {
        let err = CodecError::OversizedField {
            field: "content_cid",
            len: 70_000,
            max: 4096,
        };
        assert!(err.to_string().contains("70000"));
    }
}
