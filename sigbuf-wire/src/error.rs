//! Error types for the wire codec.

use thiserror::Error;

use crate::tag::WireType;

/// Errors produced while decoding or encoding a message.
///
/// Variants carry the counts a caller needs to react; the coarse
/// [`ErrorKind`] from [`kind`](WireError::kind) is what callers branch
/// on to decide between growing a buffer, re-requesting input, or
/// rejecting the message.
#[derive(Debug, Error)]
pub enum WireError {
    /// The input ended before a read completed.
    #[error("input underrun: needed {needed} bytes, {remaining} remaining")]
    Underrun { needed: usize, remaining: usize },

    /// The output buffer is too small for a write.
    #[error("output overrun: needed {needed} bytes, {remaining} remaining")]
    Overrun { needed: usize, remaining: usize },

    /// A varint ran past the 10-byte maximum without terminating.
    #[error("varint exceeds 10 bytes without terminating")]
    VarintOverflow,

    /// A tag carried a field number of zero or above the 29-bit maximum.
    #[error("invalid field number {0}")]
    InvalidFieldNumber(u64),

    /// A tag carried a wire type this codec does not accept.
    #[error("invalid wire type {0}")]
    InvalidWireType(u8),

    /// A known field arrived with a wire type other than its descriptor's.
    #[error("wire type mismatch on {field}: expected {expected}, got {actual}")]
    WireTypeMismatch {
        field: &'static str,
        expected: WireType,
        actual: WireType,
    },

    /// A length prefix declared more bytes than the stream holds.
    #[error("length prefix declares {declared} bytes with {remaining} remaining")]
    TruncatedPayload { declared: u64, remaining: usize },

    /// Nested messages ran past the recursion limit.
    #[error("message nesting exceeds {limit} levels")]
    DepthLimitExceeded { limit: u8 },

    /// String field bytes were not valid UTF-8.
    #[error("string field is not valid UTF-8")]
    InvalidUtf8,

    /// A descriptor table violated its ordering or numbering rules.
    #[error("invalid descriptor for {message}: {reason}")]
    InvalidDescriptor {
        message: &'static str,
        reason: String,
    },

    /// A decoded string exceeded the handler's size bound.
    #[error("string of {len} bytes exceeds limit of {max}")]
    StringTooLong { len: usize, max: usize },

    /// A field handler rejected the value or failed to make progress.
    #[error("handler failed on {field}: {reason}")]
    Callback {
        field: &'static str,
        reason: String,
    },
}

impl WireError {
    /// Coarse classification for this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            WireError::Underrun { .. } => ErrorKind::Underrun,
            WireError::Overrun { .. } => ErrorKind::Overrun,
            WireError::VarintOverflow
            | WireError::InvalidFieldNumber(_)
            | WireError::InvalidWireType(_)
            | WireError::WireTypeMismatch { .. }
            | WireError::TruncatedPayload { .. }
            | WireError::DepthLimitExceeded { .. }
            | WireError::InvalidUtf8
            | WireError::InvalidDescriptor { .. } => ErrorKind::Malformed,
            WireError::StringTooLong { .. } | WireError::Callback { .. } => ErrorKind::Callback,
        }
    }

    /// Shorthand for a handler failure on a named field.
    pub fn callback(field: &'static str, reason: impl Into<String>) -> Self {
        WireError::Callback {
            field,
            reason: reason.into(),
        }
    }
}

/// Stable coarse error classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The input ran out before the message did.
    Underrun,
    /// The output buffer filled up before the message did.
    Overrun,
    /// The bytes do not form a valid message.
    Malformed,
    /// A field handler rejected the data.
    Callback,
}

impl ErrorKind {
    /// Whether retrying with more input or a larger buffer can succeed.
    pub fn is_resumable(&self) -> bool {
        matches!(self, ErrorKind::Underrun | ErrorKind::Overrun)
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::Underrun => write!(f, "underrun"),
            ErrorKind::Overrun => write!(f, "overrun"),
            ErrorKind::Malformed => write!(f, "malformed"),
            ErrorKind::Callback => write!(f, "callback"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_classification() {
        assert_eq!(
            WireError::Underrun {
                needed: 4,
                remaining: 1
            }
            .kind(),
            ErrorKind::Underrun
        );
        assert_eq!(
            WireError::Overrun {
                needed: 8,
                remaining: 0
            }
            .kind(),
            ErrorKind::Overrun
        );
        assert_eq!(WireError::VarintOverflow.kind(), ErrorKind::Malformed);
        assert_eq!(WireError::InvalidUtf8.kind(), ErrorKind::Malformed);
        assert_eq!(
            WireError::callback("entries", "too many").kind(),
            ErrorKind::Callback
        );
        assert_eq!(
            WireError::StringTooLong { len: 2000, max: 1024 }.kind(),
            ErrorKind::Callback
        );
    }

    #[test]
    fn test_resumable_kinds() {
        assert!(ErrorKind::Underrun.is_resumable());
        assert!(ErrorKind::Overrun.is_resumable());
        assert!(!ErrorKind::Malformed.is_resumable());
        assert!(!ErrorKind::Callback.is_resumable());
    }

    #[test]
    fn test_display_carries_counts() {
        let err = WireError::Underrun {
            needed: 8,
            remaining: 3,
        };
        assert_eq!(err.to_string(), "input underrun: needed 8 bytes, 3 remaining");

        let err = WireError::TruncatedPayload {
            declared: 5,
            remaining: 3,
        };
        assert_eq!(
            err.to_string(),
            "length prefix declares 5 bytes with 3 remaining"
        );
    }

    #[test]
    fn test_error_kind_display() {
        assert_eq!(ErrorKind::Underrun.to_string(), "underrun");
        assert_eq!(ErrorKind::Callback.to_string(), "callback");
    }
}
