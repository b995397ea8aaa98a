//! Decode-side size bounds.
//!
//! The decoder works over fixed transfer buffers; these bounds keep a
//! hostile length prefix or an oversized repeated field from turning
//! into an unbounded allocation. Violations surface as callback-kind
//! errors and abort the decode.

/// Longest accepted string field, in bytes (paths, reasons, messages).
pub const MAX_STRING_BYTES: usize = 1024;

/// Most elements accepted per repeated field.
pub const MAX_ENTRIES: usize = 128;
