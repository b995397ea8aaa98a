//! Field tags: the (field number, wire type) pair prefixing every record.
//!
//! ```text
//! tag varint = (field_number << 3) | wire_type
//! ```

use crate::error::WireError;
use crate::stream::{ReadStream, WriteStream};
use crate::varint::{decode_varint, encode_varint};

/// Highest field number the tag encoding can carry (29 bits).
pub const MAX_FIELD_NUMBER: u32 = (1 << 29) - 1;

/// How a field's payload is laid out on the wire.
///
/// Values 3 and 4 (the retired group markers) and 6 and 7 are not
/// accepted; a tag carrying them is malformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum WireType {
    /// Base-128 varint payload.
    Varint = 0,
    /// Eight little-endian bytes.
    Fixed64 = 1,
    /// Length varint followed by that many bytes.
    LengthDelimited = 2,
    /// Four little-endian bytes.
    Fixed32 = 5,
}

impl TryFrom<u8> for WireType {
    type Error = WireError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(WireType::Varint),
            1 => Ok(WireType::Fixed64),
            2 => Ok(WireType::LengthDelimited),
            5 => Ok(WireType::Fixed32),
            other => Err(WireError::InvalidWireType(other)),
        }
    }
}

impl std::fmt::Display for WireType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WireType::Varint => write!(f, "varint"),
            WireType::Fixed64 => write!(f, "fixed64"),
            WireType::LengthDelimited => write!(f, "length-delimited"),
            WireType::Fixed32 => write!(f, "fixed32"),
        }
    }
}

/// A field tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tag {
    pub field_number: u32,
    pub wire_type: WireType,
}

impl Tag {
    /// Creates a tag. The field number is validated on encode.
    pub fn new(field_number: u32, wire_type: WireType) -> Self {
        Tag {
            field_number,
            wire_type,
        }
    }

    /// Reads one tag from the stream.
    pub fn decode(stream: &mut ReadStream<'_>) -> Result<Tag, WireError> {
        let raw = decode_varint(stream)?;
        let wire_type = WireType::try_from((raw & 0x7) as u8)?;
        let field_number = raw >> 3;
        if field_number == 0 || field_number > u64::from(MAX_FIELD_NUMBER) {
            return Err(WireError::InvalidFieldNumber(field_number));
        }
        Ok(Tag {
            field_number: field_number as u32,
            wire_type,
        })
    }

    /// Writes this tag to the stream.
    pub fn encode(&self, stream: &mut WriteStream<'_>) -> Result<(), WireError> {
        if self.field_number == 0 || self.field_number > MAX_FIELD_NUMBER {
            return Err(WireError::InvalidFieldNumber(u64::from(self.field_number)));
        }
        encode_varint(
            stream,
            u64::from(self.field_number) << 3 | self.wire_type as u64,
        )
    }
}
