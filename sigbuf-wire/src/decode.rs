//! Streaming message decoder.
//!
//! [`decode_message`] walks tag-prefixed records until its stream is
//! empty, dispatching each through the message's descriptor table:
//! unknown fields are skipped by wire type, scalars are stored through
//! their accessors, and handler fields receive a bounded sub-stream.
//! The first error aborts the decode.

use tracing::trace;

use crate::descriptor::{FieldDescriptor, FieldKind, ScalarKind, WireMessage};
use crate::error::WireError;
use crate::stream::ReadStream;
use crate::tag::{Tag, WireType};
use crate::varint::{decode_varint, peek_varint_len, zigzag_decode};

/// Deepest nesting [`decode_message`] follows before failing.
pub const MAX_DECODE_DEPTH: u8 = 16;

/// Decodes a complete message from `buf`.
pub fn decode<M: WireMessage + Default>(buf: &[u8]) -> Result<M, WireError> {
    let mut message = M::default();
    decode_into(buf, &mut message)?;
    Ok(message)
}

/// Decodes a complete message from `buf` into an existing value.
///
/// On error the message may have been partially updated.
pub fn decode_into<M: WireMessage>(buf: &[u8], message: &mut M) -> Result<(), WireError> {
    let mut stream = ReadStream::new(buf);
    decode_message(&mut stream, message)
}

/// Decodes records until `stream` is exhausted.
///
/// This is the re-entrant core: nested-message handlers call back into
/// it (through [`decode_nested`]) on the sub-stream they were given.
pub fn decode_message<M: WireMessage>(
    stream: &mut ReadStream<'_>,
    message: &mut M,
) -> Result<(), WireError> {
    if stream.depth() > MAX_DECODE_DEPTH {
        return Err(WireError::DepthLimitExceeded {
            limit: MAX_DECODE_DEPTH,
        });
    }
    let descriptor = M::descriptor();
    while !stream.is_empty() {
        let tag = Tag::decode(stream)?;
        match descriptor.field(tag.field_number) {
            Some(field) => decode_field(stream, message, field, tag.wire_type)?,
            None => skip_field(stream, tag, descriptor.name)?,
        }
    }
    Ok(())
}

/// Decodes an entire sub-stream as one nested message.
///
/// Handler helper: the handler hands over the sub-stream it was given
/// and gets back a fully decoded value.
pub fn decode_nested<M: WireMessage + Default>(
    stream: &mut ReadStream<'_>,
) -> Result<M, WireError> {
    let mut message = M::default();
    decode_message(stream, &mut message)?;
    Ok(message)
}

/// Takes the remainder of a sub-stream as a UTF-8 string of at most
/// `max_bytes` bytes.
pub fn decode_string(stream: &mut ReadStream<'_>, max_bytes: usize) -> Result<String, WireError> {
    let len = stream.remaining();
    if len > max_bytes {
        return Err(WireError::StringTooLong {
            len,
            max: max_bytes,
        });
    }
    let bytes = stream.read(len)?;
    match std::str::from_utf8(bytes) {
        Ok(s) => Ok(s.to_owned()),
        Err(_) => Err(WireError::InvalidUtf8),
    }
}

fn decode_field<M: WireMessage>(
    stream: &mut ReadStream<'_>,
    message: &mut M,
    field: &FieldDescriptor<M>,
    actual: WireType,
) -> Result<(), WireError> {
    match &field.kind {
        FieldKind::Scalar(kind) => {
            let expected = kind.wire_type();
            if actual != expected {
                return Err(WireError::WireTypeMismatch {
                    field: field.name,
                    expected,
                    actual,
                });
            }
            decode_scalar(stream, message, kind)
        }
        FieldKind::Handler {
            decode: handler, ..
        } => match actual {
            WireType::LengthDelimited => {
                let declared = decode_varint(stream)?;
                if declared > stream.remaining() as u64 {
                    return Err(WireError::TruncatedPayload {
                        declared,
                        remaining: stream.remaining(),
                    });
                }
                let mut payload = stream.take(declared as usize)?;
                // An empty payload still gets one call: it may be an
                // empty string or an empty nested message.
                loop {
                    let before = payload.remaining();
                    handler(message, &mut payload, field)?;
                    if payload.is_empty() {
                        return Ok(());
                    }
                    if payload.remaining() == before {
                        return Err(WireError::callback(field.name, "handler made no progress"));
                    }
                }
            }
            WireType::Varint => {
                let len = peek_varint_len(stream)?;
                let mut value = stream.take(len)?;
                handler(message, &mut value, field)
            }
            WireType::Fixed64 => {
                let mut value = stream.take(8)?;
                handler(message, &mut value, field)
            }
            WireType::Fixed32 => {
                let mut value = stream.take(4)?;
                handler(message, &mut value, field)
            }
        },
    }
}

fn decode_scalar<M>(
    stream: &mut ReadStream<'_>,
    message: &mut M,
    kind: &ScalarKind<M>,
) -> Result<(), WireError> {
    match kind {
        ScalarKind::Bool(a) => {
            let raw = decode_varint(stream)?;
            (a.set)(message, raw != 0);
        }
        ScalarKind::Int32(a) => {
            let raw = decode_varint(stream)?;
            (a.set)(message, raw as i32);
        }
        ScalarKind::Int64(a) => {
            let raw = decode_varint(stream)?;
            (a.set)(message, raw as i64);
        }
        ScalarKind::Uint32(a) => {
            let raw = decode_varint(stream)?;
            (a.set)(message, raw as u32);
        }
        ScalarKind::Uint64(a) => {
            let raw = decode_varint(stream)?;
            (a.set)(message, raw);
        }
        ScalarKind::Sint32(a) => {
            let raw = decode_varint(stream)?;
            (a.set)(message, zigzag_decode(raw) as i32);
        }
        ScalarKind::Sint64(a) => {
            let raw = decode_varint(stream)?;
            (a.set)(message, zigzag_decode(raw));
        }
        ScalarKind::Enum(a) => {
            let raw = decode_varint(stream)?;
            (a.set)(message, raw as i32);
        }
        ScalarKind::Fixed32(a) => (a.set)(message, read_fixed32(stream)?),
        ScalarKind::Sfixed32(a) => (a.set)(message, read_fixed32(stream)? as i32),
        ScalarKind::Float(a) => (a.set)(message, f32::from_bits(read_fixed32(stream)?)),
        ScalarKind::Fixed64(a) => (a.set)(message, read_fixed64(stream)?),
        ScalarKind::Sfixed64(a) => (a.set)(message, read_fixed64(stream)? as i64),
        ScalarKind::Double(a) => (a.set)(message, f64::from_bits(read_fixed64(stream)?)),
    }
    Ok(())
}

fn skip_field(
    stream: &mut ReadStream<'_>,
    tag: Tag,
    message_name: &'static str,
) -> Result<(), WireError> {
    match tag.wire_type {
        WireType::Varint => {
            decode_varint(stream)?;
        }
        WireType::Fixed64 => {
            stream.read(8)?;
        }
        WireType::Fixed32 => {
            stream.read(4)?;
        }
        WireType::LengthDelimited => {
            let declared = decode_varint(stream)?;
            if declared > stream.remaining() as u64 {
                return Err(WireError::TruncatedPayload {
                    declared,
                    remaining: stream.remaining(),
                });
            }
            stream.read(declared as usize)?;
        }
    }
    trace!(
        field = tag.field_number,
        wire_type = %tag.wire_type,
        "skipped unknown field in {}",
        message_name
    );
    Ok(())
}

fn read_fixed32(stream: &mut ReadStream<'_>) -> Result<u32, WireError> {
    let bytes = stream.read(4)?;
    Ok(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
}

fn read_fixed64(stream: &mut ReadStream<'_>) -> Result<u64, WireError> {
    let bytes = stream.read(8)?;
    Ok(u64::from_le_bytes([
        bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5], bytes[6], bytes[7],
    ]))
}
