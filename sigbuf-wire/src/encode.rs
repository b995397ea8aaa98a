//! Streaming message encoder.
//!
//! [`encode_message`] walks the descriptor table in field order, so
//! output is deterministic and field numbers ascend. Scalar fields emit
//! when their accessor reports a value; handler fields emit their own
//! records. Nested lengths come from a sizing pass (a
//! [`WriteStream::sizing`] walk) rather than buffer back-patching, so
//! encoding works the same whether the outer stream is bounded or
//! itself sizing.

use bytes::Bytes;

use crate::descriptor::{FieldDescriptor, FieldKind, ScalarKind, WireMessage};
use crate::error::WireError;
use crate::stream::WriteStream;
use crate::tag::{Tag, WireType};
use crate::varint::{encode_varint, zigzag_encode};

/// Encodes `message` into `buf`, returning the bytes written.
pub fn encode<M: WireMessage>(message: &M, buf: &mut [u8]) -> Result<usize, WireError> {
    let mut stream = WriteStream::new(buf);
    encode_message(&mut stream, message)?;
    Ok(stream.bytes_written())
}

/// Exact encoded size of `message`, via a sizing-mode walk.
pub fn encoded_len<M: WireMessage>(message: &M) -> Result<usize, WireError> {
    let mut stream = WriteStream::sizing();
    encode_message(&mut stream, message)?;
    Ok(stream.bytes_written())
}

/// Encodes `message` into a freshly allocated, exactly sized buffer.
pub fn encode_to_bytes<M: WireMessage>(message: &M) -> Result<Bytes, WireError> {
    let len = encoded_len(message)?;
    let mut buf = vec![0u8; len];
    let written = encode(message, &mut buf)?;
    debug_assert_eq!(written, len);
    Ok(Bytes::from(buf))
}

/// Walks the descriptor table and emits every present field.
pub fn encode_message<M: WireMessage>(
    stream: &mut WriteStream<'_>,
    message: &M,
) -> Result<(), WireError> {
    for field in M::descriptor().fields {
        match &field.kind {
            FieldKind::Scalar(kind) => encode_scalar(stream, message, field, kind)?,
            FieldKind::Handler {
                encode: handler, ..
            } => handler(message, stream, field)?,
        }
    }
    Ok(())
}

/// Emits one complete string record: tag, length, bytes.
pub fn encode_string_field(
    stream: &mut WriteStream<'_>,
    number: u32,
    value: &str,
) -> Result<(), WireError> {
    Tag::new(number, WireType::LengthDelimited).encode(stream)?;
    encode_varint(stream, value.len() as u64)?;
    stream.write(value.as_bytes())
}

/// Emits one complete nested-message record: tag, length, body.
///
/// The length comes from a sizing pass over the nested message, so the
/// body is walked twice.
pub fn encode_nested_field<M: WireMessage>(
    stream: &mut WriteStream<'_>,
    number: u32,
    message: &M,
) -> Result<(), WireError> {
    let len = encoded_len(message)?;
    Tag::new(number, WireType::LengthDelimited).encode(stream)?;
    encode_varint(stream, len as u64)?;
    encode_message(stream, message)
}

/// Emits one varint record (repeated enums and the like).
pub fn encode_varint_field(
    stream: &mut WriteStream<'_>,
    number: u32,
    value: u64,
) -> Result<(), WireError> {
    Tag::new(number, WireType::Varint).encode(stream)?;
    encode_varint(stream, value)
}

fn encode_scalar<M>(
    stream: &mut WriteStream<'_>,
    message: &M,
    field: &FieldDescriptor<M>,
    kind: &ScalarKind<M>,
) -> Result<(), WireError> {
    let tag = Tag::new(field.number, kind.wire_type());
    match kind {
        ScalarKind::Bool(a) => {
            if let Some(v) = (a.get)(message) {
                tag.encode(stream)?;
                encode_varint(stream, u64::from(v))?;
            }
        }
        ScalarKind::Int32(a) => {
            if let Some(v) = (a.get)(message) {
                tag.encode(stream)?;
                encode_varint(stream, v as i64 as u64)?;
            }
        }
        ScalarKind::Int64(a) => {
            if let Some(v) = (a.get)(message) {
                tag.encode(stream)?;
                encode_varint(stream, v as u64)?;
            }
        }
        ScalarKind::Uint32(a) => {
            if let Some(v) = (a.get)(message) {
                tag.encode(stream)?;
                encode_varint(stream, u64::from(v))?;
            }
        }
        ScalarKind::Uint64(a) => {
            if let Some(v) = (a.get)(message) {
                tag.encode(stream)?;
                encode_varint(stream, v)?;
            }
        }
        ScalarKind::Sint32(a) => {
            if let Some(v) = (a.get)(message) {
                tag.encode(stream)?;
                encode_varint(stream, zigzag_encode(i64::from(v)))?;
            }
        }
        ScalarKind::Sint64(a) => {
            if let Some(v) = (a.get)(message) {
                tag.encode(stream)?;
                encode_varint(stream, zigzag_encode(v))?;
            }
        }
        ScalarKind::Enum(a) => {
            if let Some(v) = (a.get)(message) {
                tag.encode(stream)?;
                encode_varint(stream, v as i64 as u64)?;
            }
        }
        ScalarKind::Fixed32(a) => {
            if let Some(v) = (a.get)(message) {
                tag.encode(stream)?;
                stream.write(&v.to_le_bytes())?;
            }
        }
        ScalarKind::Sfixed32(a) => {
            if let Some(v) = (a.get)(message) {
                tag.encode(stream)?;
                stream.write(&v.to_le_bytes())?;
            }
        }
        ScalarKind::Float(a) => {
            if let Some(v) = (a.get)(message) {
                tag.encode(stream)?;
                stream.write(&v.to_le_bytes())?;
            }
        }
        ScalarKind::Fixed64(a) => {
            if let Some(v) = (a.get)(message) {
                tag.encode(stream)?;
                stream.write(&v.to_le_bytes())?;
            }
        }
        ScalarKind::Sfixed64(a) => {
            if let Some(v) = (a.get)(message) {
                tag.encode(stream)?;
                stream.write(&v.to_le_bytes())?;
            }
        }
        ScalarKind::Double(a) => {
            if let Some(v) = (a.get)(message) {
                tag.encode(stream)?;
                stream.write(&v.to_le_bytes())?;
            }
        }
    }
    Ok(())
}
