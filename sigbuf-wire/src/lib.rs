//! # sigbuf-wire
//!
//! Streaming Protocol Buffers wire codec over fixed, caller-supplied
//! buffers.
//!
//! This crate provides:
//! - Bounded read/write streams, including a sizing mode for length
//!   computation without output
//! - Base-128 varint and field-tag encoding
//! - Hand-written, typed field dispatch tables
//! - Decode/encode engines that route variable-length fields through
//!   per-field handlers, so full messages never need to be resident
//!
//! The engines never allocate for the caller; handlers decide buffering
//! policy and enforce their own bounds.

pub mod decode;
pub mod descriptor;
pub mod encode;
pub mod error;
pub mod stream;
pub mod tag;
pub mod varint;

pub use decode::{
    decode, decode_into, decode_message, decode_nested, decode_string, MAX_DECODE_DEPTH,
};
pub use descriptor::{
    Accessor, DecodeFn, EncodeFn, FieldDescriptor, FieldKind, Label, MessageDescriptor,
    ScalarKind, WireMessage,
};
pub use encode::{
    encode, encode_message, encode_nested_field, encode_string_field, encode_to_bytes,
    encode_varint_field, encoded_len,
};
pub use error::{ErrorKind, WireError};
pub use stream::{ReadStream, WriteStream};
pub use tag::{Tag, WireType, MAX_FIELD_NUMBER};
pub use varint::{
    decode_varint, encode_varint, varint_len, zigzag_decode, zigzag_encode, MAX_VARINT_LEN,
};
