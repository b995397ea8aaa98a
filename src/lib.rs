//! # sigbuf
//!
//! Streaming Protocol Buffers codec for vehicle-signal messages.
//!
//! The facade re-exports the two building blocks:
//!
//! - [`wire`]: bounded streams, varint/tag codec, descriptor-driven
//!   encode/decode engines
//! - [`val`]: the broker message catalog (datapoints, entries, and the
//!   get/set/server-info exchanges)
//!
//! Encoding never allocates beyond the output buffer and decoding is
//! memory-bounded, so the codec suits firmware-sized targets as well
//! as host tools.
//!
//! ```
//! use sigbuf::val::GetRequest;
//! use sigbuf::wire::{decode, encode_to_bytes};
//!
//! let request = GetRequest::current_values(["Vehicle.Speed"]);
//! let bytes = encode_to_bytes(&request)?;
//! let back: GetRequest = decode(&bytes)?;
//! assert_eq!(back, request);
//! # Ok::<(), sigbuf::wire::WireError>(())
//! ```

pub use sigbuf_val as val;
pub use sigbuf_wire as wire;

pub use sigbuf_val::{
    DataEntry, DataEntryError, Datapoint, EntryRequest, EntryUpdate, Error, Field, GetRequest,
    GetResponse, GetServerInfoRequest, GetServerInfoResponse, SetRequest, SetResponse, Timestamp,
    Value, ValueKind, View,
};
pub use sigbuf_wire::{decode, encode, encode_to_bytes, encoded_len, ErrorKind, WireError};
